use crate::column::Column;
use crate::types::ValueKind;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// A table definition: a name and its columns in declaration order.
#[derive(Clone, Debug, Serialize)]
pub struct Table {
    name: String,
    columns: IndexMap<String, Column>,
}

impl Table {
    pub fn new<S, N, I>(name: S, columns: I) -> Table
    where
        S: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = (N, Column)>,
    {
        Table {
            name: name.into(),
            columns: columns
                .into_iter()
                .map(|(name, column)| (name.into(), column))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &IndexMap<String, Column> {
        &self.columns
    }

    /// Renders the CREATE TABLE statement, one indented definition per line.
    pub fn create_statement(&self) -> String {
        debug!("rendering ddl for table {}", self.name);
        let definitions: Vec<String> = self
            .columns
            .iter()
            .map(|(name, column)| format!("    {}", column.definition(name)))
            .collect();
        format!(
            "CREATE TABLE {} (\n{}\n);",
            self.name,
            definitions.join(",\n")
        )
    }

    pub fn drop_statement(&self) -> String {
        format!("DROP TABLE {};", self.name)
    }

    /// Which native value each stored column maps back to.
    pub fn kinds(&self) -> IndexMap<String, ValueKind> {
        self.columns
            .iter()
            .map(|(name, column)| (name.clone(), column.column_type().kind()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::column::{Column, DefaultValue};
    use crate::types::{ColumnType, ValueKind};

    fn mime_types() -> Table {
        Table::new(
            "mime_types",
            [
                ("id", Column::key(ColumnType::Serial)),
                ("name", Column::required(ColumnType::Varchar(500), true)),
                ("description", Column::required(ColumnType::Text, false)),
                (
                    "deprecated",
                    Column::optional(ColumnType::Boolean, false, DefaultValue::False),
                ),
                (
                    "use_instead",
                    Column::optional(ColumnType::Varchar(500), false, DefaultValue::None),
                ),
            ],
        )
    }

    #[test]
    fn renders_create_table() {
        let expected = "CREATE TABLE mime_types (\n    \
                        id SERIAL PRIMARY KEY,\n    \
                        name VARCHAR(500) NOT NULL UNIQUE,\n    \
                        description TEXT NOT NULL,\n    \
                        deprecated BOOLEAN DEFAULT FALSE,\n    \
                        use_instead VARCHAR(500)\n);";
        assert_eq!(mime_types().create_statement(), expected);
    }

    #[test]
    fn renders_foreign_keys() {
        let links = Table::new(
            "links",
            [
                ("id", Column::key(ColumnType::Serial)),
                (
                    "mime_type_id",
                    Column::required(ColumnType::Integer, false)
                        .referencing("mime_types", "id"),
                ),
                ("related_to", Column::required(ColumnType::Text, false)),
            ],
        );
        let statement = links.create_statement();
        assert!(statement.contains("mime_type_id INTEGER NOT NULL REFERENCES mime_types(id)"));
    }

    #[test]
    fn renders_drop_table() {
        assert_eq!(mime_types().drop_statement(), "DROP TABLE mime_types;");
    }

    #[test]
    fn maps_columns_to_native_kinds() {
        let kinds = mime_types().kinds();
        assert_eq!(kinds["id"], ValueKind::Number);
        assert_eq!(kinds["name"], ValueKind::Chars);
        assert_eq!(kinds["description"], ValueKind::Chars);
        assert_eq!(kinds["deprecated"], ValueKind::Flag);
        assert_eq!(kinds["use_instead"], ValueKind::Chars);
    }
}
