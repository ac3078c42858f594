use crate::types::ColumnType;
use serde::Serialize;
use tracing::warn;

/// One column of a table definition, in one of three shapes: the primary
/// key, a required column, or an optional column with a default.
#[derive(Clone, Debug, Serialize)]
pub enum Column {
    Key {
        r#type: ColumnType,
    },
    Required {
        r#type: ColumnType,
        unique: bool,
        reference: Option<Reference>,
    },
    Optional {
        r#type: ColumnType,
        unique: bool,
        default: DefaultValue,
        reference: Option<Reference>,
    },
}

#[derive(Clone, Debug, Serialize)]
pub struct Reference {
    pub table: String,
    pub column: String,
}

/// Default for an optional column. `None` emits no DEFAULT clause.
#[derive(Clone, Debug, Serialize)]
pub enum DefaultValue {
    True,
    False,
    Number(i64),
    Expression(String),
    None,
}

impl Column {
    pub fn key(r#type: ColumnType) -> Column {
        Column::Key { r#type }
    }

    pub fn required(r#type: ColumnType, unique: bool) -> Column {
        Column::Required {
            r#type,
            unique,
            reference: None,
        }
    }

    pub fn optional(r#type: ColumnType, unique: bool, default: DefaultValue) -> Column {
        Column::Optional {
            r#type,
            unique,
            default,
            reference: None,
        }
    }

    /// Adds a foreign key clause. Key columns cannot reference.
    pub fn referencing<S: Into<String>>(mut self, table: S, column: S) -> Column {
        let target = Reference {
            table: table.into(),
            column: column.into(),
        };
        match &mut self {
            Column::Key { .. } => warn!("ignoring reference on a primary key column"),
            Column::Required { reference, .. } => *reference = Some(target),
            Column::Optional { reference, .. } => *reference = Some(target),
        }
        self
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Key { r#type }
            | Column::Required { r#type, .. }
            | Column::Optional { r#type, .. } => *r#type,
        }
    }

    /// The column's DDL fragment, e.g. `name VARCHAR(500) NOT NULL UNIQUE`.
    pub(crate) fn definition(&self, name: &str) -> String {
        let mut parts = vec![name.to_string(), self.column_type().to_string()];
        match self {
            Column::Key { .. } => parts.push("PRIMARY KEY".to_string()),
            Column::Required {
                unique, reference, ..
            } => {
                parts.push("NOT NULL".to_string());
                if *unique {
                    parts.push("UNIQUE".to_string());
                }
                if let Some(reference) = reference {
                    parts.push(reference.clause());
                }
            }
            Column::Optional {
                unique,
                default,
                reference,
                ..
            } => {
                if *unique {
                    parts.push("UNIQUE".to_string());
                }
                if let Some(reference) = reference {
                    parts.push(reference.clause());
                }
                if let Some(clause) = default.clause() {
                    parts.push(clause);
                }
            }
        }
        parts.join(" ")
    }
}

impl Reference {
    fn clause(&self) -> String {
        format!("REFERENCES {}({})", self.table, self.column)
    }
}

impl DefaultValue {
    fn clause(&self) -> Option<String> {
        match self {
            DefaultValue::True => Some("DEFAULT TRUE".to_string()),
            DefaultValue::False => Some("DEFAULT FALSE".to_string()),
            DefaultValue::Number(number) => Some(format!("DEFAULT {}", number)),
            DefaultValue::Expression(expression) => Some(format!("DEFAULT {}", expression)),
            DefaultValue::None => None,
        }
    }
}
