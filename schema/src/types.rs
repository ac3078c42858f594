use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use variant::{DispatchTable, Registry, Spec, TableBuilder, VariantError};

/// Error type for interpreting stored column types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown column type: {0}")]
    UnknownType(String),
    #[error("invalid varchar width: {0}")]
    InvalidWidth(String),
    #[error(transparent)]
    Variant(#[from] VariantError),
}

/// The column types a table definition may use. `Varchar` carries its width,
/// so in-memory code never deals with the rendered string; the
/// `Display`/`FromStr` pair is the storage boundary, where a type lives in a
/// single column value like `VARCHAR(500)`.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum ColumnType {
    Serial,
    Varchar(u32),
    Text,
    Boolean,
    Integer,
    Decimal,
}

/// Which native value a stored column maps back to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ValueKind {
    Number,
    Chars,
    Flag,
}

static COLUMN_TYPES: Lazy<Registry> = Lazy::new(|| {
    Registry::define([
        ("SERIAL", Spec::literal("SERIAL")),
        ("VARCHAR", Spec::unary(|width| format!("VARCHAR({width})"))),
        ("TEXT", Spec::literal("TEXT")),
        ("BOOLEAN", Spec::literal("BOOLEAN")),
        ("INTEGER", Spec::literal("INTEGER")),
        ("DECIMAL", Spec::literal("DECIMAL")),
    ])
});

// An incomplete table here means stored values exist the process cannot
// interpret, so construction aborts instead of degrading.
static PARSE_TABLE: Lazy<DispatchTable<Result<ColumnType, SchemaError>>> = Lazy::new(|| {
    TableBuilder::new(&COLUMN_TYPES)
        .on("SERIAL", || Ok(ColumnType::Serial))
        .on_arg("VARCHAR", |width| {
            width
                .parse()
                .map(ColumnType::Varchar)
                .map_err(|_| SchemaError::InvalidWidth(width.to_string()))
        })
        .on("TEXT", || Ok(ColumnType::Text))
        .on("BOOLEAN", || Ok(ColumnType::Boolean))
        .on("INTEGER", || Ok(ColumnType::Integer))
        .on("DECIMAL", || Ok(ColumnType::Decimal))
        .build()
        .expect("a handler exists for every column type tag")
});

/// The closed registry behind [`ColumnType`], for callers that materialize
/// stored forms tag by tag.
pub fn column_types() -> &'static Registry {
    &COLUMN_TYPES
}

impl ColumnType {
    pub fn kind(&self) -> ValueKind {
        match self {
            ColumnType::Serial | ColumnType::Integer | ColumnType::Decimal => ValueKind::Number,
            ColumnType::Varchar(_) | ColumnType::Text => ValueKind::Chars,
            ColumnType::Boolean => ValueKind::Flag,
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), std::fmt::Error> {
        match self {
            ColumnType::Serial => fmt.write_str("SERIAL"),
            ColumnType::Varchar(width) => fmt.write_fmt(format_args!("VARCHAR({})", width)),
            ColumnType::Text => fmt.write_str("TEXT"),
            ColumnType::Boolean => fmt.write_str("BOOLEAN"),
            ColumnType::Integer => fmt.write_str("INTEGER"),
            ColumnType::Decimal => fmt.write_str("DECIMAL"),
        }
    }
}

impl FromStr for ColumnType {
    type Err = SchemaError;

    fn from_str(stored: &str) -> Result<ColumnType, SchemaError> {
        match PARSE_TABLE.dispatch(stored) {
            Ok(parsed) => parsed,
            Err(VariantError::DispatchMiss(tag)) => Err(SchemaError::UnknownType(tag)),
            Err(error) => Err(error.into()),
        }
    }
}

impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ColumnType, D::Error> {
        let stored = String::deserialize(deserializer)?;
        stored.parse().map_err(D::Error::custom)
    }
}
