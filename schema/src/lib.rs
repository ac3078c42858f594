pub use column::{Column, DefaultValue, Reference};
pub use table::Table;
pub use types::{ColumnType, SchemaError, ValueKind, column_types};

mod column;
mod table;
mod types;
