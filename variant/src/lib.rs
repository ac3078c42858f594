pub use dispatch::{DispatchTable, Handler, TableBuilder};
pub use error::VariantError;
pub use registry::{Registry, Spec};
pub use tag::{extract_argument, extract_tag};

mod dispatch;
mod error;
mod registry;
mod tag;
