pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, ItemEdits, NewItem, content_type_for};
pub use error::{ClientError, Result as CliClientResult};
