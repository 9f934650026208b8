//! Error types produced while melting one value into another.

mod constructors;
mod types;

pub use types::{MeltError, MeltResult};
