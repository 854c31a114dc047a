pub mod error;

pub use error::{DocgenError, Result};
