//! Types downstream hosts interact with.
mod errors;

pub use errors::{Result, RuntimeError};
