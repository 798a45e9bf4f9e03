//! Basic owned data types.

mod blob;
pub use blob::*;
