//! Core data structures for list-of-lists sparse n-dimensional storage (pure Rust)

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod dense;
pub mod dtype;
pub mod error;
pub mod list;
pub mod nd;
pub mod storage;
pub mod yale;

pub use dense::Dense;
pub use dtype::{CastFrom, DType, Element};
pub use error::{Result, StorageError};
pub use list::{List, Node, NodeValue};
pub use nd::SparseNd;
pub use storage::ListStorage;
pub use yale::Yale;
