//! Kernels over list-of-lists storage: equality, conversions and counters (pure Rust)

pub mod convert;
pub mod count;
pub mod eqeq;
pub mod utility {
    pub mod util;
}

pub use convert::{cast_copy, from_dense, from_yale, to_dense};
pub use count::{
    count_elements_r, count_non_diagonal, count_storage_elements, count_storage_max_elements,
};
pub use eqeq::eqeq;
