//! Thresholds for switching between sequential and parallel kernels
//
// Below these sizes rayon's task overhead dominates, so kernels stay on the
// calling thread. Thread count itself follows rayon (RAYON_NUM_THREADS).

pub use lolstore_core::yale::i64_to_usize;

/// Dense element count below which dense -> list conversion runs sequentially
pub const SMALL_DENSE_LIMIT: usize = 32 * 1024;
/// Top-level node count below which tree walks run sequentially
pub const SMALL_NODE_LIMIT: usize = 256;
