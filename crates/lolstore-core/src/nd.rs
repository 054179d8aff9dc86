use crate::storage::ListStorage;

/// Common read-only view over sparse containers of any rank.
pub trait SparseNd {
    /// Explicitly stored entries.
    fn nnz(&self) -> usize;
    fn ndim(&self) -> usize;
    fn shape(&self) -> &[usize];
}

impl<T> SparseNd for ListStorage<T> {
    #[inline]
    fn nnz(&self) -> usize {
        self.nnz()
    }

    #[inline]
    fn ndim(&self) -> usize {
        self.rank()
    }

    #[inline]
    fn shape(&self) -> &[usize] {
        self.shape()
    }
}
