//! Compressed-sparse-row format with an explicit diagonal (the "new Yale"
//! layout): the diagonal is stored densely, off-diagonal entries row by row,
//! and one zero sentinel gives the value of every implicit entry.

use crate::dtype::{DType, Element};
use crate::error::{Result, StorageError};
use std::ops::Range;

const FORMAT: &str = "yale";

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Yale<T, I> {
    pub nrows: usize,
    pub ncols: usize,
    pub diag: Vec<T>, // length nrows; rows past ncols must hold `zero`
    pub zero: T,
    pub indptr: Vec<I>,  // off-diagonal row pointer, length nrows + 1
    pub indices: Vec<I>, // column per off-diagonal entry
    pub data: Vec<T>,
}

impl<T, I> Yale<T, I> {
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored off-diagonal entries.
    #[inline]
    #[must_use]
    pub fn nnz_off_diagonal(&self) -> usize {
        self.data.len()
    }
}

impl<T: Element> Yale<T, i64> {
    #[inline]
    #[must_use]
    pub const fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Stored entries, counting only diagonal slots that differ from `zero`.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.diag.iter().filter(|d| **d != self.zero).count() + self.data.len()
    }

    /// Positions in `indices`/`data` holding row `i`'s off-diagonal entries.
    #[inline]
    #[must_use]
    pub fn row_range(&self, i: usize) -> Range<usize> {
        i64_to_usize(self.indptr[i])..i64_to_usize(self.indptr[i + 1])
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        diag: Vec<T>,
        zero: T,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<T>,
        check: bool,
    ) -> Result<Self> {
        if diag.len() != nrows {
            return Err(StorageError::invalid(FORMAT, "diag length must be nrows"));
        }
        if indptr.len() != nrows + 1 {
            return Err(StorageError::invalid(FORMAT, "indptr length must be nrows + 1"));
        }
        if indices.len() != data.len() {
            return Err(StorageError::invalid(
                FORMAT,
                "indices and data must have equal length",
            ));
        }
        let nnz = indices.len();
        if usize::try_from(indptr.last().copied().unwrap_or(0)).ok() != Some(nnz) {
            return Err(StorageError::invalid(FORMAT, "indptr last element must equal nnz"));
        }
        if indptr.first().copied().unwrap_or(0) != 0 {
            return Err(StorageError::invalid(FORMAT, "indptr first element must be 0"));
        }
        if check {
            for w in indptr.windows(2) {
                if w[0] < 0 || w[1] < 0 {
                    return Err(StorageError::invalid(FORMAT, "indptr must be non-negative"));
                }
                if w[0] > w[1] {
                    return Err(StorageError::invalid(FORMAT, "indptr must be non-decreasing"));
                }
            }
            for i in 0..nrows {
                let start = i64_to_usize(indptr[i]);
                let end = i64_to_usize(indptr[i + 1]);
                let mut prev_col = -1i64;
                for &j in &indices[start..end] {
                    let out_of_bounds = usize::try_from(j).map_or(true, |col| col >= ncols);
                    if out_of_bounds {
                        return Err(StorageError::invalid(FORMAT, "column index out of bounds"));
                    }
                    if j <= prev_col {
                        return Err(StorageError::invalid(
                            FORMAT,
                            "column indices must be strictly increasing within each row",
                        ));
                    }
                    prev_col = j;
                }
            }
            if diag.iter().skip(ncols).any(|d| *d != zero) {
                return Err(StorageError::invalid(
                    FORMAT,
                    "diagonal entries past ncols must equal zero",
                ));
            }
        }
        Ok(Self {
            nrows,
            ncols,
            diag,
            zero,
            indptr,
            indices,
            data,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        diag: Vec<T>,
        zero: T,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<T>,
    ) -> Self {
        Self {
            nrows,
            ncols,
            diag,
            zero,
            indptr,
            indices,
            data,
        }
    }

    /// Build from the packed single-array layout.
    ///
    /// `a[..nrows]` is the diagonal and `a[nrows]` the zero sentinel.
    /// `ija[..=nrows]` are row boundaries into the shared tail, where position
    /// `p` holds column `ija[p]` with value `a[p]`. `ija[0]` is `nrows + 1`.
    pub fn from_packed(nrows: usize, ncols: usize, ija: &[usize], mut a: Vec<T>) -> Result<Self> {
        if ija.len() != a.len() {
            return Err(StorageError::invalid(FORMAT, "ija and a must have equal length"));
        }
        if ija.len() < nrows + 1 {
            return Err(StorageError::invalid(
                FORMAT,
                "packed arrays must hold nrows + 1 leading slots",
            ));
        }
        let base = nrows + 1;
        if ija[0] != base {
            return Err(StorageError::invalid(FORMAT, "ija[0] must be nrows + 1"));
        }
        let end = ija[nrows];
        if end < base || end > ija.len() {
            return Err(StorageError::invalid(FORMAT, "ija row boundaries out of range"));
        }
        let to_i64 = |x: usize| {
            i64::try_from(x).map_err(|_| StorageError::invalid(FORMAT, "index exceeds i64"))
        };
        let indptr = ija[..=nrows]
            .iter()
            .map(|&p| {
                p.checked_sub(base)
                    .ok_or_else(|| StorageError::invalid(FORMAT, "ija row boundary before tail"))
                    .and_then(to_i64)
            })
            .collect::<Result<Vec<_>>>()?;
        let indices = ija[base..end]
            .iter()
            .map(|&j| to_i64(j))
            .collect::<Result<Vec<_>>>()?;
        a.truncate(end);
        let data = a.split_off(base);
        let zero = a
            .pop()
            .ok_or_else(|| StorageError::invalid(FORMAT, "missing zero sentinel"))?;
        Self::from_parts(nrows, ncols, a, zero, indptr, indices, data, true)
    }
}

/// Convert a non-negative `i64` index into `usize`.
#[inline]
#[must_use]
pub fn i64_to_usize(x: i64) -> usize {
    debug_assert!(x >= 0);
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    {
        x as usize
    }
}
