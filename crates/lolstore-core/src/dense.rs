//! Dense row-major n-dimensional arrays, the source and target of dense
//! conversions.

use crate::dtype::{DType, Element};
use crate::error::{Result, StorageError};

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Dense<T> {
    pub data: Vec<T>, // row-major, length = product of shape
    pub shape: Vec<usize>,
}

impl<T> Dense<T> {
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn from_parts(shape: Vec<usize>, data: Vec<T>) -> Result<Self> {
        if shape.is_empty() {
            return Err(StorageError::EmptyShape);
        }
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| StorageError::invalid("dense", "shape product overflow"))?;
        if data.len() != expected {
            return Err(StorageError::invalid(
                "dense",
                format!(
                    "data length {} does not match shape {:?} (product {expected})",
                    data.len(),
                    shape
                ),
            ));
        }
        Ok(Self { data, shape })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(shape: Vec<usize>, data: Vec<T>) -> Self {
        Self { data, shape }
    }

    /// Row-major linear position of `coords`.
    pub fn linear_index(&self, coords: &[usize]) -> Result<usize> {
        if coords.len() != self.shape.len() {
            return Err(StorageError::RankMismatch {
                rank: self.shape.len(),
                got: coords.len(),
            });
        }
        let mut pos = 0usize;
        for (axis, (&index, &extent)) in coords.iter().zip(&self.shape).enumerate() {
            if index >= extent {
                return Err(StorageError::IndexOutOfBounds {
                    axis,
                    index,
                    extent,
                });
            }
            pos = pos * extent + index;
        }
        Ok(pos)
    }

    pub fn get(&self, coords: &[usize]) -> Result<&T> {
        let pos = self.linear_index(coords)?;
        Ok(&self.data[pos])
    }
}

impl<T: Element> Dense<T> {
    #[inline]
    #[must_use]
    pub const fn dtype(&self) -> DType {
        T::DTYPE
    }
}
