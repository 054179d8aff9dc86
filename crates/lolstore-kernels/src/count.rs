//! Element counters over list-of-lists trees.

use crate::utility::util::SMALL_NODE_LIMIT;
use lolstore_core::{List, ListStorage, Result, StorageError};
use rayon::prelude::*;

/// Count terminal elements `recursions` levels below `list`.
///
/// Wide top levels are split across the rayon pool.
#[must_use]
pub fn count_elements_r<T: Sync>(list: &List<T>, recursions: usize) -> usize {
    if recursions == 0 || list.len() < SMALL_NODE_LIMIT {
        return list.count_elements_r(recursions);
    }
    list.nodes()
        .par_iter()
        .filter_map(|n| n.val.as_child())
        .map(|child| child.count_elements_r(recursions - 1))
        .sum()
}

/// Number of explicitly stored elements in `s`.
#[must_use]
pub fn count_storage_elements<T: Sync>(s: &ListStorage<T>) -> usize {
    count_elements_r(s.rows(), s.rank() - 1)
}

/// Number of logical coordinates in `s`, stored or not.
#[inline]
#[must_use]
pub fn count_storage_max_elements<T>(s: &ListStorage<T>) -> usize {
    s.max_elements()
}

/// Count stored elements whose row and column differ. Rank 2 only.
pub fn count_non_diagonal<T>(s: &ListStorage<T>) -> Result<usize> {
    if s.rank() != 2 {
        return Err(StorageError::UnsupportedRank {
            op: "count_non_diagonal",
            expected: 2,
            rank: s.rank(),
        });
    }
    let mut count = 0usize;
    for row in s.rows() {
        let Some(cols) = row.val.as_child() else {
            continue;
        };
        count += cols.iter().filter(|col| col.key != row.key).count();
    }
    Ok(count)
}
