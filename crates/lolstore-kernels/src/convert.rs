//! Conversions into, out of, and between list-of-lists containers.
//!
//! - dense -> list (`from_dense`), storing only entries that differ from the
//!   source type's zero
//! - Yale (CSR with explicit diagonal) -> list (`from_yale`)
//! - list -> list with an element cast (`cast_copy`)
//! - list -> dense (`to_dense`)
//!
//! Every result owns its data; nothing is shared with the source.

use crate::utility::util::{i64_to_usize, SMALL_DENSE_LIMIT, SMALL_NODE_LIMIT};
use lolstore_core::{CastFrom, Dense, Element, List, ListStorage, NodeValue, Yale};
use rayon::prelude::*;

/// Convert a dense row-major array into a list container of element type `U`.
///
/// Source elements equal to the source type's zero are skipped; the result's
/// default is `U`'s zero. For large inputs the slabs along axis 0 are built in
/// parallel.
#[must_use]
pub fn from_dense<S, U>(src: &Dense<S>) -> ListStorage<U>
where
    S: Element,
    U: Element + CastFrom<S>,
{
    let shape = src.shape.clone();
    let rows = if src.data.len() < SMALL_DENSE_LIMIT || shape.len() < 2 {
        dense_level(&src.data, &shape)
    } else {
        let inner = &shape[1..];
        let stride: usize = inner.iter().product();
        if stride == 0 {
            List::new()
        } else {
            let slabs: Vec<(usize, List<U>)> = src
                .data
                .par_chunks_exact(stride)
                .enumerate()
                .map(|(k, chunk)| (k, dense_level(chunk, inner)))
                .filter(|(_, child)| !child.is_empty())
                .collect();
            List::from_sorted(
                slabs
                    .into_iter()
                    .map(|(k, child)| (k, NodeValue::Child(child))),
            )
        }
    };
    let out = ListStorage::from_rows_unchecked(shape, U::zero(), rows);
    log::debug!(
        "from_dense: {:?} {} -> {}, {} stored of {}",
        out.shape(),
        S::DTYPE,
        U::DTYPE,
        out.nnz(),
        out.max_elements()
    );
    out
}

/// Build the list for the axes in `shape` from the row-major block `data`.
/// Sub-lists that end up empty are dropped.
fn dense_level<S, U>(data: &[S], shape: &[usize]) -> List<U>
where
    S: Element,
    U: Element + CastFrom<S>,
{
    let Some((_, inner)) = shape.split_first() else {
        return List::new();
    };
    if inner.is_empty() {
        return List::from_sorted(
            data.iter()
                .enumerate()
                .filter(|(_, v)| !v.is_zero())
                .map(|(k, v)| (k, NodeValue::Element(U::cast_from(v)))),
        );
    }
    let stride: usize = inner.iter().product();
    if stride == 0 {
        return List::new();
    }
    List::from_sorted(data.chunks_exact(stride).enumerate().filter_map(|(k, chunk)| {
        let child = dense_level(chunk, inner);
        (!child.is_empty()).then_some((k, NodeValue::Child(child)))
    }))
}

/// Convert a Yale matrix into a rank-2 list container of element type `U`.
///
/// The default is the source zero sentinel cast to `U`. A diagonal entry is
/// added to a row when it differs from the sentinel and the row has no
/// explicit entry in that column; it is placed in ascending column order.
/// Rows with no entries at all are left out.
#[must_use]
pub fn from_yale<S, U>(src: &Yale<S, i64>) -> ListStorage<U>
where
    S: Element,
    U: Element + CastFrom<S>,
{
    let mut rows = Vec::new();
    for i in 0..src.nrows {
        let range = src.row_range(i);
        let mut add_diag = src.diag.get(i).is_some_and(|d| *d != src.zero);
        if range.is_empty() && !add_diag {
            continue;
        }

        let mut entries = Vec::with_capacity(range.len() + 1);
        for p in range {
            let j = i64_to_usize(src.indices[p]);
            if add_diag && j >= i {
                // an explicit entry in the diagonal column takes precedence
                if j > i {
                    entries.push((i, NodeValue::Element(U::cast_from(&src.diag[i]))));
                }
                add_diag = false;
            }
            entries.push((j, NodeValue::Element(U::cast_from(&src.data[p]))));
        }
        if add_diag {
            entries.push((i, NodeValue::Element(U::cast_from(&src.diag[i]))));
        }
        rows.push((i, NodeValue::Child(List::from_sorted(entries))));
    }

    let out = ListStorage::from_rows_unchecked(
        vec![src.nrows, src.ncols],
        U::cast_from(&src.zero),
        List::from_sorted(rows),
    );
    log::debug!(
        "from_yale: {}x{} {} -> {}, {} stored",
        src.nrows,
        src.ncols,
        S::DTYPE,
        U::DTYPE,
        out.nnz()
    );
    out
}

/// Deep copy of `src` with every element, and the default, cast to `U`.
///
/// A plain copy without a cast is `Clone`.
#[must_use]
pub fn cast_copy<S, U>(src: &ListStorage<S>) -> ListStorage<U>
where
    S: Element,
    U: Element + CastFrom<S>,
{
    let top = src.rows().nodes();
    let rows = if top.len() < SMALL_NODE_LIMIT {
        cast_list(src.rows())
    } else {
        let nodes: Vec<(usize, NodeValue<U>)> = top
            .par_iter()
            .map(|n| (n.key, cast_value(&n.val)))
            .collect();
        List::from_sorted(nodes)
    };
    ListStorage::from_rows_unchecked(
        src.shape().to_vec(),
        U::cast_from(src.default_value()),
        rows,
    )
}

fn cast_list<S, U>(list: &List<S>) -> List<U>
where
    S: Element,
    U: Element + CastFrom<S>,
{
    List::from_sorted(list.iter().map(|n| (n.key, cast_value(&n.val))))
}

fn cast_value<S, U>(val: &NodeValue<S>) -> NodeValue<U>
where
    S: Element,
    U: Element + CastFrom<S>,
{
    match val {
        NodeValue::Element(v) => NodeValue::Element(U::cast_from(v)),
        NodeValue::Child(child) => NodeValue::Child(cast_list(child)),
    }
}

/// Materialize every coordinate of `src` into a dense row-major array.
#[must_use]
pub fn to_dense<T: Element>(src: &ListStorage<T>) -> Dense<T> {
    let shape = src.shape();
    let mut data = vec![src.default_value().clone(); src.max_elements()];
    src.for_each_stored(|coords, v| {
        let pos = coords
            .iter()
            .zip(shape)
            .fold(0usize, |acc, (&i, &extent)| acc * extent + i);
        data[pos] = v.clone();
    });
    Dense::from_parts_unchecked(shape.to_vec(), data)
}
