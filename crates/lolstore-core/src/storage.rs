//! The list-of-lists storage container.
//!
//! A `ListStorage` owns a root `List` nested `rank - 1` levels deep. Only
//! entries that were explicitly inserted are stored; every other coordinate
//! reads as the container's default value.

use crate::dtype::{DType, Element};
use crate::error::{Result, StorageError};
use crate::list::{List, NodeValue};

/// Sparse n-dimensional matrix stored as nested ordered lists.
#[derive(Debug, Clone)]
pub struct ListStorage<T> {
    shape: Vec<usize>,
    default_val: T,
    rows: List<T>,
}

impl<T> ListStorage<T> {
    /// Empty container; every coordinate reads as `default_val`.
    pub fn new(shape: Vec<usize>, default_val: T) -> Result<Self> {
        if shape.is_empty() {
            return Err(StorageError::EmptyShape);
        }
        Ok(Self {
            shape,
            default_val,
            rows: List::new(),
        })
    }

    /// Assemble a container around an already built tree.
    ///
    /// The caller guarantees `shape` is non-empty and `rows` is nested exactly
    /// `shape.len() - 1` levels deep; see [`ListStorage::validate`].
    #[inline]
    #[must_use]
    pub const fn from_rows_unchecked(shape: Vec<usize>, default_val: T, rows: List<T>) -> Self {
        Self {
            shape,
            default_val,
            rows,
        }
    }

    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default_val
    }

    /// The root list (axis 0).
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &List<T> {
        &self.rows
    }

    /// Product of the shape: the number of logical coordinates.
    ///
    /// Saturates at `usize::MAX` for shapes whose product does not fit; see
    /// [`ListStorage::checked_max_elements`].
    #[inline]
    #[must_use]
    pub fn max_elements(&self) -> usize {
        self.checked_max_elements().unwrap_or(usize::MAX)
    }

    /// Product of the shape, `None` when it overflows `usize`.
    #[inline]
    #[must_use]
    pub fn checked_max_elements(&self) -> Option<usize> {
        self.shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Number of explicitly stored elements.
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.rows.count_elements_r(self.rank().saturating_sub(1))
    }

    fn check_coords(&self, coords: &[usize]) -> Result<()> {
        if coords.len() != self.shape.len() {
            return Err(StorageError::RankMismatch {
                rank: self.shape.len(),
                got: coords.len(),
            });
        }
        for (axis, (&index, &extent)) in coords.iter().zip(&self.shape).enumerate() {
            if index >= extent {
                return Err(StorageError::IndexOutOfBounds {
                    axis,
                    index,
                    extent,
                });
            }
        }
        Ok(())
    }

    fn lookup(&self, coords: &[usize]) -> Option<&T> {
        let (last, leading) = coords.split_last()?;
        let mut list = &self.rows;
        for &key in leading {
            list = list.find(key)?.val.as_child()?;
        }
        list.find(*last)?.val.as_element()
    }

    /// Element at `coords`, or the default value when nothing is stored there.
    ///
    /// The returned reference is read-only; mutation goes through
    /// [`ListStorage::insert`] and [`ListStorage::remove`].
    pub fn get(&self, coords: &[usize]) -> Result<&T> {
        self.check_coords(coords)?;
        Ok(self.lookup(coords).unwrap_or(&self.default_val))
    }

    /// Stored element at `coords`, `None` when the coordinate is implicit.
    pub fn get_stored(&self, coords: &[usize]) -> Result<Option<&T>> {
        self.check_coords(coords)?;
        Ok(self.lookup(coords))
    }

    /// Store `val` at `coords`, replacing and dropping any previous element.
    ///
    /// Intermediate lists are created on the way down as needed.
    pub fn insert(&mut self, coords: &[usize], val: T) -> Result<&T> {
        self.check_coords(coords)?;
        let Some((last, leading)) = coords.split_last() else {
            return Err(StorageError::EmptyShape);
        };
        let mut list = &mut self.rows;
        for (depth, &key) in leading.iter().enumerate() {
            let node = list.insert(key, NodeValue::Child(List::new()), false);
            list = match &mut node.val {
                NodeValue::Child(child) => child,
                NodeValue::Element(_) => {
                    return Err(StorageError::corrupt(
                        depth,
                        format!("key {key} holds an element where a list was expected"),
                    ))
                }
            };
        }
        if list.find(*last).is_some_and(|n| n.val.is_child()) {
            return Err(StorageError::corrupt(
                leading.len(),
                format!("key {last} holds a list where an element was expected"),
            ));
        }
        let node = list.insert(*last, NodeValue::Element(val), true);
        node.val.as_element().ok_or_else(|| {
            StorageError::corrupt(leading.len(), "terminal node does not hold an element")
        })
    }

    /// Remove and return the element at `coords`.
    ///
    /// Lists left empty by the removal are released up to the first ancestor
    /// that still holds other entries. Returns `Ok(None)` and leaves the tree
    /// untouched when nothing is stored there.
    pub fn remove(&mut self, coords: &[usize]) -> Result<Option<T>> {
        self.check_coords(coords)?;
        remove_r(&mut self.rows, coords, 0)
    }

    /// Visit the default value and every stored element.
    ///
    /// Hosts that keep element references alive (for example a garbage
    /// collected runtime marking its objects) call this; the container never
    /// calls it itself.
    pub fn visit_elements<F: FnMut(&T)>(&self, mut visit: F) {
        visit(&self.default_val);
        self.rows.visit(&mut visit);
    }

    /// Call `f` with the coordinates and value of every stored element, in
    /// row-major coordinate order.
    pub fn for_each_stored<F: FnMut(&[usize], &T)>(&self, mut f: F) {
        let mut coords = vec![0usize; self.rank()];
        walk_stored(&self.rows, 0, &mut coords, &mut f);
    }

    /// Check the structural invariants of the tree.
    ///
    /// Every list is strictly ascending, every key lies within its axis extent,
    /// terminal elements sit exactly `rank - 1` levels below the root, and no
    /// empty list is reachable below the root.
    pub fn validate(&self) -> Result<()> {
        if self.shape.is_empty() {
            return Err(StorageError::EmptyShape);
        }
        validate_r(&self.rows, &self.shape, 0)
    }
}

impl<T: Element> ListStorage<T> {
    #[inline]
    #[must_use]
    pub const fn dtype(&self) -> DType {
        T::DTYPE
    }
}

fn remove_r<T>(list: &mut List<T>, coords: &[usize], depth: usize) -> Result<Option<T>> {
    match coords {
        [] => Ok(None),
        [key] => match list.find(*key).map(|node| node.val.is_child()) {
            None => Ok(None),
            Some(true) => Err(StorageError::corrupt(
                depth,
                format!("key {key} holds a list where an element was expected"),
            )),
            Some(false) => Ok(list.remove(*key).and_then(NodeValue::into_element)),
        },
        [key, rest @ ..] => {
            let Some(node) = list.find_mut(*key) else {
                return Ok(None);
            };
            let Some(child) = node.val.as_child_mut() else {
                return Err(StorageError::corrupt(
                    depth,
                    format!("key {key} holds an element where a list was expected"),
                ));
            };
            let removed = remove_r(child, rest, depth + 1)?;
            if removed.is_some() && child.is_empty() {
                list.remove(*key);
                log::trace!("pruned empty list at depth {depth}, key {key}");
            }
            Ok(removed)
        }
    }
}

fn walk_stored<T, F: FnMut(&[usize], &T)>(
    list: &List<T>,
    depth: usize,
    coords: &mut [usize],
    f: &mut F,
) {
    for node in list {
        coords[depth] = node.key;
        match &node.val {
            NodeValue::Element(v) => f(coords, v),
            NodeValue::Child(child) => walk_stored(child, depth + 1, coords, f),
        }
    }
}

fn validate_r<T>(list: &List<T>, shape: &[usize], depth: usize) -> Result<()> {
    if !list.check_ascending() {
        return Err(StorageError::corrupt(depth, "keys are not strictly ascending"));
    }
    let extent = shape[depth];
    let terminal = depth + 1 == shape.len();
    for node in list {
        if node.key >= extent {
            return Err(StorageError::corrupt(
                depth,
                format!("key {} outside extent {extent}", node.key),
            ));
        }
        match (&node.val, terminal) {
            (NodeValue::Element(_), true) => {}
            (NodeValue::Child(child), false) => {
                if child.is_empty() {
                    return Err(StorageError::corrupt(
                        depth,
                        format!("key {} holds an empty list", node.key),
                    ));
                }
                validate_r(child, shape, depth + 1)?;
            }
            (val, _) => {
                return Err(StorageError::corrupt(
                    depth,
                    format!("key {} holds an unexpected {}", node.key, val.kind()),
                ))
            }
        }
    }
    Ok(())
}
