//! Key-ordered association lists, one per nesting level.
//!
//! A `List` maps an axis coordinate to either a terminal element or a nested
//! `List` for the next axis. Nodes are kept strictly ascending by key with no
//! duplicates; every method below preserves that, except `insert_after`, whose
//! ordering contract is on the caller.

/// Value held by a node: a terminal element or the list for the next axis.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue<T> {
    Element(T),
    Child(List<T>),
}

impl<T> NodeValue<T> {
    #[inline]
    #[must_use]
    pub const fn is_child(&self) -> bool {
        matches!(self, Self::Child(_))
    }

    #[inline]
    #[must_use]
    pub const fn as_element(&self) -> Option<&T> {
        match self {
            Self::Element(v) => Some(v),
            Self::Child(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_child(&self) -> Option<&List<T>> {
        match self {
            Self::Child(l) => Some(l),
            Self::Element(_) => None,
        }
    }

    #[inline]
    pub fn as_child_mut(&mut self) -> Option<&mut List<T>> {
        match self {
            Self::Child(l) => Some(l),
            Self::Element(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_element(self) -> Option<T> {
        match self {
            Self::Element(v) => Some(v),
            Self::Child(_) => None,
        }
    }

    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Element(_) => "element",
            Self::Child(_) => "list",
        }
    }
}

/// One association cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub key: usize,
    pub val: NodeValue<T>,
}

/// Ordered list of nodes for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a Node<T>;
    type IntoIter = std::slice::Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<T> List<T> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes at this level only.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Node<T>> {
        self.nodes.first()
    }

    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Node<T>> {
        self.nodes.iter()
    }

    #[inline]
    fn position(&self, key: usize) -> Result<usize, usize> {
        self.nodes.binary_search_by(|n| n.key.cmp(&key))
    }

    /// Node with exactly `key`, if any.
    #[inline]
    #[must_use]
    pub fn find(&self, key: usize) -> Option<&Node<T>> {
        self.position(key).ok().map(|p| &self.nodes[p])
    }

    #[inline]
    pub fn find_mut(&mut self, key: usize) -> Option<&mut Node<T>> {
        match self.position(key) {
            Ok(p) => Some(&mut self.nodes[p]),
            Err(_) => None,
        }
    }

    /// Insert `val` at `key`, keeping ascending order.
    ///
    /// When `key` is already present, `overwrite` replaces (and drops) the old
    /// value; otherwise the existing node is kept and `val` is dropped. Returns
    /// the node now stored at `key`.
    pub fn insert(&mut self, key: usize, val: NodeValue<T>, overwrite: bool) -> &mut Node<T> {
        match self.position(key) {
            Ok(p) => {
                if overwrite {
                    self.nodes[p].val = val;
                }
                &mut self.nodes[p]
            }
            Err(p) => {
                self.nodes.insert(p, Node { key, val });
                &mut self.nodes[p]
            }
        }
    }

    /// Insert a node directly after position `pos` and return the new node's
    /// position, for sequential construction with a forward cursor.
    ///
    /// The caller guarantees `nodes[pos].key < key < nodes[pos + 1].key`; this
    /// is only checked in debug builds.
    pub fn insert_after(&mut self, pos: usize, key: usize, val: NodeValue<T>) -> usize {
        debug_assert!(
            self.nodes.get(pos).is_some_and(|n| n.key < key),
            "insert_after: key {key} must follow the cursor node"
        );
        debug_assert!(
            self.nodes.get(pos + 1).map_or(true, |n| key < n.key),
            "insert_after: key {key} must precede the next node"
        );
        self.nodes.insert(pos + 1, Node { key, val });
        pos + 1
    }

    /// Append while building in ascending key order, returning the new cursor.
    #[inline]
    fn push_cursor(&mut self, cursor: Option<usize>, key: usize, val: NodeValue<T>) -> usize {
        match cursor {
            Some(pos) => self.insert_after(pos, key, val),
            None => match self.position(key) {
                Ok(p) => p,
                Err(p) => {
                    self.nodes.insert(p, Node { key, val });
                    p
                }
            },
        }
    }

    /// Remove and return the value at `key`; `None` leaves the list untouched.
    pub fn remove(&mut self, key: usize) -> Option<NodeValue<T>> {
        let p = self.position(key).ok()?;
        Some(self.nodes.remove(p).val)
    }

    /// Count terminal elements `recursions` levels below this list.
    #[must_use]
    pub fn count_elements_r(&self, recursions: usize) -> usize {
        if recursions == 0 {
            return self.nodes.len();
        }
        self.nodes
            .iter()
            .filter_map(|n| n.val.as_child())
            .map(|child| child.count_elements_r(recursions - 1))
            .sum()
    }

    /// Visit every terminal element reachable from this list.
    pub fn visit<F: FnMut(&T)>(&self, visit: &mut F) {
        for node in &self.nodes {
            match &node.val {
                NodeValue::Element(v) => visit(v),
                NodeValue::Child(child) => child.visit(visit),
            }
        }
    }

    /// Build a list from `(key, value)` pairs already in strictly ascending
    /// key order.
    pub fn from_sorted<It>(entries: It) -> Self
    where
        It: IntoIterator<Item = (usize, NodeValue<T>)>,
    {
        let mut list = Self::new();
        let mut cursor = None;
        for (key, val) in entries {
            cursor = Some(list.push_cursor(cursor, key, val));
        }
        list
    }

    pub(crate) fn check_ascending(&self) -> bool {
        self.nodes.windows(2).all(|w| w[0].key < w[1].key)
    }
}
