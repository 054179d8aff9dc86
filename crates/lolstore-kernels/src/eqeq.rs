//! Logical equality between two list-of-lists containers.
//!
//! Two containers are equal when every coordinate reads the same value,
//! whether it is stored or falls back to the default. The trees may store
//! different coordinates and carry different defaults, so the walk only visits
//! stored entries and counts how many coordinates it covered; if any coordinate
//! was left uncovered, the two defaults must match as well.

use lolstore_core::{Element, List, ListStorage, Node, NodeValue};

/// Whether `left` and `right` hold the same effective value at every coordinate.
///
/// Containers of different shape are never equal.
#[must_use]
pub fn eqeq<T: Element>(left: &ListStorage<T>, right: &ListStorage<T>) -> bool {
    if left.shape() != right.shape() {
        return false;
    }
    // a shape too large to count can never be fully covered
    let max_elements = left.checked_max_elements();
    let depth = left.rank() - 1;
    let l_default = left.default_value();
    let r_default = right.default_value();
    let mut num_checked = 0usize;

    let matched = match (left.rows().is_empty(), right.rows().is_empty()) {
        (true, true) => {
            log::trace!("eqeq: both empty, comparing defaults");
            return l_default == r_default;
        }
        (true, false) => {
            log::trace!("eqeq: left empty");
            list_eqeq_value(right.rows(), l_default, depth, &mut num_checked)
        }
        (false, true) => {
            log::trace!("eqeq: right empty");
            list_eqeq_value(left.rows(), r_default, depth, &mut num_checked)
        }
        (false, false) => {
            log::trace!("eqeq: both non-empty");
            list_eqeq_list(
                left.rows(),
                right.rows(),
                l_default,
                r_default,
                depth,
                &mut num_checked,
            )
        }
    };

    let covered = max_elements.is_some_and(|m| num_checked >= m);
    matched && (covered || l_default == r_default)
}

/// Every element stored under `list` equals `value`.
fn list_eqeq_value<T: Element>(
    list: &List<T>,
    value: &T,
    recursions: usize,
    num_checked: &mut usize,
) -> bool {
    list.iter()
        .all(|node| node_eqeq_value(node, value, recursions, num_checked))
}

fn node_eqeq_value<T: Element>(
    node: &Node<T>,
    value: &T,
    recursions: usize,
    num_checked: &mut usize,
) -> bool {
    match (&node.val, recursions) {
        (NodeValue::Element(v), 0) => {
            *num_checked += 1;
            v == value
        }
        (NodeValue::Child(child), r) if r > 0 => {
            list_eqeq_value(child, value, r - 1, num_checked)
        }
        _ => false,
    }
}

/// Walk two lists of the same level in key order. Keys present on one side
/// only are compared against the other side's default.
fn list_eqeq_list<T: Element>(
    left: &List<T>,
    right: &List<T>,
    l_default: &T,
    r_default: &T,
    recursions: usize,
    num_checked: &mut usize,
) -> bool {
    let mut l_iter = left.iter().peekable();
    let mut r_iter = right.iter().peekable();

    loop {
        let ok = match (l_iter.peek().copied(), r_iter.peek().copied()) {
            (None, None) => return true,
            (Some(l), None) => {
                let ok = node_eqeq_value(l, r_default, recursions, num_checked);
                l_iter.next();
                ok
            }
            (None, Some(r)) => {
                let ok = node_eqeq_value(r, l_default, recursions, num_checked);
                r_iter.next();
                ok
            }
            (Some(l), Some(r)) if l.key < r.key => {
                let ok = node_eqeq_value(l, r_default, recursions, num_checked);
                l_iter.next();
                ok
            }
            (Some(l), Some(r)) if r.key < l.key => {
                let ok = node_eqeq_value(r, l_default, recursions, num_checked);
                r_iter.next();
                ok
            }
            (Some(l), Some(r)) => {
                let ok = match (&l.val, &r.val) {
                    (NodeValue::Element(lv), NodeValue::Element(rv)) if recursions == 0 => {
                        *num_checked += 1;
                        lv == rv
                    }
                    (NodeValue::Child(lc), NodeValue::Child(rc)) if recursions > 0 => {
                        list_eqeq_list(lc, rc, l_default, r_default, recursions - 1, num_checked)
                    }
                    _ => false,
                };
                l_iter.next();
                r_iter.next();
                ok
            }
        };
        if !ok {
            return false;
        }
    }
}
