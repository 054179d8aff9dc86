use lolstore_core::ListStorage;
use lolstore_kernels::eqeq;

fn storage<const N: usize>(
    shape: [usize; N],
    default: i32,
    entries: &[([usize; N], i32)],
) -> ListStorage<i32> {
    let mut s = ListStorage::new(shape.to_vec(), default).unwrap();
    for (c, v) in entries {
        s.insert(c, *v).unwrap();
    }
    s
}

#[test]
fn reflexive_and_symmetric() {
    let a = storage([3, 3], 0, &[([0, 0], 1), ([2, 1], 4)]);
    let b = storage([3, 3], 0, &[([0, 0], 1)]);
    assert!(eqeq(&a, &a));
    assert!(eqeq(&b, &b));
    assert_eq!(eqeq(&a, &b), eqeq(&b, &a));
    assert!(!eqeq(&a, &b));
}

#[test]
fn both_empty_compare_defaults() {
    let a = storage([2, 2], 0, &[]);
    let b = storage([2, 2], 0, &[]);
    let c = storage([2, 2], 1, &[]);
    assert!(eqeq(&a, &b));
    assert!(!eqeq(&a, &c));
}

#[test]
fn insertion_order_does_not_matter() {
    let a = storage([2, 3, 2], 0, &[([0, 0, 0], 1), ([1, 2, 1], 2), ([0, 2, 1], 3)]);
    let b = storage([2, 3, 2], 0, &[([0, 2, 1], 3), ([0, 0, 0], 1), ([1, 2, 1], 2)]);
    assert!(eqeq(&a, &b));
}

#[test]
fn stored_default_equals_implicit_default() {
    // right stores an explicit 0 where left relies on its default
    let a = storage([2, 2], 0, &[([1, 1], 5)]);
    let b = storage([2, 2], 0, &[([1, 1], 5), ([0, 1], 0)]);
    assert!(eqeq(&a, &b));
    assert!(eqeq(&b, &a));
}

#[test]
fn left_empty_right_matches_left_default() {
    let a = storage([2, 2], 7, &[]);
    let b = storage([2, 2], 7, &[([0, 0], 7)]);
    assert!(eqeq(&a, &b));
    let c = storage([2, 2], 7, &[([0, 0], 8)]);
    assert!(!eqeq(&a, &c));
    assert!(!eqeq(&c, &a));
}

#[test]
fn different_defaults_equal_when_fully_covered() {
    // every coordinate of b is stored, so b's default is never observed
    let a = storage([2, 2], 3, &[]);
    let b = storage([2, 2], 9, &[([0, 0], 3), ([0, 1], 3), ([1, 0], 3), ([1, 1], 3)]);
    assert!(eqeq(&a, &b));
    assert!(eqeq(&b, &a));
}

#[test]
fn different_defaults_differ_when_uncovered() {
    let a = storage([2, 2], 3, &[]);
    let b = storage([2, 2], 9, &[([0, 0], 3), ([0, 1], 3), ([1, 0], 3)]);
    assert!(!eqeq(&a, &b));
    assert!(!eqeq(&b, &a));
}

#[test]
fn mixed_coverage_with_different_defaults() {
    // a: default 1, row 0 explicit; b: default 2, row 1 explicit.
    let a = storage([2, 2], 1, &[([0, 0], 2), ([0, 1], 2)]);
    let b = storage([2, 2], 2, &[([1, 0], 1), ([1, 1], 1)]);
    // a = [[2,2],[1,1]], b = [[2,2],[1,1]]
    assert!(eqeq(&a, &b));
    assert!(eqeq(&b, &a));

    let c = storage([2, 2], 2, &[([1, 0], 1)]);
    assert!(!eqeq(&a, &c));
}

#[test]
fn different_shapes_are_not_equal() {
    let a = storage([2, 2], 0, &[]);
    let b = storage([2, 3], 0, &[]);
    assert!(!eqeq(&a, &b));
}

#[test]
fn rank_one_storage() {
    let a = storage([5], 0, &[([4], 1)]);
    let b = storage([5], 0, &[([4], 1), ([2], 0)]);
    let c = storage([5], 0, &[([3], 1)]);
    assert!(eqeq(&a, &b));
    assert!(!eqeq(&a, &c));
}

#[test]
fn huge_shape_still_compares_defaults() {
    // the coordinate count of these shapes does not fit in usize
    for extent in [1usize << 32, 1 << 33] {
        let a = storage([extent, extent], 0, &[]);
        let b = storage([extent, extent], 1, &[([0, 0], 0)]);
        assert!(!eqeq(&a, &b));
        assert!(!eqeq(&b, &a));

        let c = storage([extent, extent], 0, &[([0, 0], 0)]);
        assert!(eqeq(&a, &c));
    }
}
