use lolstore_core::{DType, List, ListStorage, NodeValue, SparseNd, StorageError};

#[test]
fn insert_get_remove_scenario() {
    let mut s = ListStorage::new(vec![3, 3], 0i64).unwrap();
    assert_eq!(*s.insert(&[0, 0], 5).unwrap(), 5);
    assert_eq!(*s.insert(&[1, 1], 7).unwrap(), 7);

    assert_eq!(*s.get(&[0, 0]).unwrap(), 5);
    assert_eq!(*s.get(&[2, 2]).unwrap(), 0);
    assert_eq!(*s.get(&[1, 1]).unwrap(), 7);

    assert_eq!(s.remove(&[0, 0]).unwrap(), Some(5));
    assert_eq!(*s.get(&[0, 0]).unwrap(), 0);
    assert_eq!(s.nnz(), 1);
    s.validate().unwrap();
}

#[test]
fn fresh_storage_reads_default_everywhere() {
    let s = ListStorage::new(vec![2, 3, 4], -1i32).unwrap();
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..4 {
                assert_eq!(*s.get(&[i, j, k]).unwrap(), -1);
                assert_eq!(s.get_stored(&[i, j, k]).unwrap(), None);
            }
        }
    }
    assert_eq!(s.nnz(), 0);
    assert_eq!(s.max_elements(), 24);
    assert_eq!(s.dtype(), DType::I32);
}

#[test]
fn insert_replaces_existing_value() {
    let mut s = ListStorage::new(vec![4], 0u8).unwrap();
    s.insert(&[2], 1).unwrap();
    s.insert(&[2], 9).unwrap();
    assert_eq!(*s.get(&[2]).unwrap(), 9);
    assert_eq!(s.nnz(), 1);
}

#[test]
fn remove_prunes_every_intermediate_list() {
    let mut s = ListStorage::new(vec![4, 5, 6, 7], 0.0f64).unwrap();
    s.insert(&[1, 2, 3, 4], 2.5).unwrap();
    assert_eq!(s.rows().len(), 1);

    assert_eq!(s.remove(&[1, 2, 3, 4]).unwrap(), Some(2.5));
    assert!(s.rows().is_empty());
    assert_eq!(s.rows().count_elements_r(0), 0);
    s.validate().unwrap();
}

#[test]
fn remove_stops_pruning_at_surviving_ancestor() {
    let mut s = ListStorage::new(vec![3, 3, 3], 0i32).unwrap();
    s.insert(&[0, 1, 2], 1).unwrap();
    s.insert(&[0, 2, 0], 2).unwrap();

    assert_eq!(s.remove(&[0, 1, 2]).unwrap(), Some(1));
    let axis1 = s.rows().find(0).and_then(|n| n.val.as_child()).unwrap();
    assert_eq!(axis1.len(), 1);
    assert!(axis1.find(1).is_none());
    assert_eq!(*s.get(&[0, 2, 0]).unwrap(), 2);
    s.validate().unwrap();
}

#[test]
fn remove_missing_leaves_tree_untouched() {
    let mut s = ListStorage::new(vec![3, 3], 0i32).unwrap();
    s.insert(&[1, 1], 4).unwrap();
    let before = s.rows().clone();

    assert_eq!(s.remove(&[1, 2]).unwrap(), None);
    assert_eq!(s.remove(&[2, 1]).unwrap(), None);
    assert_eq!(s.rows(), &before);
}

#[test]
fn coordinates_are_checked() {
    let mut s = ListStorage::new(vec![2, 3], 0i32).unwrap();
    assert_eq!(
        s.get(&[0]).unwrap_err(),
        StorageError::RankMismatch { rank: 2, got: 1 }
    );
    assert_eq!(
        s.insert(&[1, 3], 1).unwrap_err(),
        StorageError::IndexOutOfBounds {
            axis: 1,
            index: 3,
            extent: 3
        }
    );
    assert!(s.remove(&[2, 0]).is_err());
    assert!(s.rows().is_empty());
}

#[test]
fn empty_shape_is_rejected() {
    let err = ListStorage::new(Vec::new(), 0i32).unwrap_err();
    assert_eq!(err, StorageError::EmptyShape);
}

#[test]
fn copies_are_independent() {
    let mut a = ListStorage::new(vec![2, 2], 0i32).unwrap();
    a.insert(&[0, 1], 3).unwrap();
    let mut b = a.clone();
    b.insert(&[0, 1], 8).unwrap();
    b.insert(&[1, 0], 9).unwrap();

    assert_eq!(*a.get(&[0, 1]).unwrap(), 3);
    assert_eq!(*a.get(&[1, 0]).unwrap(), 0);
    assert_eq!(b.nnz(), 2);
}

#[test]
fn visit_elements_sees_default_and_stored() {
    let mut s = ListStorage::new(vec![3, 3], 100i32).unwrap();
    s.insert(&[2, 0], 1).unwrap();
    s.insert(&[0, 2], 2).unwrap();

    let mut seen = Vec::new();
    s.visit_elements(|v| seen.push(*v));
    assert_eq!(seen, vec![100, 2, 1]);
}

#[test]
fn for_each_stored_is_row_major() {
    let mut s = ListStorage::new(vec![2, 2, 2], 0i32).unwrap();
    s.insert(&[1, 0, 1], 3).unwrap();
    s.insert(&[0, 1, 0], 2).unwrap();
    s.insert(&[0, 0, 1], 1).unwrap();

    let mut out = Vec::new();
    s.for_each_stored(|c, v| out.push((c.to_vec(), *v)));
    assert_eq!(
        out,
        vec![
            (vec![0, 0, 1], 1),
            (vec![0, 1, 0], 2),
            (vec![1, 0, 1], 3)
        ]
    );
}

#[test]
fn sparse_nd_view() {
    let mut s = ListStorage::new(vec![4, 4], 0.0f32).unwrap();
    s.insert(&[3, 3], 1.0).unwrap();
    let view: &dyn SparseNd = &s;
    assert_eq!(view.nnz(), 1);
    assert_eq!(view.ndim(), 2);
    assert_eq!(view.shape(), &[4, 4]);
}

#[test]
fn validate_reports_malformed_trees() {
    let empty_child = List::from_sorted([(0, NodeValue::Child(List::<i32>::new()))]);
    let s = ListStorage::from_rows_unchecked(vec![2, 2], 0, empty_child);
    assert!(matches!(s.validate(), Err(StorageError::CorruptTree { depth: 0, .. })));

    let too_shallow = List::from_sorted([(0, NodeValue::Element(1))]);
    let s = ListStorage::from_rows_unchecked(vec![2, 2], 0, too_shallow);
    assert!(s.validate().is_err());

    let out_of_extent = List::from_sorted([(5, NodeValue::Element(1))]);
    let s = ListStorage::from_rows_unchecked(vec![2], 0, out_of_extent);
    assert!(s.validate().is_err());
}

#[test]
fn structure_mismatch_fails_fast() {
    let too_shallow = List::from_sorted([(0, NodeValue::Element(1))]);
    let mut s = ListStorage::from_rows_unchecked(vec![2, 2], 0, too_shallow);
    assert!(matches!(
        s.insert(&[0, 1], 4),
        Err(StorageError::CorruptTree { depth: 0, .. })
    ));
    assert!(s.remove(&[0, 1]).is_err());
    // lookups through a malformed node fall back to the default
    assert_eq!(*s.get(&[0, 1]).unwrap(), 0);
}

#[test]
fn max_elements_saturates_on_huge_shapes() {
    let s = ListStorage::new(vec![1usize << 33, 1 << 33], 0i32).unwrap();
    assert_eq!(s.checked_max_elements(), None);
    assert_eq!(s.max_elements(), usize::MAX);

    let s = ListStorage::new(vec![3, 4, 5], 0i32).unwrap();
    assert_eq!(s.checked_max_elements(), Some(60));
    assert_eq!(s.max_elements(), 60);
}

#[test]
fn failed_insert_leaves_tree_unchanged() {
    // row 1 holds an element at depth 1 where a list is expected
    let rows = List::from_sorted([(
        1,
        NodeValue::Child(List::from_sorted([(2, NodeValue::Element(7))])),
    )]);
    let mut s = ListStorage::from_rows_unchecked(vec![3, 3, 3], 0, rows);
    let before = s.rows().clone();
    assert!(matches!(
        s.insert(&[1, 2, 0], 4),
        Err(StorageError::CorruptTree { depth: 1, .. })
    ));
    assert_eq!(s.rows(), &before);

    // terminal list where an element is expected
    let rows = List::from_sorted([(
        0,
        NodeValue::Child(List::from_sorted([(1, NodeValue::Child(List::new()))])),
    )]);
    let mut s = ListStorage::from_rows_unchecked(vec![2, 2], 0, rows);
    let before = s.rows().clone();
    assert!(s.insert(&[0, 1], 4).is_err());
    assert_eq!(s.rows(), &before);
}
