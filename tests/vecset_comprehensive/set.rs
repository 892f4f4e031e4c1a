//! VectorSet Tests
//!
//! Insert/dedup, removal, lookup and storage options.

use crate::*;
use vecset::{ElementId, ErrorKind, Insertion, SetOptions};

/// Four distinct five-dimensional vectors under (L2, 0.1)
#[test]
fn test_concrete_scenario() {
    let rows: [&[f64]; 4] = [
        &[1.0, 2.0, 3.0, -3.0, 6.0],
        &[2.0, 2.0, 2.0, 2.0, 2.0],
        &[6.0, 3.0, 9.0, 1.0, 8.0],
        &[1.0, 6.0, 3.0, 9.0, 8.0],
    ];
    let set = set_of(&rows, Norm::L2, 0.1);
    assert_eq!(set.len(), 4);
    assert_eq!(set.dim(), 5);

    let it = set.iter_at(0).unwrap().get_next(3);
    assert_eq!(it.vector().coords(), &[1.0, 6.0, 3.0, 9.0, 8.0]);
    assert!(it.is_end());
}

#[test]
fn test_insert_same_vector_twice() {
    let mut set = VectorSet::with_context(Context::silent());
    let v = vec_of(&[1.0, 2.0, 3.0]);
    for norm in Norm::MEASURABLE {
        set.insert(&v, norm, 0.5).unwrap();
        set.insert(&v, norm, 0.5).unwrap();
    }
    assert_eq!(set.len(), 1);
}

#[test]
fn test_insert_outcomes() {
    let mut set = VectorSet::with_context(Context::silent());
    assert_eq!(
        set.insert(&vec_of(&[0.0]), Norm::L1, 1.0).unwrap(),
        Insertion::Added(ElementId(0))
    );
    assert_eq!(
        set.insert(&vec_of(&[0.5]), Norm::L1, 1.0).unwrap(),
        Insertion::Duplicate { existing: ElementId(0) }
    );
    assert_eq!(
        set.insert(&vec_of(&[2.0]), Norm::L1, 1.0).unwrap(),
        Insertion::Added(ElementId(1))
    );
}

#[test]
fn test_dedup_depends_on_call_metric() {
    let mut set = VectorSet::with_context(Context::silent());
    set.insert(&vec_of(&[0.0, 0.0]), Norm::Chebyshev, 0.5).unwrap();
    // L1 distance 0.6 but Chebyshev distance 0.3
    assert!(set.insert(&vec_of(&[0.3, 0.3]), Norm::L1, 0.5).unwrap().is_added());
    assert_eq!(set.len(), 2);
    assert!(!set.insert(&vec_of(&[0.3, 0.3]), Norm::Chebyshev, 0.5).unwrap().is_added());
}

#[test]
fn test_dimension_is_fixed_after_first_insert() {
    let mut set = VectorSet::with_context(Context::silent());
    set.insert(&vec_of(&[1.0, 2.0]), Norm::L2, 0.1).unwrap();
    set.remove_at(0).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.dim(), 2);
    let err = set.insert(&vec_of(&[1.0]), Norm::L2, 0.1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MismatchingDimensions);
}

#[test]
fn test_remove_last_and_first() {
    let mut set = set_of(&[&[1.0], &[2.0], &[3.0]], Norm::L2, 0.1);
    set.remove_at(2).unwrap();
    assert_eq!(rows_of(&set), vec![vec![1.0], vec![2.0]]);
    set.remove_at(0).unwrap();
    assert_eq!(rows_of(&set), vec![vec![2.0]]);
    assert_eq!(set.ids(), &[ElementId(1)]);
}

#[test]
fn test_remove_matching_keeps_ids_and_rows_in_step() {
    let mut set = VectorSet::with_context(Context::silent());
    for x in [0.0, 10.0, 0.1, 20.0, 0.2, 0.3] {
        set.insert(&vec_of(&[x]), Norm::L1, 0.05).unwrap();
    }
    let removed = set.remove_matching(&vec_of(&[0.0]), Norm::L1, 0.5).unwrap();
    assert_eq!(removed, 4);
    assert_eq!(set.ids(), &[ElementId(1), ElementId(3)]);
    assert_eq!(rows_of(&set), vec![vec![10.0], vec![20.0]]);
}

#[test]
fn test_find_first_returns_independent_copy() {
    let set = set_of(&[&[1.0, 1.0], &[5.0, 5.0]], Norm::L2, 0.1);
    let mut found = set.find_first(&vec_of(&[5.0, 5.05]), Norm::L2, 0.1).unwrap();
    found.scale(2.0).unwrap();
    assert_eq!(set.get(1).unwrap().coords(), &[5.0, 5.0]);
}

#[test]
fn test_find_first_errors() {
    let set = set_of(&[&[1.0, 1.0]], Norm::L2, 0.1);
    assert!(set
        .find_first(&vec_of(&[3.0, 3.0]), Norm::L2, 0.1)
        .unwrap_err()
        .is_not_found());
    assert_eq!(
        set.find_first(&vec_of(&[1.0, 1.0]), Norm::Unspecified, 0.1)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidArgument
    );
    let empty = VectorSet::with_context(Context::silent());
    assert_eq!(
        empty
            .find_first(&vec_of(&[1.0]), Norm::L2, 0.1)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_get_out_of_range() {
    let set = set_of(&[&[1.0]], Norm::L2, 0.1);
    assert_eq!(set.get(1).unwrap_err().kind(), ErrorKind::IndexOutOfBound);
    let mut out = vec_of(&[0.0]);
    assert_eq!(
        set.get_into(1, &mut out).unwrap_err().kind(),
        ErrorKind::IndexOutOfBound
    );
}

#[test]
fn test_storage_options() {
    let mut set = VectorSet::with_options(Context::silent(), SetOptions::compact()).unwrap();
    for i in 0..10 {
        set.insert(&vec_of(&[i as f64, 1.0, 2.0]), Norm::L2, 0.1).unwrap();
    }
    assert_eq!(set.len(), 10);
    assert!(set.capacity() >= 10);
    assert_eq!(set.options(), &SetOptions::compact());

    let options: SetOptions =
        serde_json::from_str(r#"{"initial_capacity": 8, "growth_factor": 3}"#).unwrap();
    let set = VectorSet::with_options(Context::silent(), options).unwrap();
    assert_eq!(set.options().growth_factor, 3);

    let bad: SetOptions = serde_json::from_str(r#"{"growth_factor": 1}"#).unwrap();
    let err = VectorSet::with_options(Context::silent(), bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_clone_deep_copies_everything() {
    let mut set = set_of(&[&[1.0, 0.0], &[2.0, 0.0], &[3.0, 0.0]], Norm::L2, 0.1);
    set.remove_at(1).unwrap();
    let copy = set.clone();
    set.remove_at(0).unwrap();

    assert_eq!(copy.dim(), 2);
    assert_eq!(copy.len(), 2);
    assert_eq!(copy.ids(), &[ElementId(0), ElementId(2)]);
    assert_eq!(rows_of(&copy), vec![vec![1.0, 0.0], vec![3.0, 0.0]]);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_rows_iterates_like_cursor() {
    let set = set_of(&[&[1.0], &[2.0], &[3.0]], Norm::L2, 0.1);
    let mut cursor = set.begin().unwrap();
    for (id, row) in set.rows() {
        assert_eq!(cursor.id(), id);
        assert_eq!(cursor.vector().coords(), row);
        if !cursor.is_end() {
            cursor.next(1).unwrap();
        }
    }
}
