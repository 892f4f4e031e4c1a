//! Iteration Tests
//!
//! Cursor creation, stepping in both directions and behavior across removal.

use crate::*;
use vecset::{ElementId, ErrorKind, SetControl};

fn numbered(n: usize) -> VectorSet {
    let mut set = VectorSet::with_context(Context::silent());
    for i in 0..n {
        set.insert(&vec_of(&[i as f64]), Norm::L1, 0.5).unwrap();
    }
    set
}

#[test]
fn test_walk_reaches_end_after_len_minus_one_steps() {
    for n in 1..6 {
        let set = numbered(n);
        let mut it = set.begin().unwrap();
        for _ in 0..n - 1 {
            assert!(!it.is_end());
            it.next(1).unwrap();
        }
        assert!(it.is_end());
        assert_eq!(it.next(1).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(it, set.end().unwrap());
    }
}

#[test]
fn test_multi_step_failure_keeps_last_position() {
    let set = numbered(4);
    let mut it = set.iter_at(2).unwrap();
    assert!(it.previous(3).is_err());
    assert_eq!(it.id(), ElementId(0));
    assert_eq!(it.vector().coords(), &[0.0]);
}

#[test]
fn test_empty_set_has_no_cursors() {
    let set = VectorSet::with_context(Context::silent());
    assert!(set.begin().is_none());
    assert!(set.end().is_none());
    assert!(set.iter_at(0).is_none());
}

#[test]
fn test_iter_at_uses_physical_slot() {
    let mut set = numbered(5);
    set.remove_at(0).unwrap();
    set.remove_at(0).unwrap();
    let it = set.iter_at(0).unwrap();
    assert_eq!(it.id(), ElementId(2));
    assert!(it.is_begin());
    assert!(set.iter_at(3).is_none());
}

#[test]
fn test_clones_are_independent() {
    let set = numbered(3);
    let a = set.begin().unwrap();
    let mut b = a.clone();
    b.next(2).unwrap();
    assert_eq!(a.id(), ElementId(0));
    assert_eq!(b.id(), ElementId(2));
    assert_ne!(a, b);
}

#[test]
fn test_fresh_cursors_after_mutation() {
    let mut set = numbered(3);
    let before = set.begin().unwrap().get_next(1).vector_copy();
    assert_eq!(before.coords(), &[1.0]);

    set.remove_at(1).unwrap();
    let after = set.begin().unwrap().get_next(1);
    assert_eq!(after.id(), ElementId(2));
    assert_eq!(after.vector().coords(), &[2.0]);
}

#[test]
fn test_control_block_is_shared_view() {
    let set = numbered(3);
    let control = set.control();
    let it = set.end().unwrap();
    assert_eq!(control.last(), Some(it.id()));
    assert!(control.is_last(it.id()));
    assert!(std::ptr::eq(it.set(), &set));
}

#[test]
fn test_vector_into_fills_caller_buffer() {
    let set = numbered(2);
    let it = set.end().unwrap();
    let mut out = vec_of(&[42.0]);
    it.vector_into(&mut out).unwrap();
    assert_eq!(out.coords(), &[1.0]);

    let mut wide = vec_of(&[0.0, 0.0]);
    assert_eq!(
        it.vector_into(&mut wide).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}
