//! Vector Tests
//!
//! Construction, validated mutation, norms and arithmetic.

use crate::*;
use vecset::ErrorKind;

#[test]
fn test_create_validates_input() {
    let v = Vector::create(3, &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(v.dim(), 3);
    assert_eq!(v.coords(), &[1.0, 2.0, 3.0]);

    let cases: Vec<(usize, Vec<f64>, ErrorKind)> = vec![
        (0, vec![1.0], ErrorKind::InvalidArgument),
        (2, vec![], ErrorKind::NullReference),
        (2, vec![1.0], ErrorKind::MismatchingDimensions),
        (2, vec![1.0, f64::NAN], ErrorKind::NotANumber),
        (2, vec![f64::INFINITY, 1.0], ErrorKind::NotANumber),
        (1, vec![f64::NEG_INFINITY], ErrorKind::NotANumber),
    ];
    for (dim, coords, kind) in cases {
        let err = Vector::create_in(&Context::silent(), dim, &coords).unwrap_err();
        assert_eq!(err.kind(), kind, "dim {} coords {:?}", dim, coords);
    }
}

#[test]
fn test_norm_known_values() {
    let v = vec_of(&[3.0, -4.0]);
    assert_eq!(v.norm(Norm::L1), 7.0);
    assert_eq!(v.norm(Norm::L2), 5.0);
    assert_eq!(v.norm(Norm::Chebyshev), 4.0);
    assert!(v.norm(Norm::Unspecified).is_nan());
    assert_eq!(
        v.try_norm(Norm::Unspecified).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_norm_overflow_is_nan() {
    let v = vec_of(&[1e300, 1e300]);
    assert!(v.norm(Norm::L2).is_nan());
    assert_eq!(v.norm(Norm::Chebyshev), 1e300);
}

#[test]
fn test_dot_product() {
    assert_eq!(Vector::dot(&vec_of(&[1.0, 2.0, 3.0]), &vec_of(&[4.0, 5.0, 6.0])), 32.0);
    assert!(Vector::dot(&vec_of(&[1.0, 2.0]), &vec_of(&[1.0])).is_nan());
    assert!(Vector::dot(&vec_of(&[1e200]), &vec_of(&[1e200])).is_nan());
}

#[test]
fn test_set_coordinate() {
    let mut v = vec_of(&[1.0, 2.0]);
    v.set_coordinate(1, 5.0).unwrap();
    assert_eq!(v.coordinate(1).unwrap(), 5.0);
    assert_eq!(v.set_coordinate(2, 1.0).unwrap_err().kind(), ErrorKind::IndexOutOfBound);
    assert_eq!(v.set_coordinate(0, f64::NAN).unwrap_err().kind(), ErrorKind::NotANumber);
    assert_eq!(v.coordinate(9).unwrap_err().kind(), ErrorKind::IndexOutOfBound);
    assert_eq!(v.coords(), &[1.0, 5.0]);
}

#[test]
fn test_scale() {
    let mut v = vec_of(&[1.0, -2.0]);
    v.scale(1.0).unwrap();
    assert_eq!(v.coords(), &[1.0, -2.0]);
    v.scale(-3.0).unwrap();
    assert_eq!(v.coords(), &[-3.0, 6.0]);

    assert_eq!(v.scale(f64::NAN).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(v.coords(), &[-3.0, 6.0]);
}

#[test]
fn test_scale_overflow_leaves_vector_unchanged() {
    let mut v = vec_of(&[1.0, f64::MAX]);
    assert_eq!(v.scale(4.0).unwrap_err().kind(), ErrorKind::InfinityOverflow);
    assert_eq!(v.coords(), &[1.0, f64::MAX]);
}

#[test]
fn test_increment_decrement_all_or_nothing() {
    let mut v = vec_of(&[1.0, 2.0]);
    v.increment(&vec_of(&[0.5, 0.5])).unwrap();
    assert_eq!(v.coords(), &[1.5, 2.5]);
    v.decrement(&vec_of(&[1.5, 0.5])).unwrap();
    assert_eq!(v.coords(), &[0.0, 2.0]);

    let mut big = vec_of(&[1.0, f64::MAX]);
    let err = big.increment(&vec_of(&[1.0, f64::MAX])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InfinityOverflow);
    assert_eq!(big.coords(), &[1.0, f64::MAX]);

    let err = v.decrement(&vec_of(&[1.0])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MismatchingDimensions);
}

#[test]
fn test_apply_function_all_or_nothing() {
    let mut v = vec_of(&[1.0, 4.0, 9.0]);
    v.apply_function(f64::sqrt).unwrap();
    assert_eq!(v.coords(), &[1.0, 2.0, 3.0]);

    let mut w = vec_of(&[1.0, 0.0]);
    let err = w.apply_function(|x| 1.0 / x).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InfinityOverflow);
    assert_eq!(w.coords(), &[1.0, 0.0]);
}

#[test]
fn test_for_each_visits_in_order() {
    let v = vec_of(&[3.0, 1.0, 2.0]);
    let mut seen = Vec::new();
    v.for_each(|x| seen.push(x));
    assert_eq!(seen, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_add_subtract_build_new_vectors() {
    let a = vec_of(&[1.0, 2.0]);
    let b = vec_of(&[3.0, 5.0]);
    assert_eq!(Vector::add(&a, &b).unwrap().coords(), &[4.0, 7.0]);
    assert_eq!(Vector::subtract(&a, &b).unwrap().coords(), &[-2.0, -3.0]);
    assert_eq!(a.coords(), &[1.0, 2.0]);

    assert!(Vector::add(&a, &vec_of(&[1.0])).is_err());
    let huge = vec_of(&[f64::MAX, 0.0]);
    assert_eq!(
        Vector::add(&huge, &huge).unwrap_err().kind(),
        ErrorKind::InfinityOverflow
    );
}

#[test]
fn test_equals_within_tolerance() {
    let a = vec_of(&[1.0, 1.0]);
    let b = vec_of(&[1.05, 1.0]);
    assert!(Vector::equals(&a, &b, Norm::L2, 0.1));
    assert!(!Vector::equals(&a, &b, Norm::L2, 0.05));
    assert!(!Vector::equals(&a, &a, Norm::L2, 0.0));
    assert!(!Vector::equals(&a, &b, Norm::Unspecified, 0.1));
    assert!(!Vector::equals(&a, &b, Norm::L2, -0.1));
    assert!(!Vector::equals(&a, &vec_of(&[1.0]), Norm::L2, 10.0));
}

#[test]
fn test_clone_is_independent() {
    let v = vec_of(&[1.0, 2.0]);
    let mut c = v.clone();
    c.set_coordinate(0, 9.0).unwrap();
    assert_eq!(v.coords(), &[1.0, 2.0]);
    assert!(Vector::equals(&v, &v.clone(), Norm::L2, f64::EPSILON));
}

#[test]
fn test_copy_from_and_set_data() {
    let mut dst = vec_of(&[0.0, 0.0]);
    dst.copy_from(&vec_of(&[4.0, 5.0])).unwrap();
    assert_eq!(dst.coords(), &[4.0, 5.0]);

    let err = dst.copy_from(&vec_of(&[1.0])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MismatchingDimensions);

    let err = dst.set_data(&[1.0, f64::NAN]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotANumber);
    assert_eq!(dst.coords(), &[4.0, 5.0]);
}

#[test]
fn test_custom_validator_tightens_domain() {
    let ctx = Context::builder()
        .silent()
        .validator(|x: f64| x.abs() <= 100.0)
        .build();
    assert!(Vector::create_in(&ctx, 2, &[1.0, 100.0]).is_ok());
    let err = Vector::create_in(&ctx, 2, &[1.0, 101.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotANumber);

    let mut v = Vector::create_in(&ctx, 1, &[60.0]).unwrap();
    assert_eq!(v.scale(2.0).unwrap_err().kind(), ErrorKind::InfinityOverflow);
    let sum = Vector::add(&v, &v);
    assert!(sum.is_err());
}
