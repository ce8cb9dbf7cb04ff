#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new_stores_coordinates() {
    let p = Point::new(3.5, -2.0);
    assert_eq!(p.x, 3.5);
    assert_eq!(p.y, -2.0);
}

#[test]
fn point_is_copy_and_comparable() {
    let a = Point::new(1.0, 2.0);
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, Point::new(1.0, 3.0));
}

// =============================================================
// StrokeSession
// =============================================================

#[test]
fn default_is_idle() {
    assert_eq!(StrokeSession::default(), StrokeSession::Idle);
}

#[test]
fn idle_is_not_active_and_has_no_point() {
    let s = StrokeSession::Idle;
    assert!(!s.is_active());
    assert_eq!(s.last_point(), None);
}

#[test]
fn active_is_active_and_carries_its_point() {
    let s = StrokeSession::Active { last: Point::new(7.0, 9.0) };
    assert!(s.is_active());
    assert_eq!(s.last_point(), Some(Point::new(7.0, 9.0)));
}

#[test]
fn point_exists_iff_active() {
    for s in [
        StrokeSession::Idle,
        StrokeSession::Active { last: Point::new(0.0, 0.0) },
    ] {
        assert_eq!(s.is_active(), s.last_point().is_some());
    }
}
