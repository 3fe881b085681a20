//! Tests for LayoutBox adjacency, merging and accessors.

use pdfgrid_core::{
    HasRect, LayoutBox, MergeParams, Rectangle, TEXT_LINE_HORIZONTAL, adjacency_tolerance,
};

fn fragment(x1: f64, x2: f64, text: &str, barycenter_y: f64) -> LayoutBox {
    LayoutBox::new(Rectangle::new(x1, 100.0, x2, 110.0))
        .with_text(text)
        .with_barycenter_y(barycenter_y)
}

// ============================================================================
// is_connected_to
// ============================================================================

#[test]
fn test_gap_of_point_four_connects() {
    let a = fragment(0.0, 10.0, "foo", 105.0);
    let b = fragment(10.4, 20.0, "bar", 105.0);
    assert!(a.is_connected_to(&b));
}

#[test]
fn test_gap_of_point_six_does_not_connect() {
    let a = fragment(0.0, 10.0, "foo", 105.0);
    let b = fragment(10.6, 20.0, "bar", 105.0);
    assert!(!a.is_connected_to(&b));
}

#[test]
fn test_overlap_within_tolerance_connects() {
    let a = fragment(0.0, 10.0, "foo", 105.0);
    let b = fragment(9.7, 20.0, "bar", 105.0);
    assert!(a.is_connected_to(&b));
}

#[test]
fn test_different_barycenter_does_not_connect() {
    let a = fragment(0.0, 10.0, "foo", 105.0);
    let b = fragment(10.0, 20.0, "bar", 105.1);
    assert!(!a.is_connected_to(&b));
}

#[test]
fn test_whitespace_only_never_connects() {
    let a = fragment(0.0, 10.0, "  ", 105.0);
    let b = fragment(10.0, 20.0, "bar", 105.0);
    assert!(!a.is_connected_to(&b));
    assert!(!b.is_connected_to(&a));
    let empty = fragment(10.0, 20.0, "", 105.0);
    assert!(!fragment(0.0, 10.0, "foo", 105.0).is_connected_to(&empty));
}

#[test]
fn test_open_paren_widening_is_asymmetric() {
    let a = fragment(0.0, 10.0, "foo(", 105.0);
    let b = fragment(15.0, 20.0, "bar", 105.0);
    assert!(a.is_connected_to(&b));
    assert!(!b.is_connected_to(&a));

    // Same geometry, but the widening follows the left box's text only.
    let plain = fragment(0.0, 10.0, "foo", 105.0);
    let paren_after = fragment(15.0, 20.0, "bar(", 105.0);
    assert!(!plain.is_connected_to(&paren_after));
}

#[test]
fn test_open_paren_gap_of_ten_does_not_connect() {
    let a = fragment(0.0, 10.0, "foo(", 105.0);
    let b = fragment(20.0, 30.0, "bar", 105.0);
    assert!(!a.is_connected_to(&b));
}

#[test]
fn test_adjacency_tolerance_policy() {
    assert_eq!(adjacency_tolerance(&fragment(0.0, 1.0, "foo(", 0.0)), 10.0);
    assert_eq!(adjacency_tolerance(&fragment(0.0, 1.0, "foo", 0.0)), 0.5);
}

#[test]
fn test_custom_merge_params() {
    let params = MergeParams {
        tolerance: 2.0,
        ..MergeParams::default()
    };
    let a = fragment(0.0, 10.0, "foo", 105.0);
    let b = fragment(11.5, 20.0, "bar", 105.0);
    assert!(!a.is_connected_to(&b));
    assert!(a.is_connected_to_with(&b, &params));
}

// ============================================================================
// extend
// ============================================================================

#[test]
fn test_extend_merges_text_and_right_edge() {
    let mut a = fragment(0.0, 10.0, "foo", 105.0).with_classname(TEXT_LINE_HORIZONTAL);
    let b = fragment(10.2, 25.0, "bar", 105.0);
    assert!(a.is_connected_to(&b));
    a.extend(&b);
    assert_eq!(a.text, "foobar");
    assert_eq!(a.rect(), Rectangle::new(0.0, 100.0, 25.0, 110.0));
    assert_eq!(a.classname(), Some(TEXT_LINE_HORIZONTAL));
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_accessors() {
    let b = LayoutBox::new(Rectangle::new(2.0, 4.0, 8.0, 16.0));
    assert_eq!(b.left(), 2.0);
    assert_eq!(b.top(), 4.0);
    assert_eq!(b.right(), 8.0);
    assert_eq!(b.bottom(), 16.0);
    assert_eq!(b.center_x(), 5.0);
    assert_eq!(b.center_y(), 10.0);
    assert_eq!(b.width(), 6.0);
    assert_eq!(b.height(), 12.0);
}

#[test]
fn test_malformed_box_has_negative_extent() {
    let b = LayoutBox::new(Rectangle::new(8.0, 16.0, 2.0, 4.0));
    assert_eq!(b.width(), -6.0);
    assert_eq!(b.height(), -12.0);
    assert!(!b.is_empty());
}

#[test]
fn test_clone_keeps_metadata() {
    let b = fragment(0.0, 1.0, "x", 3.0)
        .with_classname("LTChar")
        .with_barycenter((0.5, 3.0));
    let copy = b.clone();
    assert_eq!(copy, b);
    assert_eq!(copy.barycenter, Some((0.5, 3.0)));
}
