use super::*;

#[test]
fn progress_clamps_and_rejects_nan() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(1.5).get(), 1.0);
    assert_eq!(Progress::new(0.25).get(), 0.25);
    assert_eq!(Progress::new(f64::NAN), Progress::HIDDEN);
    assert_eq!(Progress::from(f64::INFINITY), Progress::REVEALED);
}

#[test]
fn progress_deserializes_through_clamp() {
    let p: Progress = serde_json::from_str("2.0").unwrap();
    assert_eq!(p, Progress::REVEALED);
    assert_eq!(serde_json::to_string(&Progress::new(0.5)).unwrap(), "0.5");
}

#[test]
fn geometry_from_rect_uses_top_edge() {
    let rect = Rect::new(10.0, 320.0, 400.0, 120.0);
    let g = ViewportGeometry::from_rect(rect, 900.0);
    assert_eq!(g.element_top, 120.0);
    assert_eq!(g.viewport_height, 900.0);
}

#[test]
fn css_matches_inline_style_format() {
    assert_eq!(LetterTransform::HIDDEN.to_css(), "translate(0%, 100%)");
    assert_eq!(LetterTransform::REVEALED.to_css(), "translate(0%, 0%)");
    assert_eq!(
        LetterTransform::from_eased(0.875).to_css(),
        "translate(0%, 12.5%)"
    );
}

#[test]
fn from_eased_never_goes_negative() {
    assert_eq!(LetterTransform::from_eased(1.0), LetterTransform::REVEALED);
    assert_eq!(LetterTransform::from_eased(1.2).y_pct, 0.0);
    assert_eq!(LetterTransform::from_eased(f64::NAN).y_pct, 0.0);
    assert!(LetterTransform::from_eased(1.0).y_pct.is_sign_positive());
}

#[test]
fn affine_translates_by_letter_footprint() {
    let t = LetterTransform::from_eased(0.5);
    let a = t.to_affine(Size::new(80.0, 200.0));
    assert_eq!(a.translation(), Vec2::new(0.0, 100.0));
}
