use super::*;

fn progress(top: f64, viewport: f64) -> f64 {
    RevealWindow::default()
        .progress(ViewportGeometry::new(top, viewport))
        .get()
}

#[test]
fn default_bounds_are_eighty_and_twenty_percent() {
    assert_eq!(RevealWindow::default().bounds(1000.0), (800.0, 200.0));
}

#[test]
fn third_of_the_way_through() {
    assert!((progress(600.0, 1000.0) - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn below_window_is_hidden() {
    for top in [800.0, 801.0, 5_000.0, f64::INFINITY] {
        assert_eq!(progress(top, 1000.0), 0.0, "top {top}");
    }
}

#[test]
fn above_window_is_revealed() {
    for top in [200.0, 199.0, 0.0, -4_000.0, f64::NEG_INFINITY] {
        assert_eq!(progress(top, 1000.0), 1.0, "top {top}");
    }
}

#[test]
fn non_increasing_in_element_top() {
    let mut prev = progress(-100.0, 900.0);
    let mut top = -100.0;
    while top < 1_000.0 {
        top += 7.5;
        let p = progress(top, 900.0);
        assert!(p <= prev, "top {top}");
        prev = p;
    }
}

#[test]
fn scrolling_back_lowers_progress() {
    let at_500 = progress(500.0, 1000.0);
    let at_700 = progress(700.0, 1000.0);
    assert!(at_700 <= at_500);
    assert!((at_500 - 0.5).abs() < 1e-12);
    // Same formula both ways: returning to 500 gives the same value.
    assert_eq!(progress(500.0, 1000.0), at_500);
}

#[test]
fn zero_viewport_resolves_without_nan() {
    assert_eq!(progress(0.0, 0.0), 1.0);
    assert_eq!(progress(-1.0, 0.0), 1.0);
    assert_eq!(progress(1.0, 0.0), 0.0);
    assert_eq!(progress(f64::NAN, 1000.0), 0.0);
    assert_eq!(progress(100.0, f64::NAN), 0.0);
}

#[test]
fn custom_window_is_validated() {
    assert!(RevealWindow::new(0.9, 0.1).is_ok());
    assert!(RevealWindow::new(0.2, 0.8).is_err());
    assert!(RevealWindow::new(0.5, 0.5).is_err());
    assert!(RevealWindow::new(1.5, 0.1).is_err());
    assert!(RevealWindow::new(0.9, -0.1).is_err());
    assert!(RevealWindow::new(f64::NAN, 0.1).is_err());
}

#[test]
fn custom_window_moves_the_ramp() {
    let w = RevealWindow::new(1.0, 0.0).unwrap();
    let p = w.progress(ViewportGeometry::new(250.0, 1000.0)).get();
    assert!((p - 0.75).abs() < 1e-12);
}

#[test]
fn partial_json_keeps_defaults() {
    let w: RevealWindow = serde_json::from_str(r#"{"end_fraction": 0.1}"#).unwrap();
    assert_eq!(w.start_fraction, 0.8);
    assert_eq!(w.end_fraction, 0.1);
}
