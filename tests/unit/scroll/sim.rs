use super::*;

#[test]
fn cancelled_frames_leave_the_queue() {
    let mut host = SimHost::new(ViewportGeometry::new(0.0, 100.0));
    let a = host.request_frame();
    let b = host.request_frame();
    assert_ne!(a, b);
    host.cancel_frame(a);
    assert_eq!(host.drain_frames(), vec![b]);
    assert_eq!(host.pending_frames(), 0);
}

#[test]
fn scroll_by_moves_element_up() {
    let mut host = SimHost::new(ViewportGeometry::new(500.0, 1000.0));
    host.scroll_by(120.0);
    assert_eq!(host.geometry().element_top, 380.0);
    host.scroll_by(-20.0);
    assert_eq!(host.geometry().element_top, 400.0);
}

#[test]
fn listeners_are_tracked() {
    let mut host = SimHost::new(ViewportGeometry::new(0.0, 100.0));
    let id = host.add_scroll_listener();
    assert_eq!(host.listener_count(), 1);
    host.remove_scroll_listener(id);
    assert_eq!(host.listener_count(), 0);
}
