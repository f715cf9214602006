use std::collections::BTreeSet;

use crate::foundation::core::ViewportGeometry;
use crate::scroll::sampler::{FrameToken, ListenerId, ScrollHost};

/// Deterministic in-memory host: a movable element, a frame queue and a
/// listener registry.
#[derive(Debug, Clone)]
pub struct SimHost {
    geometry: ViewportGeometry,
    frames: Vec<FrameToken>,
    listeners: BTreeSet<ListenerId>,
    next_token: u64,
    next_listener: u64,
}

impl SimHost {
    pub fn new(geometry: ViewportGeometry) -> Self {
        Self {
            geometry,
            frames: Vec::new(),
            listeners: BTreeSet::new(),
            next_token: 1,
            next_listener: 1,
        }
    }

    pub fn set_element_top(&mut self, element_top: f64) {
        self.geometry.element_top = element_top;
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.geometry.viewport_height = viewport_height;
    }

    /// Scrolls the page down by `dy` px, which moves the element up.
    pub fn scroll_by(&mut self, dy: f64) {
        self.geometry.element_top -= dy;
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Takes every scheduled callback, as a display refresh would.
    pub fn drain_frames(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.frames)
    }
}

impl ScrollHost for SimHost {
    fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        self.frames.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.frames.retain(|t| *t != token);
    }

    fn add_scroll_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id);
        id
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sim.rs"]
mod tests;
