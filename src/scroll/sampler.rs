use crate::foundation::core::{Progress, ViewportGeometry};
use crate::scroll::window::RevealWindow;

/// Handle for a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(pub u64);

/// Handle for a registered scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// The rendering environment a sampler is attached to.
///
/// The host owns geometry and the frame clock. It delivers scroll
/// notifications by calling [`ScrollSampler::on_scroll`] and fires scheduled
/// frames through [`ScrollSampler::on_frame`].
pub trait ScrollHost {
    fn geometry(&self) -> ViewportGeometry;
    fn request_frame(&mut self) -> FrameToken;
    fn cancel_frame(&mut self, token: FrameToken);
    fn add_scroll_listener(&mut self) -> ListenerId;
    fn remove_scroll_listener(&mut self, id: ListenerId);
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn geometry(&self) -> ViewportGeometry {
        (**self).geometry()
    }

    fn request_frame(&mut self) -> FrameToken {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        (**self).cancel_frame(token)
    }

    fn add_scroll_listener(&mut self) -> ListenerId {
        (**self).add_scroll_listener()
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) {
        (**self).remove_scroll_listener(id)
    }
}

/// Counters kept by a sampler over its lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SamplerStats {
    pub scroll_events: u64,
    pub frames_requested: u64,
    pub frames_cancelled: u64,
    pub samples_published: u64,
    pub stale_frames: u64,
}

/// Reduces host geometry to a progress value at most once per frame.
///
/// Attaching registers a scroll listener and publishes an initial sample right
/// away. Each scroll notification replaces the pending frame callback, so
/// there is never more than one outstanding. Detaching (or dropping) cancels
/// that callback and removes the listener.
#[derive(Debug)]
pub struct ScrollSampler<H: ScrollHost> {
    host: H,
    window: RevealWindow,
    listener: Option<ListenerId>,
    pending: Option<FrameToken>,
    progress: Progress,
    stats: SamplerStats,
}

impl<H: ScrollHost> ScrollSampler<H> {
    pub fn attach(mut host: H, window: RevealWindow) -> Self {
        let listener = host.add_scroll_listener();
        let mut sampler = Self {
            host,
            window,
            listener: Some(listener),
            pending: None,
            progress: Progress::HIDDEN,
            stats: SamplerStats::default(),
        };
        let initial = sampler.sample();
        tracing::debug!(?listener, progress = initial.get(), "scroll sampler attached");
        sampler
    }

    /// Scroll notification from the host. Ignored once detached.
    pub fn on_scroll(&mut self) {
        if self.listener.is_none() {
            return;
        }
        self.stats.scroll_events += 1;
        if let Some(token) = self.pending.take() {
            self.host.cancel_frame(token);
            self.stats.frames_cancelled += 1;
        }
        self.pending = Some(self.host.request_frame());
        self.stats.frames_requested += 1;
    }

    /// Frame callback from the host. Returns the newly published progress, or
    /// `None` when `token` is not the pending callback.
    pub fn on_frame(&mut self, token: FrameToken) -> Option<Progress> {
        if self.pending != Some(token) {
            self.stats.stale_frames += 1;
            tracing::debug!(?token, "dropping stale frame callback");
            return None;
        }
        self.pending = None;
        Some(self.sample())
    }

    /// Releases the listener and any pending frame. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if let Some(token) = self.pending.take() {
            self.host.cancel_frame(token);
            self.stats.frames_cancelled += 1;
        }
        if let Some(listener) = self.listener.take() {
            self.host.remove_scroll_listener(listener);
            tracing::debug!(?listener, stats = ?self.stats, "scroll sampler detached");
        }
    }

    /// Last published progress.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn window(&self) -> RevealWindow {
        self.window
    }

    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn sample(&mut self) -> Progress {
        let geometry = self.host.geometry();
        self.progress = self.window.progress(geometry);
        self.stats.samples_published += 1;
        tracing::trace!(
            element_top = geometry.element_top,
            viewport_height = geometry.viewport_height,
            progress = self.progress.get(),
            "scroll sample"
        );
        self.progress
    }
}

impl<H: ScrollHost> Drop for ScrollSampler<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sampler.rs"]
mod tests;
