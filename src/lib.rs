//! Scroll-progress driven letter reveal.
//!
//! A headline reveals letter by letter as its container scrolls through the
//! viewport. The crate covers the computation behind that effect and leaves
//! drawing to the host:
//!
//! 1. **Sample**: host geometry (`element_top`, `viewport_height`) becomes a
//!    [`Progress`] in `[0, 1]` through a [`RevealWindow`]. A [`ScrollSampler`]
//!    coalesces scroll notifications so at most one sample is computed per frame.
//! 2. **Stagger**: [`Stagger`] maps progress and a letter index to a
//!    [`LetterTransform`] (a `translate(x%, y%)` offset), eased with [`Ease`].
//! 3. **Apply**: [`RevealText::frame`] returns every letter with its transform
//!    and CSS string, ready for the host to apply.
//!
//! Per-frame computation is pure and never fails: inputs are clamped and no
//! path produces NaN. Only construction and config loading return
//! [`RevealResult`].
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod reveal;
mod scroll;

pub use animation::ease::Ease;
pub use animation::stagger::{DEFAULT_LETTER_DURATION, DEFAULT_TOTAL_LETTERS, Stagger};
pub use foundation::core::{
    Affine, LetterTransform, Progress, Rect, Size, Vec2, ViewportGeometry,
};
pub use foundation::error::{RevealError, RevealResult};
pub use reveal::config::RevealConfig;
pub use reveal::text::{HEADLINE, Letter, RevealText, RevealedLetter};
pub use scroll::sampler::{FrameToken, ListenerId, SamplerStats, ScrollHost, ScrollSampler};
pub use scroll::sim::SimHost;
pub use scroll::window::RevealWindow;
