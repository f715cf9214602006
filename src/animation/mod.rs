//! Easing curves and the per-letter stagger.

pub(crate) mod ease;
pub(crate) mod stagger;
