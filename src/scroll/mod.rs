//! Geometry to progress, sampled at most once per frame.

pub(crate) mod sampler;
pub(crate) mod sim;
pub(crate) mod window;
