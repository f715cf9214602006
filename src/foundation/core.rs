pub use kurbo::{Affine, Rect, Size, Vec2};

/// Tracked element position relative to the viewport, in px.
///
/// `element_top` is measured from the viewport top and goes negative once the
/// element has scrolled above it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportGeometry {
    pub element_top: f64,
    pub viewport_height: f64,
}

impl ViewportGeometry {
    pub fn new(element_top: f64, viewport_height: f64) -> Self {
        Self {
            element_top,
            viewport_height,
        }
    }

    /// Geometry from an element bounding box in viewport coordinates (y down).
    pub fn from_rect(element: Rect, viewport_height: f64) -> Self {
        Self::new(element.min_y(), viewport_height)
    }
}

/// Normalized scroll progress, always within `[0, 1]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const HIDDEN: Self = Self(0.0);
    pub const REVEALED: Self = Self(1.0);

    /// Clamps into `[0, 1]`; NaN becomes `0`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::HIDDEN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

/// Per-letter reveal offset, as a percentage of the letter's own box.
///
/// `y_pct == 100` keeps the letter fully below its footprint, `0` puts it in place.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LetterTransform {
    pub x_pct: f64,
    pub y_pct: f64,
}

impl LetterTransform {
    pub const HIDDEN: Self = Self {
        x_pct: 0.0,
        y_pct: 100.0,
    };
    pub const REVEALED: Self = Self {
        x_pct: 0.0,
        y_pct: 0.0,
    };

    /// Transform for an eased reveal amount (`0` hidden, `1` revealed).
    pub fn from_eased(eased: f64) -> Self {
        let y = 100.0 * (1.0 - eased);
        // `!(y > 0)` also folds NaN and -0.0 into a clean zero.
        let y_pct = if y > 0.0 { y } else { 0.0 };
        Self { x_pct: 0.0, y_pct }
    }

    /// CSS `transform` value, e.g. `translate(0%, 12.5%)`.
    pub fn to_css(self) -> String {
        format!("translate({}%, {}%)", self.x_pct, self.y_pct)
    }

    /// Pixel translation for a letter box of `size`.
    pub fn to_affine(self, size: Size) -> Affine {
        Affine::translate(Vec2::new(
            size.width * self.x_pct / 100.0,
            size.height * self.y_pct / 100.0,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
