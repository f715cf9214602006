use crate::foundation::core::{Progress, ViewportGeometry};
use crate::foundation::error::{RevealError, RevealResult};

/// The slice of the viewport an element travels through while it reveals.
///
/// Fractions are of the viewport height, measured from its top. Progress is 0
/// while the element top is below `start_fraction` and reaches 1 once the top
/// passes `end_fraction`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealWindow {
    pub start_fraction: f64,
    pub end_fraction: f64,
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self {
            start_fraction: 0.8,
            end_fraction: 0.2,
        }
    }
}

impl RevealWindow {
    pub fn new(start_fraction: f64, end_fraction: f64) -> RevealResult<Self> {
        let window = Self {
            start_fraction,
            end_fraction,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> RevealResult<()> {
        for (name, v) in [("start", self.start_fraction), ("end", self.end_fraction)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(RevealError::validation(format!(
                    "reveal window {name} fraction must be within [0, 1], got {v}"
                )));
            }
        }
        if self.start_fraction <= self.end_fraction {
            return Err(RevealError::validation(format!(
                "reveal window start ({}) must lie below its end ({})",
                self.start_fraction, self.end_fraction
            )));
        }
        Ok(())
    }

    /// `(reveal_start, reveal_end)` in px from the viewport top.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        (
            viewport_height * self.start_fraction,
            viewport_height * self.end_fraction,
        )
    }

    pub fn progress(&self, geometry: ViewportGeometry) -> Progress {
        let (start, end) = self.bounds(geometry.viewport_height);
        let top = geometry.element_top;

        if top.is_nan() {
            return Progress::HIDDEN;
        }
        // Checked before the division: a collapsed window (zero viewport) has start == end.
        if top <= end {
            return Progress::REVEALED;
        }
        if top >= start {
            return Progress::HIDDEN;
        }
        Progress::new((start - top) / (start - end))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/window.rs"]
mod tests;
