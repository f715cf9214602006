use crate::animation::ease::Ease;
use crate::foundation::core::{LetterTransform, Progress};
use crate::foundation::error::{RevealError, RevealResult};

/// Letter count of the stock two-line headline.
pub const DEFAULT_TOTAL_LETTERS: usize = 15;
/// Share of the global progress range each letter's own reveal spans.
pub const DEFAULT_LETTER_DURATION: f64 = 0.12;

/// Maps global scroll progress to per-letter reveal transforms.
///
/// Letter `i` of `n` starts revealing at `threshold = i / n` and finishes
/// `letter_duration` later. Just below the threshold there is a band of width
/// `letter_duration` where the letter takes `1 - (threshold - p) / d`, which is
/// what a reverse scroll passes through. The three cases are kept exactly as
/// they are; the band is not the mirror of the forward ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    total_letters: usize,
    letter_duration: f64,
    ease: Ease,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            total_letters: DEFAULT_TOTAL_LETTERS,
            letter_duration: DEFAULT_LETTER_DURATION,
            ease: Ease::OutCubic,
        }
    }
}

impl Stagger {
    pub fn new(total_letters: usize, letter_duration: f64) -> RevealResult<Self> {
        validate_letter_duration(letter_duration)?;
        Ok(Self {
            total_letters,
            letter_duration,
            ease: Ease::OutCubic,
        })
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_total_letters(mut self, total_letters: usize) -> Self {
        self.total_letters = total_letters;
        self
    }

    pub fn total_letters(&self) -> usize {
        self.total_letters
    }

    pub fn letter_duration(&self) -> f64 {
        self.letter_duration
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Global progress at which `index` starts revealing; `None` when out of range.
    pub fn threshold(&self, index: usize) -> Option<f64> {
        if index >= self.total_letters {
            return None;
        }
        Some(index as f64 / self.total_letters as f64)
    }

    /// Un-eased local progress of one letter, in `[0, 1]`.
    pub fn local_progress(&self, progress: impl Into<Progress>, index: usize) -> f64 {
        let Some(threshold) = self.threshold(index) else {
            return 0.0;
        };
        let p = progress.into().get();
        let d = self.letter_duration;

        let local = if p >= threshold {
            (p - threshold) / d
        } else if p < threshold - d {
            0.0
        } else {
            1.0 - (threshold - p) / d
        };
        local.clamp(0.0, 1.0)
    }

    pub fn eased(&self, progress: impl Into<Progress>, index: usize) -> f64 {
        self.ease.apply(self.local_progress(progress, index))
    }

    pub fn letter_transform(&self, progress: impl Into<Progress>, index: usize) -> LetterTransform {
        if index >= self.total_letters {
            return LetterTransform::HIDDEN;
        }
        LetterTransform::from_eased(self.eased(progress, index))
    }

    /// Transforms for every letter, in index order. Empty when there are no letters.
    pub fn transforms(&self, progress: impl Into<Progress>) -> impl Iterator<Item = LetterTransform> {
        let this = *self;
        let progress = progress.into();
        (0..this.total_letters).map(move |i| this.letter_transform(progress, i))
    }
}

pub(crate) fn validate_letter_duration(letter_duration: f64) -> RevealResult<()> {
    if !letter_duration.is_finite() || letter_duration <= 0.0 {
        return Err(RevealError::validation(format!(
            "letter duration must be finite and > 0, got {letter_duration}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
