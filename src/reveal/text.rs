use crate::animation::ease::Ease;
use crate::animation::stagger::Stagger;
use crate::foundation::core::{LetterTransform, Progress};
use crate::foundation::error::RevealResult;

/// Stock headline, two lines, 15 letters.
pub const HEADLINE: [&str; 2] = ["MODERN", "TECH STACK"];

/// One animated glyph. `index` runs across all lines in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Letter {
    pub ch: char,
    pub line: usize,
    pub index: usize,
}

/// A letter with its transform for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealedLetter {
    #[serde(flatten)]
    pub letter: Letter,
    pub transform: LetterTransform,
    pub css: String,
}

/// Multi-line text laid out for a staggered reveal.
///
/// Whitespace separates words visually but is not animated, so it takes no
/// index; the stagger's letter count is derived from the text.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealText {
    lines: Vec<String>,
    letters: Vec<Letter>,
    stagger: Stagger,
}

impl RevealText {
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        letter_duration: f64,
        ease: Ease,
    ) -> RevealResult<Self> {
        let (lines, letters) = layout(lines);
        let stagger = Stagger::new(letters.len(), letter_duration)?.with_ease(ease);
        Ok(Self {
            lines,
            letters,
            stagger,
        })
    }

    pub fn headline() -> Self {
        let (lines, letters) = layout(&HEADLINE);
        let stagger = Stagger::default().with_total_letters(letters.len());
        Self {
            lines,
            letters,
            stagger,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn total_letters(&self) -> usize {
        self.letters.len()
    }

    pub fn stagger(&self) -> Stagger {
        self.stagger
    }

    #[tracing::instrument(skip(self), fields(letters = self.letters.len()))]
    pub fn frame(&self, progress: Progress) -> Vec<RevealedLetter> {
        self.letters
            .iter()
            .map(|&letter| {
                let transform = self.stagger.letter_transform(progress, letter.index);
                RevealedLetter {
                    letter,
                    transform,
                    css: transform.to_css(),
                }
            })
            .collect()
    }
}

fn layout<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, Vec<Letter>) {
    let mut letters = Vec::new();
    for (line, text) in lines.iter().enumerate() {
        for ch in text.as_ref().chars().filter(|c| !c.is_whitespace()) {
            let index = letters.len();
            letters.push(Letter { ch, line, index });
        }
    }
    let lines = lines.iter().map(|s| s.as_ref().to_owned()).collect();
    (lines, letters)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/text.rs"]
mod tests;
