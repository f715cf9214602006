use std::path::Path;

use crate::animation::ease::Ease;
use crate::animation::stagger::{DEFAULT_LETTER_DURATION, validate_letter_duration};
use crate::foundation::error::{RevealError, RevealResult};
use crate::reveal::text::{HEADLINE, RevealText};
use crate::scroll::window::RevealWindow;

/// Serializable description of one reveal: the text, its scroll window and timing.
///
/// Every field has a default, so `{}` is the stock headline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub lines: Vec<String>,
    pub window: RevealWindow,
    pub letter_duration: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            lines: HEADLINE.iter().map(|s| (*s).to_owned()).collect(),
            window: RevealWindow::default(),
            letter_duration: DEFAULT_LETTER_DURATION,
            ease: Ease::OutCubic,
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> RevealResult<()> {
        self.window.validate()?;
        validate_letter_duration(self.letter_duration)
    }

    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| RevealError::serde(format!("parse reveal config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    #[tracing::instrument]
    pub fn from_json_path(path: &Path) -> RevealResult<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| RevealError::config(format!("read '{}': {e}", path.display())))?;
        let config = Self::from_json_str(&s)?;
        tracing::debug!(lines = config.lines.len(), "loaded reveal config");
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> RevealResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RevealError::serde(e.to_string()))
    }

    pub fn text(&self) -> RevealResult<RevealText> {
        RevealText::from_lines(&self.lines, self.letter_duration, self.ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/config.rs"]
mod tests;
