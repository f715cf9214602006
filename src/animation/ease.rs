/// Easing curve applied to a letter's local progress.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    OutQuad,
    /// `1 - (1 - t)^3`: fast start, slow settle. The reveal default.
    #[default]
    OutCubic,
    OutQuart,
    InOutCubic,
}

impl Ease {
    pub const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::OutQuad,
        Ease::OutCubic,
        Ease::OutQuart,
        Ease::InOutCubic,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t).powi(2),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
