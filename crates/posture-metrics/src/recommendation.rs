use serde::Serialize;
use std::fmt;

/// Severity tier of a posture score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Critical,
    NeedsImprovement,
    Fair,
    Good,
}

impl Recommendation {
    /// Tiers, checked from the highest score down:
    /// `>= 80` good, `>= 60` fair, `>= 40` needs improvement, otherwise critical.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Recommendation::Good
        } else if score >= 60.0 {
            Recommendation::Fair
        } else if score >= 40.0 {
            Recommendation::NeedsImprovement
        } else {
            Recommendation::Critical
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Recommendation::Good => "Good posture. Maintain it with regular exercise.",
            Recommendation::Fair => "Fair posture. Pay attention to how you sit and stand.",
            Recommendation::NeedsImprovement => {
                "Posture needs improvement. A consultation with a physiotherapist is recommended."
            }
            Recommendation::Critical => {
                "Critical posture. Consult a specialist as soon as possible."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Guidance text for a posture score.
pub fn recommend(score: f64) -> &'static str {
    Recommendation::from_score(score).message()
}
