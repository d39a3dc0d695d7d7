use serde::{Deserialize, Serialize};
use std::fmt;

/// Which family of measurements applies to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMode {
    /// Coronal-plane symmetry: shoulders, hips, spine.
    #[serde(rename = "back_front_analysis")]
    FrontalBack,
    /// Sagittal-plane head alignment.
    #[serde(rename = "side_analysis")]
    Lateral,
}

impl AnalysisMode {
    /// Stable name used when results are stored.
    pub fn name(self) -> &'static str {
        match self {
            AnalysisMode::FrontalBack => "back_front_analysis",
            AnalysisMode::Lateral => "side_analysis",
        }
    }

    /// Parse a stored name. Anything else is not a mode.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "back_front_analysis" => Some(AnalysisMode::FrontalBack),
            "side_analysis" => Some(AnalysisMode::Lateral),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Words in a classification label that mark a side view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideMarker {
    Right,
    Left,
}

impl SideMarker {
    pub const ALL: [SideMarker; 2] = [SideMarker::Right, SideMarker::Left];

    /// The token as it appears in detector labels (Indonesian).
    pub fn token(self) -> &'static str {
        match self {
            SideMarker::Right => "Kanan",
            SideMarker::Left => "Kiri",
        }
    }
}

/// Pick the analysis mode for a detector classification label.
///
/// This is a case-sensitive substring test: a label containing any
/// [`SideMarker`] token anywhere is a side view. Everything else, including
/// the empty label, is analysed as a frontal/back view.
pub fn resolve_mode(label: &str) -> AnalysisMode {
    if SideMarker::ALL
        .iter()
        .any(|marker| label.contains(marker.token()))
    {
        AnalysisMode::Lateral
    } else {
        AnalysisMode::FrontalBack
    }
}
