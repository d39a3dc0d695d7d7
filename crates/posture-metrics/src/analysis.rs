use crate::PostureError;
use crate::classification::PostureClass;
use crate::config::PostureConfig;
use crate::keypoint::{ConfidenceLevel, KeypointSet};
use crate::metrics::{MetricsRecord, calculate_metrics};
use crate::mode::{AnalysisMode, resolve_mode};
use crate::recommendation::Recommendation;
use serde::{Deserialize, Serialize};

/// One subject as reported by the pose detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detector class label, e.g. `Kyphosis-Kanan`.
    pub label: String,
    /// Confidence of the detection itself, in [0, 1].
    pub confidence: f64,
    #[serde(default)]
    pub keypoints: KeypointSet,
}

/// Everything downstream consumers need about one analysed subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostureReport {
    pub label: String,
    pub classification: PostureClass,
    pub confidence: f64,
    pub confidence_level: Option<ConfidenceLevel>,
    #[serde(rename = "analysis_type")]
    pub mode: AnalysisMode,
    pub metrics: MetricsRecord,
    pub recommendation: Recommendation,
    pub advice: &'static str,
}

impl PostureReport {
    pub fn score(&self) -> f64 {
        self.metrics.score()
    }
}

/// Reject heights that would make the calibration ratio non-positive.
pub fn validate_height(actual_height_mm: f64) -> Result<f64, PostureError> {
    if actual_height_mm.is_finite() && actual_height_mm > 0.0 {
        Ok(actual_height_mm)
    } else {
        Err(PostureError::InvalidHeight(actual_height_mm))
    }
}

/// Run the full pipeline for one detection: mode, calibration, metrics,
/// score and recommendation.
pub fn analyze_detection(
    detection: &Detection,
    actual_height_mm: f64,
    config: &PostureConfig,
) -> Result<PostureReport, PostureError> {
    let actual_height_mm = validate_height(actual_height_mm)?;
    config.validate()?;

    let keypoints = detection.keypoints.confident(config.min_keypoint_confidence());
    let mode = resolve_mode(&detection.label);
    let metrics = calculate_metrics(&keypoints, actual_height_mm, Some(mode), config);
    let recommendation = Recommendation::from_score(metrics.score());

    log::info!(
        "{} ({}): {} keypoints, score {:.1}",
        detection.label,
        mode,
        keypoints.len(),
        metrics.score()
    );

    Ok(PostureReport {
        label: detection.label.clone(),
        classification: PostureClass::from_label(&detection.label),
        confidence: detection.confidence,
        confidence_level: ConfidenceLevel::from_confidence(detection.confidence),
        mode,
        metrics,
        recommendation,
        advice: recommendation.message(),
    })
}

/// Analyse the primary (first) subject of an image, if any was detected.
pub fn analyze_first(
    detections: &[Detection],
    actual_height_mm: f64,
    config: &PostureConfig,
) -> Result<Option<PostureReport>, PostureError> {
    match detections.first() {
        Some(detection) => analyze_detection(detection, actual_height_mm, config).map(Some),
        None => {
            log::debug!("no detections to analyse");
            Ok(None)
        }
    }
}
