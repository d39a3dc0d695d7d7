//! Posture metrics from detected body landmarks.
//!
//! Given the COCO keypoints of one subject, the subject's real height and the
//! detector's classification label, this crate derives clinically meaningful
//! deviation measurements and a 0-100 posture score:
//!
//! 1. [`resolve_mode`] picks frontal/back or lateral analysis from the label.
//! 2. [`estimate_ratio`] converts pixels to millimetres from the body's extent.
//! 3. [`compute_metrics`] measures the mode's deviations.
//! 4. [`posture_score`] applies the [`PENALTY_RULES`] table.
//! 5. [`recommend`] maps the score to a guidance tier.
//!
//! All of these are pure functions. [`analyze_detection`] runs them in order.

pub mod analysis;
pub mod calibration;
pub mod classification;
pub mod config;
pub mod error;
pub mod keypoint;
pub mod metrics;
pub mod mode;
pub mod recommendation;
pub mod score;

pub use analysis::{Detection, PostureReport, analyze_detection, analyze_first, validate_height};
pub use calibration::{REFERENCE_PIXEL_HEIGHT, estimate_ratio, estimate_ratio_with, pixel_height};
pub use classification::PostureClass;
pub use config::PostureConfig;
pub use error::PostureError;
pub use keypoint::{COCO_KEYPOINT_COUNT, ConfidenceLevel, Keypoint, KeypointName, KeypointSet};
pub use metrics::{
    FrontalBackMetrics, LateralMetrics, MetricsRecord, calculate_metrics, compute_metrics,
};
pub use mode::{AnalysisMode, SideMarker, resolve_mode};
pub use recommendation::{Recommendation, recommend};
pub use score::{Measured, Metric, PENALTY_RULES, PenaltyRule, posture_score, round_one_decimal};
