use crate::calibration::estimate_ratio_with;
use crate::config::PostureConfig;
use crate::keypoint::{KeypointName, KeypointSet};
use crate::mode::AnalysisMode;
use crate::score::{Measured, Metric, posture_score, round_one_decimal};
use posture_base::Vec2;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Vertical pixel gap between the shoulders above which the shoulder
/// imbalance is capped at [`SHOULDER_IMBALANCE_CAP_MM`].
pub const SHOULDER_CLAMP_PIXELS: f64 = 50.0;
pub const SHOULDER_IMBALANCE_CAP_MM: f64 = 50.0;

/// Symmetry measurements for a frontal or back view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FrontalBackMetrics {
    pub ratio: f64,
    pub shoulder_imbalance_mm: f64,
    pub hip_imbalance_mm: f64,
    pub spine_deviation_mm: f64,
    pub shoulder_angle_deg: f64,
    pub hip_angle_deg: f64,
    pub score: f64,
}

/// Head alignment measurements for a side view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LateralMetrics {
    pub ratio: f64,
    pub head_shift_mm: f64,
    pub head_tilt_deg: f64,
    pub score: f64,
}

impl Measured for FrontalBackMetrics {
    fn mode(&self) -> AnalysisMode {
        AnalysisMode::FrontalBack
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::ShoulderImbalance => Some(self.shoulder_imbalance_mm),
            Metric::HipImbalance => Some(self.hip_imbalance_mm),
            Metric::SpineDeviation => Some(self.spine_deviation_mm),
            Metric::ShoulderAngle => Some(self.shoulder_angle_deg),
            Metric::HipAngle => Some(self.hip_angle_deg),
            Metric::HeadShift | Metric::HeadTilt => None,
        }
    }
}

impl Measured for LateralMetrics {
    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Lateral
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::HeadShift => Some(self.head_shift_mm),
            Metric::HeadTilt => Some(self.head_tilt_deg),
            _ => None,
        }
    }
}

impl FrontalBackMetrics {
    pub const METRICS: [Metric; 5] = [
        Metric::ShoulderImbalance,
        Metric::HipImbalance,
        Metric::SpineDeviation,
        Metric::ShoulderAngle,
        Metric::HipAngle,
    ];
}

impl LateralMetrics {
    pub const METRICS: [Metric; 2] = [Metric::HeadShift, Metric::HeadTilt];
}

/// Result of one metrics calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricsRecord {
    FrontalBack(FrontalBackMetrics),
    Lateral(LateralMetrics),
    /// Nothing could be measured: no keypoints, or no recognised mode.
    /// Every value, including the ratio, reads as 0.0.
    Empty,
}

impl MetricsRecord {
    pub fn mode(&self) -> Option<AnalysisMode> {
        match self {
            MetricsRecord::FrontalBack(_) => Some(AnalysisMode::FrontalBack),
            MetricsRecord::Lateral(_) => Some(AnalysisMode::Lateral),
            MetricsRecord::Empty => None,
        }
    }

    pub fn ratio(&self) -> f64 {
        match self {
            MetricsRecord::FrontalBack(metrics) => metrics.ratio,
            MetricsRecord::Lateral(metrics) => metrics.ratio,
            MetricsRecord::Empty => 0.0,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            MetricsRecord::FrontalBack(metrics) => metrics.score,
            MetricsRecord::Lateral(metrics) => metrics.score,
            MetricsRecord::Empty => 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MetricsRecord::Empty)
    }

    /// Value of a single metric; 0.0 for the empty record.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match self {
            MetricsRecord::FrontalBack(metrics) => metrics.metric(metric),
            MetricsRecord::Lateral(metrics) => metrics.metric(metric),
            MetricsRecord::Empty => Some(0.0),
        }
    }

    /// Flat `(name, value)` pairs: ratio, the mode's metrics, then score.
    ///
    /// The empty record lists every metric of both modes at 0.0.
    pub fn measurements(&self) -> Vec<(&'static str, f64)> {
        let metrics: &[Metric] = match self {
            MetricsRecord::FrontalBack(_) => &FrontalBackMetrics::METRICS,
            MetricsRecord::Lateral(_) => &LateralMetrics::METRICS,
            MetricsRecord::Empty => &[
                Metric::ShoulderImbalance,
                Metric::HipImbalance,
                Metric::SpineDeviation,
                Metric::ShoulderAngle,
                Metric::HipAngle,
                Metric::HeadShift,
                Metric::HeadTilt,
            ],
        };
        let mut pairs = Vec::with_capacity(metrics.len() + 2);
        pairs.push(("ratio", self.ratio()));
        for &metric in metrics {
            pairs.push((metric.name(), self.metric(metric).unwrap_or(0.0)));
        }
        pairs.push(("score", self.score()));
        pairs
    }
}

// Stored as the flat measurement map.
impl Serialize for MetricsRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let measurements = self.measurements();
        let mut map = serializer.serialize_map(Some(measurements.len()))?;
        for (name, value) in measurements {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Vertical gap and tilt angle from `from` to `to`.
///
/// The gap is absolute; the angle keeps its sign.
fn gap_and_angle(from: Vec2<f64>, to: Vec2<f64>) -> (f64, f64) {
    let delta = to - from;
    (delta.y.abs(), delta.angle_degrees())
}

fn pair(
    keypoints: &KeypointSet,
    left: KeypointName,
    right: KeypointName,
) -> Option<(Vec2<f64>, Vec2<f64>)> {
    Some((keypoints.position(left)?, keypoints.position(right)?))
}

fn frontal_back_metrics(keypoints: &KeypointSet, ratio: f64) -> FrontalBackMetrics {
    let mut metrics = FrontalBackMetrics {
        ratio,
        ..Default::default()
    };

    let shoulders = pair(keypoints, KeypointName::LeftShoulder, KeypointName::RightShoulder);
    let hips = pair(keypoints, KeypointName::LeftHip, KeypointName::RightHip);

    if let Some((left, right)) = shoulders {
        let (gap_pixels, angle) = gap_and_angle(left, right);
        let mut imbalance = gap_pixels * ratio;
        // the trigger is the pixel gap, the cap applies to millimetres
        if gap_pixels > SHOULDER_CLAMP_PIXELS {
            imbalance = imbalance.min(SHOULDER_IMBALANCE_CAP_MM);
        }
        metrics.shoulder_imbalance_mm = round_one_decimal(imbalance);
        metrics.shoulder_angle_deg = round_one_decimal(angle);
    }

    if let Some((left, right)) = hips {
        let (gap_pixels, angle) = gap_and_angle(left, right);
        metrics.hip_imbalance_mm = round_one_decimal(gap_pixels * ratio);
        metrics.hip_angle_deg = round_one_decimal(angle);
    }

    if let (Some(shoulders), Some(hips)) = (shoulders, hips) {
        let shoulder_center = shoulders.0.midpoint(shoulders.1);
        let hip_center = hips.0.midpoint(hips.1);
        let offset_pixels = (shoulder_center.x - hip_center.x).abs();
        metrics.spine_deviation_mm = round_one_decimal(offset_pixels * ratio);
    }

    metrics.score = posture_score(&metrics);
    metrics
}

fn lateral_metrics(keypoints: &KeypointSet, ratio: f64) -> LateralMetrics {
    let mut metrics = LateralMetrics {
        ratio,
        ..Default::default()
    };

    if let Some(nose) = keypoints.position(KeypointName::Nose) {
        if let Some(shoulder) = keypoints.position(KeypointName::LeftShoulder) {
            metrics.head_shift_mm = round_one_decimal((nose.x - shoulder.x).abs() * ratio);
        }

        // left ear wins; the right ear is only a fallback
        let ear = keypoints
            .position(KeypointName::LeftEar)
            .or_else(|| keypoints.position(KeypointName::RightEar));
        if let Some(ear) = ear {
            metrics.head_tilt_deg = round_one_decimal((ear - nose).angle_degrees().abs());
        }
    }

    metrics.score = posture_score(&metrics);
    metrics
}

/// Derive the mode's measurements from `keypoints` at the given mm-per-pixel
/// `ratio`, and score them.
///
/// Metrics whose landmarks are missing stay at 0.0. An empty keypoint set
/// gives [`MetricsRecord::Empty`].
pub fn compute_metrics(keypoints: &KeypointSet, ratio: f64, mode: AnalysisMode) -> MetricsRecord {
    if keypoints.is_empty() {
        log::debug!("no keypoints, returning empty metrics");
        return MetricsRecord::Empty;
    }
    match mode {
        AnalysisMode::FrontalBack => {
            MetricsRecord::FrontalBack(frontal_back_metrics(keypoints, ratio))
        }
        AnalysisMode::Lateral => MetricsRecord::Lateral(lateral_metrics(keypoints, ratio)),
    }
}

/// Calibrate against `actual_height_mm` and compute the metrics for `mode`.
///
/// The ratio is estimated fresh on every call. A missing mode (for example an
/// unrecognised stored name, see [`AnalysisMode::from_name`]) or an empty
/// keypoint set gives [`MetricsRecord::Empty`].
pub fn calculate_metrics(
    keypoints: &KeypointSet,
    actual_height_mm: f64,
    mode: Option<AnalysisMode>,
    config: &PostureConfig,
) -> MetricsRecord {
    let Some(mode) = mode else {
        log::debug!("no analysis mode, returning empty metrics");
        return MetricsRecord::Empty;
    };
    if keypoints.is_empty() {
        log::debug!("no keypoints, returning empty metrics");
        return MetricsRecord::Empty;
    }
    let ratio = estimate_ratio_with(keypoints, actual_height_mm, config.reference_pixel_height());
    compute_metrics(keypoints, ratio, mode)
}
