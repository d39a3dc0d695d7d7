use crate::mode::AnalysisMode;

/// A named measurement in a metrics record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    ShoulderImbalance,
    HipImbalance,
    SpineDeviation,
    ShoulderAngle,
    HipAngle,
    HeadShift,
    HeadTilt,
}

impl Metric {
    /// Key used in stored key/value measurements.
    pub fn name(self) -> &'static str {
        match self {
            Metric::ShoulderImbalance => "shoulder_imbalance_mm",
            Metric::HipImbalance => "hip_imbalance_mm",
            Metric::SpineDeviation => "spine_deviation_mm",
            Metric::ShoulderAngle => "shoulder_angle_deg",
            Metric::HipAngle => "hip_angle_deg",
            Metric::HeadShift => "head_shift_mm",
            Metric::HeadTilt => "head_tilt_deg",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::ShoulderAngle | Metric::HipAngle | Metric::HeadTilt => "deg",
            _ => "mm",
        }
    }
}

/// One row of the penalty table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyRule {
    pub mode: AnalysisMode,
    pub metric: Metric,
    /// The rule fires only when the value is strictly greater than this.
    pub threshold: f64,
    pub coefficient: f64,
    pub cap: f64,
}

impl PenaltyRule {
    /// Points deducted for `value`; zero unless the threshold is exceeded.
    pub fn penalty(&self, value: f64) -> f64 {
        if value > self.threshold {
            (value * self.coefficient).min(self.cap)
        } else {
            0.0
        }
    }
}

pub const PENALTY_RULES: [PenaltyRule; 5] = [
    PenaltyRule {
        mode: AnalysisMode::FrontalBack,
        metric: Metric::ShoulderImbalance,
        threshold: 5.0,
        coefficient: 2.0,
        cap: 40.0,
    },
    PenaltyRule {
        mode: AnalysisMode::FrontalBack,
        metric: Metric::HipImbalance,
        threshold: 5.0,
        coefficient: 2.0,
        cap: 30.0,
    },
    PenaltyRule {
        mode: AnalysisMode::FrontalBack,
        metric: Metric::SpineDeviation,
        threshold: 10.0,
        coefficient: 1.5,
        cap: 30.0,
    },
    PenaltyRule {
        mode: AnalysisMode::Lateral,
        metric: Metric::HeadShift,
        threshold: 20.0,
        coefficient: 1.5,
        cap: 50.0,
    },
    PenaltyRule {
        mode: AnalysisMode::Lateral,
        metric: Metric::HeadTilt,
        threshold: 10.0,
        coefficient: 2.0,
        cap: 50.0,
    },
];

/// A set of measurements the penalty table can be applied to.
pub trait Measured {
    fn mode(&self) -> AnalysisMode;

    /// The value of `metric`, or `None` if this mode does not measure it.
    fn metric(&self, metric: Metric) -> Option<f64>;
}

/// Round to one decimal place, ties to even.
///
/// Decides on the exact stored value, so `1.15` (stored just below) gives 1.1
/// and the exact tie `10.25` gives 10.2.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Reduce measurements to a 0-100 posture score.
///
/// Every rule for the measurement's mode deducts independently from 100; the
/// result is floored at 0 and rounded to one decimal.
pub fn posture_score(measured: &impl Measured) -> f64 {
    let mode = measured.mode();
    let deducted: f64 = PENALTY_RULES
        .iter()
        .filter(|rule| rule.mode == mode)
        .filter_map(|rule| measured.metric(rule.metric).map(|value| rule.penalty(value)))
        .sum();
    round_one_decimal((100.0 - deducted).max(0.0))
}
