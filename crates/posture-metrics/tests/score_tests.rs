use posture_metrics::{
    AnalysisMode, FrontalBackMetrics, LateralMetrics, Metric, PENALTY_RULES, PenaltyRule,
    posture_score, round_one_decimal,
};

fn frontal(shoulder: f64, hip: f64, spine: f64) -> FrontalBackMetrics {
    FrontalBackMetrics {
        ratio: 1.0,
        shoulder_imbalance_mm: shoulder,
        hip_imbalance_mm: hip,
        spine_deviation_mm: spine,
        ..Default::default()
    }
}

fn lateral(shift: f64, tilt: f64) -> LateralMetrics {
    LateralMetrics {
        ratio: 1.0,
        head_shift_mm: shift,
        head_tilt_deg: tilt,
        ..Default::default()
    }
}

#[test]
fn test_penalty_table_contents() {
    let lookup = |mode: AnalysisMode, metric: Metric| -> PenaltyRule {
        *PENALTY_RULES
            .iter()
            .find(|rule| rule.mode == mode && rule.metric == metric)
            .expect("rule present")
    };

    let shoulder = lookup(AnalysisMode::FrontalBack, Metric::ShoulderImbalance);
    assert_eq!((shoulder.threshold, shoulder.coefficient, shoulder.cap), (5.0, 2.0, 40.0));
    let hip = lookup(AnalysisMode::FrontalBack, Metric::HipImbalance);
    assert_eq!((hip.threshold, hip.coefficient, hip.cap), (5.0, 2.0, 30.0));
    let spine = lookup(AnalysisMode::FrontalBack, Metric::SpineDeviation);
    assert_eq!((spine.threshold, spine.coefficient, spine.cap), (10.0, 1.5, 30.0));
    let shift = lookup(AnalysisMode::Lateral, Metric::HeadShift);
    assert_eq!((shift.threshold, shift.coefficient, shift.cap), (20.0, 1.5, 50.0));
    let tilt = lookup(AnalysisMode::Lateral, Metric::HeadTilt);
    assert_eq!((tilt.threshold, tilt.coefficient, tilt.cap), (10.0, 2.0, 50.0));

    assert_eq!(PENALTY_RULES.len(), 5);
}

#[test]
fn test_penalty_threshold_is_strict() {
    let rule = PENALTY_RULES[0];
    assert_eq!(rule.penalty(5.0), 0.0);
    assert_eq!(rule.penalty(5.1), 10.2);
    assert_eq!(rule.penalty(25.0), 40.0);
}

#[test]
fn test_no_deviation_scores_full() {
    assert_eq!(posture_score(&frontal(0.0, 0.0, 0.0)), 100.0);
    assert_eq!(posture_score(&lateral(0.0, 0.0)), 100.0);
}

#[test]
fn test_values_at_threshold_do_not_penalise() {
    assert_eq!(posture_score(&frontal(5.0, 5.0, 10.0)), 100.0);
    assert_eq!(posture_score(&lateral(20.0, 10.0)), 100.0);
}

#[test]
fn test_frontal_penalties_stack() {
    // 12 + 12 + 16.5
    assert_eq!(posture_score(&frontal(6.0, 6.0, 11.0)), 59.5);
}

#[test]
fn test_frontal_caps_reach_zero() {
    // capped at 40 + 30 + 30
    assert_eq!(posture_score(&frontal(30.0, 20.0, 25.0)), 0.0);
}

#[test]
fn test_shoulder_only_penalty() {
    assert_eq!(posture_score(&frontal(10.0, 5.0, 0.0)), 80.0);
}

#[test]
fn test_lateral_penalties() {
    assert_eq!(posture_score(&lateral(30.0, 0.0)), 55.0);
    assert_eq!(posture_score(&lateral(0.0, 15.0)), 70.0);
    assert_eq!(posture_score(&lateral(50.0, 135.0)), 0.0);
}

#[test]
fn test_angles_do_not_affect_frontal_score() {
    let metrics = FrontalBackMetrics {
        shoulder_angle_deg: -45.0,
        hip_angle_deg: 80.0,
        ..frontal(0.0, 0.0, 0.0)
    };
    assert_eq!(posture_score(&metrics), 100.0);
}

#[test]
fn test_score_stays_in_bounds() {
    let values = [0.0, 4.9, 5.0, 5.1, 10.0, 10.1, 19.9, 20.1, 33.3, 50.0, 135.0, 1e6];
    for &a in &values {
        for &b in &values {
            for &c in &values {
                let score = posture_score(&frontal(a, b, c));
                assert!((0.0..=100.0).contains(&score), "frontal {a} {b} {c} -> {score}");
            }
            let score = posture_score(&lateral(a, b));
            assert!((0.0..=100.0).contains(&score), "lateral {a} {b} -> {score}");
        }
    }
}

#[test]
fn test_round_one_decimal() {
    assert_eq!(round_one_decimal(5.7106), 5.7);
    assert_eq!(round_one_decimal(-5.7106), -5.7);
    assert_eq!(round_one_decimal(59.96), 60.0);
    assert_eq!(round_one_decimal(0.0), 0.0);
}

#[test]
fn test_round_one_decimal_ties_to_even() {
    assert_eq!(round_one_decimal(10.25), 10.2);
    assert_eq!(round_one_decimal(0.25), 0.2);
    assert_eq!(round_one_decimal(12.75), 12.8);
    assert_eq!(round_one_decimal(-0.25), -0.2);
}

#[test]
fn test_round_one_decimal_uses_stored_value() {
    // both are stored just below the written tie
    assert_eq!(round_one_decimal(1.15), 1.1);
    assert_eq!(round_one_decimal(0.35), 0.3);
}

#[test]
fn test_metric_names_and_units() {
    assert_eq!(Metric::ShoulderImbalance.name(), "shoulder_imbalance_mm");
    assert_eq!(Metric::HeadTilt.name(), "head_tilt_deg");
    assert_eq!(Metric::SpineDeviation.unit(), "mm");
    assert_eq!(Metric::HipAngle.unit(), "deg");
}
