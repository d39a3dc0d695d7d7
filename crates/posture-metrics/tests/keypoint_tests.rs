use posture_base::Vec2;
use posture_metrics::{
    COCO_KEYPOINT_COUNT, ConfidenceLevel, Keypoint, KeypointName, KeypointSet, PostureError,
};

#[test]
fn test_coco_keypoint_count() {
    assert_eq!(COCO_KEYPOINT_COUNT, 17);
    assert_eq!(KeypointName::ALL.len(), COCO_KEYPOINT_COUNT);
}

#[test]
fn test_keypoint_name_indices_follow_coco_order() {
    for (index, name) in KeypointName::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(name), index);
        assert_eq!(KeypointName::try_from(index).unwrap(), name);
    }
    assert_eq!(usize::from(KeypointName::LeftShoulder), 5);
    assert_eq!(usize::from(KeypointName::RightAnkle), 16);
}

#[test]
fn test_keypoint_name_try_from_invalid() {
    assert_eq!(
        KeypointName::try_from(17),
        Err(PostureError::InvalidKeypointIndex(17))
    );
    assert!(KeypointName::try_from(100).is_err());
}

#[test]
fn test_keypoint_name_parse() {
    assert_eq!("left_ear".parse::<KeypointName>().unwrap(), KeypointName::LeftEar);
    assert_eq!(KeypointName::RightHip.to_string(), "right_hip");
    assert_eq!(
        "tail".parse::<KeypointName>(),
        Err(PostureError::UnknownKeypoint("tail".to_string()))
    );
}

#[test]
fn test_confidence_level_buckets() {
    assert_eq!(ConfidenceLevel::from_confidence(1.0), Some(ConfidenceLevel::VeryHigh));
    assert_eq!(ConfidenceLevel::from_confidence(0.9), Some(ConfidenceLevel::VeryHigh));
    assert_eq!(ConfidenceLevel::from_confidence(0.89), Some(ConfidenceLevel::High));
    assert_eq!(ConfidenceLevel::from_confidence(0.7), Some(ConfidenceLevel::High));
    assert_eq!(ConfidenceLevel::from_confidence(0.69), Some(ConfidenceLevel::Medium));
    assert_eq!(ConfidenceLevel::from_confidence(0.5), Some(ConfidenceLevel::Medium));
    assert_eq!(ConfidenceLevel::from_confidence(0.3), Some(ConfidenceLevel::Low));
    assert_eq!(ConfidenceLevel::from_confidence(0.29), Some(ConfidenceLevel::VeryLow));
    assert_eq!(ConfidenceLevel::from_confidence(0.0), Some(ConfidenceLevel::VeryLow));
}

#[test]
fn test_confidence_level_out_of_range() {
    assert_eq!(ConfidenceLevel::from_confidence(-0.1), None);
    assert_eq!(ConfidenceLevel::from_confidence(1.01), None);
    assert_eq!(ConfidenceLevel::from_confidence(f64::NAN), None);
}

#[test]
fn test_keypoint_confidence_level() {
    let keypoint = Keypoint::new(KeypointName::Nose, Vec2::new(10.0, 20.0), 0.75);
    assert_eq!(keypoint.confidence_level(), Some(ConfidenceLevel::High));
}

#[test]
fn test_keypoint_json() {
    let keypoint = Keypoint::new(KeypointName::LeftShoulder, Vec2::new(100.0, 200.0), 0.75);
    let value = serde_json::to_value(keypoint).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "left_shoulder",
            "position": [100.0, 200.0],
            "confidence": 0.75,
            "confidence_level": "high",
        })
    );

    let unknown = Keypoint::new(KeypointName::Nose, Vec2::new(0.0, 0.0), 1.5);
    assert!(serde_json::to_value(unknown).unwrap()["confidence_level"].is_null());
}

#[test]
fn test_keypoint_set_insert_replaces_same_name() {
    let mut set = KeypointSet::new();
    assert!(set.is_empty());
    set.insert(Keypoint::new(KeypointName::Nose, Vec2::new(1.0, 2.0), 0.5));
    let previous = set.insert(Keypoint::new(KeypointName::Nose, Vec2::new(3.0, 4.0), 0.6));
    assert_eq!(previous.unwrap().position, Vec2::new(1.0, 2.0));
    assert_eq!(set.len(), 1);
    assert_eq!(set.position(KeypointName::Nose), Some(Vec2::new(3.0, 4.0)));
    assert!(!set.contains(KeypointName::LeftEar));
    assert_eq!(set.position(KeypointName::LeftEar), None);
}

#[test]
fn test_keypoint_set_iterates_in_coco_order() {
    let set: KeypointSet = [
        Keypoint::new(KeypointName::RightAnkle, Vec2::new(0.0, 0.0), 0.9),
        Keypoint::new(KeypointName::Nose, Vec2::new(0.0, 0.0), 0.9),
        Keypoint::new(KeypointName::LeftHip, Vec2::new(0.0, 0.0), 0.9),
    ]
    .into_iter()
    .collect();
    let names: Vec<_> = set.iter().map(|keypoint| keypoint.name).collect();
    assert_eq!(
        names,
        vec![KeypointName::Nose, KeypointName::LeftHip, KeypointName::RightAnkle]
    );
}

#[test]
fn test_from_coco_drops_undetected_rows() {
    let mut rows = [[0.0; 3]; COCO_KEYPOINT_COUNT];
    rows[0] = [150.0, 50.0, 0.95];
    rows[5] = [100.0, 200.0, 0.4];
    rows[6] = [200.0, 210.0, 0.0];

    let set = KeypointSet::from_coco(&rows, 0.0);
    assert_eq!(set.len(), 2);
    assert_eq!(set.position(KeypointName::Nose), Some(Vec2::new(150.0, 50.0)));
    assert!(set.contains(KeypointName::LeftShoulder));
    assert!(!set.contains(KeypointName::RightShoulder));

    let strict = KeypointSet::from_coco(&rows, 0.5);
    assert_eq!(strict.len(), 1);
}

#[test]
fn test_confident_filters_strictly_above() {
    let set: KeypointSet = [
        Keypoint::new(KeypointName::Nose, Vec2::new(0.0, 0.0), 0.3),
        Keypoint::new(KeypointName::LeftEar, Vec2::new(0.0, 0.0), 0.31),
    ]
    .into_iter()
    .collect();
    let filtered = set.confident(0.3);
    assert_eq!(filtered.len(), 1);
    assert!(filtered.contains(KeypointName::LeftEar));
}

#[test]
fn test_keypoint_set_json() {
    let json = r#"{
        "nose": { "position": [150.0, 50.0], "confidence": 0.95 },
        "left_ear": { "position": [140, 40], "confidence": 0.6 }
    }"#;
    let set: KeypointSet = serde_json::from_str(json).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.position(KeypointName::LeftEar), Some(Vec2::new(140.0, 40.0)));

    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(value["nose"]["position"], serde_json::json!([150.0, 50.0]));
    assert_eq!(value["nose"]["confidence_level"], "very_high");
    assert_eq!(value["left_ear"]["confidence_level"], "medium");
}

#[test]
fn test_keypoint_set_json_rejects_unknown_name() {
    let json = r#"{ "tail": { "position": [1, 2], "confidence": 0.9 } }"#;
    assert!(serde_json::from_str::<KeypointSet>(json).is_err());
}
