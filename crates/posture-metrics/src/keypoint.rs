use crate::PostureError;
use posture_base::Vec2;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of keypoints in COCO pose format
pub const COCO_KEYPOINT_COUNT: usize = 17;

/// COCO landmark names, declared in COCO index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeypointName {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointName {
    pub const ALL: [KeypointName; COCO_KEYPOINT_COUNT] = [
        KeypointName::Nose,
        KeypointName::LeftEye,
        KeypointName::RightEye,
        KeypointName::LeftEar,
        KeypointName::RightEar,
        KeypointName::LeftShoulder,
        KeypointName::RightShoulder,
        KeypointName::LeftElbow,
        KeypointName::RightElbow,
        KeypointName::LeftWrist,
        KeypointName::RightWrist,
        KeypointName::LeftHip,
        KeypointName::RightHip,
        KeypointName::LeftKnee,
        KeypointName::RightKnee,
        KeypointName::LeftAnkle,
        KeypointName::RightAnkle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KeypointName::Nose => "nose",
            KeypointName::LeftEye => "left_eye",
            KeypointName::RightEye => "right_eye",
            KeypointName::LeftEar => "left_ear",
            KeypointName::RightEar => "right_ear",
            KeypointName::LeftShoulder => "left_shoulder",
            KeypointName::RightShoulder => "right_shoulder",
            KeypointName::LeftElbow => "left_elbow",
            KeypointName::RightElbow => "right_elbow",
            KeypointName::LeftWrist => "left_wrist",
            KeypointName::RightWrist => "right_wrist",
            KeypointName::LeftHip => "left_hip",
            KeypointName::RightHip => "right_hip",
            KeypointName::LeftKnee => "left_knee",
            KeypointName::RightKnee => "right_knee",
            KeypointName::LeftAnkle => "left_ankle",
            KeypointName::RightAnkle => "right_ankle",
        }
    }
}

impl fmt::Display for KeypointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<KeypointName> for usize {
    fn from(name: KeypointName) -> usize {
        name as usize
    }
}

impl TryFrom<usize> for KeypointName {
    type Error = PostureError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        KeypointName::ALL
            .get(index)
            .copied()
            .ok_or(PostureError::InvalidKeypointIndex(index))
    }
}

impl FromStr for KeypointName {
    type Err = PostureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeypointName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PostureError::UnknownKeypoint(s.to_string()))
    }
}

/// Detection confidence bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    /// Bucket a confidence in [0, 1], checked from the top bucket down.
    ///
    /// Returns `None` for values outside [0, 1], including NaN.
    pub fn from_confidence(confidence: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return None;
        }
        let level = if confidence >= 0.9 {
            ConfidenceLevel::VeryHigh
        } else if confidence >= 0.7 {
            ConfidenceLevel::High
        } else if confidence >= 0.5 {
            ConfidenceLevel::Medium
        } else if confidence >= 0.3 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        };
        Some(level)
    }
}

/// A single detected landmark with pixel position and confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    pub name: KeypointName,
    pub position: Vec2<f64>,
    /// Confidence score in [0.0, 1.0] range.
    pub confidence: f64,
}

impl Keypoint {
    pub fn new(name: KeypointName, position: Vec2<f64>, confidence: f64) -> Self {
        Self {
            name,
            position,
            confidence,
        }
    }

    pub fn confidence_level(&self) -> Option<ConfidenceLevel> {
        ConfidenceLevel::from_confidence(self.confidence)
    }
}

// Serialized with the derived confidence bucket alongside the raw score.
impl Serialize for Keypoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("position", &self.position)?;
        map.serialize_entry("confidence", &self.confidence)?;
        map.serialize_entry("confidence_level", &self.confidence_level())?;
        map.end()
    }
}

/// Wire form of one map entry; the name is the map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Observation {
    position: Vec2<f64>,
    confidence: f64,
    #[serde(default, skip_deserializing)]
    confidence_level: Option<ConfidenceLevel>,
}

/// The landmarks detected for one subject, keyed by name.
///
/// Any subset of the 17 names may be present; a missing name means "not detected".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeypointSet {
    keypoints: BTreeMap<KeypointName, Keypoint>,
}

impl KeypointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the detector's 17 `[x, y, confidence]` rows in COCO order,
    /// keeping only rows whose confidence is strictly above `min_confidence`.
    pub fn from_coco(rows: &[[f64; 3]; COCO_KEYPOINT_COUNT], min_confidence: f64) -> Self {
        KeypointName::ALL
            .into_iter()
            .zip(rows.iter())
            .filter(|(_, row)| row[2] > min_confidence)
            .map(|(name, row)| Keypoint::new(name, Vec2::new(row[0], row[1]), row[2]))
            .collect()
    }

    /// Insert or replace a landmark.
    pub fn insert(&mut self, keypoint: Keypoint) -> Option<Keypoint> {
        self.keypoints.insert(keypoint.name, keypoint)
    }

    pub fn get(&self, name: KeypointName) -> Option<&Keypoint> {
        self.keypoints.get(&name)
    }

    pub fn position(&self, name: KeypointName) -> Option<Vec2<f64>> {
        self.get(name).map(|keypoint| keypoint.position)
    }

    pub fn contains(&self, name: KeypointName) -> bool {
        self.keypoints.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Landmarks in COCO index order.
    pub fn iter(&self) -> impl Iterator<Item = &Keypoint> {
        self.keypoints.values()
    }

    /// Copy of this set without landmarks at or below `min_confidence`.
    pub fn confident(&self, min_confidence: f64) -> Self {
        self.iter()
            .filter(|keypoint| keypoint.confidence > min_confidence)
            .copied()
            .collect()
    }
}

impl FromIterator<Keypoint> for KeypointSet {
    fn from_iter<I: IntoIterator<Item = Keypoint>>(iter: I) -> Self {
        let mut set = KeypointSet::new();
        for keypoint in iter {
            set.insert(keypoint);
        }
        set
    }
}

// Serialized as a map from landmark name to `{ position, confidence, confidence_level }`.
impl Serialize for KeypointSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for keypoint in self.iter() {
            let observation = Observation {
                position: keypoint.position,
                confidence: keypoint.confidence,
                confidence_level: keypoint.confidence_level(),
            };
            map.serialize_entry(&keypoint.name, &observation)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeypointSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<KeypointName, Observation>::deserialize(deserializer)?;
        Ok(map
            .into_iter()
            .map(|(name, observation)| {
                Keypoint::new(name, observation.position, observation.confidence)
            })
            .collect())
    }
}
