use serde::{Serialize, Serializer};
use std::fmt;

/// View suffixes the detector appends to its posture classes.
const VIEW_SUFFIXES: [&str; 4] = ["Kanan", "Kiri", "Belakang", "Depan"];

/// Coarse posture class behind a detector label such as `Kyphosis-Kanan`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostureClass {
    Normal,
    Kyphosis,
    Lordosis,
    Swayback,
    /// A label outside the known `<class>-<view>` set, kept verbatim.
    Other(String),
}

impl PostureClass {
    pub fn from_label(label: &str) -> Self {
        let known = label.split_once('-').and_then(|(class, view)| {
            if !VIEW_SUFFIXES.contains(&view) {
                return None;
            }
            match class {
                "Normal" => Some(PostureClass::Normal),
                "Kyphosis" => Some(PostureClass::Kyphosis),
                "Lordosis" => Some(PostureClass::Lordosis),
                "Swayback" => Some(PostureClass::Swayback),
                _ => None,
            }
        });
        known.unwrap_or_else(|| PostureClass::Other(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            PostureClass::Normal => "Normal",
            PostureClass::Kyphosis => "Kyphosis",
            PostureClass::Lordosis => "Lordosis",
            PostureClass::Swayback => "Swayback",
            PostureClass::Other(label) => label,
        }
    }
}

impl fmt::Display for PostureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PostureClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
