use std::fmt;

/// Failures of the integration layer around the metrics engine.
///
/// The engine itself never fails; these cover bad caller input and I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum PostureError {
    InvalidHeight(f64),
    InvalidKeypointIndex(usize),
    UnknownKeypoint(String),
    InvalidConfig(String),
    Json(String),
    Io(String),
}

impl fmt::Display for PostureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostureError::InvalidHeight(height) => {
                write!(f, "invalid height: {height} mm (must be a positive number)")
            }
            PostureError::InvalidKeypointIndex(index) => {
                write!(f, "invalid keypoint index: {index}. Must be in range 0-16.")
            }
            PostureError::UnknownKeypoint(name) => write!(f, "unknown keypoint: {name}"),
            PostureError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            PostureError::Json(msg) => write!(f, "json error: {msg}"),
            PostureError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for PostureError {}

impl From<serde_json::Error> for PostureError {
    fn from(err: serde_json::Error) -> Self {
        PostureError::Json(err.to_string())
    }
}

impl From<std::io::Error> for PostureError {
    fn from(err: std::io::Error) -> Self {
        PostureError::Io(err.to_string())
    }
}
