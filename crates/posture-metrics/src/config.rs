use crate::PostureError;
use crate::calibration::REFERENCE_PIXEL_HEIGHT;

/// Engine settings that are not part of a single request.
#[derive(Clone, Debug, PartialEq)]
pub struct PostureConfig {
    reference_pixel_height: f64,
    min_keypoint_confidence: f64,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self {
            reference_pixel_height: REFERENCE_PIXEL_HEIGHT,
            min_keypoint_confidence: 0.0,
        }
    }
}

impl PostureConfig {
    /// Set the body height in pixels assumed when it cannot be measured.
    pub fn with_reference_pixel_height(mut self, pixels: f64) -> Self {
        self.reference_pixel_height = pixels;
        self
    }

    /// Set the confidence a landmark must exceed to count as detected.
    pub fn with_min_keypoint_confidence(mut self, confidence: f64) -> Self {
        self.min_keypoint_confidence = confidence;
        self
    }

    // Getters
    pub fn reference_pixel_height(&self) -> f64 {
        self.reference_pixel_height
    }

    pub fn min_keypoint_confidence(&self) -> f64 {
        self.min_keypoint_confidence
    }

    /// Check that the reference height is a positive finite number, so that
    /// the calibration fallback always yields a positive ratio.
    pub fn validate(&self) -> Result<(), PostureError> {
        if !(self.reference_pixel_height.is_finite() && self.reference_pixel_height > 0.0) {
            return Err(PostureError::InvalidConfig(format!(
                "reference pixel height must be positive, got {}",
                self.reference_pixel_height
            )));
        }
        if self.min_keypoint_confidence.is_nan() {
            return Err(PostureError::InvalidConfig(
                "minimum keypoint confidence is NaN".to_string(),
            ));
        }
        Ok(())
    }
}
