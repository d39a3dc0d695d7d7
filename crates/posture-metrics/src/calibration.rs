use crate::keypoint::{KeypointName, KeypointSet};

/// Body height in pixels assumed when it cannot be measured from the image.
pub const REFERENCE_PIXEL_HEIGHT: f64 = 5712.0;

/// Landmarks that mark the top of the body.
pub const HEAD_KEYPOINTS: [KeypointName; 5] = [
    KeypointName::Nose,
    KeypointName::LeftEye,
    KeypointName::RightEye,
    KeypointName::LeftEar,
    KeypointName::RightEar,
];

/// Landmarks that mark the bottom of the body.
pub const FEET_KEYPOINTS: [KeypointName; 2] = [KeypointName::LeftAnkle, KeypointName::RightAnkle];

fn ys(keypoints: &KeypointSet, names: &[KeypointName]) -> impl Iterator<Item = f64> {
    names
        .iter()
        .filter_map(|&name| keypoints.position(name))
        .map(|position| position.y)
}

/// Vertical extent of the subject in pixels, from the highest head landmark
/// to the lowest ankle.
///
/// Returns `None` when either end is missing or the extent is not positive.
pub fn pixel_height(keypoints: &KeypointSet) -> Option<f64> {
    let top = ys(keypoints, &HEAD_KEYPOINTS).reduce(f64::min)?;
    let bottom = ys(keypoints, &FEET_KEYPOINTS).reduce(f64::max)?;
    let height = (bottom - top).abs();
    (height > 0.0).then_some(height)
}

/// Millimetres of real-world length per image pixel.
///
/// Only the vertical extent is used, so leaning does not change the ratio.
/// Falls back to `reference_pixel_height` when the extent cannot be measured,
/// which keeps the ratio positive for any positive `actual_height_mm`.
pub fn estimate_ratio_with(
    keypoints: &KeypointSet,
    actual_height_mm: f64,
    reference_pixel_height: f64,
) -> f64 {
    let pixels = pixel_height(keypoints).unwrap_or_else(|| {
        log::debug!(
            "body extent not measurable from {} keypoints, assuming {} px",
            keypoints.len(),
            reference_pixel_height
        );
        reference_pixel_height
    });
    actual_height_mm / pixels
}

/// [`estimate_ratio_with`] using [`REFERENCE_PIXEL_HEIGHT`].
pub fn estimate_ratio(keypoints: &KeypointSet, actual_height_mm: f64) -> f64 {
    estimate_ratio_with(keypoints, actual_height_mm, REFERENCE_PIXEL_HEIGHT)
}
