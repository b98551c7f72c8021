//! Chapter image parallax

/// Fraction of an image's viewport top applied as vertical translation
pub const PARALLAX_FACTOR: f64 = 0.1;

/// Vertical offset for one image given its bounding-box top
pub fn parallax_offset(rect_top: f64) -> f64 {
    rect_top * PARALLAX_FACTOR
}

/// Offsets for every chapter image, in order
pub fn parallax_offsets(rect_tops: &[f64]) -> Vec<f64> {
    rect_tops.iter().copied().map(parallax_offset).collect()
}

/// CSS `transform` value for an offset
pub fn transform_css(offset: f64) -> String {
    format!("translateY({:.1}px)", offset)
}
