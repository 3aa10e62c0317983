//! Conversions from IDF units (points, pixels, line multiples) to the
//! integer units word-processing formats store.

/// EMUs (English Metric Units) per pixel at 96 DPI.
pub const EMU_PER_PIXEL: u64 = 9525;

/// Points to twentieths of a point.
pub fn twips(points: f32) -> i64 {
    (f64::from(points) * 20.0).round() as i64
}

/// Points to half-points, the unit of run font sizes. The result is at least
/// 1 because `w:sz` has no zero value; callers pass validated positive sizes.
pub fn half_points(points: f32) -> u32 {
    (f64::from(points) * 2.0).round().max(1.0) as u32
}

/// Points to eighths of a point, the unit of paragraph border widths.
/// The result is clamped to 2..=96, the range `ST_EighthPointMeasure` allows
/// for border `w:sz`. Out-of-range widths are not an error here; token
/// validation rejects non-positive weights before they reach a serializer.
pub fn eighth_points(points: f32) -> u32 {
    (f64::from(points) * 8.0).round().clamp(2.0, 96.0) as u32
}

/// A line-height multiple to 240ths of a line.
pub fn line_240ths(multiple: f32) -> u32 {
    (f64::from(multiple) * 240.0).round().max(1.0) as u32
}

pub fn px_to_emu(pixels: u32) -> u64 {
    u64::from(pixels) * EMU_PER_PIXEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_page_converts_to_standard_twips() {
        assert_eq!(twips(595.3), 11906);
        assert_eq!(twips(841.9), 16838);
        assert_eq!(twips(72.0), 1440);
    }

    #[test]
    fn font_sizes_round_to_half_points() {
        assert_eq!(half_points(11.0), 22);
        assert_eq!(half_points(10.5), 21);
        assert_eq!(half_points(0.0), 1);
    }

    #[test]
    fn border_widths_are_clamped() {
        assert_eq!(eighth_points(1.5), 12);
        assert_eq!(eighth_points(0.1), 2);
        assert_eq!(eighth_points(20.0), 96);
    }

    #[test]
    fn line_height_and_pixels() {
        assert_eq!(line_240ths(1.35), 324);
        assert_eq!(px_to_emu(180), 1_714_500);
    }
}
