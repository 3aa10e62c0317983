/// The on-page display size of an image, in CSS-style pixels (96 per inch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelExtent {
    pub width: u32,
    pub height: u32,
}

impl PixelExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scales a source image of `source_width` × `source_height` to a fixed
    /// display width, preserving the aspect ratio. The height is rounded to the
    /// nearest pixel.
    pub fn fit_width(width: u32, source_width: u32, source_height: u32) -> Self {
        if source_width == 0 {
            return Self { width, height: 0 };
        }
        let height = (f64::from(width) * f64::from(source_height) / f64::from(source_width)).round();
        Self {
            width,
            height: height as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_rounds_to_nearest_pixel() {
        assert_eq!(PixelExtent::fit_width(180, 2000, 466), PixelExtent::new(180, 42));
        assert_eq!(PixelExtent::fit_width(150, 2000, 466), PixelExtent::new(150, 35));
    }

    #[test]
    fn fit_width_handles_degenerate_source() {
        assert_eq!(PixelExtent::fit_width(100, 0, 50).height, 0);
    }
}
