//! Page geometry: page size, margins and the preset bundles the generator ships.
use serde::{Deserialize, Serialize};
use skyedoc_types::PixelExtent;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Source pixel dimensions of the SkyeTrain logo artwork. Only the ratio is
/// used; the display width comes from the active preset.
pub const LOGO_SOURCE_WIDTH: u32 = 2000;
pub const LOGO_SOURCE_HEIGHT: u32 = 466;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Hash for Margins {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
        self.left.to_bits().hash(state);
    }
}

impl Eq for Margins {}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical margins `y` (top and bottom) and horizontal margins `x`.
    pub fn symmetric(y: f32, x: f32) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }
}

/// The named page-geometry presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// A4-equivalent page for desktop reading and printing.
    Wide,
    /// 6×9 inch book page for phones and e-readers.
    Book,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Wide, Preset::Book];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Wide => "wide",
            Preset::Book => "book",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wide" | "a4" | "letter" => Ok(Preset::Wide),
            "book" | "6x9" | "mobile" => Ok(Preset::Book),
            _ => Err(format!("Unknown page preset: {}", s)),
        }
    }
}

/// Everything that differs between the output variants. All lengths are in
/// points; the logo width is in display pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub preset: Preset,
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
    pub header_distance: f32,
    pub footer_distance: f32,
    pub logo_width_px: u32,
}

impl PageGeometry {
    pub fn wide() -> Self {
        Self {
            preset: Preset::Wide,
            width: 595.3,
            height: 841.9,
            margins: Margins::all(72.0),
            header_distance: 36.0,
            footer_distance: 36.0,
            logo_width_px: 180,
        }
    }

    pub fn book() -> Self {
        Self {
            preset: Preset::Book,
            width: 432.0,
            height: 648.0,
            margins: Margins::symmetric(54.0, 45.0),
            header_distance: 27.0,
            footer_distance: 27.0,
            logo_width_px: 150,
        }
    }

    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Wide => Self::wide(),
            Preset::Book => Self::book(),
        }
    }

    /// Width available to body text between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }

    /// Display size of the logo: the preset's width with the height derived
    /// from the artwork's aspect ratio.
    pub fn logo_extent(&self) -> PixelExtent {
        PixelExtent::fit_width(self.logo_width_px, LOGO_SOURCE_WIDTH, LOGO_SOURCE_HEIGHT)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::wide()
    }
}
