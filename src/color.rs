use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::table::ColorTable;

/// A solid color.
///
/// Channels are `u32` rather than `u8` because `rgb()` specs are passed
/// through without clamping: `rgb(999, 0, 0)` decodes to `r = 999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGB {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl RGB {
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        RGB { r, g, b }
    }

    /// Channels clamped into `u8` range, for display purposes only.
    pub fn to_rgb8(self) -> [u8; 3] {
        let clamp = |c: u32| c.min(255) as u8;
        [clamp(self.r), clamp(self.g), clamp(self.b)]
    }

    /// Format as a `#rrggbb` hex string (out-of-range channels are clamped).
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        csscolorparser::Color::from_rgba8(r, g, b, 255).to_css_hex()
    }
}

/// Formats as a CSS-style `rgb(r,g,b)` spec, which `decode_spec` reads back.
impl fmt::Display for RGB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgb\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)")
        .expect("rgb() pattern is valid")
});

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$")
        .expect("hex pattern is valid")
});

/// Decode an explicit color spec, with no guessing:
/// - a name present in `table` (exact, case-sensitive)
/// - `rgb(r, g, b)` with any whitespace, components unclamped
/// - 6-digit hex, with or without a leading `#`
///
/// Returns `None` when the spec has none of these forms.
pub fn decode_spec(spec: &str, table: &ColorTable) -> Option<RGB> {
    if let Some(rgb) = table.get(spec) {
        return Some(rgb);
    }

    if let Some(caps) = RGB_FUNCTION.captures(spec) {
        // Components too large for u32 are not a color at all
        let r = caps[1].parse().ok()?;
        let g = caps[2].parse().ok()?;
        let b = caps[3].parse().ok()?;
        return Some(RGB { r, g, b });
    }

    if let Some(caps) = HEX_COLOR.captures(spec) {
        let r = u32::from_str_radix(&caps[1], 16).ok()?;
        let g = u32::from_str_radix(&caps[2], 16).ok()?;
        let b = u32::from_str_radix(&caps[3], 16).ok()?;
        return Some(RGB { r, g, b });
    }

    None
}
