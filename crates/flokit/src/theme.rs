use crate::layout::Point;
use crate::platform::Platform;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Direction of every preset gradient, in CSS degrees.
pub const GRADIENT_ANGLE_DEG: f64 = 135.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, EnumIter, StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Preset {
    #[default]
    Blue,
    Emerald,
    Rose,
    Amber,
    Violet,
    Indigo,
    Cyan,
    Slate,
    Orange,
    Pink,
    Teal,
    Lime,
    Gold,
    Crimson,
    Fuchsia,
}

impl Preset {
    /// Two-stop gradient as (from, to).
    pub fn gradient(&self) -> (Srgb<u8>, Srgb<u8>) {
        let (from, to) = match self {
            Self::Blue => ((0x1E, 0x40, 0xAF), (0x3B, 0x82, 0xF6)),
            Self::Emerald => ((0x06, 0x5F, 0x46), (0x10, 0xB9, 0x81)),
            Self::Rose => ((0x9F, 0x12, 0x39), (0xF4, 0x3F, 0x5E)),
            Self::Amber => ((0x92, 0x40, 0x0E), (0xF5, 0x9E, 0x0B)),
            Self::Violet => ((0x5B, 0x21, 0xB6), (0x8B, 0x5C, 0xF6)),
            Self::Indigo => ((0x37, 0x30, 0xA3), (0x63, 0x66, 0xF1)),
            Self::Cyan => ((0x0E, 0x74, 0x90), (0x06, 0xB6, 0xD4)),
            Self::Slate => ((0x1E, 0x29, 0x3B), (0x47, 0x55, 0x69)),
            Self::Orange => ((0x9A, 0x34, 0x12), (0xF9, 0x73, 0x16)),
            Self::Pink => ((0x9D, 0x17, 0x4D), (0xEC, 0x48, 0x99)),
            Self::Teal => ((0x0D, 0x94, 0x88), (0x2D, 0xD4, 0xBF)),
            Self::Lime => ((0x4D, 0x7C, 0x0F), (0xA3, 0xE6, 0x35)),
            Self::Gold => ((0xA1, 0x62, 0x07), (0xEA, 0xB3, 0x08)),
            Self::Crimson => ((0x99, 0x1B, 0x1B), (0xEF, 0x44, 0x44)),
            Self::Fuchsia => ((0x86, 0x19, 0x8F), (0xE8, 0x79, 0xF9)),
        };
        (Srgb::from_components(from), Srgb::from_components(to))
    }
}

/// The `color` option: a preset name or the `custom` sentinel.
///
/// Parsing never fails; names outside the preset table resolve to blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum ColorScheme {
    Preset(Preset),
    Custom,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::Preset(Preset::Blue)
    }
}

impl FromStr for ColorScheme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("custom") {
            return Ok(Self::Custom);
        }
        Ok(Self::Preset(s.parse().unwrap_or_else(|_| {
            log::warn!("Unknown color preset '{}', falling back to blue", s);
            Preset::Blue
        })))
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(p) => write!(f, "{}", p),
            Self::Custom => f.write_str("custom"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid color '{0}': expected #rrggbb or a CSS color name")]
pub struct ParseColorError(pub String);

/// A color written in the config as hex or a CSS name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct CssColor(Srgb<u8>);

impl CssColor {
    pub fn new(rgb: Srgb<u8>) -> Self {
        Self(rgb)
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.0
    }
}

impl FromStr for CssColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<Srgb<u8>>()
            .ok()
            .or_else(|| palette::named::from_str(&s.to_ascii_lowercase()))
            .map(Self)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(self.0))
    }
}

pub fn to_hex(c: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", c.red, c.green, c.blue)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: CssColor,
    pub secondary: CssColor,
    /// Accepted for compatibility; buttons do not change fill on hover.
    pub hover: CssColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(Srgb<u8>),
    Gradient { from: Srgb<u8>, to: Srgb<u8> },
}

impl Fill {
    pub fn from_preset(preset: Preset) -> Self {
        let (from, to) = preset.gradient();
        Self::Gradient { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub alpha: f64,
}

const fn layer(offset_y: f64, blur: f64, spread: f64, alpha: f64) -> ShadowLayer {
    ShadowLayer {
        offset_y,
        blur,
        spread,
        alpha,
    }
}

pub const TOGGLE_SHADOW: &[ShadowLayer] = &[
    layer(20.0, 25.0, -5.0, 0.1),
    layer(10.0, 10.0, -5.0, 0.04),
];
pub const ITEM_SHADOW: &[ShadowLayer] = &[
    layer(10.0, 15.0, -3.0, 0.1),
    layer(4.0, 6.0, -2.0, 0.05),
];

/// Which button a style is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Toggle,
    Item(Platform),
}

/// Background plus the fixed shadow of one circular button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub fill: Fill,
    pub shadow: &'static [ShadowLayer],
}

/// Resolves the fill for one button.
///
/// Priority:
/// 1. Brand color (items only, when `brand_colors` is set)
/// 2. Custom primary (scheme is `custom` and colors were supplied)
/// 3. Preset gradient
pub fn resolve_style(
    button: Button,
    scheme: ColorScheme,
    custom: Option<&CustomColors>,
    brand_colors: bool,
) -> ResolvedStyle {
    let fill = match (button, scheme, custom) {
        (Button::Item(platform), _, _) if brand_colors => Fill::Solid(platform.brand_color()),
        (_, ColorScheme::Custom, Some(colors)) => Fill::Solid(colors.primary.rgb()),
        (_, ColorScheme::Preset(preset), _) => Fill::from_preset(preset),
        (_, ColorScheme::Custom, None) => Fill::from_preset(Preset::Blue),
    };
    let shadow = match button {
        Button::Toggle => TOGGLE_SHADOW,
        Button::Item(_) => ITEM_SHADOW,
    };
    ResolvedStyle { fill, shadow }
}

/// Start and end of a CSS-style linear gradient across a square box.
pub fn gradient_line(center: Point, size: f64) -> (Point, Point) {
    let angle = GRADIENT_ANGLE_DEG.to_radians();
    let (dx, dy) = (angle.sin(), -angle.cos());
    let half = (size * dx.abs() + size * dy.abs()) / 2.0;
    (
        Point::new(center.x - dx * half, center.y - dy * half),
        Point::new(center.x + dx * half, center.y + dy * half),
    )
}
