use crate::icon::Glyph;
use crate::platform::Platform;
use crate::theme::{ColorScheme, CustomColors};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Distance between the screen edge and the toggle button.
pub const HORIZONTAL_INSET: f64 = 32.0;
pub const DEFAULT_BOTTOM_OFFSET: f64 = 32.0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// Pixel dimensions for one size class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    pub button: f64,
    pub icon: f64,
    pub item_icon: f64,
}

impl Size {
    pub fn spec(&self) -> SizeSpec {
        let (button, icon, item_icon) = match self {
            Self::Sm => (40.0, 16.0, 14.0),
            Self::Md => (48.0, 20.0, 16.0),
            Self::Lg => (56.0, 24.0, 18.0),
            Self::Xl => (64.0, 28.0, 20.0),
        };
        SizeSpec {
            button,
            icon,
            item_icon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Horizontal direction items spread in: always away from the screen edge.
    pub fn sign(&self) -> f64 {
        match self {
            Self::BottomRight => -1.0,
            Self::BottomLeft => 1.0,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            Self::BottomRight => Side::Right,
            Self::BottomLeft => Side::Left,
        }
    }

    /// Labels sit on the inner side of their button.
    pub fn label_side(&self) -> Side {
        match self {
            Self::BottomRight => Side::Left,
            Self::BottomLeft => Side::Right,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    #[default]
    Stack,
    Fan,
    Grid,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ToggleIcon {
    #[default]
    Share,
    Message,
    Zap,
    Sparkles,
    Grid,
}

impl ToggleIcon {
    pub fn glyph(&self) -> Glyph {
        match self {
            Self::Share => Glyph::Share,
            Self::Message => Glyph::MessageCircle,
            Self::Zap => Glyph::Zap,
            Self::Sparkles => Glyph::Sparkles,
            Self::Grid => Glyph::Grid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Pinned to the output, above every other surface.
    Fixed,
    /// Placed inside its own container window.
    Absolute,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct LinkUrl(String);

crate::impl_string_newtype!(LinkUrl);

#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct LinkLabel(String);

crate::impl_string_newtype!(LinkLabel);

/// One expanded item. Duplicates are allowed; order is layout order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub platform: Platform,
    pub url: LinkUrl,
    #[serde(default)]
    pub label: LinkLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    #[serde(deserialize_with = "lenient")]
    pub size: Size,
    #[serde(deserialize_with = "lenient")]
    pub position: Corner,
    pub bottom_offset: f64,
    pub color: ColorScheme,
    pub custom_colors: Option<CustomColors>,
    pub social_links: Vec<LinkEntry>,
    pub show_labels: bool,
    #[serde(deserialize_with = "lenient")]
    pub animation_style: Arrangement,
    #[serde(deserialize_with = "lenient")]
    pub toggle_icon: ToggleIcon,
    pub brand_colors: bool,
    pub is_absolute: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            size: Size::default(),
            position: Corner::default(),
            bottom_offset: DEFAULT_BOTTOM_OFFSET,
            color: ColorScheme::default(),
            custom_colors: None,
            social_links: Vec::new(),
            show_labels: false,
            animation_style: Arrangement::default(),
            toggle_icon: ToggleIcon::default(),
            brand_colors: false,
            is_absolute: false,
        }
    }
}

/// Unrecognized values fall back to the default instead of failing the load.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default + fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    let parsed = match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s.trim().parse().ok(),
        Raw::Other(_) => None,
    };
    Ok(parsed.unwrap_or_else(|| {
        let fallback = T::default();
        log::warn!("Unrecognized option value, using '{}'", fallback);
        fallback
    }))
}

/// Fully defaulted values the renderer works from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub size: SizeSpec,
    pub corner: Corner,
    pub inset: f64,
    pub bottom_offset: f64,
    pub arrangement: Arrangement,
    pub toggle_icon: ToggleIcon,
    pub show_labels: bool,
    pub positioning: Positioning,
}

impl WidgetConfig {
    pub fn resolve(&self) -> RenderParams {
        RenderParams {
            size: self.size.spec(),
            corner: self.position,
            inset: HORIZONTAL_INSET,
            bottom_offset: self.bottom_offset,
            arrangement: self.animation_style,
            toggle_icon: self.toggle_icon,
            show_labels: self.show_labels,
            positioning: if self.is_absolute {
                Positioning::Absolute
            } else {
                Positioning::Fixed
            },
        }
    }
}
