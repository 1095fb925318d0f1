use crate::icon::Glyph;
use palette::Srgb;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// The closed set of link targets the widget knows how to draw.
///
/// Parsing is strict: a tag outside this set fails deserialization, which
/// rejects the whole config instead of rendering an entry with no icon.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Facebook,
    Linkedin,
    Youtube,
    Github,
    Whatsapp,
    Email,
    Phone,
}

impl Platform {
    pub fn brand_color(&self) -> Srgb<u8> {
        match self {
            Self::Instagram => Srgb::new(0xE4, 0x40, 0x5F),
            Self::Twitter => Srgb::new(0x1D, 0xA1, 0xF2),
            Self::Facebook => Srgb::new(0x18, 0x77, 0xF2),
            Self::Linkedin => Srgb::new(0x0A, 0x66, 0xC2),
            Self::Youtube => Srgb::new(0xFF, 0x00, 0x00),
            Self::Github => Srgb::new(0x18, 0x17, 0x17),
            Self::Whatsapp => Srgb::new(0x25, 0xD3, 0x66),
            Self::Email => Srgb::new(0xEA, 0x43, 0x35),
            Self::Phone => Srgb::new(0x34, 0xA8, 0x53),
        }
    }

    pub fn glyph(&self) -> Glyph {
        match self {
            Self::Instagram => Glyph::Instagram,
            Self::Twitter => Glyph::Twitter,
            Self::Facebook => Glyph::Facebook,
            Self::Linkedin => Glyph::Linkedin,
            Self::Youtube => Glyph::Youtube,
            Self::Github => Glyph::Github,
            Self::Whatsapp => Glyph::MessageCircle,
            Self::Email => Glyph::Mail,
            Self::Phone => Glyph::Phone,
        }
    }
}
