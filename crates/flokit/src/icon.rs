use freedesktop_icons::lookup;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Every pictogram the widget can put on a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Instagram,
    Twitter,
    Facebook,
    Linkedin,
    Youtube,
    Github,
    MessageCircle,
    Mail,
    Phone,
    Share,
    Zap,
    Sparkles,
    Grid,
    Close,
}

impl Glyph {
    /// Icon theme names tried in order.
    pub fn icon_names(&self) -> &'static [&'static str] {
        match self {
            Self::Instagram => &["instagram", "im-instagram"],
            Self::Twitter => &["twitter", "im-twitter"],
            Self::Facebook => &["facebook", "im-facebook"],
            Self::Linkedin => &["linkedin", "im-linkedin"],
            Self::Youtube => &["youtube", "im-youtube"],
            Self::Github => &["github", "io.github.shiftey.Desktop"],
            Self::MessageCircle => &["whatsapp", "chat-symbolic", "im-message-new"],
            Self::Mail => &["mail-send-symbolic", "mail-message-new", "email"],
            Self::Phone => &["call-start-symbolic", "phone"],
            Self::Share => &["emblem-shared-symbolic", "send-to-symbolic", "emblem-shared"],
            Self::Zap => &["weather-storm-symbolic", "lightning"],
            Self::Sparkles => &["starred-symbolic", "emblem-favorite"],
            Self::Grid => &["view-app-grid-symbolic", "view-grid-symbolic"],
            Self::Close => &["window-close-symbolic", "window-close"],
        }
    }

    /// Drawn as text when no theme icon resolves.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            Self::Instagram => "IG",
            Self::Twitter => "Tw",
            Self::Facebook => "f",
            Self::Linkedin => "in",
            Self::Youtube => "\u{25B6}",
            Self::Github => "GH",
            Self::MessageCircle => "\u{2026}",
            Self::Mail => "@",
            Self::Phone => "\u{260E}",
            Self::Share => "\u{2197}",
            Self::Zap => "\u{26A1}",
            Self::Sparkles => "\u{2726}",
            Self::Grid => "\u{25A6}",
            Self::Close => "\u{00D7}",
        }
    }
}

type IconCache = RwLock<HashMap<Glyph, Option<PathBuf>>>;

static ICONS: OnceLock<IconCache> = OnceLock::new();

pub fn find_icon_path(glyph: Glyph) -> Option<PathBuf> {
    let cache = ICONS.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(hit) = cache.read().get(&glyph) {
        return hit.clone();
    }

    let found = glyph
        .icon_names()
        .iter()
        .find_map(|name| lookup(name).with_size(64).with_scale(1).find());
    if found.is_none() {
        log::debug!("No theme icon for {:?}, using text fallback", glyph);
    }
    cache.write().insert(glyph, found.clone());
    found
}

/// Drops cached lookups, e.g. after the icon theme changed.
pub fn clear_cache() {
    if let Some(cache) = ICONS.get() {
        cache.write().clear();
    }
}
