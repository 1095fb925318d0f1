use super::ICON_OVERSAMPLE;
use flokit::icon::{self, Glyph};
use gdk_pixbuf::Pixbuf;
use std::collections::HashMap;

/// Theme icons rasterized per glyph and pixel size.
#[derive(Default)]
pub struct IconCache {
    pixbufs: HashMap<(Glyph, i32), Option<Pixbuf>>,
}

impl IconCache {
    pub fn get(&mut self, glyph: Glyph, px: f64) -> Option<&Pixbuf> {
        let size = (px * ICON_OVERSAMPLE).round() as i32;
        self.pixbufs
            .entry((glyph, size))
            .or_insert_with(|| Self::load(glyph, size))
            .as_ref()
    }

    fn load(glyph: Glyph, size: i32) -> Option<Pixbuf> {
        let path = icon::find_icon_path(glyph)?;
        Pixbuf::from_file_at_scale(&path, size, size, true)
            .map_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
            .ok()
    }

    pub fn clear(&mut self) {
        self.pixbufs.clear();
    }
}
