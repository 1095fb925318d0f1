pub mod icons;
pub mod view;

pub use icons::IconCache;
pub use view::draw;

pub const ICON_OVERSAMPLE: f64 = 2.0; // load icons at 2x for HiDPI outputs
pub const LABEL_FONT: &str = "Sans";
