use flokit::theme::ShadowLayer;
use gtk::gdk;
use gtk4 as gtk;
use palette::{Srgb, Srgba};

/// Pill drawn beside an item when labels are on.
pub struct LabelStyle {
    pub background: Srgba<f64>,
    pub border: Srgba<f64>,
    pub text: Srgba<f64>,
    pub shadow: ShadowLayer,
    pub font_size: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub radius: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            background: Srgba::new(1.0, 1.0, 1.0, 1.0),
            border: rgba(Srgb::new(0xE2, 0xE8, 0xF0), 1.0),
            text: rgba(Srgb::new(0x1A, 0x20, 0x2C), 1.0),
            shadow: ShadowLayer {
                offset_y: 1.0,
                blur: 2.0,
                spread: 0.0,
                alpha: 0.05,
            },
            font_size: 11.0,
            padding_x: 8.0,
            padding_y: 4.0,
            radius: 4.0,
        }
    }
}

pub fn rgba(color: Srgb<u8>, alpha: f64) -> Srgba<f64> {
    let c: Srgb<f64> = color.into_format();
    Srgba::new(c.red, c.green, c.blue, alpha)
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.flochat-window, .flochat-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
