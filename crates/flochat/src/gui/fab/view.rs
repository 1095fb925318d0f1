use super::{IconCache, LABEL_FONT};
use crate::gui::theme::LabelStyle;
use cairo::{Context, LinearGradient, RadialGradient};
use flokit::config::Side;
use flokit::icon::Glyph;
use flokit::layout::{LABEL_GAP, Point};
use flokit::theme::{Fill, ResolvedStyle, ShadowLayer, gradient_line};
use flokit::widget::{ItemView, LabelView, Scene, ToggleView};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use std::f64::consts::PI;

/// A circular button drawn around the current origin.
struct ButtonRenderer<'a> {
    diameter: f64,
    style: &'a ResolvedStyle,
    glyph: Glyph,
    icon_px: f64,
}

impl<'a> ButtonRenderer<'a> {
    fn draw(&self, cr: &Context, icons: &mut IconCache) -> Result<(), cairo::Error> {
        let radius = self.diameter / 2.0;
        for layer in self.style.shadow {
            draw_shadow(cr, radius, layer)?;
        }
        self.draw_fill(cr, radius)?;
        match icons.get(self.glyph, self.icon_px) {
            Some(pixbuf) => draw_icon(cr, pixbuf, self.icon_px),
            None => draw_text(cr, self.glyph.fallback_text(), self.icon_px),
        }
    }

    fn draw_fill(&self, cr: &Context, radius: f64) -> Result<(), cairo::Error> {
        cr.new_path();
        cr.arc(0.0, 0.0, radius, 0.0, 2.0 * PI);
        match self.style.fill {
            Fill::Solid(color) => {
                let c: palette::Srgb<f64> = color.into_format();
                cr.set_source_rgb(c.red, c.green, c.blue);
            }
            Fill::Gradient { from, to } => {
                let (start, end) = gradient_line(Point::default(), self.diameter);
                let gradient = LinearGradient::new(start.x, start.y, end.x, end.y);
                for (offset, color) in [(0.0, from), (1.0, to)] {
                    let c: palette::Srgb<f64> = color.into_format();
                    gradient.add_color_stop_rgb(offset, c.red, c.green, c.blue);
                }
                cr.set_source(&gradient)?;
            }
        }
        cr.fill()
    }
}

/// Soft drop shadow; the blur is a radial falloff around the spread edge.
fn draw_shadow(cr: &Context, radius: f64, layer: &ShadowLayer) -> Result<(), cairo::Error> {
    let edge = radius + layer.spread;
    let inner = (edge - layer.blur / 2.0).max(0.0);
    let outer = edge + layer.blur / 2.0;

    let gradient = RadialGradient::new(0.0, layer.offset_y, inner, 0.0, layer.offset_y, outer);
    gradient.add_color_stop_rgba(0.0, 0.0, 0.0, 0.0, layer.alpha);
    gradient.add_color_stop_rgba(1.0, 0.0, 0.0, 0.0, 0.0);

    cr.new_path();
    cr.arc(0.0, layer.offset_y, outer, 0.0, 2.0 * PI);
    cr.set_source(&gradient)?;
    cr.fill()
}

/// Paints the icon's silhouette in white, centered on the origin.
fn draw_icon(cr: &Context, pixbuf: &Pixbuf, px: f64) -> Result<(), cairo::Error> {
    let (w, h) = (pixbuf.width() as f64, pixbuf.height() as f64);
    let scale = px / w.max(h);

    cr.save()?;
    cr.translate(-w * scale / 2.0, -h * scale / 2.0);
    cr.scale(scale, scale);
    cr.push_group();
    cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
    cr.paint()?;
    let mask = cr.pop_group()?;
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.mask(&mask)?;
    cr.restore()
}

fn draw_text(cr: &Context, text: &str, px: f64) -> Result<(), cairo::Error> {
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.select_font_face(LABEL_FONT, cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(px);
    let ext = cr.text_extents(text)?;
    cr.move_to(
        -ext.x_bearing() - ext.width() / 2.0,
        -ext.y_bearing() - ext.height() / 2.0,
    );
    cr.show_text(text)
}

fn rounded_rect(cr: &Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

fn draw_label(
    cr: &Context,
    label: &LabelView<'_>,
    radius: f64,
    style: &LabelStyle,
) -> Result<(), cairo::Error> {
    cr.select_font_face(LABEL_FONT, cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(style.font_size);
    let text = cr.text_extents(label.text)?;
    let font = cr.font_extents()?;

    let w = text.x_advance() + 2.0 * style.padding_x;
    let h = font.ascent() + font.descent() + 2.0 * style.padding_y;
    let x = match label.side {
        Side::Left => -radius - LABEL_GAP - w,
        Side::Right => radius + LABEL_GAP,
    };
    let y = -h / 2.0;

    let shadow = &style.shadow;
    cr.new_path();
    rounded_rect(cr, x, y + shadow.offset_y, w, h, style.radius);
    cr.set_source_rgba(0.0, 0.0, 0.0, shadow.alpha);
    cr.fill()?;

    cr.new_path();
    rounded_rect(cr, x + 0.5, y + 0.5, w - 1.0, h - 1.0, style.radius);
    let (r, g, b, a) = style.background.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.fill_preserve()?;
    let (r, g, b, a) = style.border.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.set_line_width(1.0);
    cr.stroke()?;

    let (r, g, b, a) = style.text.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.move_to(x + style.padding_x, y + style.padding_y + font.ascent());
    cr.show_text(label.text)
}

fn draw_item(
    cr: &Context,
    item: &ItemView<'_>,
    icons: &mut IconCache,
    label_style: &LabelStyle,
) -> Result<(), cairo::Error> {
    if item.opacity <= 0.0 {
        return Ok(());
    }

    cr.save()?;
    cr.translate(item.center.x, item.center.y);
    cr.scale(item.scale, item.scale);
    cr.push_group();

    ButtonRenderer {
        diameter: item.diameter,
        style: &item.style,
        glyph: item.glyph,
        icon_px: item.icon_px,
    }
    .draw(cr, icons)?;
    if let Some(label) = &item.label {
        draw_label(cr, label, item.diameter / 2.0, label_style)?;
    }

    cr.pop_group_to_source()?;
    cr.paint_with_alpha(item.opacity)?;
    cr.restore()
}

fn draw_toggle(
    cr: &Context,
    toggle: &ToggleView,
    icons: &mut IconCache,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(toggle.center.x, toggle.center.y);
    cr.scale(toggle.scale, toggle.scale);
    cr.rotate(toggle.rotation_deg.to_radians());
    ButtonRenderer {
        diameter: toggle.diameter,
        style: &toggle.style,
        glyph: toggle.glyph,
        icon_px: toggle.icon_px,
    }
    .draw(cr, icons)?;
    cr.restore()
}

/// Items first, in order; the toggle always on top.
pub fn draw(
    cr: &Context,
    scene: &Scene<'_>,
    icons: &mut IconCache,
    label_style: &LabelStyle,
) -> Result<(), cairo::Error> {
    for item in &scene.items {
        draw_item(cr, item, icons, label_style)?;
    }
    draw_toggle(cr, &scene.toggle, icons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flokit::config::{LinkEntry, LinkLabel, LinkUrl, WidgetConfig};
    use flokit::platform::Platform;
    use flokit::widget::Widget;

    fn render(widget: &Widget) -> cairo::ImageSurface {
        let canvas = widget.canvas();
        let (width, height) = canvas.pixel_size();
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        let cr = Context::new(&surface).unwrap();
        let mut icons = IconCache::default();
        draw(
            &cr,
            &widget.scene(canvas.anchor),
            &mut icons,
            &LabelStyle::default(),
        )
        .unwrap();
        drop(cr);
        surface
    }

    fn alpha_at(surface: &mut cairo::ImageSurface, p: Point) -> u8 {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        data[p.y as usize * stride + p.x as usize * 4 + 3]
    }

    #[test]
    fn test_renders_toggle_and_open_items() {
        let mut widget = Widget::new(WidgetConfig {
            social_links: vec![LinkEntry {
                platform: Platform::Github,
                url: LinkUrl::new("https://github.com"),
                label: LinkLabel::new("GitHub"),
            }],
            ..WidgetConfig::default()
        });
        let canvas = widget.canvas();
        let item_center = Point::new(canvas.anchor.x, canvas.anchor.y - 60.0);

        let mut closed = render(&widget);
        assert_eq!(alpha_at(&mut closed, canvas.anchor), 255);
        assert_eq!(alpha_at(&mut closed, item_center), 0);

        widget.toggle();
        for _ in 0..120 {
            widget.advance(1.0 / 60.0);
        }
        let mut open = render(&widget);
        assert_eq!(alpha_at(&mut open, item_center), 255);
    }
}
