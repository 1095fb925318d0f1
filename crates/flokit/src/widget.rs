//! One floating action button instance: configuration, open state, motion
//! and pointer feedback, composed into a drawable [`Scene`].

use crate::config::{LinkEntry, RenderParams, Side, WidgetConfig};
use crate::icon::Glyph;
use crate::layout::{self, Canvas, HOVER_SCALE, Point};
use crate::motion::Choreography;
use crate::state::OpenState;
use crate::theme::{Button, ResolvedStyle, resolve_style};

pub const PRESSED_SCALE: f64 = 0.92;

/// What sits under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Toggle,
    Item(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleView {
    pub center: Point,
    pub diameter: f64,
    pub style: ResolvedStyle,
    pub glyph: Glyph,
    pub icon_px: f64,
    pub rotation_deg: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelView<'a> {
    pub text: &'a str,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemView<'a> {
    pub index: usize,
    pub link: &'a LinkEntry,
    pub center: Point,
    pub diameter: f64,
    pub style: ResolvedStyle,
    pub glyph: Glyph,
    pub icon_px: f64,
    pub scale: f64,
    pub opacity: f64,
    pub label: Option<LabelView<'a>>,
}

/// Everything needed to paint one frame, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<'a> {
    pub items: Vec<ItemView<'a>>,
    pub toggle: ToggleView,
}

pub struct Widget {
    config: WidgetConfig,
    params: RenderParams,
    state: OpenState,
    motion: Choreography,
    hovered: Option<Target>,
    pressed: bool,
}

impl Widget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            params: config.resolve(),
            motion: Choreography::new(config.social_links.len()),
            config,
            state: OpenState::default(),
            hovered: None,
            pressed: false,
        }
    }

    /// Swap in a new config without remounting; the open state survives.
    pub fn reconfigure(&mut self, config: WidgetConfig) {
        self.params = config.resolve();
        self.motion.resize(config.social_links.len(), self.state);
        self.config = config;
        self.hovered = None;
        self.pressed = false;
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    pub fn toggle(&mut self) -> OpenState {
        let state = self.state.toggle();
        self.motion.play(state);
        log::debug!("Widget {}", state);
        state
    }

    pub fn link(&self, index: usize) -> Option<&LinkEntry> {
        self.config.social_links.get(index)
    }

    pub fn canvas(&self) -> Canvas {
        let links = &self.config.social_links;
        let label_width = links
            .iter()
            .map(|link| layout::label_width(link.label.as_str()))
            .fold(0.0, f64::max);
        Canvas::compute(&self.params, links.len(), label_width)
    }

    /// Advance animations by `dt` seconds; true while anything still moves.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.motion.advance(dt)
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    pub fn hovered(&self) -> Option<Target> {
        self.hovered
    }

    /// Returns true when the hover target changed.
    pub fn set_hovered(&mut self, target: Option<Target>) -> bool {
        let changed = self.hovered != target;
        self.hovered = target;
        changed
    }

    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        let changed = self.pressed != pressed;
        self.pressed = pressed;
        changed
    }

    pub fn scene(&self, origin: Point) -> Scene<'_> {
        let size = self.params.size;
        let total = self.config.social_links.len();

        let items = self
            .config
            .social_links
            .iter()
            .enumerate()
            .filter_map(|(index, link)| {
                let motion = self.motion.item(index).filter(|m| m.is_mounted())?;
                let offset = layout::offset(
                    index,
                    total,
                    self.params.arrangement,
                    self.params.corner,
                );
                let hover = if self.hovered == Some(Target::Item(index)) {
                    HOVER_SCALE
                } else {
                    1.0
                };
                let label = (self.params.show_labels && !link.label.is_empty()).then(|| {
                    LabelView {
                        text: link.label.as_str(),
                        side: self.params.corner.label_side(),
                    }
                });
                Some(ItemView {
                    index,
                    link,
                    center: origin.offset_by(offset, motion.progress()),
                    diameter: size.button,
                    style: resolve_style(
                        Button::Item(link.platform),
                        self.config.color,
                        self.config.custom_colors.as_ref(),
                        self.config.brand_colors,
                    ),
                    glyph: link.platform.glyph(),
                    icon_px: size.item_icon,
                    scale: motion.scale() * hover,
                    opacity: motion.opacity(),
                    label,
                })
            })
            .collect();

        let toggle = ToggleView {
            center: origin,
            diameter: size.button,
            style: resolve_style(
                Button::Toggle,
                self.config.color,
                self.config.custom_colors.as_ref(),
                false,
            ),
            glyph: if self.state.is_open() {
                Glyph::Close
            } else {
                self.params.toggle_icon.glyph()
            },
            icon_px: size.icon,
            rotation_deg: self.motion.rotation_deg(),
            scale: if self.pressed { PRESSED_SCALE } else { 1.0 },
        };

        Scene { items, toggle }
    }

    /// Topmost target at `point`. Closing items no longer take clicks.
    pub fn hit_test(&self, origin: Point, point: Point) -> Option<Target> {
        let scene = self.scene(origin);
        if point.distance(scene.toggle.center) <= scene.toggle.diameter / 2.0 {
            return Some(Target::Toggle);
        }
        if !self.state.is_open() {
            return None;
        }
        scene
            .items
            .iter()
            .rev()
            .find(|item| point.distance(item.center) <= item.diameter / 2.0 * item.scale)
            .map(|item| Target::Item(item.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Arrangement, Corner, LinkLabel, LinkUrl};
    use crate::platform::Platform;
    use crate::theme::{ColorScheme, CustomColors, Fill, Preset};
    use palette::Srgb;

    fn link(platform: Platform, label: &str) -> LinkEntry {
        LinkEntry {
            platform,
            url: LinkUrl::new(format!("https://example.com/{}", platform)),
            label: LinkLabel::new(label),
        }
    }

    fn five_links() -> Vec<LinkEntry> {
        vec![
            link(Platform::Instagram, "Instagram"),
            link(Platform::Twitter, "Twitter"),
            link(Platform::Github, "GitHub"),
            link(Platform::Email, "Mail"),
            link(Platform::Phone, ""),
        ]
    }

    fn settle(widget: &mut Widget) {
        for _ in 0..180 {
            widget.advance(1.0 / 60.0);
        }
        assert!(!widget.is_animating());
    }

    #[test]
    fn test_closed_scene_has_only_toggle() {
        let widget = Widget::new(WidgetConfig {
            social_links: five_links(),
            ..WidgetConfig::default()
        });
        let scene = widget.scene(Point::default());
        assert!(scene.items.is_empty());
        assert_eq!(scene.toggle.glyph, Glyph::Share);
        assert_eq!(scene.toggle.rotation_deg, 0.0);
    }

    #[test]
    fn test_open_stack_positions() {
        let mut widget = Widget::new(WidgetConfig {
            social_links: five_links(),
            animation_style: Arrangement::Stack,
            ..WidgetConfig::default()
        });
        assert_eq!(widget.toggle(), OpenState::Open);
        settle(&mut widget);

        let scene = widget.scene(Point::default());
        assert_eq!(scene.items.len(), 5);
        let ys: Vec<f64> = scene.items.iter().map(|i| i.center.y).collect();
        assert_eq!(ys, vec![-60.0, -114.0, -168.0, -222.0, -276.0]);
        assert!(scene.items.iter().all(|i| i.center.x == 0.0));
        assert!(scene.items.iter().all(|i| i.opacity == 1.0 && i.scale == 1.0));
        assert_eq!(scene.toggle.glyph, Glyph::Close);
        assert_eq!(scene.toggle.rotation_deg, 90.0);
    }

    #[test]
    fn test_items_are_relative_to_origin() {
        let mut widget = Widget::new(WidgetConfig {
            social_links: five_links(),
            animation_style: Arrangement::Grid,
            position: Corner::BottomLeft,
            ..WidgetConfig::default()
        });
        widget.toggle();
        settle(&mut widget);

        let origin = Point::new(100.0, 400.0);
        let scene = widget.scene(origin);
        assert_eq!(scene.toggle.center, origin);
        assert_eq!(scene.items[1].center, Point::new(154.0, 346.0));
    }

    #[test]
    fn test_close_unmounts_items() {
        let mut widget = Widget::new(WidgetConfig {
            social_links: five_links(),
            ..WidgetConfig::default()
        });
        widget.toggle();
        settle(&mut widget);
        widget.toggle();
        assert_eq!(widget.scene(Point::default()).items.len(), 5);
        settle(&mut widget);
        assert!(widget.scene(Point::default()).items.is_empty());
    }

    #[test]
    fn test_labels_follow_flag_and_corner() {
        let mut widget = Widget::new(WidgetConfig {
            social_links: five_links(),
            show_labels: true,
            ..WidgetConfig::default()
        });
        widget.toggle();
        settle(&mut widget);

        let scene = widget.scene(Point::default());
        let label = scene.items[2].label.as_ref().unwrap();
        assert_eq!(label.text, "GitHub");
        assert_eq!(label.side, Side::Left);
        assert!(scene.items[4].label.is_none());

        widget.reconfigure(WidgetConfig {
            social_links: five_links(),
            show_labels: false,
            ..WidgetConfig::default()
        });
        assert!(widget.scene(Point::default()).items[0].label.is_none());
    }

    #[test]
    fn test_brand_colors_only_on_items() {
        let mut widget = Widget::new(WidgetConfig {
            social_links: five_links(),
            color: ColorScheme::Custom,
            custom_colors: Some(CustomColors {
                primary: "#000000".parse().unwrap(),
                secondary: "#111111".parse().unwrap(),
                hover: "#222222".parse().unwrap(),
            }),
            brand_colors: true,
            ..WidgetConfig::default()
        });
        widget.toggle();

        let scene = widget.scene(Point::default());
        assert_eq!(scene.toggle.style.fill, Fill::Solid(Srgb::new(0, 0, 0)));
        assert_eq!(
            scene.items[0].style.fill,
            Fill::Solid(Platform::Instagram.brand_color())
        );
    }

    #[test]
    fn test_hit_testing() {
        let mut widget = Widget::new(WidgetConfig {
            social_links: five_links(),
            ..WidgetConfig::default()
        });
        let origin = Point::new(200.0, 400.0);
        assert_eq!(
            widget.hit_test(origin, Point::new(210.0, 410.0)),
            Some(Target::Toggle)
        );
        assert_eq!(widget.hit_test(origin, Point::new(200.0, 340.0)), None);

        widget.toggle();
        settle(&mut widget);
        assert_eq!(
            widget.hit_test(origin, Point::new(200.0, 340.0)),
            Some(Target::Item(0))
        );
        assert_eq!(
            widget.hit_test(origin, Point::new(205.0, 290.0)),
            Some(Target::Item(1))
        );
        assert_eq!(widget.hit_test(origin, Point::new(300.0, 300.0)), None);

        widget.toggle();
        assert_eq!(widget.hit_test(origin, Point::new(200.0, 340.0)), None);
    }

    #[test]
    fn test_hover_and_press_feedback() {
        let mut widget = Widget::new(WidgetConfig {
            social_links: five_links(),
            ..WidgetConfig::default()
        });
        widget.toggle();
        settle(&mut widget);

        assert!(widget.set_hovered(Some(Target::Item(3))));
        assert!(!widget.set_hovered(Some(Target::Item(3))));
        assert!(widget.set_pressed(true));

        let scene = widget.scene(Point::default());
        assert_eq!(scene.items[3].scale, HOVER_SCALE);
        assert_eq!(scene.items[2].scale, 1.0);
        assert_eq!(scene.toggle.scale, PRESSED_SCALE);
    }

    #[test]
    fn test_reconfigure_keeps_state() {
        let mut widget = Widget::new(WidgetConfig::default());
        widget.toggle();
        widget.reconfigure(WidgetConfig {
            social_links: five_links(),
            color: ColorScheme::Preset(Preset::Teal),
            ..WidgetConfig::default()
        });
        assert_eq!(widget.state(), OpenState::Open);
        settle(&mut widget);
        assert_eq!(widget.scene(Point::default()).items.len(), 5);
    }
}
