use cairo::{RectangleInt, Region};
use flokit::config::{RenderParams, Side};
use flokit::layout::Canvas;
use flokit::state::OpenState;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

pub fn init_layer_shell(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("flochat"));
    window.set_exclusive_zone(-1);
    window.set_keyboard_mode(KeyboardMode::None);
}

/// Pin the surface to the configured corner, sized to fit every item.
pub fn place(window: &gtk::ApplicationWindow, params: &RenderParams, canvas: &Canvas) {
    let (near, far) = match params.corner.side() {
        Side::Right => (Edge::Right, Edge::Left),
        Side::Left => (Edge::Left, Edge::Right),
    };
    window.set_anchor(Edge::Top, false);
    window.set_anchor(Edge::Bottom, true);
    window.set_anchor(far, false);
    window.set_anchor(near, true);
    window.set_margin(far, 0);
    window.set_margin(near, canvas.margin_side.round() as i32);
    window.set_margin(Edge::Bottom, canvas.margin_bottom.round() as i32);
    let (width, height) = canvas.pixel_size();
    window.set_default_size(width, height);
}

/// Clicks outside the returned area fall through to whatever is below.
/// Closed: the toggle only. Open: the whole canvas.
pub fn input_region(
    params: &RenderParams,
    canvas: &Canvas,
    state: OpenState,
    width: i32,
    height: i32,
) -> Region {
    if state.is_open() {
        return Region::create_rectangle(&RectangleInt::new(0, 0, width, height));
    }

    let center = canvas.anchor_in(params.corner, width as f64, height as f64);
    let r = params.size.button / 2.0;
    let d = params.size.button.ceil() as i32 + 1;
    Region::create_rectangle(&RectangleInt::new(
        (center.x - r).floor() as i32,
        (center.y - r).floor() as i32,
        d,
        d,
    ))
}

pub fn sync_input_region(
    window: &gtk::ApplicationWindow,
    params: &RenderParams,
    canvas: &Canvas,
    state: OpenState,
) {
    let Some(surface) = window.surface() else {
        return;
    };
    let region = input_region(params, canvas, state, surface.width(), surface.height());
    surface.set_input_region(&region);
}
