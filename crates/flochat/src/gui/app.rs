use crate::config;
use crate::events::AppEvent;
use crate::gui::fab::{self, IconCache};
use crate::gui::theme::{self, LabelStyle};
use crate::gui::window;
use crate::sys::launch;
use flokit::config::Positioning;
use flokit::layout::{self, Point};
use flokit::widget::{Target, Widget};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Default size of the container window in absolute mode.
const CONTAINER_SIZE: (i32, i32) = (480, 640);

pub struct AppModel {
    pub widget: Rc<RefCell<Widget>>,
    pub icons: Rc<RefCell<IconCache>>,
    pub positioning: Positioning,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
    ticking: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub enum AppMsg {
    Press(Point),
    Release(Point),
    PointerMove(Point),
    PointerLeave,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

/// Toggle center on a drawing area of the given size.
fn origin(widget: &Widget, positioning: Positioning, width: f64, height: f64) -> Point {
    match positioning {
        Positioning::Fixed => widget
            .canvas()
            .anchor_in(widget.params().corner, width, height),
        Positioning::Absolute => layout::anchor_in(widget.params(), width, height),
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Widget, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Flochat"),
            add_css_class: "flochat-window",

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "flochat-drawing-area",

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::PointerMove(Point::new(x, y)));
                    },
                    connect_leave[sender] => move |_| {
                        sender.input(AppMsg::PointerLeave);
                    }
                },

                add_controller = gtk::GestureClick {
                    set_button: 1, // primary only
                    connect_pressed[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Press(Point::new(x, y)));
                    },
                    connect_released[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Release(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (widget, rx) = init;

        theme::load_css();
        let positioning = widget.params().positioning;
        match positioning {
            Positioning::Fixed => window::init_layer_shell(&root),
            Positioning::Absolute => root.set_default_size(CONTAINER_SIZE.0, CONTAINER_SIZE.1),
        }

        let model = AppModel {
            widget: Rc::new(RefCell::new(widget)),
            icons: Rc::default(),
            positioning,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
            ticking: Rc::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let widget_draw = model.widget.clone();
        let icons = model.icons.clone();
        let label_style = LabelStyle::default();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                let widget = widget_draw.borrow();
                let origin = origin(&widget, positioning, width as f64, height as f64);
                if let Err(e) = fab::draw(
                    cr,
                    &widget.scene(origin),
                    &mut icons.borrow_mut(),
                    &label_style,
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });

        if positioning == Positioning::Fixed {
            let widget_region = model.widget.clone();
            let root_region = root.clone();
            widgets.drawing_area.connect_resize(move |_, _, _| {
                let widget = widget_region.borrow();
                window::sync_input_region(
                    &root_region,
                    widget.params(),
                    &widget.canvas(),
                    widget.state(),
                );
            });
        }

        model.apply_placement();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Press(point) => {
                let on_toggle = self.target_at(point) == Some(Target::Toggle);
                if self.widget.borrow_mut().set_pressed(on_toggle) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Release(point) => {
                self.widget.borrow_mut().set_pressed(false);
                match self.target_at(point) {
                    Some(Target::Toggle) => self.toggle(),
                    Some(Target::Item(index)) => self.activate(index),
                    None => {}
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::PointerMove(point) => {
                let target = self.target_at(point);
                self.drawing_area
                    .set_cursor_from_name(target.map(|_| "pointer"));
                if self.widget.borrow_mut().set_hovered(target) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::PointerLeave => {
                let mut widget = self.widget.borrow_mut();
                let hover_changed = widget.set_hovered(None);
                if widget.set_pressed(false) || hover_changed {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    if new_config.is_absolute != (self.positioning == Positioning::Absolute) {
                        log::warn!("is_absolute changes take effect after a restart");
                    }
                    self.widget.borrow_mut().reconfigure(new_config);
                    flokit::icon::clear_cache();
                    self.icons.borrow_mut().clear();
                    self.apply_placement();
                    self.ensure_ticking();
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn target_at(&self, point: Point) -> Option<Target> {
        let widget = self.widget.borrow();
        let origin = origin(
            &widget,
            self.positioning,
            self.drawing_area.width() as f64,
            self.drawing_area.height() as f64,
        );
        widget.hit_test(origin, point)
    }

    fn toggle(&self) {
        let state = self.widget.borrow_mut().toggle();
        log::debug!("Toggled {}", state);
        if self.positioning == Positioning::Fixed {
            let widget = self.widget.borrow();
            window::sync_input_region(&self.root, widget.params(), &widget.canvas(), state);
        }
        self.ensure_ticking();
    }

    fn activate(&self, index: usize) {
        let widget = self.widget.borrow();
        let Some(link) = widget.link(index) else {
            return;
        };
        log::debug!("Opening {} link {}", link.platform, link.url);
        if let Err(e) = launch::open_url(&link.url) {
            log::error!("Failed to open '{}': {}", link.url, e);
        }
    }

    /// Layer-shell anchoring, surface size and input region for the
    /// current config. Absolute mode leaves the container window alone.
    fn apply_placement(&self) {
        if self.positioning != Positioning::Fixed {
            return;
        }
        let widget = self.widget.borrow();
        let canvas = widget.canvas();
        window::place(&self.root, widget.params(), &canvas);
        let (width, height) = canvas.pixel_size();
        self.drawing_area.set_content_width(width);
        self.drawing_area.set_content_height(height);
        window::sync_input_region(&self.root, widget.params(), &canvas, widget.state());
    }

    /// Drive animations from the frame clock until everything settles.
    fn ensure_ticking(&self) {
        if self.ticking.replace(true) {
            return;
        }
        let widget = self.widget.clone();
        let ticking = self.ticking.clone();
        let last_frame = Cell::new(None::<i64>);
        self.drawing_area.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let dt = last_frame
                .replace(Some(now))
                .map_or(0.0, |prev| (now - prev) as f64 / 1_000_000.0);
            let active = widget.borrow_mut().advance(dt);
            area.queue_draw();
            if active {
                glib::ControlFlow::Continue
            } else {
                ticking.set(false);
                glib::ControlFlow::Break
            }
        });
    }
}
