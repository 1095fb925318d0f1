use flochat::config;
use flochat::gui::app::AppModel;
use flochat::sys::runtime;
use flokit::widget::Widget;
use gtk4 as gtk;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();
    log::info!(
        "Starting with {} link(s), {} arrangement",
        config.social_links.len(),
        config.animation_style
    );
    let widget = Widget::new(config);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    // Every embedding runs its own instance with its own config.
    let application = gtk::Application::builder()
        .application_id("org.troia.flochat")
        .flags(gtk::gio::ApplicationFlags::NON_UNIQUE)
        .build();
    let app = RelmApp::from_app(application);

    app.run::<AppModel>((widget, rx));
}
