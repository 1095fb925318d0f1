use flokit::config::LinkUrl;
use gtk::gio;
use gtk4 as gtk;

/// Hands the URL, unvalidated, to the desktop's default handler. GIO owns
/// and reaps whatever process it starts.
pub fn open_url(url: &LinkUrl) -> Result<(), glib::Error> {
    gio::AppInfo::launch_default_for_uri(url.as_str(), None::<&gio::AppLaunchContext>)
}
