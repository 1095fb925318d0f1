/// Events delivered to the UI thread from background services.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigReload,
}
