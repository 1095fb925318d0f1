use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

/// Background services live on their own tokio runtime so the GTK main
/// loop never blocks on file watching.
pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime, hot reload disabled: {}", e);
                return;
            }
        };

        rt.block_on(async {
            crate::config::run_async_watcher(tx).await;
        });
    });
}
