use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use flokit::config::WidgetConfig;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "flochat").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<WidgetConfig, ConfigError> {
    let config_path = get_config_path()?;
    load_config_from(config::File::from(config_path).required(false))
}

fn load_config_from<S>(file: S) -> Result<WidgetConfig, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let s = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix("FLOCHAT"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the user config, writing the commented default on first run.
/// Anything unreadable falls back to the built-in defaults.
pub fn load_or_setup() -> WidgetConfig {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(path) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::error!("Failed to write default config: {}", e),
        }
    }

    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        WidgetConfig::default()
    })
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch(tx).await {
        log::error!("Config watcher error: {}", e);
    }
}

async fn watch(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let config_path = get_config_path()?;
    let Some(config_dir) = config_path.parent().map(PathBuf::from) else {
        return Ok(());
    };
    fs_err::create_dir_all(&config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flokit::config::{Arrangement, Corner, Size, ToggleIcon};
    use flokit::platform::Platform;
    use flokit::theme::{ColorScheme, Preset};

    fn from_toml(text: &str) -> Result<WidgetConfig, ConfigError> {
        load_config_from(config::File::from_str(text, config::FileFormat::Toml))
    }

    #[test]
    fn test_default_config_parses() {
        let cfg = from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(cfg.size, Size::Md);
        assert_eq!(cfg.position, Corner::BottomRight);
        assert_eq!(cfg.color, ColorScheme::Preset(Preset::Blue));
        assert!(!cfg.social_links.is_empty());
    }

    #[test]
    fn test_toml_options() {
        let cfg = from_toml(
            r##"
            size = "lg"
            position = "bottom-left"
            bottom_offset = 80
            color = "violet"
            animation_style = "fan"
            toggle_icon = "zap"
            show_labels = true

            [[social_links]]
            platform = "github"
            url = "https://github.com/troia"
            label = "Code"

            [[social_links]]
            platform = "phone"
            url = "tel:+100"
            label = "Call"
            "##,
        )
        .unwrap();

        assert_eq!(cfg.size, Size::Lg);
        assert_eq!(cfg.position, Corner::BottomLeft);
        assert_eq!(cfg.bottom_offset, 80.0);
        assert_eq!(cfg.color, ColorScheme::Preset(Preset::Violet));
        assert_eq!(cfg.animation_style, Arrangement::Fan);
        assert_eq!(cfg.toggle_icon, ToggleIcon::Zap);
        assert!(cfg.show_labels);
        assert_eq!(cfg.social_links[1].platform, Platform::Phone);
    }

    #[test]
    fn test_toml_unknown_values_fall_back() {
        let cfg = from_toml(
            r#"
            size = "gigantic"
            animation_style = "orbit"
            color = "mauve"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.size, Size::Md);
        assert_eq!(cfg.animation_style, Arrangement::Stack);
        assert_eq!(cfg.color, ColorScheme::Preset(Preset::Blue));
    }

    #[test]
    fn test_toml_unknown_platform_fails() {
        let result = from_toml(
            r#"
            [[social_links]]
            platform = "orkut"
            url = "https://orkut.com"
            label = "Old"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Config(_))));
    }
}
