use crate::chase::{
    DOT_COUNT, DOT_RADIUS, Direction, LayoutError, Point, RING_RADIUS, RingLayout, TICK_MS,
};
use crate::events::AppEvent;
use crate::gui::theme::{BackgroundColor, DotColor, HexColor};
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub dot_count: usize,
    pub ring_radius: f64,
    pub dot_radius: f64,
    pub tick_ms: u64,
    pub direction: Direction,
    pub dot_color: DotColor,
    pub background_color: BackgroundColor,
    pub cross_color: HexColor,
    pub cross_arm: f64,
    pub cross_width: f64,
    pub show_instructions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dot_count: DOT_COUNT,
            ring_radius: RING_RADIUS,
            dot_radius: DOT_RADIUS,
            tick_ms: TICK_MS,
            direction: Direction::Clockwise,
            dot_color: DotColor::Lilac,
            background_color: BackgroundColor::Gray,
            cross_color: HexColor::from(Srgb::new(0, 0, 0)),
            cross_arm: 12.0,
            cross_width: 2.0,
            show_instructions: true,
        }
    }
}

impl Config {
    /// Builds the ring, rejecting geometry cairo cannot draw.
    pub fn layout(&self, center: Point) -> Result<RingLayout, LayoutError> {
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(LayoutError::InvalidDotRadius(self.dot_radius));
        }
        RingLayout::new(self.dot_count, self.ring_radius, center)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("Config path {0} does not name a file")]
    NotAFile(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "lilac").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// File watcher events carry absolute paths, so relative paths are anchored
/// to the working directory here.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(std::path::absolute(path)?),
        None => get_config_path(),
    }
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("LILAC").try_parsing(true))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config from {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

fn is_reload_event(event: &Event, file_name: &OsStr) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name))
}

/// Sends `ConfigReload` whenever the config file changes. The parent
/// directory is watched so editors that replace the file are still seen.
pub async fn run_async_watcher(
    config_path: PathBuf,
    tx: Sender<AppEvent>,
) -> Result<(), ConfigError> {
    let config_path = std::path::absolute(&config_path)?;
    let (config_dir, file_name) = match (config_path.parent(), config_path.file_name()) {
        (Some(dir), Some(name)) => (dir.to_path_buf(), name.to_os_string()),
        _ => return Err(ConfigError::NotAFile(config_path)),
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
    log::debug!("Watching {} for changes", config_path.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if is_reload_event(&event, &file_name) => {
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
    Ok(())
}
