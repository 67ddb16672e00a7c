use donut_geom::menu::{CLASSIC_INNER_RADIUS, CLASSIC_OUTER_RADIUS, CLASSIC_SIZE, default_entries};
use donut_geom::svg::Style;
use donut_geom::{InvalidConfig, Menu, MenuEntry, Point};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Side of the square logical drawing space; the ring is centered in it.
    pub size: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub entries: Vec<MenuEntry>,
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: CLASSIC_SIZE,
            inner_radius: CLASSIC_INNER_RADIUS,
            outer_radius: CLASSIC_OUTER_RADIUS,
            entries: default_entries(),
            style: Style::default(),
        }
    }
}

impl Config {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    pub fn menu(&self) -> Result<Menu, InvalidConfig> {
        Menu::with_entries(
            self.center(),
            self.inner_radius,
            self.outer_radius,
            self.entries.clone(),
        )
    }

    /// Builds the menu, also checking that the ring fits the drawing space.
    pub fn validate(&self) -> Result<Menu, ConfigError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::Size(self.size));
        }
        let menu = self.menu()?;
        if self.outer_radius > self.size / 2.0 {
            return Err(ConfigError::RingOverflow {
                outer_radius: self.outer_radius,
                size: self.size,
            });
        }
        Ok(menu)
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
    #[error("Invalid menu: {0}")]
    Invalid(#[from] InvalidConfig),
    #[error("Drawing size must be positive, got {0}")]
    Size(f64),
    #[error("Outer radius {outer_radius} does not fit in a {size}x{size} surface")]
    RingOverflow { outer_radius: f64, size: f64 },
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "donut", "donut").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// `DONUT_SIZE=500`, or `DONUT_STYLE__ICON_SIZE=30` for nested keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix("DONUT")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Loads the config file (if any) and environment overrides, then checks
/// that they describe a drawable menu.
pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(environment())
        .build()?;

    validated(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    validated(s.try_deserialize()?)
}

fn validated(config: Config) -> Result<Config, ConfigError> {
    config.validate()?;
    Ok(config)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    log::debug!("Watching {}", config_path.display());

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
}
