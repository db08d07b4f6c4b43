use directories::ProjectDirs;
use orbit_core::item::{Item, Visual};
use orbit_core::options::Options;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::PathBuf;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Link value that makes an item's button write and open the config template.
pub const SETUP_LINK: &str = "orbit:setup";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum WindowLayer {
    #[strum(serialize = "background", serialize = "bg")]
    Background,
    #[strum(serialize = "bottom")]
    Bottom,
    #[strum(serialize = "top")]
    Top,
    #[strum(serialize = "overlay")]
    Overlay,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Pin the gallery to a layer-shell layer instead of opening a regular window.
    pub layer: Option<WindowLayer>,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            layer: None,
            width: 960,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ItemConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub button: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Opened with `xdg-open` when the call-to-action button is pressed.
    #[serde(default)]
    pub link: Option<String>,
}

impl ItemConfig {
    pub fn to_item(&self) -> Item {
        let item = Item::new(&self.title, &self.description, &self.button);
        match &self.image {
            Some(path) => item.with_visual(Visual::new(path)),
            None => item,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: Options,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl Config {
    pub fn gallery_items(&self) -> Vec<Item> {
        self.items.iter().map(ItemConfig::to_item).collect()
    }

    pub fn link(&self, index: usize) -> Option<&str> {
        self.items.get(index).and_then(|i| i.link.as_deref())
    }

    /// Built-in gallery shown until the user writes a config.
    pub fn demo() -> Self {
        let item = |title: &str, description: &str, button: &str, link: Option<&str>| ItemConfig {
            title: title.to_string(),
            description: description.to_string(),
            button: button.to_string(),
            image: None,
            link: link.map(str::to_string),
        };
        Self {
            items: vec![
                item(
                    "Welcome to Orbit",
                    "Describe your own gallery in config.toml and it reloads live",
                    "Create config",
                    Some(SETUP_LINK),
                ),
                item(
                    "Arrow keys",
                    "Left and right step through the ring one item at a time",
                    "Got it",
                    None,
                ),
                item(
                    "Click an item",
                    "Selecting an item brings it to the front and pauses rotation a little longer",
                    "Got it",
                    None,
                ),
                item(
                    "orbitctl",
                    "Pause, resume or jump to any item from a terminal or a keybinding",
                    "Got it",
                    None,
                ),
                item(
                    "Images",
                    "Give each item an image path and it replaces the title bubble",
                    "Got it",
                    None,
                ),
            ],
            ..Default::default()
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config directory could be determined for this user")]
    NoConfigDir,
    #[error("Invalid config: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Cannot watch config: {0}")]
    Watch(#[from] notify::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// `$XDG_CONFIG_HOME/orbit/config.toml` on Linux.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("org", "orbit", "orbit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Layers `ORBIT_SECTION__KEY` environment overrides on top of `path`.
fn load_from(path: PathBuf) -> Result<Config, ConfigError> {
    let merged = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("ORBIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    Ok(merged.try_deserialize()?)
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_from(config_path()?)
}

/// Loads the user config, falling back to the demo gallery when there is none or it has no
/// items.
pub fn load_or_setup() -> Config {
    let path = match config_path() {
        Ok(path) if path.exists() => path,
        Ok(_) => {
            log::info!("No config yet, showing the demo gallery");
            return Config::demo();
        }
        Err(e) => {
            log::warn!("{}, showing the demo gallery", e);
            return Config::demo();
        }
    };

    match load_from(path) {
        Ok(loaded) if loaded.items.is_empty() => {
            log::warn!("Config has no [[items]], showing the demo gallery");
            Config {
                items: Config::demo().items,
                ..loaded
            }
        }
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{}", e);
            Config::demo()
        }
    }
}

/// Writes the commented template unless a config already exists. Returns its path either way.
pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return Ok(path);
    }
    if let Some(dir) = path.parent() {
        fs_err::create_dir_all(dir)?;
    }
    fs_err::write(&path, DEFAULT_CONFIG)?;
    log::info!("Wrote config template to {}", path.display());
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
