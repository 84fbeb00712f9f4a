//! Configuration management for quakereport.
//!
//! Configuration is read from `~/.config/quakereport/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::presenter::DisplayTimezone;

/// Default USGS query: the ten most recent earthquakes of magnitude 6 or more.
pub const USGS_REQUEST_URL: &str =
    "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&orderby=time&minmag=6&limit=10";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub display: DisplayConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Where and how the feed is fetched.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: USGS_REQUEST_URL.to_string(),
            connect_timeout_secs: 15,
            read_timeout_secs: 10,
        }
    }
}

impl FeedConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub timezone: DisplayTimezone,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/quakereport/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("quakereport").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        format!(
            r##"# quakereport configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[feed]
url = "{url}"

# Seconds to wait for the connection, then for each read
connect_timeout_secs = 15
read_timeout_secs = 10

[display]
# "local" or "utc"
timezone = "local"

[colors]
border = "Cyan"

# Selection highlight
selection_bg = "DarkGray"
selection_fg = "White"

# Row text
offset = "Gray"
location = "White"
date = "Yellow"
time = "Yellow"

# Status bar
status_fg = "White"
status_bg = "DarkGray"

# Magnitude badge background, by floor of the magnitude
magnitude1 = "#4A7BA7"
magnitude2 = "#04B4B3"
magnitude3 = "#10CAC9"
magnitude4 = "#F5A623"
magnitude5 = "#FF7D50"
magnitude6 = "#FC6644"
magnitude7 = "#E75F40"
magnitude8 = "#E13A20"
magnitude9 = "#D93218"
magnitude10plus = "#C03823"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_page = ["n", "PageDown"]
prev_page = ["p", "PageUp"]
open_in_browser = ["Enter", "o"]
refresh = ["R"]
"##,
            url = USGS_REQUEST_URL
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
