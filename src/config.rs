use crate::consts;
use crate::surface::{Palette, Tile};
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Time between movements of the snake
    pub(crate) tick_period: Duration,

    /// File to write a log to; no log is written if unset
    pub(crate) log_file: Option<PathBuf>,

    /// Styles for painting the grid
    pub(crate) palette: Palette,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_period: consts::TICK_PERIOD,
            log_file: None,
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    tick_ms: Option<u64>,
    log_file: Option<PathBuf>,
    colors: RawColors,
}

/// Style strings for each kind of tile, e.g. `"on green"`
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawColors {
    empty: Option<String>,
    wall: Option<String>,
    snake: Option<String>,
    food: Option<String>,
    collision: Option<String>,
}

impl RawColors {
    fn entries(&self) -> [(&'static str, Tile, Option<&str>); 5] {
        [
            ("empty", Tile::Empty, self.empty.as_deref()),
            ("wall", Tile::Wall, self.wall.as_deref()),
            ("snake", Tile::SnakeBody, self.snake.as_deref()),
            ("food", Tile::Food, self.food.as_deref()),
            ("collision", Tile::Collision, self.collision.as_deref()),
        ]
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigValueError;

    fn try_from(value: RawConfig) -> Result<Config, ConfigValueError> {
        let tick_period = match value.tick_ms {
            Some(ms) => {
                let period = Duration::from_millis(ms);
                if period.is_zero() || period > consts::MAX_TICK_PERIOD {
                    return Err(ConfigValueError::TickPeriod(ms));
                }
                period
            }
            None => consts::TICK_PERIOD,
        };
        let mut palette = Palette::default();
        for (key, tile, spec) in value.colors.entries() {
            if let Some(spec) = spec {
                palette.set(tile, parse_style(key, spec)?);
            }
        }
        Ok(Config {
            tick_period,
            log_file: value.log_file,
            palette,
        })
    }
}

fn parse_style(key: &'static str, spec: &str) -> Result<Style, ConfigValueError> {
    if spec.trim().is_empty() {
        return Ok(Style::new());
    }
    spec.parse::<parse_style::Style>()
        .map(Style::from)
        .map_err(|e| ConfigValueError::Style {
            key,
            msg: e.to_string(),
        })
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ConfigValueError {
    #[error(
        "tick-ms must be between 1 and {max}, got {0}",
        max = consts::MAX_TICK_PERIOD.as_millis()
    )]
    TickPeriod(u64),
    #[error("invalid style for colors.{key}: {msg}")]
    Style { key: &'static str, msg: String },
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
