use std::{num::ParseIntError, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::Level;

/// Errors raised while reading command-line arguments or environment overrides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {name}: {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Missing value after {0}")]
    MissingValue(&'static str),
    #[error("Unknown flag {0:?}")]
    UnknownFlag(String),
    #[error("Unexpected extra argument {0:?}")]
    UnexpectedArgument(String),
    #[error("Invalid log level {0:?}")]
    InvalidLogLevel(String),
}

/// Runtime settings for the report printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: u16,
    pub cols: u16,
    /// Seed for the carver. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    pub log_level: Level,
    /// Colorize the report with terminal escape codes
    pub styled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            seed: None,
            log_dir: PathBuf::from("logs"),
            log_level: Level::INFO,
            styled: true,
        }
    }
}

impl Config {
    /// Environment variable holding the log level (`trace`, `debug`, `info`, ...)
    pub const LOG_LEVEL_VAR: &'static str = "MAZECARVE_LOG";
    /// Environment variable holding the log directory
    pub const LOG_DIR_VAR: &'static str = "MAZECARVE_LOG_DIR";
    /// Name of the log file inside the log directory
    pub const LOG_FILE: &'static str = "mazecarve.log";

    /// Parses `[rows] [cols] [--seed N] [--plain]`, without the executable name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut positional = 0;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    config.seed = Some(parse_number("seed", &value)?);
                }
                "--plain" => config.styled = false,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                value => {
                    match positional {
                        0 => config.rows = parse_number("rows", value)?,
                        1 => config.cols = parse_number("cols", value)?,
                        _ => return Err(ConfigError::UnexpectedArgument(value.to_string())),
                    }
                    positional += 1;
                }
            }
        }
        Ok(config)
    }

    /// Applies the `MAZECARVE_LOG` and `MAZECARVE_LOG_DIR` overrides looked up through `var`.
    pub fn with_env<F>(mut self, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = var(Self::LOG_LEVEL_VAR) {
            self.log_level =
                Level::from_str(level.trim()).map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }
        if let Some(dir) = var(Self::LOG_DIR_VAR) {
            self.log_dir = PathBuf::from(dir);
        }
        Ok(self)
    }
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
{
    value
        .parse::<T>()
        .map_err(|source| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
            source,
        })
}
