//! Driver configuration, read from the environment.
//!
//! | Variable            | Meaning                                   | Default          |
//! |---------------------|-------------------------------------------|------------------|
//! | `PERFT_MAX_DEPTH`   | deepest perft run by the driver           | 4                |
//! | `PERFT_DUMP_LEAVES` | print every leaf line (`1/true/yes/on`)   | off              |
//! | `PERFT_THREADS`     | worker threads for the parallel perft     | number of CPUs   |

use thiserror::Error;

use std::env;

pub const MAX_DEPTH_VAR: &str = "PERFT_MAX_DEPTH";
pub const DUMP_LEAVES_VAR: &str = "PERFT_DUMP_LEAVES";
pub const THREADS_VAR: &str = "PERFT_THREADS";

/// Problems reading the configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a non-negative integer, found {value:?}")]
    NotANumber { var: &'static str, value: String },
    #[error("{var}: expected a boolean (1/true/yes/on or 0/false/no/off), found {value:?}")]
    NotABool { var: &'static str, value: String },
    #[error("{var}: must be at least 1")]
    Zero { var: &'static str },
    #[error("{var}: value is not valid unicode")]
    NotUnicode { var: &'static str },
}

/// Settings of a driver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerftConfig {
    /// The driver runs perft for every depth from 0 up to and including this one.
    pub max_depth: u16,
    /// Print the leaf line of every counted leaf.
    pub dump_leaves: bool,
    /// Size of the thread pool used when leaves are not dumped.
    pub threads: usize,
}

impl Default for PerftConfig {
    fn default() -> Self {
        PerftConfig {
            max_depth: 4,
            dump_leaves: false,
            threads: num_cpus::get(),
        }
    }
}

impl PerftConfig {
    /// Reads the configuration from the process environment. Unset variables keep their
    /// defaults.
    pub fn from_env() -> Result<PerftConfig, ConfigError> {
        PerftConfig::from_lookup(|var| match env::var(var) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
        })
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(mut lookup: F) -> Result<PerftConfig, ConfigError>
    where
        F: FnMut(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let mut config = PerftConfig::default();
        if let Some(value) = lookup(MAX_DEPTH_VAR)? {
            config.max_depth = parse_number(MAX_DEPTH_VAR, &value)?;
        }
        if let Some(value) = lookup(DUMP_LEAVES_VAR)? {
            config.dump_leaves = parse_bool(DUMP_LEAVES_VAR, &value)?;
        }
        if let Some(value) = lookup(THREADS_VAR)? {
            config.threads = parse_number(THREADS_VAR, &value)?;
            if config.threads == 0 {
                return Err(ConfigError::Zero { var: THREADS_VAR });
            }
        }
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: value.to_string(),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::NotABool {
            var,
            value: value.to_string(),
        }),
    }
}
