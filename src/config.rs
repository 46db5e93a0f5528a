//! Run configuration.
//!
//! Every command-line argument is an input path, so the optional settings
//! come from the environment instead:
//!
//! - `PROTOTYPES_FORMAT`: `text` (default) or `json`
//! - `PROTOTYPES_OUTPUT`: write the listing to this file instead of stdout
//! - `PROTOTYPES_DEBUG`: `1`, `true`, `yes` or `on` enables debug logging
//!
//! `RUST_LOG` keeps working through [`crate::logging::init_logger`].

use crate::report::OutputFormat;
use clap::ValueEnum;
use std::env;
use std::error::Error;
use std::path::PathBuf;

pub const FORMAT_VAR: &str = "PROTOTYPES_FORMAT";
pub const OUTPUT_VAR: &str = "PROTOTYPES_OUTPUT";
pub const DEBUG_VAR: &str = "PROTOTYPES_DEBUG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub debug: bool,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let format = match get(FORMAT_VAR) {
            Some(value) => OutputFormat::from_str(value.trim(), true).map_err(|_| {
                format!("{FORMAT_VAR}: unknown format `{value}` (expected text or json)")
            })?,
            None => OutputFormat::default(),
        };
        let output = get(OUTPUT_VAR).map(PathBuf::from);
        let debug = get(DEBUG_VAR).is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        });

        Ok(Self {
            format,
            output,
            debug,
        })
    }
}
