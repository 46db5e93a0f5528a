//! # c-prototypes
//!
//! Line-oriented extraction of C function prototypes. Every line that looks
//! like a single-line function header is turned into a `name(params);`
//! prototype, and each file's prototypes are listed in name order.
//!
//! ## Modules
//!
//! - [`classify`]: Decide whether a line is a prototype candidate
//! - [`normalize`]: Reduce parameter lists and trailing text
//! - [`extractor`]: Scan files into per-file result sets
//! - [`report`]: Text and JSON listings
//! - [`config`]: Settings read from the environment
//! - [`logging`]: Logging utilities

pub mod classify;
pub mod config;
pub mod extractor;
pub mod normalize;
pub mod report;

/// Logging utilities
pub mod logging {
    use log::LevelFilter;
    use std::env;

    /// Initialize the stderr logger from the debug flag or `RUST_LOG`.
    ///
    /// Without either, only warnings are shown so stdout listings stay clean.
    pub fn init_logger(debug: bool) {
        let log_level = if debug {
            LevelFilter::Debug
        } else if env::var("RUST_LOG").is_ok() {
            env_logger::init();
            return;
        } else {
            LevelFilter::Warn
        };

        env_logger::Builder::new()
            .filter_level(log_level)
            .format_timestamp(None)
            .init();
    }
}

pub use classify::{classify_line, LineClass};
pub use extractor::{extract_file, extract_from_reader, process_paths, FileReport, ResultSet};
pub use report::{write_reports, OutputFormat};
