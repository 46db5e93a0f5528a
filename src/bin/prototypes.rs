use c_prototypes::config::Config;
use c_prototypes::logging::init_logger;
use c_prototypes::{process_paths, write_reports};
use clap::Parser;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// List the C function prototypes defined in each file, sorted by name.
///
/// Every argument is a path, including ones that start with `-`.
/// Set PROTOTYPES_FORMAT, PROTOTYPES_OUTPUT or PROTOTYPES_DEBUG to change
/// the output format, destination or log level.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Source files to scan; anything that is not a regular file is skipped
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    paths: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::from_env()?;
    init_logger(config.debug);

    debug!("Scanning {} paths", args.paths.len());

    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    write_reports(&mut out, process_paths(&args.paths), config.format)?;

    if let Some(path) = &config.output {
        debug!("Listing written to {}", path.display());
    }

    Ok(())
}
