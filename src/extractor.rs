//! Per-file prototype extraction.
//!
//! Each regular file is scanned line by line into its own [`ResultSet`];
//! the set lives only as long as that file's [`FileReport`].

use crate::classify::{classify_line, LineClass};
use crate::normalize::{build_prototype, normalize_params, normalize_trailing};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Function name -> normalized prototype for one file, ordered by name.
pub type ResultSet = BTreeMap<String, String>;

/// One extracted prototype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrototypeEntry {
    pub name: String,
    pub prototype: String,
}

/// Extraction result for a single input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// The path exactly as it was given.
    pub path: PathBuf,
    /// Prototypes in ascending name order, one per name.
    pub prototypes: Vec<PrototypeEntry>,
}

impl FileReport {
    fn new(path: &Path, results: ResultSet) -> Self {
        let prototypes = results
            .into_iter()
            .map(|(name, prototype)| PrototypeEntry { name, prototype })
            .collect();
        Self {
            path: path.to_path_buf(),
            prototypes,
        }
    }
}

/// Derive the `(name, prototype)` pair for a line, if it is a candidate.
pub fn extract_line(line: &str) -> Option<(String, String)> {
    match classify_line(line) {
        LineClass::NoMatch => None,
        LineClass::Candidate {
            lead,
            name,
            params,
            trailing,
        } => {
            let prototype =
                build_prototype(lead, &normalize_params(params), &normalize_trailing(trailing));
            Some((name.to_string(), prototype))
        }
    }
}

/// Scan every line of `reader`. Later definitions of a name replace earlier ones.
///
/// Lines are split on `\n`, lose any trailing `\r`, and are decoded lossily so
/// that sources in a legacy encoding are still scanned.
pub fn extract_from_reader<R: BufRead>(reader: R) -> io::Result<ResultSet> {
    let mut results = ResultSet::new();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw?;
        while raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = String::from_utf8_lossy(&raw);

        if let Some((name, prototype)) = extract_line(&line) {
            debug!("line {}: {name} -> {prototype}", index + 1);
            if let Some(previous) = results.insert(name, prototype) {
                debug!("line {}: replaces earlier `{previous}`", index + 1);
            }
        }
    }

    Ok(results)
}

/// Check whether `path` names a regular file (following symlinks).
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Extract prototypes from one path.
///
/// Returns `Ok(None)` when the path is not a regular file; such paths are
/// skipped without producing any output.
pub fn extract_file(path: &Path) -> io::Result<Option<FileReport>> {
    if !is_regular_file(path) {
        debug!("Skipping {}: not a regular file", path.display());
        return Ok(None);
    }

    let file = File::open(path)?;
    let results = extract_from_reader(BufReader::new(file))?;
    info!("{}: {} prototypes", path.display(), results.len());

    Ok(Some(FileReport::new(path, results)))
}

/// Lazily process `paths` in order, yielding a report for every regular file.
///
/// The first I/O error is yielded as an `Err`; callers stop there.
pub fn process_paths<'a, I, P>(paths: I) -> impl Iterator<Item = io::Result<FileReport>> + 'a
where
    I: IntoIterator<Item = P>,
    I::IntoIter: 'a,
    P: AsRef<Path> + 'a,
{
    paths
        .into_iter()
        .filter_map(|path| extract_file(path.as_ref()).transpose())
}
