//! Rendering of extraction results.

use crate::extractor::FileReport;
use clap::ValueEnum;
use std::error::Error;
use std::io::{self, Write};

/// Output format for the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<path>:` header, one prototype per line, blank separator line
    #[default]
    Text,
    /// Pretty-printed JSON array of file reports
    Json,
}

/// Write one file's block: header, sorted prototypes, blank line.
pub fn write_block<W: Write>(out: &mut W, report: &FileReport) -> io::Result<()> {
    writeln!(out, "{}:", report.path.display())?;
    for entry in &report.prototypes {
        writeln!(out, "{}", entry.prototype)?;
    }
    writeln!(out)
}

/// Stream text blocks as reports arrive.
///
/// Blocks already written stay written when a later file fails to read.
pub fn write_text<W, I>(out: &mut W, reports: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<FileReport>>,
{
    for report in reports {
        write_block(out, &report?)?;
    }
    out.flush()
}

/// Collect every report and write them as a single JSON document.
pub fn write_json<W, I>(out: &mut W, reports: I) -> Result<(), Box<dyn Error>>
where
    W: Write,
    I: IntoIterator<Item = io::Result<FileReport>>,
{
    let reports = reports.into_iter().collect::<io::Result<Vec<_>>>()?;
    let json = serde_json::to_string_pretty(&reports)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

/// Write `reports` in the requested format.
pub fn write_reports<W, I>(
    out: &mut W,
    reports: I,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>>
where
    W: Write,
    I: IntoIterator<Item = io::Result<FileReport>>,
{
    match format {
        OutputFormat::Text => write_text(out, reports)?,
        OutputFormat::Json => write_json(out, reports)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{process_paths, PrototypeEntry};
    use std::fs;
    use std::path::PathBuf;

    fn render(paths: &[PathBuf]) -> String {
        let mut out = Vec::new();
        write_text(&mut out, process_paths(paths)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_block_format() {
        let report = FileReport {
            path: PathBuf::from("a.c"),
            prototypes: vec![PrototypeEntry {
                name: "add".to_string(),
                prototype: "int add(a,b);".to_string(),
            }],
        };
        let mut out = Vec::new();
        write_block(&mut out, &report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a.c:\nint add(a,b);\n\n");
    }

    #[test]
    fn test_empty_block_is_header_and_blank_line() {
        let report = FileReport {
            path: PathBuf::from("empty.c"),
            prototypes: Vec::new(),
        };
        let mut out = Vec::new();
        write_block(&mut out, &report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "empty.c:\n\n");
    }

    #[test]
    fn test_example_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.c");
        let b = dir.path().join("b.c");
        let c = dir.path().join("c.c");
        fs::write(&a, "int add(int a, int b) { return a+b; }\n").unwrap();
        fs::write(&b, "static void helper(void) {}\n").unwrap();
        fs::write(&c, "char *name(void) /* returns name */ {\n").unwrap();

        let output = render(&[a.clone(), b.clone(), c.clone()]);
        let expected = format!(
            "{}:\nint add(a,b);\n\n{}:\n\n{}:\nchar *name(void) returns name;\n\n",
            a.display(),
            b.display(),
            c.display()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_duplicate_name_printed_once_in_sorted_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dup.c");
        fs::write(
            &path,
            "int foo(int a)\n{\n}\nint zed(void)\n{\n}\nint bar(void)\n{\n}\nchar *foo(char *s)\n{\n}\n",
        )
        .unwrap();

        let output = render(&[path.clone()]);
        let expected = format!(
            "{}:\nint bar(void);\nchar *foo(s);\nint zed(void);\n\n",
            path.display()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_directories_and_missing_paths_produce_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let valid = dir.path().join("valid.c");
        fs::write(&valid, "void run(void)\n").unwrap();

        let output = render(&[
            dir.path().to_path_buf(),
            dir.path().join("does_not_exist.c"),
            valid.clone(),
        ]);
        assert_eq!(output, format!("{}:\nvoid run(void);\n\n", valid.display()));
        assert!(render(&[dir.path().to_path_buf()]).is_empty());
    }

    #[test]
    fn test_header_is_path_as_given() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src").join("..").join("x.c");
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("x.c"), "").unwrap();

        let output = render(&[nested.clone()]);
        assert_eq!(output, format!("{}:\n\n", nested.display()));
    }

    #[test]
    fn test_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("j.c");
        fs::write(&path, "int b(void)\nint a(int x)\n").unwrap();

        let mut out = Vec::new();
        write_reports(&mut out, process_paths([&path]), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let files = value.as_array().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0]["path"], path.to_str().unwrap());
        assert_eq!(files[0]["prototypes"][0]["name"], "a");
        assert_eq!(files[0]["prototypes"][0]["prototype"], "int a(x);");
        assert_eq!(files[0]["prototypes"][1]["name"], "b");
    }
}
