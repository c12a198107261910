//! Lesson scan: find the shell commands embedded in JSON lesson content.
//!
//! The scan is a single pass over one directory:
//! 1. List lesson files (`*.json`, minus reserved metadata files)
//! 2. Parse each file, skipping anything that is not a lesson document
//! 3. For every code-bearing fragment, resolve its line in the raw file and
//!    pull the first prompted command out of its first bash block

mod document;
mod extract;
mod files;
mod locate;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub use document::{load_document, Document, SkipReason};
pub use extract::extract_command;
pub use files::find_lesson_files;
pub use locate::LineLocator;

/// What to scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub dir: PathBuf,
    /// Extra filename globs to leave out, on top of the reserved files.
    pub exclude: Vec<String>,
}

impl ScanOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            exclude: Vec::new(),
        }
    }
}

/// A command found in a lesson fragment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CommandRecord {
    pub file: String,
    /// `<directory>/<file>` label used in the report.
    pub path: String,
    pub line: usize,
    pub command: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub fragments_inspected: usize,
    pub commands_found: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ScanResult {
    pub directory: String,
    pub summary: ScanSummary,
    pub commands: Vec<CommandRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan a directory of lesson files.
///
/// Never fails: files that cannot be read or are not lesson documents are
/// recorded in `skipped`, and fragments without a prompted bash command are
/// passed over.
pub fn scan(options: &ScanOptions) -> ScanResult {
    let directory = directory_label(&options.dir);
    let mut summary = ScanSummary::default();
    let mut commands = Vec::new();
    let mut skipped = Vec::new();

    for file in find_lesson_files(&options.dir, &options.exclude) {
        summary.files_scanned += 1;

        let document = match load_document(&options.dir.join(&file)) {
            Ok(document) => document,
            Err(reason) => {
                skipped.push(SkippedFile { file, reason });
                continue;
            }
        };

        let fragments = match document.code_fragments() {
            Ok(fragments) => fragments,
            Err(reason) => {
                skipped.push(SkippedFile { file, reason });
                continue;
            }
        };

        let path = record_path(&directory, &file);
        let mut locator = LineLocator::new(&document.raw);

        for fragment in fragments {
            summary.fragments_inspected += 1;

            // Resolve before extracting: the cursor advances even for
            // fragments that yield no command.
            let line = locator.locate(fragment);

            if let Some(command) = extract_command(fragment) {
                commands.push(CommandRecord {
                    file: file.clone(),
                    path: path.clone(),
                    line,
                    command,
                });
            }
        }
    }

    summary.files_skipped = skipped.len();
    summary.commands_found = commands.len();

    ScanResult {
        directory,
        summary,
        commands,
        skipped,
    }
}

/// Render records in the plain report format: a `#  path: line` comment,
/// the command, then a blank line.
pub fn render_text(commands: &[CommandRecord]) -> String {
    let mut out = String::new();
    for record in commands {
        let _ = writeln!(out, "#  {}: {}", record.path, record.line);
        let _ = writeln!(out, "{}", record.command);
        out.push('\n');
    }
    out
}

/// Basename of the scanned directory, resolved to an absolute path first so
/// `.` and relative paths still produce a name.
fn directory_label(dir: &Path) -> String {
    let resolved = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn record_path(directory: &str, file: &str) -> String {
    if directory.is_empty() {
        file.to_string()
    } else {
        Path::new(directory).join(file).display().to_string()
    }
}
