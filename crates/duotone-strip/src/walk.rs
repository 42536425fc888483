//! Directory traversal and in-place rewriting.
//!
//! The walker visits every file under a root (a root that is itself a
//! file is processed alone), strips dark tokens from text content, and
//! writes changed files back unless the run is a dry run. Results are
//! collected into a [`RunReport`] for rendering afterwards; nothing is
//! printed from here.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::report::{FileReport, RunReport};
use crate::scan::strip_dark_classes;

/// Errors that abort a processing run.
///
/// The first I/O failure stops the walk; everything processed before it
/// has already been written.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Strips dark tokens from every file under `root`.
///
/// Files are visited in file-name order so runs are reproducible. Files
/// whose content is not UTF-8 are skipped and counted; files without any
/// dark token are left untouched and do not appear in the report. With
/// `dry_run` set, nothing is written back.
///
/// # Errors
///
/// Returns [`StripError`] on the first traversal or I/O failure.
pub fn process_tree(root: &Path, dry_run: bool) -> Result<RunReport, StripError> {
    let mut report = RunReport::new(dry_run);

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                return Err(StripError::Walk { path, source });
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        process_file(entry.path(), dry_run, &mut report)?;
    }

    Ok(report)
}

fn process_file(path: &Path, dry_run: bool, report: &mut RunReport) -> Result<(), StripError> {
    report.scanned += 1;

    let bytes = fs::read(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            report.skipped_non_utf8 += 1;
            return Ok(());
        }
    };

    let outcome = strip_dark_classes(&content);
    if !outcome.changed() {
        return Ok(());
    }

    let applied = !dry_run;
    if applied {
        fs::write(path, &outcome.stripped).map_err(|source| StripError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    report.files.push(FileReport {
        path: path.display().to_string(),
        matches: outcome.matches,
        applied,
    });
    Ok(())
}
