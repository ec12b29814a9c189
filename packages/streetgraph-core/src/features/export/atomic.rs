//! All-or-nothing publication of export files
//!
//! Sinks write into a staging directory created next to the target. Only
//! when every sink succeeded is the staging directory renamed onto the
//! target path; otherwise it is removed and the target never appears.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::domain::{ExportContext, ExportError, GraphSink};

/// Files published by one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Run every sink, then publish the result at `target` in one rename
pub fn export_atomically(
    context: &ExportContext<'_>,
    sinks: &[Box<dyn GraphSink>],
    target: &Path,
) -> Result<ExportReport, ExportError> {
    if target.exists() {
        return Err(ExportError::TargetExists(target.to_path_buf()));
    }

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| ExportError::io(&parent, e))?;

    // Dropped (and removed) on every early return below
    let staging = tempfile::Builder::new()
        .prefix(".streetgraph-staging-")
        .tempdir_in(&parent)
        .map_err(|e| ExportError::io(&parent, e))?;
    debug!(staging = %staging.path().display(), "staging directory created");

    let mut names = Vec::new();
    for sink in sinks {
        let written = sink.write(context, staging.path())?;
        debug!(sink = sink.name(), files = ?written, "sink finished");
        names.extend(written);
    }

    // The target may have appeared while the sinks ran
    std::fs::rename(staging.path(), target).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists | ErrorKind::DirectoryNotEmpty => {
            ExportError::TargetExists(target.to_path_buf())
        }
        _ => ExportError::io(target, e),
    })?;

    let files: Vec<PathBuf> = names.iter().map(|n| target.join(n)).collect();
    info!(
        directory = %target.display(),
        files = files.len(),
        "export published"
    );
    Ok(ExportReport {
        directory: target.to_path_buf(),
        files,
    })
}
