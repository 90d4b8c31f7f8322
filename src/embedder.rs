//! External metadata-embedding collaborator.
//!
//! The embedding tool is opaque: the pipeline knows its invocation contract
//! (read geotag fields from a CSV, target an image directory, do not keep
//! originals) and its exit status, nothing else. The trait keeps that seam
//! narrow so tests can substitute a recording stub.

use crate::error::{GeotagError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Diagnostics returned by a successful embedding run
#[derive(Debug, Default)]
pub struct EmbedReport {
    pub stdout: String,
}

/// Narrow capability interface over the embedding tool.
///
/// `csv_path` is the exported table; `image_dir` is the image directory
/// name as recorded in the CSV's `SourceFile` column, relative to the
/// CSV's own directory.
pub trait MetadataEmbedder {
    fn embed(&self, csv_path: &Path, image_dir: &str) -> Result<EmbedReport>;
}

/// Blocking ExifTool subprocess invocation.
///
/// Runs with the CSV's directory as working directory so the relative
/// `SourceFile` paths in the CSV resolve against the tool's file list.
/// One shot: no timeout, no retry, no rollback of files already written.
pub struct ExifToolEmbedder {
    program: String,
}

impl ExifToolEmbedder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl MetadataEmbedder for ExifToolEmbedder {
    fn embed(&self, csv_path: &Path, image_dir: &str) -> Result<EmbedReport> {
        let workdir = match csv_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let csv_name = csv_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| csv_path.to_string_lossy().into_owned());

        debug!(
            program = %self.program,
            csv = %csv_name,
            image_dir,
            "invoking metadata embedder"
        );

        let output = Command::new(&self.program)
            .current_dir(workdir)
            .arg("-overwrite_original")
            .arg(format!("-csv={csv_name}"))
            .arg(image_dir)
            .output()
            .map_err(|source| GeotagError::EmbedderNotFound {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GeotagError::EmbedFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(EmbedReport {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
