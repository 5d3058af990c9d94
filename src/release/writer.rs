//! Writing the release document to its canonical path and mirrors
//!
//! The document is serialized once. Every destination is first staged as a
//! temp file next to its target; targets are only replaced once all of them
//! have been staged. Existing targets are moved aside before being replaced
//! and put back if any later replacement fails, so either every destination
//! holds the new document or none of them changed.

use super::assembler::Release;
use super::config::OutputPaths;
use super::error::{ReleaseError, ReleaseResult};
use crate::rdf::{RdfFormat, RdfSerializer};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempPath};
use tracing::{info, warn};

/// What was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub paths: Vec<PathBuf>,
    pub bytes: usize,
}

/// A replaced destination and the previous file it displaced, if any
type Committed = (PathBuf, Option<TempPath>);

pub struct ReleaseWriter;

impl ReleaseWriter {
    /// Serialize in the canonical path's format and write every destination
    pub fn write_all(release: &Release, outputs: &OutputPaths) -> ReleaseResult<WriteReport> {
        let format = RdfFormat::from_path(&outputs.canonical);
        let text = RdfSerializer::serialize(&release.graph, &release.namespaces, format)?;

        let mut staged = Vec::new();
        for path in outputs.all() {
            staged.push((path.to_path_buf(), Self::stage(path, text.as_bytes())?));
        }

        let mut committed: Vec<Committed> = Vec::with_capacity(staged.len());
        for (path, file) in staged {
            match Self::replace(&path, file) {
                Ok(backup) => committed.push((path, backup)),
                Err(e) => {
                    Self::rollback(committed);
                    return Err(e);
                }
            }
        }

        // Dropping the backups deletes them
        let paths = committed
            .into_iter()
            .map(|(path, _backup)| {
                info!("Wrote {}", path.display());
                path
            })
            .collect();

        Ok(WriteReport {
            paths,
            bytes: text.len(),
        })
    }

    fn stage(path: &Path, contents: &[u8]) -> ReleaseResult<NamedTempFile> {
        if path.is_dir() {
            return Err(ReleaseError::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "destination is a directory"),
            ));
        }
        let dir = Self::parent_dir(path);
        std::fs::create_dir_all(dir).map_err(|e| ReleaseError::io(dir, e))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| ReleaseError::io(dir, e))?;
        file.write_all(contents)
            .and_then(|_| file.flush())
            .map_err(|e| ReleaseError::io(path, e))?;
        Ok(file)
    }

    /// Move any existing target aside, then rename the staged file over it
    fn replace(path: &Path, staged: NamedTempFile) -> ReleaseResult<Option<TempPath>> {
        let backup = Self::move_aside(path)?;
        if let Err(e) = staged.persist(path) {
            if let Some(backup) = backup {
                Self::restore(path, backup);
            }
            return Err(ReleaseError::io(path, e.error));
        }
        Ok(backup)
    }

    fn move_aside(path: &Path) -> ReleaseResult<Option<TempPath>> {
        if !path.exists() {
            return Ok(None);
        }
        let dir = Self::parent_dir(path);
        let backup = tempfile::Builder::new()
            .prefix(".release-backup")
            .tempfile_in(dir)
            .map_err(|e| ReleaseError::io(dir, e))?
            .into_temp_path();
        std::fs::rename(path, &backup).map_err(|e| ReleaseError::io(path, e))?;
        Ok(Some(backup))
    }

    /// Undo replacements in reverse order
    fn rollback(committed: Vec<Committed>) {
        for (path, backup) in committed.into_iter().rev() {
            match backup {
                Some(backup) => Self::restore(&path, backup),
                None => {
                    if let Err(e) = std::fs::remove_file(&path) {
                        warn!("Could not remove partial output {}: {}", path.display(), e);
                    }
                }
            }
        }
    }

    fn restore(path: &Path, backup: TempPath) {
        if let Err(e) = backup.persist(path) {
            warn!(
                "Could not restore {} from {}: {}",
                path.display(),
                e.path.display(),
                e.error
            );
        }
    }

    fn parent_dir(path: &Path) -> &Path {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
