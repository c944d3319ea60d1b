//! Output artifact writer.
//!
//! The artifact is a JSON array of accepted leads, indented with four spaces
//! and terminated by a newline. It is written to a sibling temp file first and
//! renamed over the target, so a reader never observes a partial file.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use leadscout_core::AcceptedLead;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to serialize leads: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render leads exactly as they are persisted.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if serialization fails.
pub fn render_leads(leads: &[AcceptedLead]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    leads.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `leads` to `path`, replacing any previous artifact.
///
/// Always writes, so an empty run leaves `[]` behind rather than a stale file.
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`SinkError`] if the directory, temp file, or rename fails.
pub fn write_leads(path: &Path, leads: &[AcceptedLead]) -> Result<(), SinkError> {
    let bytes = render_leads(leads)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SinkError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp = temp_path(path);
    if let Err(source) = fs::write(&tmp, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(SinkError::Write { path: tmp, source });
    }

    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(SinkError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(path = %path.display(), count = leads.len(), "leads written");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("leads"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
