//! File-drop sender: one JSON envelope per submission.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use jiff::Timestamp;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::task;

use super::{NotificationMessage, NotificationSender};
use crate::{
    error::{FsResultExt, OnboardError, Result},
    models::ProjectRecord,
};

/// What lands in the outbox for each submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxEnvelope {
    pub submitted_at: Timestamp,
    pub notification: NotificationMessage,
    pub record: ProjectRecord,
}

/// Writes submissions into a directory for a mail relay to pick up.
#[derive(Debug, Clone)]
pub struct OutboxSender {
    directory: PathBuf,
}

impl OutboxSender {
    /// Creates a sender writing into `directory`. The directory is created on
    /// first delivery if missing.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Creates a sender for the default outbox following the XDG Base
    /// Directory specification: `$XDG_DATA_HOME/onboard/outbox` or
    /// `~/.local/share/onboard/outbox`.
    ///
    /// # Errors
    ///
    /// Returns `OnboardError::XdgDirectory` if the directory cannot be created
    pub fn from_xdg() -> Result<Self> {
        let directory = xdg::BaseDirectories::with_prefix("onboard")
            .create_data_directory("outbox")
            .map_err(|e| OnboardError::XdgDirectory(e.to_string()))?;
        Ok(Self::new(directory))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Reads back every envelope in the outbox, sorted by file name.
    pub fn read_all(&self) -> Result<Vec<OutboxEnvelope>> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).fs_context(&self.directory),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.fs_context(&self.directory)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| -> Result<OutboxEnvelope> {
                let raw = fs::read_to_string(path).fs_context(path)?;
                Ok(serde_json::from_str(&raw)?)
            })
            .collect()
    }
}

/// Lowercase ASCII slug of a business name, for readable file names.
fn slug(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "submission".to_string()
    } else {
        slug
    }
}

fn write_envelope(directory: &Path, envelope: &OutboxEnvelope) -> Result<PathBuf> {
    fs::create_dir_all(directory).fs_context(directory)?;
    let contents = serde_json::to_string_pretty(envelope)?;
    let stem = format!(
        "{}-{}",
        envelope.submitted_at.as_millisecond(),
        slug(&envelope.record.business_name)
    );

    // Never overwrite an earlier submission with the same stem.
    let mut attempt = 1u32;
    loop {
        let name = if attempt == 1 {
            format!("{stem}.json")
        } else {
            format!("{stem}-{attempt}.json")
        };
        let path = directory.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(contents.as_bytes()).fs_context(&path)?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e).fs_context(&path),
        }
    }
}

#[async_trait]
impl NotificationSender for OutboxSender {
    async fn send(&self, record: &ProjectRecord) -> Result<()> {
        let directory = self.directory.clone();
        let envelope = OutboxEnvelope {
            submitted_at: Timestamp::now(),
            notification: NotificationMessage::from_record(record),
            record: record.clone(),
        };

        let path = task::spawn_blocking(move || write_envelope(&directory, &envelope))
            .await
            .map_err(|e| OnboardError::notification(format!("Outbox task failed: {e}")))??;

        debug!("Wrote outbox envelope {}", path.display());
        info!("Queued onboarding notification for '{}'", record.business_name);
        Ok(())
    }
}
