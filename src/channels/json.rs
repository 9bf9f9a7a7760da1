//! JSON mailbox source — reads messages from a local export file.
//!
//! The file is a JSON array of message objects mirroring `InboundEmail`'s
//! serde form, except that `id` is optional: exports do not always carry
//! one, and missing ids are backfilled with a generated UUID.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::channels::MailSource;
use crate::error::ChannelError;
use crate::pipeline::types::InboundEmail;

/// One entry in the mailbox file.
#[derive(Debug, Deserialize)]
struct MailboxEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    sender: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    received_at: Option<DateTime<Utc>>,
}

impl From<MailboxEntry> for InboundEmail {
    fn from(entry: MailboxEntry) -> Self {
        Self {
            id: entry.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            sender: entry.sender,
            subject: entry.subject,
            snippet: entry.snippet,
            received_at: entry.received_at,
        }
    }
}

/// Mailbox file source.
pub struct JsonMailbox {
    path: PathBuf,
}

impl JsonMailbox {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MailSource for JsonMailbox {
    fn name(&self) -> &str {
        "json"
    }

    async fn fetch(&self, limit: usize) -> Result<Vec<InboundEmail>, ChannelError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ChannelError::Fetch {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let entries: Vec<MailboxEntry> =
            serde_json::from_str(&raw).map_err(|e| ChannelError::InvalidMailbox {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            path = %self.path.display(),
            total = entries.len(),
            limit,
            "Loaded mailbox file"
        );

        Ok(entries
            .into_iter()
            .take(limit)
            .map(InboundEmail::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn mailbox_with(contents: &str) -> (tempfile::TempDir, JsonMailbox) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mailbox.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, JsonMailbox::new(path))
    }

    #[tokio::test]
    async fn fetches_entries_up_to_limit() {
        let (_dir, source) = mailbox_with(
            r#"[
                {"id": "m-1", "sender": "a@example.com", "subject": "one", "snippet": "x"},
                {"id": "m-2", "sender": "b@example.com", "subject": "two", "snippet": "y"},
                {"id": "m-3", "sender": "c@example.com", "subject": "three", "snippet": "z"}
            ]"#,
        );

        let all = source.fetch(10).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "m-1");
        assert_eq!(all[2].subject, "three");

        let capped = source.fetch(2).await.unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[1].id, "m-2");
    }

    #[tokio::test]
    async fn backfills_missing_ids() {
        let (_dir, source) = mailbox_with(r#"[{"sender": "a@example.com", "snippet": "hi"}]"#);
        let emails = source.fetch(10).await.unwrap();
        assert_eq!(emails.len(), 1);
        assert!(!emails[0].id.is_empty());
        assert!(Uuid::parse_str(&emails[0].id).is_ok());
    }

    #[tokio::test]
    async fn parses_received_at_when_present() {
        let (_dir, source) = mailbox_with(
            r#"[{"id": "m-1", "sender": "a@example.com", "received_at": "2026-07-01T12:00:00Z"}]"#,
        );
        let emails = source.fetch(10).await.unwrap();
        assert!(emails[0].received_at.is_some());
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_error() {
        let source = JsonMailbox::new("/definitely/not/here/mailbox.json");
        let err = source.fetch(10).await.unwrap_err();
        assert!(matches!(err, ChannelError::Fetch { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_an_invalid_mailbox_error() {
        let (_dir, source) = mailbox_with("{not json");
        let err = source.fetch(10).await.unwrap_err();
        assert!(matches!(err, ChannelError::InvalidMailbox { .. }));
    }

    #[tokio::test]
    async fn empty_array_yields_no_messages() {
        let (_dir, source) = mailbox_with("[]");
        assert!(source.fetch(10).await.unwrap().is_empty());
    }
}
