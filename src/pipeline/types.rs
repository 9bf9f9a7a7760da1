//! Shared types for the triage pipeline.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Inbound email ───────────────────────────────────────────────────

/// A raw email as delivered by a mail source.
///
/// Sources convert their native format into this struct. The pipeline
/// normalizes the three text fields and classifies the result. Any of them
/// may be empty — classification treats missing data as the empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEmail {
    /// Provider-native id (generated UUID when the source has none).
    pub id: String,
    /// Sender header as-is — a bare address or `Name <addr>`.
    #[serde(default)]
    pub sender: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Body snippet — possibly truncated and HTML-escaped by the source.
    #[serde(default)]
    pub snippet: String,
    /// When the message was received, if the source knows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<DateTime<Utc>>,
}

// ── Category ────────────────────────────────────────────────────────

/// Priority tier assigned to a message.
///
/// Classification is total: every message gets exactly one of these, with
/// `Other` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Security alerts, legal notices, trusted financial failures,
    /// action-required language without marketing framing.
    Urgent,
    /// Work coordination, trusted transactional updates, social
    /// notifications, or any trusted sender with no marketing signals.
    Important,
    /// Spam, promotions, newsletters, and everything unmatched.
    Other,
}

impl Category {
    /// Stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Important => "Important",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Classified email ────────────────────────────────────────────────

/// Result of running one email through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedEmail {
    /// The message, with its text fields normalized.
    pub email: InboundEmail,
    /// The assigned priority tier.
    pub category: Category,
    /// Name of the decision rule that fired.
    pub matched_rule: &'static str,
    /// When classification happened.
    pub classified_at: DateTime<Utc>,
}

// ── Category tally ──────────────────────────────────────────────────

/// Per-category counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub urgent: usize,
    pub important: usize,
    pub other: usize,
}

impl CategoryTally {
    /// Count one message.
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Urgent => self.urgent += 1,
            Category::Important => self.important += 1,
            Category::Other => self.other += 1,
        }
    }

    /// Total messages counted.
    pub fn total(&self) -> usize {
        self.urgent + self.important + self.other
    }
}

impl FromIterator<Category> for CategoryTally {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut tally = Self::default();
        for category in iter {
            tally.record(category);
        }
        tally
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Extract the display-name portion of a sender header for output.
///
/// `"Alice Example <alice@example.com>"` → `"Alice Example"`; a sender with
/// no angle-bracket address comes back unchanged.
pub fn sender_display_name(sender: &str) -> &str {
    match sender.split_once('<') {
        Some((name, _)) => name.trim(),
        None => sender,
    }
}
