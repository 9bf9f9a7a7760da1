//! Triage processor — normalizes and classifies inbound email.
//!
//! Flow per message:
//! 1. `normalize()` each text field — entities decoded, controls stripped
//! 2. `classify_detailed()` — ordered keyword rules, first match wins
//! 3. Stamp the result with the fired rule and a timestamp
//!
//! Classification is total, so processing a message cannot fail. Batches
//! process each message independently; ordering is irrelevant.

use chrono::Utc;
use tracing::{debug, info};

use crate::channels::MailSource;
use crate::error::Result;
use crate::pipeline::normalize::normalize;
use crate::pipeline::rules::classify_detailed;
use crate::pipeline::types::{CategoryTally, ClassifiedEmail, InboundEmail};

/// Runs messages through normalize → classify and stamps the result.
///
/// Carries no state of its own — the rule tables are process-wide statics —
/// so one processor can be shared freely across tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriageProcessor;

impl TriageProcessor {
    /// Create a new processor.
    pub fn new() -> Self {
        Self
    }

    /// Classify one email.
    ///
    /// The returned message carries the normalized field text, so downstream
    /// display sees the same canonical form the classifier saw.
    pub fn process(&self, email: InboundEmail) -> ClassifiedEmail {
        let email = InboundEmail {
            sender: normalize(Some(&email.sender)),
            subject: normalize(Some(&email.subject)),
            snippet: normalize(Some(&email.snippet)),
            ..email
        };

        let (category, matched_rule) = classify_detailed(
            Some(&email.snippet),
            Some(&email.sender),
            Some(&email.subject),
        );

        debug!(
            id = %email.id,
            sender = %email.sender,
            rule = matched_rule,
            category = %category,
            "Classified message"
        );

        ClassifiedEmail {
            email,
            category,
            matched_rule,
            classified_at: Utc::now(),
        }
    }

    /// Classify a batch of messages.
    pub fn process_batch(&self, emails: Vec<InboundEmail>) -> Vec<ClassifiedEmail> {
        let count = emails.len();
        info!(count, "Classifying message batch");

        let results: Vec<ClassifiedEmail> =
            emails.into_iter().map(|email| self.process(email)).collect();

        let tally: CategoryTally = results.iter().map(|m| m.category).collect();
        info!(
            urgent = tally.urgent,
            important = tally.important,
            other = tally.other,
            "Batch classification complete"
        );
        results
    }

    /// Fetch from a source and classify everything it returns.
    pub async fn run(
        &self,
        source: &dyn MailSource,
        limit: usize,
    ) -> Result<Vec<ClassifiedEmail>> {
        let emails = source.fetch(limit).await?;
        info!(source = source.name(), fetched = emails.len(), "Fetched inbound mail");
        Ok(self.process_batch(emails))
    }
}
