//! Mail sources — where inbound messages come from.
//!
//! Sources are pure I/O: they produce `InboundEmail`s and know nothing about
//! classification. The shipped implementation reads a local JSON mailbox
//! export; networked providers would live behind the same trait.

pub mod json;

pub use json::JsonMailbox;

use async_trait::async_trait;

use crate::error::ChannelError;
use crate::pipeline::types::InboundEmail;

/// A source of inbound mail.
#[async_trait]
pub trait MailSource: Send + Sync {
    /// Source name for logs (e.g. "json").
    fn name(&self) -> &str;

    /// Fetch up to `limit` messages, in whatever order the source defines.
    async fn fetch(&self, limit: usize) -> Result<Vec<InboundEmail>, ChannelError>;
}
