//! Email triage pipeline.
//!
//! All inbound messages flow through:
//! 1. `MailSource::fetch()` — source-specific I/O
//! 2. `normalize()` — entity decoding, control stripping, trim
//! 3. `classify()` — ordered keyword rules, first match wins
//!
//! Classification is a pure function of the message text plus the static
//! rule tables; nothing below the source boundary performs I/O.

pub mod normalize;
pub mod processor;
pub mod rules;
pub mod types;
