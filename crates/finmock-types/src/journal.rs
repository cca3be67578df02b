//! Journal entry metadata.

use serde::{Deserialize, Serialize};

/// Posting status of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalStatus {
    Posted,
    Unposted,
    Error,
}

impl JournalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Posted => "posted",
            Self::Unposted => "unposted",
            Self::Error => "error",
        }
    }
}

/// A journal entry. Ledger lines reference entries from a shared pool,
/// many lines to one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub journal_id: String,
    pub source_system: String,
    pub posted_by: String,
    pub status: JournalStatus,
    /// "YYYY-MM-DD HH:MM:SS", within the last 150 days of generation.
    pub posted_at: String,
}
