//! Append-only conversation history.
//!
//! The historical chatbot accumulated conversations by rewriting a CSV
//! from inside the scoring code. Here the store is an explicit value:
//! callers load a snapshot, append to it (getting a new snapshot back),
//! and decide when to persist through the `HistoryStore` seam. Scoring
//! never touches the filesystem.
//!
//! Appends are at-least-once: duplicate conversations are kept, never
//! deduplicated. New conversations take `max(existing id) + 1`.

use im::Vector;

use crate::core::{MessageRecord, Result};

/// Immutable snapshot of the accumulated message table.
///
/// Cloning is cheap; `append_conversation` returns a new snapshot and
/// leaves the original untouched.
#[derive(Debug, Clone, Default)]
pub struct MessageHistory {
    records: Vector<MessageRecord>,
}

impl MessageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = MessageRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &MessageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next appended conversation will take.
    pub fn next_lead_id(&self) -> u64 {
        self.records
            .iter()
            .map(|record| record.lead_id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Append a conversation as a new lead. Returns the new snapshot
    /// and the id that was assigned.
    pub fn append_conversation<I, S>(&self, messages: I) -> (Self, u64)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lead_id = self.next_lead_id();
        let mut records = self.records.clone();
        for text in messages {
            records.push_back(MessageRecord {
                lead_id,
                text: text.into(),
                timestamp: None,
                channel: None,
            });
        }
        (Self { records }, lead_id)
    }
}

/// Persistence seam for the history. Implementations live at the
/// edges; the scoring pipeline only ever sees `MessageHistory` values.
pub trait HistoryStore {
    fn load(&self) -> Result<MessageHistory>;
    fn save(&self, history: &MessageHistory) -> Result<()>;
}

/// In-memory store for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    snapshot: std::sync::Mutex<MessageHistory>,
}

impl MemoryHistoryStore {
    pub fn new(history: MessageHistory) -> Self {
        Self {
            snapshot: std::sync::Mutex::new(history),
        }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<MessageHistory> {
        Ok(self
            .snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, history: &MessageHistory) -> Result<()> {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = history.clone();
        Ok(())
    }
}
