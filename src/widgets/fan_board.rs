//! Fan corner message board
//!
//! Append-only list of messages kept as a JSON array under a fixed storage
//! key. Shown newest first.

use serde_json::Value;

use super::storage::{KeyValueStore, StoreError, StoreResult};

/// Storage key of the submission list
pub const FAN_SUBMISSIONS_KEY: &str = "kawsFanSubmissions";

/// Raw contents of the submission key
enum Stored {
    List(Vec<Value>),
    /// Present but not a JSON list
    Unreadable,
}

/// Message board backed by a key-value store
pub struct FanBoard<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FanBoard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read(&self) -> Stored {
        let Some(raw) = self.store.get(FAN_SUBMISSIONS_KEY) else {
            return Stored::List(Vec::new());
        };
        match serde_json::from_str::<Option<Vec<Value>>>(&raw) {
            Ok(list) => Stored::List(list.unwrap_or_default()),
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable fan submissions");
                Stored::Unreadable
            }
        }
    }

    /// Stored submissions, oldest first
    ///
    /// Entries that are not strings are skipped; a value that is not a list
    /// reads as empty.
    pub fn submissions(&self) -> Vec<String> {
        let Stored::List(list) = self.read() else {
            return Vec::new();
        };

        let total = list.len();
        let messages: Vec<String> = list
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect();

        if messages.len() < total {
            tracing::warn!(skipped = total - messages.len(), "Ignoring non-text fan submissions");
        }
        messages
    }

    /// Submissions in display order
    pub fn newest_first(&self) -> Vec<String> {
        let mut list = self.submissions();
        list.reverse();
        list
    }

    /// Trim and append a message
    ///
    /// Returns `Ok(false)` without touching storage when the message is empty
    /// after trimming. Existing entries are written back as they were,
    /// including ones `submissions` skips. An unreadable stored value is left
    /// in place and reported as [`StoreError::Unreadable`].
    pub fn submit(&mut self, message: &str) -> StoreResult<bool> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(false);
        }

        let Stored::List(mut list) = self.read() else {
            return Err(StoreError::Unreadable {
                key: FAN_SUBMISSIONS_KEY.to_string(),
            });
        };
        list.push(Value::String(message.to_string()));
        let raw = serde_json::to_string(&list)?;
        self.store.set(FAN_SUBMISSIONS_KEY, &raw)?;

        tracing::debug!(count = list.len(), "Fan submission stored");
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::storage::MemoryStore;

    #[test]
    fn test_blank_submission_leaves_storage_unchanged() {
        let mut board = FanBoard::new(MemoryStore::new());
        assert!(!board.submit("").unwrap());
        assert!(!board.submit("   \t\n").unwrap());
        assert_eq!(board.store().get(FAN_SUBMISSIONS_KEY), None);
    }

    #[test]
    fn test_submission_appended_and_shown_first() {
        let mut board = FanBoard::new(MemoryStore::new());
        board.submit("first").unwrap();
        assert!(board.submit("  hello  ").unwrap());

        assert_eq!(board.submissions(), vec!["first", "hello"]);
        assert_eq!(board.newest_first(), vec!["hello", "first"]);
        assert_eq!(
            board.store().get(FAN_SUBMISSIONS_KEY).as_deref(),
            Some(r#"["first","hello"]"#)
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut board = FanBoard::new(MemoryStore::new());
        board.submit("same").unwrap();
        board.submit("same").unwrap();
        assert_eq!(board.submissions().len(), 2);
    }

    #[test]
    fn test_non_text_entries_survive_a_submission() {
        let mut store = MemoryStore::new();
        store.set(FAN_SUBMISSIONS_KEY, r#"[1,"kept"]"#).unwrap();
        let mut board = FanBoard::new(store);
        assert_eq!(board.submissions(), vec!["kept"]);

        assert!(board.submit("hello").unwrap());
        assert_eq!(board.newest_first(), vec!["hello", "kept"]);
        assert_eq!(
            board.store().get(FAN_SUBMISSIONS_KEY).as_deref(),
            Some(r#"[1,"kept","hello"]"#)
        );
    }

    #[test]
    fn test_unreadable_entry_reads_empty_and_is_not_overwritten() {
        let mut store = MemoryStore::new();
        store.set(FAN_SUBMISSIONS_KEY, "not json").unwrap();
        let mut board = FanBoard::new(store);
        assert!(board.submissions().is_empty());

        let err = board.submit("hello").unwrap_err();
        assert!(matches!(err, StoreError::Unreadable { .. }));
        assert_eq!(board.store().get(FAN_SUBMISSIONS_KEY).as_deref(), Some("not json"));
    }

    #[test]
    fn test_null_entry_reads_empty_and_accepts_submissions() {
        let mut store = MemoryStore::new();
        store.set(FAN_SUBMISSIONS_KEY, "null").unwrap();
        let mut board = FanBoard::new(store);
        assert!(board.submissions().is_empty());

        board.submit("first").unwrap();
        assert_eq!(board.submissions(), vec!["first"]);
    }
}
