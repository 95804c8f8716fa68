use crate::storage::Storage;
use crate::term::SearchTerm;
use tracing::{debug, warn};

/// Maximum number of terms kept in the history.
pub const MAX_HISTORY_LENGTH: usize = 10;
/// Storage key of the JSON encoded history list.
pub const HISTORY_KEY: &str = "searchHistory";
/// Storage key of the most recently searched term.
pub const LAST_SEARCH_KEY: &str = "lastSearchTerm";

/// Bounded, deduplicated, most-recent-first history of search terms.
///
/// Every mutation is written to the backing [`Storage`] before returning.
#[derive(Debug)]
pub struct SearchHistory {
    storage: Box<dyn Storage>,
    /// Entries, newest first.
    history: Vec<String>,
    /// Current position when recalling entries into the input (None when not recalling).
    index: Option<usize>,
}

impl SearchHistory {
    /// Loads the history from `storage`.
    ///
    /// Absent or malformed data is treated as an empty history.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let history = storage
            .get(HISTORY_KEY)
            .map(|json| parse_history(&json))
            .unwrap_or_default();

        Self {
            storage,
            history,
            index: None,
        }
    }

    /// Returns all entries, newest first.
    pub fn entries(&self) -> &[String] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Moves `term` to the front of the history, evicting the oldest entry past the bound, and
    /// remembers it as the last search.
    pub fn record(&mut self, term: &SearchTerm) -> &[String] {
        let term = term.as_str();
        self.history.retain(|entry| entry != term);
        self.history.insert(0, term.to_string());
        self.history.truncate(MAX_HISTORY_LENGTH);
        self.index = None;

        self.persist_history();
        if let Err(e) = self.storage.set(LAST_SEARCH_KEY, term) {
            warn!("Failed to persist last search term: {}", e);
        }

        &self.history
    }

    /// Forgets every entry and the last search.
    pub fn clear(&mut self) {
        self.history.clear();
        self.index = None;

        for key in [HISTORY_KEY, LAST_SEARCH_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!("Failed to remove {} from storage: {}", key, e);
            }
        }
    }

    /// Returns the last searched term as stored, if any.
    pub fn last(&self) -> Option<SearchTerm> {
        self.storage
            .get(LAST_SEARCH_KEY)
            .and_then(|value| SearchTerm::parse(&value))
    }

    fn persist_history(&mut self) {
        match serde_json::to_string(&self.history) {
            Ok(json) => {
                if let Err(e) = self.storage.set(HISTORY_KEY, &json) {
                    warn!("Failed to persist search history: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize search history: {}", e),
        }
    }

    /// Recalls the next older entry.
    pub fn previous_record(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }

        let next_index = match self.index {
            // start at the front (most recent)
            None => 0,
            Some(i) if i + 1 >= self.history.len() => {
                // Already at oldest entry
                return None;
            }
            Some(i) => i + 1,
        };
        self.index = Some(next_index);
        Some(&self.history[next_index])
    }

    /// Recalls the next newer entry. Leaves recall mode after the newest one.
    pub fn next_record(&mut self) -> Option<&str> {
        match self.index {
            None => None,
            Some(0) => {
                self.index = None;
                None
            }
            Some(i) => {
                self.index = Some(i - 1);
                Some(&self.history[i - 1])
            }
        }
    }

    /// True while entries are being recalled.
    pub fn is_recalling(&self) -> bool {
        self.index.is_some()
    }

    /// Leaves recall mode.
    pub fn reset(&mut self) {
        self.index = None;
    }
}

/// Decodes a persisted history list.
///
/// Malformed JSON yields an empty list. Blank entries and duplicates are dropped and the result is
/// capped to [`MAX_HISTORY_LENGTH`].
pub fn parse_history(json: &str) -> Vec<String> {
    let raw: Vec<String> = match serde_json::from_str(json) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("Discarding malformed search history: {}", e);
            return Vec::new();
        }
    };

    let mut history: Vec<String> = Vec::with_capacity(MAX_HISTORY_LENGTH);
    for entry in raw {
        let Some(term) = SearchTerm::parse(&entry) else {
            continue;
        };
        if !history.iter().any(|existing| existing == term.as_str()) {
            history.push(term.into_inner());
        }
        if history.len() == MAX_HISTORY_LENGTH {
            break;
        }
    }
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn term(s: &str) -> SearchTerm {
        SearchTerm::parse(s).unwrap()
    }

    fn empty_history() -> SearchHistory {
        SearchHistory::load(Box::new(MemoryStorage::new()))
    }

    /// Storage that holds `seed` but rejects every write.
    #[derive(Debug, Default)]
    struct ReadOnlyStorage {
        seed: Option<String>,
    }

    impl Storage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Option<String> {
            (key == HISTORY_KEY).then(|| self.seed.clone()).flatten()
        }

        fn set(&mut self, key: &str, _value: &str) -> color_eyre::Result<()> {
            Err(color_eyre::eyre::eyre!("cannot write {}", key))
        }

        fn remove(&mut self, key: &str) -> color_eyre::Result<()> {
            Err(color_eyre::eyre::eyre!("cannot remove {}", key))
        }
    }

    #[test]
    fn test_fresh_history_is_empty() {
        let history = empty_history();
        assert!(history.entries().is_empty());
        assert_eq!(history.last(), None);
    }

    #[test]
    fn test_record_moves_duplicate_to_front() {
        let mut history = empty_history();
        history.record(&term("alpha"));
        history.record(&term("beta"));
        let entries = history.record(&term("alpha"));
        assert_eq!(entries, &["alpha", "beta"]);
    }

    #[test]
    fn test_record_twice_keeps_single_entry() {
        let mut history = empty_history();
        history.record(&term("rust"));
        history.record(&term("rust"));
        assert_eq!(history.entries(), &["rust"]);
    }

    #[test]
    fn test_record_evicts_oldest() {
        let mut history = empty_history();
        for i in 1..=11 {
            history.record(&term(&format!("a{}", i)));
        }

        let expected: Vec<String> = (2..=11).rev().map(|i| format!("a{}", i)).collect();
        assert_eq!(history.entries(), expected.as_slice());
    }

    #[test]
    fn test_record_is_most_recent_first() {
        let mut history = empty_history();
        history.record(&term("t1"));
        history.record(&term("t2"));
        history.record(&term("t3"));
        assert_eq!(history.entries(), &["t3", "t2", "t1"]);
    }

    #[test]
    fn test_record_sets_last_search() {
        let mut history = empty_history();
        history.record(&term("one"));
        history.record(&term("two"));
        assert_eq!(history.last(), Some(term("two")));
    }

    #[test]
    fn test_record_is_case_sensitive() {
        let mut history = empty_history();
        history.record(&term("Rust"));
        history.record(&term("rust"));
        assert_eq!(history.entries(), &["rust", "Rust"]);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut history = empty_history();
        history.record(&term("one"));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);

        // Idempotent
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_survives_write_failures() {
        let mut history = SearchHistory::load(Box::new(ReadOnlyStorage::default()));

        assert_eq!(history.record(&term("offline")), &["offline"]);
        assert_eq!(history.record(&term("again")), &["again", "offline"]);
        assert_eq!(history.entries(), &["again", "offline"]);
    }

    #[test]
    fn test_clear_survives_remove_failures() {
        let storage = ReadOnlyStorage {
            seed: Some(r#"["kept"]"#.to_string()),
        };
        let mut history = SearchHistory::load(Box::new(storage));
        assert_eq!(history.entries(), &["kept"]);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_load_reads_persisted_entries() {
        let mut storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, r#"["b","a"]"#).unwrap();
        storage.set(LAST_SEARCH_KEY, "b").unwrap();

        let history = SearchHistory::load(Box::new(storage));
        assert_eq!(history.entries(), &["b", "a"]);
        assert_eq!(history.last(), Some(term("b")));
    }

    #[test]
    fn test_load_discards_malformed_json() {
        let mut storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, "not json").unwrap();

        let history = SearchHistory::load(Box::new(storage));
        assert!(history.is_empty());
    }

    #[test]
    fn test_parse_history_normalizes_entries() {
        let json = r#"["a", "  ", "b", "a", "c", "d", "e", "f", "g", "h", "i", "j", "k"]"#;
        let history = parse_history(json);
        assert_eq!(history, vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    }

    #[test]
    fn test_parse_history_rejects_non_string_entries() {
        assert!(parse_history("[1, 2, 3]").is_empty());
        assert!(parse_history(r#"{"a": "b"}"#).is_empty());
    }

    #[test]
    fn test_previous_from_empty() {
        let mut history = empty_history();
        assert_eq!(history.previous_record(), None);
    }

    #[test]
    fn test_previous_navigation() {
        let mut history = empty_history();
        history.record(&term("test1"));
        history.record(&term("test2"));
        history.record(&term("test3"));

        // First previous should return most recent (test3)
        assert_eq!(history.previous_record(), Some("test3"));
        assert_eq!(history.previous_record(), Some("test2"));
        assert_eq!(history.previous_record(), Some("test1"));
        // At oldest
        assert_eq!(history.previous_record(), None);
    }

    #[test]
    fn test_next_navigation() {
        let mut history = empty_history();
        history.record(&term("test1"));
        history.record(&term("test2"));

        history.previous_record();
        history.previous_record();

        assert_eq!(history.next_record(), Some("test2"));
        // Past the newest, recall mode ends
        assert_eq!(history.next_record(), None);
        assert_eq!(history.next_record(), None);
    }

    #[test]
    fn test_reset() {
        let mut history = empty_history();
        history.record(&term("test1"));
        history.record(&term("test2"));
        history.previous_record();
        history.previous_record();
        history.reset();
        assert!(!history.is_recalling());

        assert_eq!(history.previous_record(), Some("test2"));
    }
}
