use searchbox::history::{HISTORY_KEY, LAST_SEARCH_KEY, MAX_HISTORY_LENGTH, SearchHistory};
use searchbox::search::{Dispatcher, Launcher, SearchEngine};
use searchbox::storage::{FileStorage, Storage};
use searchbox::term::SearchTerm;
use std::io;
use std::path::Path;

/// Launcher that never opens anything.
#[derive(Debug)]
struct NoopLauncher;

impl Launcher for NoopLauncher {
    fn open(&self, _url: &str) -> io::Result<()> {
        Ok(())
    }
}

fn open_history(path: &Path) -> SearchHistory {
    SearchHistory::load(Box::new(FileStorage::open(path)))
}

fn term(s: &str) -> SearchTerm {
    SearchTerm::parse(s).unwrap()
}

#[test]
fn fresh_store_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let history = open_history(&dir.path().join("storage.json"));

    assert!(history.entries().is_empty());
    assert_eq!(history.last(), None);
}

#[test]
fn history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut history = open_history(&path);
    history.record(&term("alpha"));
    history.record(&term("beta"));
    history.record(&term("alpha"));
    drop(history);

    let reopened = open_history(&path);
    assert_eq!(reopened.entries(), &["alpha", "beta"]);
    assert_eq!(reopened.last(), Some(term("alpha")));
}

#[test]
fn persisted_format_uses_json_array_and_plain_string() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut history = open_history(&path);
    history.record(&term("one"));
    history.record(&term("two"));

    let storage = FileStorage::open(&path);
    assert_eq!(storage.get(HISTORY_KEY).as_deref(), Some(r#"["two","one"]"#));
    assert_eq!(storage.get(LAST_SEARCH_KEY).as_deref(), Some("two"));
}

#[test]
fn bound_holds_for_long_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let mut history = open_history(&path);

    for i in 0..100 {
        let entries = history.record(&term(&format!("term{}", i % 17)));
        assert!(entries.len() <= MAX_HISTORY_LENGTH);
    }

    assert_eq!(open_history(&path).entries().len(), MAX_HISTORY_LENGTH);
}

#[test]
fn eleven_terms_evict_the_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut history = open_history(&dir.path().join("storage.json"));

    for i in 1..=11 {
        history.record(&term(&format!("a{}", i)));
    }

    let expected: Vec<String> = (2..=11).rev().map(|i| format!("a{}", i)).collect();
    assert_eq!(history.entries(), expected.as_slice());
}

#[test]
fn clear_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut history = open_history(&path);
    history.record(&term("secret"));
    history.clear();

    let reopened = open_history(&path);
    assert!(reopened.entries().is_empty());
    assert_eq!(reopened.last(), None);
}

#[test]
fn malformed_history_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, r#"{"searchHistory": "[oops", "lastSearchTerm": "kept"}"#).unwrap();

    let history = open_history(&path);
    assert!(history.entries().is_empty());
    assert_eq!(history.last(), Some(term("kept")));
}

#[test]
fn blank_searches_leave_storage_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let dispatcher = Dispatcher::new(SearchEngine::default(), Box::new(NoopLauncher));
    let mut history = open_history(&path);

    assert_eq!(dispatcher.perform_search("", &mut history), None);
    assert_eq!(dispatcher.perform_search("   ", &mut history), None);

    assert!(history.entries().is_empty());
    assert!(!path.exists());
}

#[test]
fn dispatched_search_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let dispatcher = Dispatcher::new(SearchEngine::default(), Box::new(NoopLauncher));

    let mut history = open_history(&path);
    dispatcher.perform_search("  南昌大学 ", &mut history);

    let reopened = open_history(&path);
    assert_eq!(reopened.entries(), &["南昌大学"]);
}
