//! Library-level tests of the note store and view controller over real files.

use chrono::{DateTime, Duration, Utc};
use pinnotes::domain::{Category, CategoryFilter, Note, NoteDraft};
use pinnotes::store::{FileStorage, NoteError, NoteStore};
use pinnotes::view::ViewController;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn base() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn draft(title: &str, label: &str, pinned: bool) -> NoteDraft {
    NoteDraft::new(title, Category::new(label).unwrap()).pinned(pinned)
}

fn open(dir: &TempDir) -> NoteStore<FileStorage> {
    NoteStore::open(FileStorage::open(dir.path()).unwrap()).unwrap()
}

fn titles(notes: &[Note]) -> Vec<&str> {
    notes.iter().map(Note::title).collect()
}

#[test]
fn pinned_scenario_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    store
        .create_at(draft("Shopping", "personal", false), base())
        .unwrap();
    let deploy = store
        .create_at(draft("Deploy", "work", true), base() + Duration::milliseconds(1))
        .unwrap();
    assert_eq!(titles(store.list()), vec!["Deploy", "Shopping"]);

    let reopened = open(&dir);
    assert_eq!(reopened.list(), store.list());

    let mut controller = ViewController::new(reopened);
    let position = controller
        .current_view()
        .iter()
        .position(|n| n.id() == deploy.id())
        .unwrap();
    let id = controller.resolve_identity(position).unwrap();
    controller.delete(id).unwrap();

    assert_eq!(titles(open(&dir).list()), vec!["Shopping"]);
}

#[test]
fn validation_failure_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.create_at(draft("Keep", "work", false), base()).unwrap();
    let before = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();

    for title in ["", "   "] {
        assert!(matches!(
            store.create(draft(title, "work", false)),
            Err(NoteError::Validation(_))
        ));
    }

    let after = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn edit_keeps_created_at_across_reopen() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let note = store.create_at(draft("Draft", "work", false), base()).unwrap();

    store
        .update(
            note.id(),
            draft("Final", "personal", true).description("done"),
        )
        .unwrap();

    let reopened = open(&dir);
    let stored = reopened.get(note.id()).unwrap();
    assert_eq!(stored.created_at(), base());
    assert_eq!(stored.title(), "Final");
}

#[test]
fn filter_returns_category_subsequence() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let labels = ["work", "personal", "work", "personal", "work"];
    for (i, label) in labels.iter().enumerate() {
        store
            .create_at(
                draft(&format!("n{i}"), label, i == 3),
                base() + Duration::minutes(i as i64),
            )
            .unwrap();
    }

    let work = CategoryFilter::from(Category::new("work").unwrap());
    let expected: Vec<&Note> = store
        .list()
        .iter()
        .filter(|n| n.category().as_str() == "work")
        .collect();
    assert_eq!(store.filter(&work), expected);
    assert_eq!(store.filter(&CategoryFilter::All).len(), labels.len());
}

#[test]
fn search_round_trip_restores_category_view() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.create_at(draft("alpha", "work", false), base()).unwrap();
    store
        .create_at(draft("beta", "work", true), base() + Duration::minutes(1))
        .unwrap();
    store
        .create_at(draft("gamma", "home", false), base() + Duration::minutes(2))
        .unwrap();
    let file_before = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();

    let mut controller = ViewController::new(store);
    controller.set_category_filter("work".parse().unwrap());
    let filtered: Vec<Note> = controller.current_view().into_iter().cloned().collect();

    controller.set_search_query("x");
    assert!(controller.current_view().is_empty());
    controller.set_search_query("");

    let restored: Vec<Note> = controller.current_view().into_iter().cloned().collect();
    assert_eq!(restored, filtered);
    assert_eq!(titles(&restored), vec!["beta", "alpha"]);

    let file_after = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    assert_eq!(file_before, file_after);
}
