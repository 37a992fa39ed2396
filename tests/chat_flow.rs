//! End-to-end chat session scenarios: parse -> dispatch -> render

use anyhow::Result;
use nag::chat::input::parse_line;
use nag::chat::{dispatch, Step};
use nag::task::{Storage, TaskKind, TaskList};

/// Feed one line through the full pipeline and return the rendered response.
fn say(list: &mut TaskList, line: &str) -> String {
    match dispatch(list, parse_line(line)) {
        Step::Respond { text, .. } => text,
        other => panic!("expected a response to {:?}, got {:?}", line, other),
    }
}

#[test]
fn add_then_duplicate_add() {
    let mut list = TaskList::new();

    assert_eq!(say(&mut list, "read book"), "Added read book (1 task in the list)");
    assert_eq!(list.len(), 1);
    assert_eq!(list.tasks()[0].kind, TaskKind::Todo);
    assert!(!list.tasks()[0].done);

    assert_eq!(say(&mut list, "read book"), "read book is already in the list!");
    assert_eq!(list.len(), 1);
}

#[test]
fn mark_twice_reports_no_op_second_time() {
    let mut list = TaskList::new();
    say(&mut list, "read book");

    assert_eq!(say(&mut list, "/mark read book"), "Marked read book");
    assert!(list.tasks()[0].done);

    assert_eq!(say(&mut list, "/mark read book"), "read book is already done");
    assert!(list.tasks()[0].done);
}

#[test]
fn find_spans_variants_in_insertion_order() {
    let mut list = TaskList::new();
    say(&mut list, "submit report /by 2024-06-01");
    say(&mut list, "team sync /from 2024-06-02 /to 2024-06-03");

    assert_eq!(
        list.tasks()[0].kind,
        TaskKind::Deadline {
            due: "2024-06-01".to_string()
        }
    );
    assert_eq!(
        list.tasks()[1].kind,
        TaskKind::Event {
            start: "2024-06-02".to_string(),
            end: "2024-06-03".to_string()
        }
    );

    assert_eq!(
        say(&mut list, "/find e"),
        "Found 2 tasks matching 'e'\n\
         1. [ ] submit report (by 2024-06-01)\n\
         2. [ ] team sync (from 2024-06-02 to 2024-06-03)"
    );
}

#[test]
fn delete_then_delete_again() {
    let mut list = TaskList::new();
    say(&mut list, "read book");
    say(&mut list, "water plants");

    assert_eq!(say(&mut list, "/delete read book"), "Deleted read book (1 task left)");
    assert_eq!(say(&mut list, "/delete read book"), "Task not found: read book");
    assert_eq!(say(&mut list, "/list"), "1. [ ] water plants");
}

#[test]
fn unmark_fresh_task_reports_no_op() {
    let mut list = TaskList::new();
    say(&mut list, "read book");

    assert_eq!(say(&mut list, "/unmark read book"), "read book is not done yet");
    say(&mut list, "/mark read book");
    assert_eq!(say(&mut list, "/unmark read book"), "Unmarked read book");
}

#[test]
fn load_skips_unknown_kind_and_keeps_valid_records() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("tasks.json");
    std::fs::write(
        &path,
        r#"[
            {"name": "read book", "kind": "todo", "done": false},
            {"name": "mystery", "kind": "reminder", "done": false},
            {"name": "submit report", "kind": "deadline", "done": true, "due": "2024-06-01"}
        ]"#,
    )?;

    let storage = Storage::new(path);
    let loaded = storage.load()?;
    assert_eq!(loaded.skipped.len(), 1);

    let (mut list, dropped) = TaskList::from_saved(loaded.tasks);
    assert!(dropped.is_empty());
    assert_eq!(list.len(), 2);
    assert_eq!(
        say(&mut list, "/list"),
        "1. [ ] read book\n2. [x] submit report (by 2024-06-01)"
    );
    Ok(())
}

#[test]
fn session_round_trip_through_storage() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let storage = Storage::new(temp.path().join("tasks.json"));

    let mut list = TaskList::new();
    say(&mut list, "read book");
    say(&mut list, "submit report /by 2024-06-01");
    say(&mut list, "/mark read book");
    storage.save(list.tasks())?;

    let loaded = storage.load()?;
    assert!(loaded.skipped.is_empty());
    let (mut restored, dropped) = TaskList::from_saved(loaded.tasks);
    assert!(dropped.is_empty());

    assert_eq!(
        say(&mut restored, "/list"),
        "1. [x] read book\n2. [ ] submit report (by 2024-06-01)"
    );
    Ok(())
}
