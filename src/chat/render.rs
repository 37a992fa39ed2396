//! User-facing phrasing for chat responses

use crate::task::{Outcome, RecordError, Task};

/// Render an engine outcome as the chat response.
pub fn message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added { name, total } => {
            format!("Added {} ({} in the list)", name, count(*total))
        }
        Outcome::Duplicate { name } => format!("{} is already in the list!", name),
        Outcome::Deleted { name, total } => {
            format!("Deleted {} ({} left)", name, count(*total))
        }
        Outcome::NotFound { name } => format!("Task not found: {}", name),
        Outcome::Marked { name } => format!("Marked {}", name),
        Outcome::Unmarked { name } => format!("Unmarked {}", name),
        Outcome::AlreadyDone { name } => format!("{} is already done", name),
        Outcome::AlreadyUndone { name } => format!("{} is not done yet", name),
        Outcome::InvalidKeyword => "Please give a keyword to search for".to_string(),
        Outcome::Search { keyword, matches } => {
            let mut out = format!("Found {} matching '{}'", count(matches.len()), keyword);
            if !matches.is_empty() {
                out.push('\n');
                out.push_str(&numbered(matches));
            }
            out
        }
    }
}

/// The full list, with 1-based positions computed at render time.
pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet. Type something to add one.".to_string();
    }
    numbered(tasks)
}

fn numbered(tasks: &[Task]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn count(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", n)
    }
}

pub fn greeting(loaded: usize) -> String {
    let mut out = String::from("nag - what needs doing?\n");
    if loaded > 0 {
        out.push_str(&format!("{} loaded. ", count(loaded)));
    }
    out.push_str("Type a task to add it, /help for commands, bye to quit.");
    out
}

pub fn farewell() -> String {
    "Bye. Your tasks are saved.".to_string()
}

pub fn help() -> String {
    "Commands:\n\
     /list                    show all tasks\n\
     /mark <name>             mark a task done\n\
     /unmark <name>           mark a task not done\n\
     /delete <name>           remove a task\n\
     /find <keyword>          search task names\n\
     /help                    show this message\n\
     bye                      save and quit\n\
     Anything else adds a task. Add '/by <date>' for a deadline,\n\
     or '/from <date> /to <date>' for an event."
        .to_string()
}

pub fn unknown_command(keyword: &str) -> String {
    format!("Unknown command: /{}. Type /help for the command list.", keyword)
}

pub fn usage(keyword: &str) -> String {
    format!("Usage: /{} <task name>", keyword)
}

pub fn empty_name() -> String {
    "Task name cannot be empty.".to_string()
}

pub fn skipped_record(index: usize, err: &RecordError) -> String {
    format!("Warning: skipped task record {}: {}", index + 1, err)
}

pub fn dropped_duplicate(name: &str) -> String {
    format!("Warning: dropped duplicate task '{}' from the tasks file", name)
}

pub fn load_failed(err: &anyhow::Error) -> String {
    format!("Warning: could not load saved tasks ({:#}). Starting fresh.", err)
}

pub fn save_failed(err: &anyhow::Error) -> String {
    format!("Warning: could not save tasks ({:#})", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKind;

    #[test]
    fn test_added_reports_count() {
        let outcome = Outcome::Added {
            name: "read book".to_string(),
            total: 1,
        };
        assert_eq!(message(&outcome), "Added read book (1 task in the list)");

        let outcome = Outcome::Added {
            name: "read book".to_string(),
            total: 3,
        };
        assert_eq!(message(&outcome), "Added read book (3 tasks in the list)");
    }

    #[test]
    fn test_task_list_is_one_based() {
        let tasks = vec![
            Task::new("a", TaskKind::Todo),
            Task::new("b", TaskKind::Todo),
        ];
        assert_eq!(task_list(&tasks), "1. [ ] a\n2. [ ] b");
    }

    #[test]
    fn test_empty_task_list() {
        assert_eq!(task_list(&[]), "No tasks yet. Type something to add one.");
    }

    #[test]
    fn test_search_with_matches() {
        let outcome = Outcome::Search {
            keyword: "e".to_string(),
            matches: vec![Task::new("read book", TaskKind::Todo)],
        };
        assert_eq!(
            message(&outcome),
            "Found 1 task matching 'e'\n1. [ ] read book"
        );
    }

    #[test]
    fn test_search_with_zero_matches_still_reports_keyword() {
        let outcome = Outcome::Search {
            keyword: "xyz".to_string(),
            matches: Vec::new(),
        };
        assert_eq!(message(&outcome), "Found 0 tasks matching 'xyz'");
    }

    #[test]
    fn test_status_messages() {
        let name = "read book".to_string();
        assert_eq!(
            message(&Outcome::AlreadyDone { name: name.clone() }),
            "read book is already done"
        );
        assert_eq!(
            message(&Outcome::AlreadyUndone { name: name.clone() }),
            "read book is not done yet"
        );
        assert_eq!(
            message(&Outcome::NotFound { name }),
            "Task not found: read book"
        );
    }
}
