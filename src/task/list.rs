//! Task list engine - owns the ordered collection and all mutations

use super::model::{Task, TaskKind};

/// Structured result of an engine operation. Domain conditions (duplicates,
/// missing tasks, no-op status flips) are outcomes, not errors: nothing here
/// terminates the session, and the presentation layer owns the phrasing.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Task appended; `total` is the list size afterwards.
    Added { name: String, total: usize },
    /// Add rejected: a task with this exact name already exists.
    Duplicate { name: String },
    /// Task removed; `total` is the list size afterwards.
    Deleted { name: String, total: usize },
    /// No task with this exact name exists.
    NotFound { name: String },
    Marked { name: String },
    Unmarked { name: String },
    /// Mark requested on a task that is already done.
    AlreadyDone { name: String },
    /// Unmark requested on a task that is not done.
    AlreadyUndone { name: String },
    /// Find called with an empty or blank keyword.
    InvalidKeyword,
    /// Find results, in insertion order. Zero matches is a valid result.
    Search { keyword: String, matches: Vec<Task> },
}

/// The ordered task collection. Sole owner of every task in it; all mutation
/// goes through these operations so the uniqueness and ordering invariants
/// hold. The task count is always `tasks().len()` — there is no separate
/// counter to drift.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Rebuild a list from persisted tasks. Later tasks that repeat an earlier
    /// name are dropped so uniqueness holds from the first command; the
    /// dropped names are returned for the caller to surface as warnings.
    pub fn from_saved(tasks: Vec<Task>) -> (Self, Vec<String>) {
        let mut list = Self::new();
        let mut dropped = Vec::new();

        for task in tasks {
            if list.contains(&task.name) {
                dropped.push(task.name);
            } else {
                list.tasks.push(task);
            }
        }

        (list, dropped)
    }

    /// Position of the task with this exact name. Every name-based operation
    /// goes through here so matching semantics stay consistent: exact
    /// equality, case- and whitespace-sensitive.
    fn position(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name == name)
    }

    /// Exact-name existence check.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append a new task, rejecting exact-name duplicates without mutating.
    /// Callers trim the name; an empty name never reaches the engine.
    pub fn add(&mut self, name: &str, kind: TaskKind) -> Outcome {
        if self.contains(name) {
            return Outcome::Duplicate {
                name: name.to_string(),
            };
        }

        self.tasks.push(Task::new(name, kind));
        Outcome::Added {
            name: name.to_string(),
            total: self.tasks.len(),
        }
    }

    /// Remove the task with this exact name. Subsequent tasks shift down one
    /// position; the remainder keeps its order.
    pub fn delete(&mut self, name: &str) -> Outcome {
        match self.position(name) {
            Some(index) => {
                self.tasks.remove(index);
                Outcome::Deleted {
                    name: name.to_string(),
                    total: self.tasks.len(),
                }
            }
            None => Outcome::NotFound {
                name: name.to_string(),
            },
        }
    }

    /// Mark the task done. Marking an already-done task is a reported no-op,
    /// not a silent one and not an error.
    pub fn mark(&mut self, name: &str) -> Outcome {
        match self.position(name) {
            Some(index) => {
                let task = &mut self.tasks[index];
                if task.done {
                    Outcome::AlreadyDone {
                        name: name.to_string(),
                    }
                } else {
                    task.set_done();
                    Outcome::Marked {
                        name: name.to_string(),
                    }
                }
            }
            None => Outcome::NotFound {
                name: name.to_string(),
            },
        }
    }

    /// Mark the task not done. Same no-op reporting as [`TaskList::mark`].
    pub fn unmark(&mut self, name: &str) -> Outcome {
        match self.position(name) {
            Some(index) => {
                let task = &mut self.tasks[index];
                if task.done {
                    task.set_undone();
                    Outcome::Unmarked {
                        name: name.to_string(),
                    }
                } else {
                    Outcome::AlreadyUndone {
                        name: name.to_string(),
                    }
                }
            }
            None => Outcome::NotFound {
                name: name.to_string(),
            },
        }
    }

    /// Case-sensitive substring search over task names, preserving insertion
    /// order. The keyword is trimmed first; a blank keyword is rejected
    /// without scanning.
    pub fn find(&self, keyword: &str) -> Outcome {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Outcome::InvalidKeyword;
        }

        let matches: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.name.contains(keyword))
            .cloned()
            .collect();

        Outcome::Search {
            keyword: keyword.to_string(),
            matches,
        }
    }

    /// Read view for rendering and serialization. Mutation goes through the
    /// operations above.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The derived count: always the collection's actual size.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
