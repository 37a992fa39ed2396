//! Task data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three task variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Plain task, no time attributes
    Todo,
    /// Task with a due date
    Deadline { due: String },
    /// Task spanning a date range
    Event { start: String, end: String },
}

impl TaskKind {
    /// Build a kind from a discriminator tag and up to two date strings.
    ///
    /// `"deadline"` with a date becomes [`TaskKind::Deadline`]; `"event"` with
    /// both dates becomes [`TaskKind::Event`]. Anything else — an unknown tag,
    /// or a recognized tag missing its required dates — falls back to
    /// [`TaskKind::Todo`]. The fallback is deliberate: a malformed add request
    /// still produces a usable task rather than an error.
    pub fn from_tag(tag: &str, first_date: Option<&str>, second_date: Option<&str>) -> Self {
        match tag {
            "deadline" => match first_date {
                Some(due) => Self::Deadline {
                    due: due.to_string(),
                },
                None => Self::Todo,
            },
            "event" => match (first_date, second_date) {
                (Some(start), Some(end)) => Self::Event {
                    start: start.to_string(),
                    end: end.to_string(),
                },
                _ => Self::Todo,
            },
            _ => Self::Todo,
        }
    }

    /// The discriminator tag, as stored in the tasks file.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }
}

/// A single task in the list. Identity is the name; the list enforces
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub done: bool,
    pub kind: TaskKind,

    /// When the task was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the task was last marked done
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new, not-yet-done task.
    pub fn new(name: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            done: false,
            kind,
            created_at: Some(Utc::now()),
            completed_at: None,
        }
    }

    /// Unconditional status flip to done. Callers check whether the flip is
    /// meaningful before calling; the engine reports no-op marks separately.
    pub fn set_done(&mut self) {
        self.done = true;
        self.completed_at = Some(Utc::now());
    }

    /// Unconditional status flip to not done.
    pub fn set_undone(&mut self) {
        self.done = false;
        self.completed_at = None;
    }

    /// One-line human-readable form: status glyph, name, variant suffix.
    pub fn render(&self) -> String {
        let glyph = if self.done { "[x]" } else { "[ ]" };
        match &self.kind {
            TaskKind::Todo => format!("{} {}", glyph, self.name),
            TaskKind::Deadline { due } => format!("{} {} (by {})", glyph, self.name, due),
            TaskKind::Event { start, end } => {
                format!("{} {} (from {} to {})", glyph, self.name, start, end)
            }
        }
    }
}
