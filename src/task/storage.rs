//! Tasks file persistence - JSON records with skip-and-warn loading

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::model::{Task, TaskKind};

/// Why a persisted record was dropped during load. These are warnings, never
/// load failures: one bad record must not take the rest of the file with it.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("unknown task kind '{0}'")]
    UnknownKind(String),

    #[error("deadline task is missing its due date")]
    MissingDueDate,

    #[error("event task is missing its start or end date")]
    MissingEventDates,

    #[error("task name is empty")]
    EmptyName,

    #[error("malformed record: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// On-disk shape of a single task. The `kind` field is the discriminator tag;
/// date fields are present only for the kinds that need them. Optional fields
/// default so files written by older versions still load.
#[derive(Debug, Serialize, Deserialize)]
struct TaskRecord {
    name: String,
    kind: String,
    done: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    due: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    fn from_task(task: &Task) -> Self {
        let (due, start, end) = match &task.kind {
            TaskKind::Todo => (None, None, None),
            TaskKind::Deadline { due } => (Some(due.clone()), None, None),
            TaskKind::Event { start, end } => (None, Some(start.clone()), Some(end.clone())),
        };

        Self {
            name: task.name.clone(),
            kind: task.kind.tag().to_string(),
            done: task.done,
            due,
            start,
            end,
            created_at: task.created_at,
            completed_at: task.completed_at,
        }
    }

    /// Hydrate a record into a task. Unlike the add path, loading is strict:
    /// an unknown kind or a missing required date marks the record malformed
    /// instead of silently degrading it to a todo.
    fn into_task(self) -> std::result::Result<Task, RecordError> {
        if self.name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        let kind = match self.kind.as_str() {
            "todo" => TaskKind::Todo,
            "deadline" => TaskKind::Deadline {
                due: self.due.ok_or(RecordError::MissingDueDate)?,
            },
            "event" => match (self.start, self.end) {
                (Some(start), Some(end)) => TaskKind::Event { start, end },
                _ => return Err(RecordError::MissingEventDates),
            },
            other => return Err(RecordError::UnknownKind(other.to_string())),
        };

        Ok(Task {
            name: self.name,
            done: self.done,
            kind,
            created_at: self.created_at,
            completed_at: self.completed_at,
        })
    }
}

/// Result of a load: the usable tasks, plus which records were skipped and
/// why, for the presentation layer to surface.
#[derive(Debug)]
pub struct LoadedTasks {
    pub tasks: Vec<Task>,
    pub skipped: Vec<(usize, RecordError)>,
}

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Platform data directory location, falling back to the working
    /// directory when no data dir is available.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("nag").join("tasks.json"))
            .unwrap_or_else(|| PathBuf::from("tasks.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks from the file. A missing or empty file is an empty
    /// list. Malformed records are skipped and reported in
    /// [`LoadedTasks::skipped`]; only an unreadable file or a file that is
    /// not a JSON array at all is an error.
    pub fn load(&self) -> Result<LoadedTasks> {
        if !self.path.exists() {
            return Ok(LoadedTasks {
                tasks: Vec::new(),
                skipped: Vec::new(),
            });
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read tasks from {:?}", self.path))?;
        if content.trim().is_empty() {
            return Ok(LoadedTasks {
                tasks: Vec::new(),
                skipped: Vec::new(),
            });
        }

        let values: Vec<serde_json::Value> = serde_json::from_str(&content)
            .with_context(|| format!("Tasks file {:?} is not a JSON array", self.path))?;

        let mut tasks = Vec::new();
        let mut skipped = Vec::new();

        for (index, value) in values.into_iter().enumerate() {
            let result = serde_json::from_value::<TaskRecord>(value)
                .map_err(RecordError::from)
                .and_then(TaskRecord::into_task);

            match result {
                Ok(task) => tasks.push(task),
                Err(err) => {
                    warn!("Skipping record {} in {:?}: {}", index, self.path, err);
                    skipped.push((index, err));
                }
            }
        }

        debug!(
            "Loaded {} tasks from {:?} ({} skipped)",
            tasks.len(),
            self.path,
            skipped.len()
        );

        Ok(LoadedTasks { tasks, skipped })
    }

    /// Save all tasks. The previous file is copied to `.json.bak` first, then
    /// the new content is written to a tempfile in the same directory and
    /// renamed over the destination, so a crash mid-write never corrupts the
    /// saved tasks.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
                parent.to_path_buf()
            }
            _ => PathBuf::from("."),
        };

        if self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from_task).collect();
        let content = serde_json::to_string_pretty(&records)?;

        let tmp = tempfile::NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create tempfile in {:?}", dir))?;
        fs::write(tmp.path(), content)
            .with_context(|| format!("Failed to write tasks to {:?}", tmp.path()))?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {:?}", self.path))?;

        debug!("Saved {} tasks to {:?}", tasks.len(), self.path);
        Ok(())
    }
}
