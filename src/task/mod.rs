//! Task model, list engine, and persistence

pub mod list;
pub mod model;
pub mod storage;

pub use list::{Outcome, TaskList};
pub use model::{Task, TaskKind};
pub use storage::{LoadedTasks, RecordError, Storage};
