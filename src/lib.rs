//! Nag library - conversational task tracking for the terminal
//!
//! The task engine (model, list, storage) is plain library code with no I/O
//! of its own; the chat module wraps it in a line-oriented session.

pub mod chat;
pub mod cli;
pub mod task;
