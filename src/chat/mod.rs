//! Conversational loop and command dispatch

pub mod input;
pub mod render;

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::warn;

use crate::task::{Outcome, Storage, TaskKind, TaskList};
use self::input::Input;

/// What the dispatcher decided for one input line.
#[derive(Debug, PartialEq)]
pub enum Step {
    /// Nothing to print, keep reading.
    Silent,
    /// Print `text`; `mutated` says whether the list changed and needs saving.
    Respond { text: String, mutated: bool },
    /// Terminate the session.
    Quit,
}

/// Map one classified input line to an engine operation and its rendered
/// response. Stateless per call; the task list is the only persistent state.
pub fn dispatch(list: &mut TaskList, input: Input) -> Step {
    match input {
        Input::Empty => Step::Silent,
        Input::Bye => Step::Quit,
        Input::Task(spec) => {
            if spec.name.is_empty() {
                return respond(render::empty_name());
            }
            let kind = TaskKind::from_tag(
                &spec.tag,
                spec.first_date.as_deref(),
                spec.second_date.as_deref(),
            );
            respond_outcome(list.add(&spec.name, kind))
        }
        Input::Command { keyword, argument } => match keyword.as_str() {
            "list" => respond(render::task_list(list.tasks())),
            "mark" | "unmark" | "delete" => {
                if argument.is_empty() {
                    return respond(render::usage(&keyword));
                }
                let outcome = match keyword.as_str() {
                    "mark" => list.mark(&argument),
                    "unmark" => list.unmark(&argument),
                    _ => list.delete(&argument),
                };
                respond_outcome(outcome)
            }
            "find" => respond(render::message(&list.find(&argument))),
            "help" => respond(render::help()),
            _ => respond(render::unknown_command(&keyword)),
        },
    }
}

fn respond(text: String) -> Step {
    Step::Respond {
        text,
        mutated: false,
    }
}

fn respond_outcome(outcome: Outcome) -> Step {
    let mutated = matches!(
        outcome,
        Outcome::Added { .. }
            | Outcome::Deleted { .. }
            | Outcome::Marked { .. }
            | Outcome::Unmarked { .. }
    );
    Step::Respond {
        text: render::message(&outcome),
        mutated,
    }
}

/// Run the chat session over stdin/stdout until `bye` or EOF. Each line is
/// fully processed (parsed, dispatched, rendered, saved if it mutated) before
/// the next one is read.
pub fn run(storage: &Storage) -> Result<()> {
    let mut list = load_list(storage);

    println!("{}", render::greeting(list.len()));

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match dispatch(&mut list, input::parse_line(&line)) {
            Step::Silent => {}
            Step::Respond { text, mutated } => {
                println!("{}", text);
                if mutated {
                    save_list(storage, &list);
                }
            }
            Step::Quit => break,
        }
    }

    // EOF is treated like bye: save once more and say goodbye.
    save_list(storage, &list);
    println!("{}", render::farewell());
    Ok(())
}

/// Hydrate the task list, surfacing skipped records and dropped duplicates as
/// warnings. A corrupt file never prevents the session from starting.
fn load_list(storage: &Storage) -> TaskList {
    match storage.load() {
        Ok(loaded) => {
            for (index, err) in &loaded.skipped {
                println!("{}", render::skipped_record(*index, err));
            }
            let (list, dropped) = TaskList::from_saved(loaded.tasks);
            for name in &dropped {
                println!("{}", render::dropped_duplicate(name));
            }
            list
        }
        Err(err) => {
            warn!("Failed to load tasks: {:#}", err);
            println!("{}", render::load_failed(&err));
            TaskList::new()
        }
    }
}

fn save_list(storage: &Storage, list: &TaskList) {
    if let Err(err) = storage.save(list.tasks()) {
        warn!("Failed to save tasks: {:#}", err);
        println!("{}", render::save_failed(&err));
    }
}
