//! Raw input line parsing

/// Everything the engine needs to construct a task: the trimmed name, the
/// kind discriminator tag, and up to two date strings. The model's factory
/// owns what happens when the combination is incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: String,
    pub tag: String,
    pub first_date: Option<String>,
    pub second_date: Option<String>,
}

/// A classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line, nothing to do.
    Empty,
    /// The session terminator.
    Bye,
    /// Slash-prefixed command: keyword plus the trimmed remainder of the line.
    Command { keyword: String, argument: String },
    /// Any other line: a task to add.
    Task(TaskSpec),
}

/// Classify one raw line. Commands start with `/`; the literal line `bye`
/// ends the session; everything else describes a task.
pub fn parse_line(line: &str) -> Input {
    let line = line.trim();

    if line.is_empty() {
        return Input::Empty;
    }

    if line == "bye" {
        return Input::Bye;
    }

    if let Some(rest) = line.strip_prefix('/') {
        let rest = rest.trim();
        let (keyword, argument) = match rest.split_once(' ') {
            Some((keyword, argument)) => (keyword, argument.trim()),
            None => (rest, ""),
        };
        return Input::Command {
            keyword: keyword.to_string(),
            argument: argument.to_string(),
        };
    }

    Input::Task(parse_task_spec(line))
}

/// Pull the deadline/event markers out of a task line:
/// `<name> /by <due>` or `<name> /from <start> /to <end>`. A line without
/// markers is a plain todo named by the whole line.
fn parse_task_spec(line: &str) -> TaskSpec {
    if let Some((name, due)) = split_marker(line, " /by ") {
        return TaskSpec {
            name,
            tag: "deadline".to_string(),
            first_date: due,
            second_date: None,
        };
    }

    if let Some((name, range)) = split_marker(line, " /from ") {
        let (start, end) = match range {
            Some(range) => match split_marker(&range, " /to ") {
                Some((start, end)) => (non_empty(start), end),
                None => (Some(range), None),
            },
            None => (None, None),
        };
        return TaskSpec {
            name,
            tag: "event".to_string(),
            first_date: start,
            second_date: end,
        };
    }

    TaskSpec {
        name: line.to_string(),
        tag: "todo".to_string(),
        first_date: None,
        second_date: None,
    }
}

/// Split at a marker, trimming both halves. The right half becomes `None`
/// when it is blank, so a trailing bare marker reads as a missing date.
fn split_marker(text: &str, marker: &str) -> Option<(String, Option<String>)> {
    if let Some((left, right)) = text.split_once(marker) {
        return Some((left.trim().to_string(), non_empty(right.trim().to_string())));
    }

    // The line is trimmed before it gets here, so a marker with nothing
    // after it shows up as a bare suffix.
    let left = text.strip_suffix(marker.trim_end())?;
    Some((left.trim().to_string(), None))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
