//! Line command parsing for the terminal front-end.

use tasklist_core::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TaskId),
    Edit(TaskId, String),
    Remove(TaskId),
    List,
    Json,
    Help,
    Quit,
}

/// Parses one input line. Returns `None` for blank or unrecognized input.
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "add" | "a" => Some(Command::Add(rest.to_string())),
        "done" | "toggle" | "t" => parse_id(rest).map(Command::Toggle),
        "edit" | "e" => {
            let (id, title) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            parse_id(id).map(|id| Command::Edit(id, title.trim().to_string()))
        }
        "rm" | "remove" | "del" => parse_id(rest).map(Command::Remove),
        "ls" | "list" => Some(Command::List),
        "json" => Some(Command::Json),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

fn parse_id(raw: &str) -> Option<TaskId> {
    raw.trim().parse::<u64>().ok().map(TaskId::new)
}
