//! Terminal front-end for the to-do list core.
//!
//! # Responsibility
//! - Act as a reference presentation layer: read commands, call the store,
//!   re-render from its snapshot.
//! - Ask for removal confirmation on the next input line.

mod command;

use command::Command;
use log::info;
use std::io::{self, BufRead, Write};
use tasklist_core::{remove_confirmed, Snapshot, Task, TaskListStore};

const LOG_DIR_ENV: &str = "TASKLIST_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TASKLIST_LOG_LEVEL";

fn main() -> io::Result<()> {
    init_logging_from_env();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| tasklist_core::default_log_level().to_string());
    if let Err(err) = tasklist_core::init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn run(input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut store = TaskListStore::new();
    let mut lines = input.lines();

    writeln!(
        out,
        "tasklist {} (type `help` for commands)",
        tasklist_core::core_version()
    )?;

    while let Some(line) = lines.next() {
        let line = line?;
        let Some(command) = command::parse(&line) else {
            if !line.trim().is_empty() {
                writeln!(out, "unknown command; try `help`")?;
            }
            continue;
        };

        match command {
            Command::Add(title) => {
                if store.add(&title).is_none() {
                    writeln!(out, "nothing to add")?;
                }
            }
            Command::Toggle(id) => {
                store.toggle_done(id);
            }
            Command::Edit(id, title) => {
                store.edit_title(id, &title);
            }
            Command::Remove(id) => {
                let mut prompt_error = None;
                let mut gate = |task: &Task| {
                    match confirm(&mut lines, &mut out, task) {
                        Ok(answer) => answer,
                        Err(err) => {
                            prompt_error = Some(err);
                            false
                        }
                    }
                };
                remove_confirmed(&mut store, id, &mut gate);
                if let Some(err) = prompt_error {
                    return Err(err);
                }
            }
            Command::List => {}
            Command::Json => {
                let snapshot = store.snapshot();
                let json = serde_json::to_string_pretty(snapshot.as_slice())
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
                continue;
            }
            Command::Help => {
                print_help(&mut out)?;
                continue;
            }
            Command::Quit => break,
        }

        render(&mut out, &store.snapshot())?;
    }

    info!("event=cli_exit module=cli status=ok count={}", store.count());
    Ok(())
}

fn confirm<B: BufRead>(
    lines: &mut io::Lines<B>,
    out: &mut impl Write,
    task: &Task,
) -> io::Result<bool> {
    write!(out, "remove \"{}\"? [y/N] ", task.title())?;
    out.flush()?;
    let answer = lines.next().transpose()?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn render(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(
        out,
        "tasks: {} ({} done)",
        snapshot.len(),
        snapshot.completed_count()
    )?;
    for task in snapshot {
        let marker = if task.is_done() { 'x' } else { ' ' };
        writeln!(out, "[{marker}] {:>3}  {}", task.id(), task.title())?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  add <title>        add a task")?;
    writeln!(out, "  done <id>          toggle done/undone")?;
    writeln!(out, "  edit <id> <title>  rename a task")?;
    writeln!(out, "  rm <id>            remove a task (asks y/n)")?;
    writeln!(out, "  ls                 list tasks")?;
    writeln!(out, "  json               dump tasks as JSON")?;
    writeln!(out, "  quit               exit")
}
