//! CLI smoke entry point.
//!
//! # Responsibility
//! - Bootstrap logging from `TODOMAN_*` configuration.
//! - Exercise `todoman_core` end to end: board membership, the effort
//!   ledger and validation, reported through a `Messenger`.

mod config;
mod logging;

use chrono::{Duration, Utc};
use config::LogConfig;
use std::process::ExitCode;
use todoman_core::{
    format_duration, AgileTodo, Board, Colour, Effort, Messenger, Model, Note, Todo,
    TodoPriority,
};

fn main() -> ExitCode {
    let config = LogConfig::from_env();
    if let Err(err) = logging::init_logging(&config.level, config.log_dir.as_deref()) {
        eprintln!("todoman: {err}");
        return ExitCode::FAILURE;
    }

    let messenger = Messenger::with_debug(config.debug_messages);
    if let Some((level, log_dir)) = logging::logging_status() {
        messenger.debug(format!(
            "logging at {level} to {}",
            logging::describe_destination(log_dir.as_deref())
        ));
    }
    run_smoke(&messenger);

    println!("todoman_core ping={}", todoman_core::ping());
    println!("todoman_core version={}", todoman_core::core_version());
    ExitCode::SUCCESS
}

fn run_smoke(messenger: &Messenger) {
    let mut board = Board::new("Smoke", Colour::rgb(64, 128, 255));
    let mut todo = Todo::new("Check wiring");
    todo.priority = TodoPriority::High;
    todo.add_note(Note::new("linkage", "todoman_cli"));

    if !board.add_todo(todo.clone()) || board.add_todo(todo) {
        messenger.error("board membership is not unique");
    }
    messenger.debug(format!("board {} holds {} todo(s)", board.id(), board.todos.len()));

    let mut agile = AgileTodo::new("Log effort");
    let today = Utc::now();
    for hours in [10, 10, 5] {
        match agile.try_add_effort(Effort::new(today, Duration::hours(hours))) {
            Ok(()) => messenger.debug(format!("logged {hours}h")),
            Err(rejection) => messenger.warning(rejection),
        }
    }
    messenger.info(format!(
        "logged {} today, {} remaining",
        format_duration(agile.logged_on(today.date_naive())),
        format_duration(agile.remaining_on(today.date_naive()))
    ));

    let unnamed = Todo::new("");
    let checks: [(&str, &dyn Model); 3] = [
        ("board", &board),
        ("agile todo", &agile),
        ("unnamed todo", &unnamed),
    ];
    for (label, model) in checks {
        match model.validate() {
            Ok(()) => messenger.info(format!("{label} is valid")),
            Err(err) => messenger.error(format!("{label} is invalid: {err}")),
        }
    }
}
