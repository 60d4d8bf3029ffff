//! CLI entry point for the task ledger.
//!
//! # Responsibility
//! - Load a framed task file (or standard input) through `taskledger_core`.
//! - Print the detail and reminder reports plus the reward total.
//! - Keep output deterministic for quick local sanity checks.

use std::env;
use std::io;
use std::process::ExitCode;
use taskledger_core::{load_from_path, load_from_reader, TaskCollection};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let path = args.next();
    if args.next().is_some() {
        return Err("usage: taskledger_cli [TASK_FILE]".to_string());
    }

    let tasks: TaskCollection = match path {
        Some(path) => load_from_path(&path).map_err(|err| err.to_string())?,
        None => {
            let stdin = io::stdin();
            load_from_reader(stdin.lock()).map_err(|err| err.to_string())?
        }
    };

    for line in tasks.details() {
        println!("{line}");
    }
    for line in tasks.reminders() {
        println!("{line}");
    }
    println!("Total reward points: {}", tasks.total_reward_points());

    Ok(())
}
