//! Interactive terminal host.
//!
//! Reads lines from the user, turns them into session operations and prints the
//! resulting snapshots.

use crate::output::{help_text, render_question, render_status, render_submission};
use crate::session::{QuizSession, QuizState, SessionSnapshot};
use colored::Colorize;
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use std::error::Error;
use std::io::{BufRead, Write};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer(String),
    Continue,
    Reset,
    Hint,
    Help,
    Quit,
    Empty,
}

lazy_static! {
    static ref RE: Regex = Regex::new(
        r"(?i)^\s*(?:(?P<continue>continue|next|n)|(?P<reset>reset)|(?P<hint>hint)|(?P<help>help|\?)|(?P<quit>quit|exit|q))\s*$"
    )
    .expect("Invalid Regex?");
}

/// Classify a line. Anything that is not a command is an answer.
pub fn parse_command(line: &str) -> Command {
    if line.trim().is_empty() {
        return Command::Empty;
    }
    let Some(caps) = RE.captures(line) else {
        return Command::Answer(line.trim_end_matches(['\r', '\n']).to_string());
    };
    if caps.name("continue").is_some() {
        Command::Continue
    } else if caps.name("reset").is_some() {
        Command::Reset
    } else if caps.name("hint").is_some() {
        Command::Hint
    } else if caps.name("help").is_some() {
        Command::Help
    } else {
        Command::Quit
    }
}

/// Run the quiz until `quit` or end of input and return the final snapshot.
pub fn run<R: Rng, B: BufRead>(
    session: &mut QuizSession<R>,
    input: B,
    show_binary: bool,
) -> Result<SessionSnapshot, Box<dyn Error>> {
    println!("{}", help_text());
    println!("{}", render_question(&session.snapshot(), show_binary));
    prompt()?;

    for line in input.lines() {
        let line = line.map_err(|e| format!("Error reading input: {e}"))?;
        log::trace!("input line={line:?}");

        match parse_command(&line) {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => println!("{}", help_text()),
            Command::Hint => {
                if session.state() == QuizState::AwaitingInput {
                    println!("Try {}", session.hint().to_string().cyan());
                } else {
                    println!("No question is waiting for an answer");
                }
            }
            Command::Continue => {
                let snapshot = session.continue_quiz();
                if snapshot.state == QuizState::AwaitingInput {
                    println!("{}", render_question(&snapshot, show_binary));
                } else {
                    println!("{}", render_status(&snapshot));
                }
            }
            Command::Reset => {
                let snapshot = session.reset();
                println!("{}", "Quiz reset".bold());
                println!("{}", render_question(&snapshot, show_binary));
            }
            Command::Answer(raw) => {
                let before = session.total_attempts();
                let snapshot = session.submit(&raw);
                match &snapshot.last_submission {
                    Some(submission) if snapshot.total_attempts > before => {
                        println!("{}", render_submission(submission));
                    }
                    _ => println!("Answer ignored"),
                }
                println!("{}", render_status(&snapshot));
            }
        }
        prompt()?;
    }

    Ok(session.snapshot())
}

fn prompt() -> Result<(), Box<dyn Error>> {
    print!("> ");
    std::io::stdout()
        .flush()
        .map_err(|e| format!("Error writing prompt: {e}"))?;
    Ok(())
}
