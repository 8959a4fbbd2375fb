//! Terminal rendering of quiz snapshots.
//!
//! Provides formatting helpers for the interactive host.

use crate::models::{Explanation, Submission};
use crate::session::{QuizState, SessionSnapshot};
use colored::Colorize;

/// Format a label right-aligned to `width`, followed by the value.
///
/// # Arguments
/// * `label` - The row label
/// * `value` - The value to show after the label
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:>width$} {}", value.to_string())
}

/// The current question, with binary forms when `show_binary` is set.
pub fn render_question(snapshot: &SessionSnapshot, show_binary: bool) -> String {
    let view = &snapshot.network;
    let mut lines = vec![
        format!(
            "Question {} of {}: enter an address in this network",
            (snapshot.correct_count + 1).min(snapshot.target_correct),
            snapshot.target_correct
        )
        .bold()
        .to_string(),
        format_field("Network", view.network.to_string().cyan(), 10),
        format_field("Mask", format!("{} (/{})", view.mask, view.prefix).cyan(), 10),
    ];
    if show_binary {
        lines.push(format_field("Network", &view.network_binary, 10));
        lines.push(format_field("Mask", &view.mask_binary, 10));
    }
    lines.join("\n")
}

/// One submission result, colored by outcome.
pub fn render_submission(submission: &Submission) -> String {
    let header = format!("#{} {}", submission.attempt, submission.raw.trim());
    if submission.is_correct {
        format!("{header} {}", submission.message.green())
    } else if let Some(explanation) = &submission.explanation {
        format!(
            "{header} {}\n{}",
            "Wrong".red().bold(),
            render_explanation(explanation)
        )
    } else {
        format!("{header} {}", submission.message.yellow())
    }
}

/// Narrative followed by the bitwise AND laid out in aligned binary rows.
pub fn render_explanation(explanation: &Explanation) -> String {
    let mut lines: Vec<String> = explanation
        .narrative
        .iter()
        .map(|line| format!("  {line}"))
        .collect();
    lines.push(String::new());
    lines.push(format_field(
        "Address",
        format!("{}  {}", explanation.address_binary, explanation.address),
        14,
    ));
    lines.push(format_field(
        "Mask",
        format!("{}  {}", explanation.mask_binary, explanation.mask),
        14,
    ));
    lines.push(format_field(
        "Your network",
        format!(
            "{}  {}",
            explanation.address_network_id_binary.red(),
            explanation.address_network_id
        ),
        14,
    ));
    lines.push(format_field(
        "Network",
        format!(
            "{}  {}",
            explanation.network_id_binary.green(),
            explanation.network_id
        ),
        14,
    ));
    lines.join("\n")
}

/// Score line, plus the completion banner once the target is reached.
pub fn render_status(snapshot: &SessionSnapshot) -> String {
    let status = format!(
        "Score {} | correct {}/{} | attempts {}",
        snapshot.score, snapshot.correct_count, snapshot.target_correct, snapshot.total_attempts
    );
    match snapshot.state {
        QuizState::AwaitingInput => status,
        QuizState::AwaitingContinue => {
            format!("{status}\nType {} for the next network", "continue".bold())
        }
        QuizState::Completed => format!(
            "{status}\n{} Type {} to play again",
            "Quiz complete!".on_green(),
            "reset".bold()
        ),
    }
}

pub fn help_text() -> String {
    [
        "Enter an IPv4 address that belongs to the network shown.",
        "Commands: continue (next), reset, hint, help, quit",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::QuizSession;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("Mask", "255.0.0.0", 8), "   Mask: 255.0.0.0");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("Broadcast", 42, 4), "Broadcast: 42");
    }

    #[test]
    fn test_render_question() {
        let quiz = QuizSession::with_rng(StdRng::seed_from_u64(1), 5);
        let snap = quiz.snapshot();
        let text = render_question(&snap, true);
        assert!(text.contains(&snap.network.network_binary));
        assert!(text.contains(&snap.network.mask_binary));
        let text = render_question(&snap, false);
        assert!(!text.contains(&snap.network.mask_binary));
    }

    #[test]
    fn test_render_submission_invalid() {
        let mut quiz = QuizSession::with_rng(StdRng::seed_from_u64(2), 5);
        let snap = quiz.submit("10..0.1");
        let text = render_submission(snap.last_submission.as_ref().unwrap());
        assert!(text.starts_with("#1 10..0.1"), "{text}");
        assert!(text.contains("octet 2 is empty"), "{text}");
    }

    #[test]
    fn test_render_status_completed() {
        let mut quiz = QuizSession::with_rng(StdRng::seed_from_u64(3), 1);
        let answer = quiz.hint().to_string();
        let snap = quiz.submit(&answer);
        let text = render_status(&snap);
        assert!(text.contains("correct 1/1"), "{text}");
        assert!(text.contains("Quiz complete!"), "{text}");
    }
}
