//! Output formatting for quiz sessions.
//!
//! - [`terminal`] - colored terminal rendering for the interactive host

mod terminal;

pub use terminal::{
    format_field, help_text, render_explanation, render_question, render_status,
    render_submission,
};
