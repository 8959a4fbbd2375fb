//! Quiz session lifecycle.
//!
//! - [`quiz`] - the [`QuizSession`] state machine
//! - [`snapshot`] - [`SessionSnapshot`] returned to the host after every operation

mod quiz;
mod snapshot;

pub use quiz::QuizSession;
pub use snapshot::{NetworkView, QuizState, SessionSnapshot};
