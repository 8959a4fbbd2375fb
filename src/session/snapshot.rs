//! Read-only view of a quiz session handed to the host.

use crate::models::{to_binary, NetworkSpec, Submission};
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Where the session is between calls.
///
/// Evaluation happens inside [`super::QuizSession::submit`], so only the resting
/// states are visible.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for an answer to the current question.
    AwaitingInput,
    /// Last answer was correct, waiting for `continue` to load the next question.
    AwaitingContinue,
    /// Target reached, only `reset` does anything.
    Completed,
}

/// The current question in decimal and binary.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkView {
    pub network: Ipv4Addr,
    pub mask: Ipv4Addr,
    pub prefix: u8,
    pub network_binary: String,
    pub mask_binary: String,
}

impl From<&NetworkSpec> for NetworkView {
    fn from(spec: &NetworkSpec) -> Self {
        NetworkView {
            network: spec.network,
            mask: spec.mask.addr(),
            prefix: spec.mask.prefix(),
            network_binary: to_binary(spec.network),
            mask_binary: spec.mask.to_binary(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct SessionSnapshot {
    pub state: QuizState,
    pub network: NetworkView,
    pub score: u32,
    pub correct_count: u32,
    pub target_correct: u32,
    pub total_attempts: u32,
    pub completed: bool,
    /// Input buffer as the host should display it.
    pub input: String,
    pub last_submission: Option<Submission>,
    /// All submissions, oldest first.
    pub history: Vec<Submission>,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, Box<dyn Error>> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Error serializing snapshot: {e}").into())
    }
}
