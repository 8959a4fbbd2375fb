// cargo watch -x 'fmt' -x 'test'

//! Subnet arithmetic engine and practice quiz.
//!
//! - [`models`] - addresses, masks, networks and submission records
//! - [`processing`] - membership checks, explanations and random questions
//! - [`session`] - the quiz state machine and its snapshots
//! - [`output`] and [`cli`] - terminal host

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use config::QuizConfig;
pub use models::{
    from_int, parse_and_validate, to_binary, to_int, validate_mask, Explanation, NetworkSpec,
    SubnetMask, Submission, ValidationError,
};
pub use processing::{
    explain_mismatch, is_in_network, random_address_in_network, random_mask,
    random_network_address,
};
pub use session::{QuizSession, QuizState, SessionSnapshot};
