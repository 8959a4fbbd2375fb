//! Quiz session state machine.
//!
//! A session owns the current question, the score counters and the submission
//! history. All operations are synchronous; out of order calls are ignored and
//! return the unchanged snapshot.

use super::snapshot::{NetworkView, QuizState, SessionSnapshot};
use crate::config::QuizConfig;
use crate::models::{parse_and_validate, Explanation, NetworkSpec, Submission, ValidationError};
use crate::processing::{
    explain_mismatch, is_in_network, random_address_in_network, random_network_spec,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::Ipv4Addr;

/// Outcome of evaluating one raw answer against the current question.
enum Verdict {
    Invalid(ValidationError),
    Correct(Ipv4Addr),
    Incorrect(Ipv4Addr, Explanation),
}

pub struct QuizSession<R: Rng = StdRng> {
    rng: R,
    target_correct: u32,
    network: NetworkSpec,
    state: QuizState,
    score: u32,
    correct_count: u32,
    total_attempts: u32,
    input: String,
    submissions: Vec<Submission>,
}

impl QuizSession<StdRng> {
    /// New session seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: &QuizConfig) -> QuizSession<StdRng> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        QuizSession::with_rng(rng, config.target_correct)
    }
}

impl<R: Rng> QuizSession<R> {
    /// New session drawing questions from `rng`. A target of 0 is treated as 1.
    pub fn with_rng(mut rng: R, target_correct: u32) -> QuizSession<R> {
        let network = random_network_spec(&mut rng);
        log::info!("New quiz session, target={target_correct} question: {network}");
        QuizSession {
            rng,
            target_correct: target_correct.max(1),
            network,
            state: QuizState::AwaitingInput,
            score: 0,
            correct_count: 0,
            total_attempts: 0,
            input: String::new(),
            submissions: Vec::new(),
        }
    }

    /// Judge `raw` against the current question and record a [`Submission`].
    ///
    /// Ignored unless the session is awaiting input.
    pub fn submit(&mut self, raw: &str) -> SessionSnapshot {
        if self.state != QuizState::AwaitingInput {
            log::warn!("submit({raw}) ignored in state {:?}", self.state);
            return self.snapshot();
        }

        self.total_attempts += 1;
        self.input = raw.to_string();
        let spec = self.network;

        let (normalized, is_correct, message, error, explanation) = match evaluate(raw, &spec) {
            Verdict::Invalid(e) => {
                log::debug!("attempt #{} invalid input {raw:?}: {e}", self.total_attempts);
                (None, false, e.to_string(), Some(e), None)
            }
            Verdict::Correct(addr) => {
                self.score += 1;
                self.correct_count += 1;
                let mut message = format!(
                    "Correct! {addr} is in network {}/{}",
                    spec.network_id(),
                    spec.mask.prefix()
                );
                if self.correct_count >= self.target_correct {
                    self.state = QuizState::Completed;
                    message.push_str(&format!(
                        ". Quiz complete: {} correct answers in {} attempts",
                        self.correct_count, self.total_attempts
                    ));
                    log::info!(
                        "Quiz completed score={} attempts={}",
                        self.score,
                        self.total_attempts
                    );
                } else {
                    self.state = QuizState::AwaitingContinue;
                    log::info!(
                        "Correct answer {addr}, {}/{} done",
                        self.correct_count,
                        self.target_correct
                    );
                }
                (Some(addr.to_string()), true, message, None, None)
            }
            Verdict::Incorrect(addr, explanation) => {
                self.input.clear();
                log::debug!("attempt #{} wrong answer {addr}", self.total_attempts);
                (
                    Some(addr.to_string()),
                    false,
                    explanation.to_string(),
                    None,
                    Some(explanation),
                )
            }
        };

        self.submissions.push(Submission {
            attempt: self.total_attempts,
            raw: raw.to_string(),
            normalized,
            network: spec,
            is_correct,
            score: self.score,
            message,
            error,
            explanation,
            submitted_at: chrono::Utc::now(),
        });

        self.snapshot()
    }

    /// Load the next question after a correct answer.
    ///
    /// Ignored unless the session is awaiting continue.
    pub fn continue_quiz(&mut self) -> SessionSnapshot {
        if self.state != QuizState::AwaitingContinue {
            log::warn!("continue ignored in state {:?}", self.state);
            return self.snapshot();
        }
        self.next_question();
        self.snapshot()
    }

    /// Drop all progress and start over with a new question. Valid in every state.
    pub fn reset(&mut self) -> SessionSnapshot {
        log::info!(
            "Reset quiz session after {} attempts, score={}",
            self.total_attempts,
            self.score
        );
        self.score = 0;
        self.correct_count = 0;
        self.total_attempts = 0;
        self.submissions.clear();
        self.next_question();
        self.snapshot()
    }

    /// A random host address that would be a correct answer. Not counted as an attempt.
    pub fn hint(&mut self) -> Ipv4Addr {
        random_address_in_network(&mut self.rng, &self.network)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            network: NetworkView::from(&self.network),
            score: self.score,
            correct_count: self.correct_count,
            target_correct: self.target_correct,
            total_attempts: self.total_attempts,
            completed: self.is_completed(),
            input: self.input.clone(),
            last_submission: self.submissions.last().cloned(),
            history: self.submissions.clone(),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn network(&self) -> &NetworkSpec {
        &self.network
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    pub fn is_completed(&self) -> bool {
        self.state == QuizState::Completed
    }

    pub fn history(&self) -> &[Submission] {
        &self.submissions
    }

    fn next_question(&mut self) {
        self.network = random_network_spec(&mut self.rng);
        self.input.clear();
        self.state = QuizState::AwaitingInput;
        log::info!("Next question: {}", self.network);
    }
}

fn evaluate(raw: &str, spec: &NetworkSpec) -> Verdict {
    let addr = match parse_and_validate(raw) {
        Ok(addr) => addr,
        Err(e) => return Verdict::Invalid(e),
    };
    if is_in_network(addr, spec.network, spec.mask) {
        Verdict::Correct(addr)
    } else {
        Verdict::Incorrect(addr, explain_mismatch(addr, spec.network, spec.mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{from_int, to_int};

    fn session(seed: u64) -> QuizSession<StdRng> {
        QuizSession::with_rng(StdRng::seed_from_u64(seed), 5)
    }

    /// Flip the top bit, which every pooled mask covers.
    fn outside(spec: &NetworkSpec) -> String {
        from_int(to_int(spec.network_id()) ^ 0x8000_0000).to_string()
    }

    #[test]
    fn test_fresh_session() {
        let snap = session(1).snapshot();
        assert_eq!(snap.state, QuizState::AwaitingInput);
        assert_eq!(snap.total_attempts, 0);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.correct_count, 0);
        assert!(!snap.completed);
        assert!(snap.last_submission.is_none());
        assert!(snap.history.is_empty());
        assert_eq!(snap.network.network.octets()[3], 0);
    }

    #[test]
    fn test_correct_answer_waits_for_continue() {
        let mut quiz = session(2);
        let answer = quiz.hint();
        let question = *quiz.network();

        let snap = quiz.submit(&answer.to_string());
        assert_eq!(snap.state, QuizState::AwaitingContinue);
        assert_eq!(snap.score, 1);
        assert_eq!(snap.correct_count, 1);
        assert_eq!(snap.total_attempts, 1);
        assert_eq!(*quiz.network(), question, "question must be held until continue");

        let last = snap.last_submission.unwrap();
        assert!(last.is_correct);
        assert_eq!(last.attempt, 1);
        assert_eq!(last.score, 1);
        assert!(last.message.starts_with("Correct!"), "{}", last.message);
    }

    #[test]
    fn test_submit_ignored_while_awaiting_continue() {
        let mut quiz = session(3);
        let answer = quiz.hint().to_string();
        quiz.submit(&answer);
        let snap = quiz.submit(&answer);
        assert_eq!(snap.total_attempts, 1);
        assert_eq!(snap.history.len(), 1);
    }

    #[test]
    fn test_continue_only_after_correct() {
        let mut quiz = session(4);
        let question = *quiz.network();
        let snap = quiz.continue_quiz();
        assert_eq!(snap.state, QuizState::AwaitingInput);
        assert_eq!(*quiz.network(), question, "continue must not skip a question");

        let answer = quiz.hint().to_string();
        quiz.submit(&answer);
        let snap = quiz.continue_quiz();
        assert_eq!(snap.state, QuizState::AwaitingInput);
        assert_eq!(snap.score, 1);
        assert_eq!(snap.input, "");
    }

    #[test]
    fn test_wrong_answer_keeps_question() {
        let mut quiz = session(5);
        let question = *quiz.network();
        let wrong = outside(&question);

        let snap = quiz.submit(&wrong);
        assert_eq!(snap.state, QuizState::AwaitingInput);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.total_attempts, 1);
        assert_eq!(snap.input, "", "input is cleared after a wrong answer");
        assert_eq!(*quiz.network(), question);

        let last = snap.last_submission.unwrap();
        assert!(!last.is_correct);
        assert_eq!(last.normalized.as_deref(), Some(wrong.as_str()));
        let explanation = last.explanation.unwrap();
        assert_eq!(explanation.network_id, question.network_id());
        assert_eq!(last.message, explanation.to_string());
    }

    #[test]
    fn test_invalid_input_counts_as_attempt() {
        let mut quiz = session(6);
        let snap = quiz.submit("999.1.1.1");
        assert_eq!(snap.total_attempts, 1);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.state, QuizState::AwaitingInput);
        assert_eq!(snap.input, "999.1.1.1", "input is kept after a validation error");

        let last = snap.last_submission.unwrap();
        assert_eq!(last.error, Some(ValidationError::OutOfRange(1)));
        assert_eq!(last.message, ValidationError::OutOfRange(1).to_string());
        assert!(last.normalized.is_none());
        assert!(last.explanation.is_none());
    }

    #[test]
    fn test_five_correct_completes() {
        let mut quiz = session(7);
        for i in 1..=5 {
            let answer = quiz.hint().to_string();
            let snap = quiz.submit(&answer);
            assert_eq!(snap.correct_count, i);
            if i < 5 {
                assert_eq!(snap.state, QuizState::AwaitingContinue);
                quiz.continue_quiz();
            }
        }
        assert!(quiz.is_completed());
        assert_eq!(quiz.score(), 5);

        let answer = quiz.hint().to_string();
        let snap = quiz.submit(&answer);
        assert_eq!(snap.total_attempts, 5, "submit after completion is a no-op");
        assert_eq!(snap.score, 5);

        let snap = quiz.continue_quiz();
        assert_eq!(snap.state, QuizState::Completed);
    }

    #[test]
    fn test_history_order_and_attempt_numbers() {
        let mut quiz = session(8);
        let wrong = outside(quiz.network());
        quiz.submit("abc");
        quiz.submit(&wrong);
        let answer = quiz.hint().to_string();
        quiz.submit(&answer);

        let history = quiz.history();
        assert_eq!(history.len(), 3);
        let attempts: Vec<u32> = history.iter().map(|s| s.attempt).collect();
        assert_eq!(attempts, vec![1, 2, 3]);
        assert_eq!(history[0].raw, "abc");
        assert_eq!(history[2].score, 1);
        assert!(history[2].is_correct);
    }

    #[test]
    fn test_reset() {
        let mut quiz = session(9);
        quiz.submit("1.2.3");
        let answer = quiz.hint().to_string();
        quiz.submit(&answer);

        let snap = quiz.reset();
        assert_eq!(snap.state, QuizState::AwaitingInput);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.correct_count, 0);
        assert_eq!(snap.total_attempts, 0);
        assert!(snap.history.is_empty());
        assert!(snap.last_submission.is_none());
        assert!(!snap.completed);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let a = session(10);
        let b = session(10);
        assert_eq!(a.network(), b.network());
    }

    #[test]
    fn test_zero_target_is_one() {
        let mut quiz = QuizSession::with_rng(StdRng::seed_from_u64(11), 0);
        let answer = quiz.hint().to_string();
        assert!(quiz.submit(&answer).completed);
    }

    #[test]
    fn test_new_from_config() {
        let config = QuizConfig {
            target_correct: 2,
            seed: Some(12),
            ..Default::default()
        };
        let quiz = QuizSession::new(&config);
        assert_eq!(quiz.snapshot().target_correct, 2);
        assert_eq!(*quiz.network(), *session(12).network());
    }
}
