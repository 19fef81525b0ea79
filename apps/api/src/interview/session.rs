//! Session View — the client-side state of one interview.
//!
//! ```text
//! NotStarted → GreetingShown → AwaitingInput ⇄ AwaitingReply
//!                                   │
//!                                   └→ Ending → Reviewed
//! ```
//!
//! The transcript lives only in memory. Every async operation takes
//! `&mut self`, so a session can have at most one outstanding backend call;
//! the state machine additionally rejects submissions outside `AwaitingInput`.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::interview::prompts::{REPLY_FAILED, REPLY_UNREACHABLE, REVIEW_FAILED, REVIEW_UNREACHABLE};
use crate::interview::selector::greeting;
use crate::models::Turn;

/// Minimum transcript length (greeting included) before a review may be requested.
pub const MIN_TURNS_TO_END: usize = 3;

/// Failure of one backend call as seen by the session.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend could not be reached or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error payload.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The backend answered with an error status and a body that is not an
    /// error payload.
    #[error("server returned {status} with an unreadable body")]
    Unreadable { status: u16 },

    /// Generation failed in-process.
    #[error("generation failed: {0}")]
    Generation(String),

    /// The backend reported success without any text.
    #[error("backend returned an empty {0}")]
    Empty(&'static str),
}

impl BackendError {
    fn is_unreachable(&self) -> bool {
        matches!(
            self,
            BackendError::Transport(_) | BackendError::Unreadable { .. }
        )
    }
}

/// Blank success text counts as a failed call.
fn non_blank(
    outcome: Result<String, BackendError>,
    what: &'static str,
) -> Result<String, BackendError> {
    match outcome {
        Ok(text) if text.trim().is_empty() => Err(BackendError::Empty(what)),
        other => other,
    }
}

/// What a session needs from the outside world: one continuation and one
/// review call. Implemented over HTTP and in-process.
#[async_trait]
pub trait InterviewBackend: Send + Sync {
    async fn reply(
        &self,
        role: &str,
        difficulty: &str,
        transcript: &[Turn],
    ) -> Result<String, BackendError>;

    async fn review(&self, role: &str, transcript: &[Turn]) -> Result<String, BackendError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    GreetingShown,
    AwaitingInput,
    AwaitingReply,
    Ending,
    Reviewed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("input is empty")]
    EmptyInput,

    #[error("cannot {action} while {state:?}")]
    InvalidState {
        action: &'static str,
        state: SessionState,
    },

    #[error("at least {required} turns are needed before ending (have {actual})")]
    TooShort { required: usize, actual: usize },
}

/// Counters shown alongside the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub questions_asked: usize,
    pub responses: usize,
}

#[derive(Debug, Clone)]
pub struct InterviewSession {
    role: String,
    difficulty: String,
    transcript: Vec<Turn>,
    state: SessionState,
    review: Option<String>,
}

impl InterviewSession {
    pub fn new(role: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            difficulty: difficulty.into(),
            transcript: Vec::new(),
            state: SessionState::NotStarted,
            review: None,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn review(&self) -> Option<&str> {
        self.review.as_deref()
    }

    pub fn can_end(&self) -> bool {
        self.state == SessionState::AwaitingInput && self.transcript.len() >= MIN_TURNS_TO_END
    }

    pub fn progress(&self) -> SessionProgress {
        let responses = self.transcript.iter().filter(|t| t.is_user()).count();
        let assistant_turns = self.transcript.len() - responses;
        SessionProgress {
            // the greeting is not a question
            questions_asked: assistant_turns.saturating_sub(1),
            responses,
        }
    }

    fn expect_state(
        &self,
        expected: SessionState,
        action: &'static str,
    ) -> Result<(), SessionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidState {
                action,
                state: self.state,
            })
        }
    }

    /// Inserts the synthetic greeting and opens the session for input.
    pub fn start(&mut self) -> Result<&Turn, SessionError> {
        self.expect_state(SessionState::NotStarted, "start")?;
        self.transcript
            .push(Turn::assistant(greeting(&self.role, &self.difficulty)));
        self.state = SessionState::GreetingShown;
        // nothing to wait for after the greeting
        self.state = SessionState::AwaitingInput;
        Ok(&self.transcript[0])
    }

    /// Appends the user's turn and moves to `AwaitingReply`.
    pub fn submit(&mut self, input: &str) -> Result<(), SessionError> {
        self.expect_state(SessionState::AwaitingInput, "submit")?;
        let input = input.trim();
        if input.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        self.transcript.push(Turn::user(input));
        self.state = SessionState::AwaitingReply;
        Ok(())
    }

    /// Appends exactly one assistant turn for the outstanding reply and
    /// reopens the session for input.
    pub fn resolve_reply(
        &mut self,
        outcome: Result<String, BackendError>,
    ) -> Result<&Turn, SessionError> {
        self.expect_state(SessionState::AwaitingReply, "resolve a reply")?;
        let content = match non_blank(outcome, "reply") {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chat error: {e}");
                if e.is_unreachable() {
                    REPLY_UNREACHABLE.to_string()
                } else {
                    REPLY_FAILED.to_string()
                }
            }
        };
        self.transcript.push(Turn::assistant(content));
        self.state = SessionState::AwaitingInput;
        Ok(self.last_turn())
    }

    /// Checks the end-of-interview guard and moves to `Ending`.
    pub fn begin_end(&mut self) -> Result<(), SessionError> {
        self.expect_state(SessionState::AwaitingInput, "end the interview")?;
        if self.transcript.len() < MIN_TURNS_TO_END {
            return Err(SessionError::TooShort {
                required: MIN_TURNS_TO_END,
                actual: self.transcript.len(),
            });
        }
        self.state = SessionState::Ending;
        Ok(())
    }

    /// Records the review (or its fallback) and closes the session.
    pub fn resolve_review(
        &mut self,
        outcome: Result<String, BackendError>,
    ) -> Result<&str, SessionError> {
        self.expect_state(SessionState::Ending, "resolve a review")?;
        let review = match non_blank(outcome, "review") {
            Ok(review) => review,
            Err(e) => {
                warn!("Review error: {e}");
                if e.is_unreachable() {
                    REVIEW_UNREACHABLE.to_string()
                } else {
                    REVIEW_FAILED.to_string()
                }
            }
        };
        self.state = SessionState::Reviewed;
        Ok(self.review.insert(review).as_str())
    }

    /// Submits `input` and waits for the interviewer's turn. Backend failures
    /// become a fallback turn; only state and input errors are returned.
    pub async fn send(
        &mut self,
        backend: &dyn InterviewBackend,
        input: &str,
    ) -> Result<&Turn, SessionError> {
        self.submit(input)?;
        let outcome = backend
            .reply(&self.role, &self.difficulty, &self.transcript)
            .await;
        self.resolve_reply(outcome)
    }

    /// Ends the interview and waits for the review.
    pub async fn end(&mut self, backend: &dyn InterviewBackend) -> Result<&str, SessionError> {
        self.begin_end()?;
        let outcome = backend.review(&self.role, &self.transcript).await;
        self.resolve_review(outcome)
    }

    fn last_turn(&self) -> &Turn {
        // only called after a push
        &self.transcript[self.transcript.len() - 1]
    }
}
