//! Transcript shaping — turns the client's running transcript into what the
//! generation service expects.

use crate::interview::prompts::PLACEHOLDER_INPUT;
use crate::llm_client::{ChatMessage, ChatRole};
use crate::models::Turn;

/// A transcript split into prior history and the live message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTranscript {
    pub history: Vec<ChatMessage>,
    pub current_input: String,
}

/// Drops the leading run of non-user turns.
pub fn trim_leading_non_user(turns: &[Turn]) -> &[Turn] {
    let start = turns.iter().position(Turn::is_user).unwrap_or(turns.len());
    &turns[start..]
}

/// Trims the transcript and splits off its final turn as the current input.
///
/// INVARIANT: the returned history never starts with a model turn.
pub fn normalize(turns: &[Turn]) -> NormalizedTranscript {
    let trimmed = trim_leading_non_user(turns);

    let Some((last, prior)) = trimmed.split_last() else {
        return NormalizedTranscript {
            history: Vec::new(),
            current_input: PLACEHOLDER_INPUT.to_string(),
        };
    };

    let history = prior
        .iter()
        .map(|turn| ChatMessage {
            role: if turn.is_user() {
                ChatRole::User
            } else {
                ChatRole::Model
            },
            text: turn.content.clone(),
        })
        .collect();

    NormalizedTranscript {
        history,
        current_input: last.content.clone(),
    }
}

/// Renders the transcript for the review prompt, dropping at most one leading
/// assistant turn (the greeting).
pub fn label_for_review(turns: &[Turn]) -> String {
    let turns = match turns.first() {
        Some(first) if !first.is_user() => &turns[1..],
        _ => turns,
    };

    turns
        .iter()
        .map(|turn| {
            let speaker = if turn.is_user() {
                "Candidate"
            } else {
                "Interviewer"
            };
            format!("{speaker}: {}", turn.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: ChatRole, text: &str) -> ChatMessage {
        ChatMessage {
            role,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_leading_assistant_run_is_trimmed() {
        let turns = vec![
            Turn::assistant("welcome"),
            Turn::assistant("ready?"),
            Turn::user("a"),
            Turn::assistant("b"),
            Turn::user("c"),
        ];
        let normalized = normalize(&turns);
        assert_eq!(
            normalized.history,
            vec![msg(ChatRole::User, "a"), msg(ChatRole::Model, "b")]
        );
        assert_eq!(normalized.current_input, "c");
    }

    #[test]
    fn test_all_assistant_uses_placeholder() {
        let turns = vec![Turn::assistant("welcome"), Turn::assistant("hello?")];
        let normalized = normalize(&turns);
        assert!(normalized.history.is_empty());
        assert_eq!(normalized.current_input, PLACEHOLDER_INPUT);
    }

    #[test]
    fn test_empty_transcript_uses_placeholder() {
        let normalized = normalize(&[]);
        assert!(normalized.history.is_empty());
        assert_eq!(normalized.current_input, "Hello");
    }

    #[test]
    fn test_single_user_turn_has_no_history() {
        let normalized = normalize(&[Turn::assistant("welcome"), Turn::user("yes")]);
        assert!(normalized.history.is_empty());
        assert_eq!(normalized.current_input, "yes");
    }

    #[test]
    fn test_last_turn_is_input_even_if_assistant() {
        let normalized = normalize(&[Turn::user("a"), Turn::assistant("b")]);
        assert_eq!(normalized.history, vec![msg(ChatRole::User, "a")]);
        assert_eq!(normalized.current_input, "b");
    }

    #[test]
    fn test_review_label_drops_only_one_leading_assistant() {
        let turns = vec![
            Turn::assistant("welcome"),
            Turn::user("hi"),
            Turn::assistant("q1"),
            Turn::user("answer"),
        ];
        assert_eq!(
            label_for_review(&turns),
            "Candidate: hi\nInterviewer: q1\nCandidate: answer"
        );
    }

    #[test]
    fn test_review_label_keeps_second_leading_assistant() {
        let turns = vec![
            Turn::assistant("welcome"),
            Turn::assistant("first question"),
            Turn::user("answer"),
        ];
        assert_eq!(
            label_for_review(&turns),
            "Interviewer: first question\nCandidate: answer"
        );
    }

    #[test]
    fn test_review_label_user_first_is_untouched() {
        let turns = vec![Turn::user("hi"), Turn::assistant("q1")];
        assert_eq!(label_for_review(&turns), "Candidate: hi\nInterviewer: q1");
    }
}
