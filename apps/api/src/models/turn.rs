use serde::{Deserialize, Serialize};

/// Who produced a turn. The generation service's `model` tag is accepted as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    #[serde(alias = "model")]
    Assistant,
}

/// One message in an interview transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Speaker,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Speaker::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_deserializes_lowercase_roles() {
        let turns: Vec<Turn> = serde_json::from_str(
            r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"#,
        )
        .unwrap();
        assert_eq!(turns, vec![Turn::user("hi"), Turn::assistant("hello")]);
    }

    #[test]
    fn test_model_tag_reads_as_assistant() {
        let turn: Turn = serde_json::from_str(r#"{"role":"model","content":"q1"}"#).unwrap();
        assert_eq!(turn.role, Speaker::Assistant);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_str::<Turn>(r#"{"role":"system","content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_assistant_serializes_as_assistant() {
        let json = serde_json::to_value(Turn::assistant("q")).unwrap();
        assert_eq!(json["role"], "assistant");
    }
}
