use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }

    pub fn is_user(self) -> bool {
        self == ChatRole::User
    }

    pub fn is_assistant(self) -> bool {
        self == ChatRole::Assistant
    }
}

impl AsRef<str> for ChatRole {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for ChatRole {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("invalid chat role: {value}")),
        }
    }
}

/// A single entry of the conversation thread.
///
/// Fields are private so a message cannot change after it has been appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: ChatRole,
    content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_lowercase_role() {
        let message = ChatMessage::user("I feel anxious");
        let json = serde_json::to_value(&message).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"role": "user", "content": "I feel anxious"})
        );
    }

    #[test]
    fn rejects_unknown_roles() {
        assert_eq!(ChatRole::try_from("assistant"), Ok(ChatRole::Assistant));
        assert!(ChatRole::try_from("system").is_err());

        let parsed = serde_json::from_str::<ChatMessage>(r#"{"role":"tool","content":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn role_helpers_match_variant() {
        let reply = ChatMessage::assistant("hello");
        assert!(reply.role().is_assistant());
        assert!(!reply.role().is_user());
        assert_eq!(reply.role().as_str(), "assistant");
        assert_eq!(reply.content(), "hello");
    }
}
