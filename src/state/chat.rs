#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Opening message shown before any question has been asked.
pub const GREETING: &str =
    "Hello! I can answer questions about the analyzed document. How can I help you?";

/// State for the document Q&A assistant panel.
///
/// The transcript is append-only with monotonically increasing ids. While a
/// question is in flight (`asking`) the input is disabled, so at most one
/// answer is ever outstanding and messages land in submission order.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub asking: bool,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![Message {
                id: 1,
                role: Role::Assistant,
                content: GREETING.to_owned(),
            }],
            asking: false,
            next_id: 2,
        }
    }
}

impl ChatState {
    /// Append a user question and mark an answer as outstanding.
    pub fn push_question(&mut self, content: impl Into<String>) -> u64 {
        self.asking = true;
        self.push(Role::User, content)
    }

    /// Append the assistant's answer and return to idle.
    pub fn push_answer(&mut self, content: impl Into<String>) -> u64 {
        self.asking = false;
        self.push(Role::Assistant, content)
    }

    /// Return to idle without appending anything (failed request).
    pub fn abort_question(&mut self) {
        self.asking = false;
    }

    fn push(&mut self, role: Role, content: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            role,
            content: content.into(),
        });
        id
    }
}

/// A single transcript message.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
}

/// Who authored a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}
