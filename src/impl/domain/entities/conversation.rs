#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Append-only chat log. Every change returns a new snapshot; existing
/// snapshots are never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

// --

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn greeted(greeting: impl Into<String>) -> Self {
        Self::new().with_message(ChatMessage::assistant(greeting))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn with_message(&self, message: ChatMessage) -> Self {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self { messages }
    }

    /// Appends `chunk` to the trailing assistant reply. If the log does not end
    /// with an assistant reply, the snapshot is returned unchanged.
    pub fn with_reply_chunk(&self, chunk: &str) -> Self {
        match self.messages.last() {
            Some(last) if last.sender == Sender::Assistant => {
                let mut messages = self.messages.clone();
                if let Some(reply) = messages.last_mut() {
                    reply.text.push_str(chunk);
                }
                Self { messages }
            }
            _ => self.clone(),
        }
    }
}
