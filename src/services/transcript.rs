// src/services/transcript.rs
use chrono::{DateTime, Local};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    System,
    Error,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    /// Display form, e.g. `👤 You (14:02:11):\n<text>`.
    pub fn formatted(&self) -> String {
        let time = self.timestamp.format("%H:%M:%S");
        match self.sender {
            Sender::User => format!("👤 You ({}):\n{}", time, self.text),
            Sender::Bot => format!("🤖 Disaster Bot ({}):\n{}", time, self.text),
            Sender::System => format!("ℹ️ {}", self.text),
            Sender::Error => format!("❌ {}", self.text),
        }
    }
}

/// Append-only log of what the screen shows, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append and return the new length.
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) -> usize {
        self.messages.push(Message::new(sender, text));
        self.messages.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Entries appended at or after `index`.
    pub fn since(&self, index: usize) -> &[Message] {
        self.messages.get(index..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whole transcript as shown on screen, entries separated by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            out.push_str(&message.formatted());
            out.push_str("\n\n");
        }
        out
    }
}
