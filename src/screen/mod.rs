// src/screen/mod.rs
pub mod terminal;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    error::{ClientError, SubmitRejected},
    message::{ChatRequest, Language},
    services::{
        chat_client::ChatService,
        transcript::{Sender, Transcript},
    },
    state::{ChatPreferences, Phase},
};

pub const GENERIC_ERROR: &str = "Sorry, I'm having trouble connecting. Please try again.";
pub const ONLINE: &str = "✅ Chatbot is online and ready!";
pub const OFFLINE: &str = "⚠️ Chatbot is offline. Some features may not work.";
const TITLE: &str = "🤖 Disaster Management Chatbot";
const WELCOME: &str = "Ask me anything about disaster preparedness, response, or safety!";

/// Canned prompts for common emergencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Earthquake,
    Flood,
    Fire,
    Emergency,
}

impl QuickAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Earthquake => "What should I do during an earthquake?",
            QuickAction::Flood => "Bhai flood aa gaya, kya karu?",
            QuickAction::Fire => "Fire safety tips please",
            QuickAction::Emergency => "Emergency! I need immediate help!",
        }
    }
}

/// Results produced off the screen's context, delivered back over a channel.
#[derive(Debug)]
pub enum ScreenEvent {
    HealthChecked(bool),
    ReplyReceived(Result<String, ClientError>),
}

/// Receiving half of the screen's event channel. Owned by whoever drives the
/// screen, so waiting on it does not borrow the screen.
#[derive(Debug)]
pub struct ScreenEvents {
    rx: mpsc::UnboundedReceiver<ScreenEvent>,
}

impl ScreenEvents {
    pub async fn recv(&mut self) -> Option<ScreenEvent> {
        self.rx.recv().await
    }
}

/// Single chat screen: transcript, preferences and the send control.
pub struct ChatScreen {
    client: Arc<dyn ChatService>,
    transcript: Transcript,
    preferences: ChatPreferences,
    phase: Phase,
    notices: Vec<String>,
    last_error: Option<String>,
    events: mpsc::UnboundedSender<ScreenEvent>,
}

impl ChatScreen {
    pub fn new(client: Arc<dyn ChatService>, preferences: ChatPreferences) -> (Self, ScreenEvents) {
        let (tx, rx) = mpsc::unbounded_channel();
        let screen = Self {
            client,
            transcript: Transcript::new(),
            preferences,
            phase: Phase::Idle,
            notices: Vec::new(),
            last_error: None,
            events: tx,
        };
        (screen, ScreenEvents { rx })
    }

    /// Starts the liveness probe and writes the welcome lines.
    pub fn open(&mut self) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tokio::spawn(async move {
            let healthy = client.check_health().await;
            let _ = events.send(ScreenEvent::HealthChecked(healthy));
        });

        self.transcript.append(Sender::System, TITLE);
        self.transcript.append(Sender::Bot, WELCOME);
    }

    /// Queues `input` for sending. Nothing is appended or sent when the input
    /// is blank or a request is already in flight.
    pub fn submit(&mut self, input: &str) -> Result<(), SubmitRejected> {
        let message = input.trim();
        if message.is_empty() {
            self.notices.push(SubmitRejected::Empty.to_string());
            return Err(SubmitRejected::Empty);
        }
        if self.phase == Phase::Sending {
            return Err(SubmitRejected::Busy);
        }

        self.transcript.append(Sender::User, message);
        self.phase = Phase::Sending;

        let request = ChatRequest::new(message)
            .with_location(self.preferences.location.as_deref())
            .with_language(Some(self.preferences.language.as_str()));
        debug!(?request, "submitting");

        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = client.send_message(request).await;
            // Receiver gone means the screen was closed; the result is dropped.
            let _ = events.send(ScreenEvent::ReplyReceived(result));
        });
        Ok(())
    }

    pub fn quick_action(&mut self, action: QuickAction) -> Result<(), SubmitRejected> {
        self.submit(action.prompt())
    }

    /// Applies a result that came back over the event channel.
    pub fn apply(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::HealthChecked(true) => {
                self.transcript.append(Sender::System, ONLINE);
            }
            ScreenEvent::HealthChecked(false) => {
                self.transcript.append(Sender::System, OFFLINE);
            }
            ScreenEvent::ReplyReceived(Ok(reply)) => {
                self.phase = Phase::Idle;
                self.transcript.append(Sender::Bot, reply);
            }
            ScreenEvent::ReplyReceived(Err(err)) => {
                self.phase = Phase::Idle;
                self.transcript.append(Sender::Error, GENERIC_ERROR);
                let raw = err.to_string();
                self.notices.push(raw.clone());
                self.last_error = Some(raw);
            }
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.preferences = self.preferences.with_language(language);
        self.notices.push(format!("Language set to: {}", language));
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.preferences.language.toggled());
    }

    pub fn set_location(&mut self, location: Option<&str>) {
        self.preferences = self.preferences.with_location(location);
    }

    pub fn preferences(&self) -> &ChatPreferences {
        &self.preferences
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the send control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Raw text of the most recent failure.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Drains pending transient notifications.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}
