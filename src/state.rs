// src/state.rs
use crate::message::{Language, non_blank};

/// Language and location the next request is sent with. Never mutated in
/// place; every change yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatPreferences {
    pub language: Language,
    pub location: Option<String>,
}

impl ChatPreferences {
    pub fn new(language: Language, location: Option<&str>) -> Self {
        Self {
            language,
            location: non_blank(location),
        }
    }

    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    pub fn with_location(&self, location: Option<&str>) -> Self {
        Self {
            location: non_blank(location),
            ..self.clone()
        }
    }

    pub fn toggled(&self) -> Self {
        self.with_language(self.language.toggled())
    }
}

/// Per-request state of the screen. At most one request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
}
