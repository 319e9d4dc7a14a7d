// src/message.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownLanguage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ChatRequest {
    /// Message only; the service picks the language itself.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            language: None,
        }
    }

    pub fn with_location(mut self, location: Option<&str>) -> Self {
        self.location = non_blank(location);
        self
    }

    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = non_blank(language);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hinglish,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hinglish => "hinglish",
        }
    }

    /// The other of the two options.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Hinglish,
            Language::Hinglish => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hinglish" | "hi" => Ok(Language::Hinglish),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
