//! Visible chat transcript.
//!
//! In-memory list of timestamped entries, rendered the way the chat window
//! displays them, plus a plain-text save. No other persistence exists; the
//! transcript lives and dies with the process.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::AppError;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "You"),
            Speaker::Bot => write!(f, "Bot"),
        }
    }
}

/// One displayed message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// The full visible transcript.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message.
    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker,
            text: text.into(),
            timestamp: Local::now(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render as the chat window shows it: `Who: message` blocks separated
    /// by blank lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("{}: {}\n\n", entry.speaker, entry.text));
        }
        out
    }

    /// Write the rendered transcript to a text file. Saving an empty
    /// transcript is rejected so the shell can show a notice instead.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::Validation("transcript is empty".to_string()));
        }
        fs::write(path, self.render().trim_end())?;
        info!(path = %path.display(), entries = self.len(), "Saved transcript");
        Ok(())
    }
}
