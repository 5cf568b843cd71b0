//! Intent definitions: labeled utterance categories mapped to training
//! patterns and canned response templates.
//!
//! Immutable after startup. A custom set can be loaded from JSON; the
//! built-in set covers general small talk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AppError;

/// A labeled category of user utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentDef {
    /// Intent label (e.g. "greeting")
    pub label: String,
    /// Example phrases used to train the classifier
    pub patterns: Vec<String>,
    /// Candidate reply templates; `{name}` is substituted with the session name
    pub responses: Vec<String>,
}

impl IntentDef {
    /// Build an intent from static pattern and response lists.
    pub fn new(label: &str, patterns: &[&str], responses: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Load an intent set from a JSON file (an array of intent objects).
pub fn load_intents(path: &Path) -> Result<Vec<IntentDef>, AppError> {
    let raw = fs::read_to_string(path)?;
    let intents: Vec<IntentDef> = serde_json::from_str(&raw)?;
    if intents.is_empty() {
        return Err(AppError::Validation(format!(
            "no intents defined in {}",
            path.display()
        )));
    }
    Ok(intents)
}

/// Built-in intent set used for general chat.
pub fn default_intents() -> Vec<IntentDef> {
    vec![
        IntentDef::new(
            "greeting",
            &["hi", "hello", "hey", "yo", "good morning", "good evening"],
            &[
                "Hey {name} 😁!",
                "Hi {name}! How can I help?",
                "Hello {name}! 😎",
            ],
        ),
        IntentDef::new(
            "how_are_you",
            &["how are you", "how r u", "are you ok", "how's it going"],
            &[
                "I'm running at full speed ⚡ How about you?",
                "I'm good, just crunching bits 😄",
                "Pretty good! Thanks for asking, {name} 😊",
            ],
        ),
        IntentDef::new(
            "joke",
            &["joke", "tell me a joke", "funny", "make me laugh"],
            &[
                "Why do programmers prefer dark mode? Because light attracts bugs 🐛",
                "There are 10 types of people: those who understand binary and those who don't 😂",
                "Programmers don't need glasses — they have IDEs 🤓",
            ],
        ),
        IntentDef::new(
            "motivate",
            &["i am sad", "motivate me", "i feel low"],
            &[
                "You're stronger than you think 💪",
                "Every day is a new chance to shine ✨",
                "I believe in you, {name}! You got this 🚀",
            ],
        ),
        IntentDef::new(
            "thanks",
            &["thanks", "thank you", "thx", "tysm"],
            &[
                "You're welcome, {name}! 😊",
                "Anytime, {name}.",
                "Glad to help 🤖✨",
            ],
        ),
        IntentDef::new(
            "goodbye",
            &["bye", "goodbye", "see you", "exit", "quit"],
            &[
                "Bye {name}! Come back soon ✨",
                "See you later 👋",
                "Goodbye! Stay awesome 🤩",
            ],
        ),
    ]
}
