//! Reply routing: ordered rule checks, then the trained classifier, then a
//! generic fallback.
//!
//! Each rule is a named check returning `Option<String>`; the chain
//! short-circuits on the first hit. Every path returns a string — there is
//! no error propagation in the reply path.

use chrono::Local;
use rand::seq::SliceRandom;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::classifier::{IntentClassifier, DEFAULT_THRESHOLD};
use super::facts::FactTable;
use super::intents::{default_intents, IntentDef};
use super::session::Session;
use crate::error::AppError;

/// Generic acknowledgments used when no rule or classifier match clears
/// the threshold.
const FALLBACK_REPLIES: &[&str] = &[
    "Tell me more… 🤔",
    "Interesting! 😄",
    "Wow, really? 😳",
    "That sounds cool, {name}! 😎",
];

// Input is lowercased before matching, so the captured word is re-cased.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(my name is|i am|i'm)\s+([a-zA-Z]+)").expect("Invalid regex: name declaration")
});

/// Reply router combining fixed rules with the intent classifier.
pub struct Responder {
    intents: Vec<IntentDef>,
    facts: FactTable,
    classifier: IntentClassifier,
    threshold: f32,
}

impl Responder {
    /// Build a responder over the built-in intent set and fact table.
    pub fn new() -> Result<Self, AppError> {
        Self::with_parts(default_intents(), FactTable::default_table(), DEFAULT_THRESHOLD)
    }

    /// Build a responder over a custom intent set, fact table and
    /// classifier threshold.
    pub fn with_parts(
        intents: Vec<IntentDef>,
        facts: FactTable,
        threshold: f32,
    ) -> Result<Self, AppError> {
        let classifier = IntentClassifier::train(&intents)?;
        Ok(Self {
            intents,
            facts,
            classifier,
            threshold,
        })
    }

    /// Produce a reply for one user message.
    ///
    /// Decision order: name declaration, time query, fact lookup,
    /// classifier, fallback. The name rule is terminal.
    pub fn reply(&self, session: &mut Session, text: &str) -> String {
        let text = text.trim().to_lowercase();

        if let Some(reply) = self.check_name_declaration(session, &text) {
            return reply;
        }
        if let Some(reply) = self.check_time(&text) {
            return reply;
        }
        if let Some(reply) = self.facts.lookup(&text) {
            return reply.to_string();
        }
        if let Some(reply) = self.check_intent(session, &text) {
            return reply;
        }
        self.fallback(session)
    }

    /// "my name is X" / "i am X" / "i'm X" — capture the name and greet.
    fn check_name_declaration(&self, session: &mut Session, text: &str) -> Option<String> {
        let captures = NAME_PATTERN.captures(text)?;
        let name = title_case(captures.get(2)?.as_str());
        session.set_name(name.clone());
        debug!(name = %name, "Captured session name");
        Some(format!("Nice to meet you, {}! 🤝", name))
    }

    /// Any mention of "time" gets the wall clock.
    fn check_time(&self, text: &str) -> Option<String> {
        if !text.contains("time") {
            return None;
        }
        Some(format!(
            "The current time is ⏰ {}",
            Local::now().format("%H:%M:%S")
        ))
    }

    /// Classifier match: pick one of the intent's templates at random.
    fn check_intent(&self, session: &Session, text: &str) -> Option<String> {
        let prediction = self.classifier.predict(text, self.threshold)?;
        debug!(
            label = %prediction.label,
            confidence = prediction.confidence,
            "Classifier match"
        );
        let intent = self
            .intents
            .iter()
            .find(|intent| intent.label == prediction.label)?;
        let template = intent.responses.choose(&mut rand::thread_rng())?;
        Some(session.render(template))
    }

    fn fallback(&self, session: &Session) -> String {
        let template = FALLBACK_REPLIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(FALLBACK_REPLIES[0]);
        session.render(template)
    }
}

/// First letter uppercased, the rest lowercased.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
