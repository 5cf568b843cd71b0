//! # Brain Module
//!
//! Rule-and-model reply core for SmartBot.
//! Routes each user message through ordered rule checks BEFORE falling back
//! to the trained intent classifier.
//!
//! ## Components
//! - `classifier`: TF-IDF bag-of-words features + multinomial logistic regression
//! - `intents`: intent definitions (training patterns + response templates)
//! - `facts`: ordered fixed-phrase fact lookup
//! - `session`: per-conversation state (captured display name)
//! - `responder`: ordered rule chain orchestrator

pub mod classifier;
pub mod facts;
pub mod intents;
pub mod responder;
pub mod session;

// Re-export main types for convenience
pub use classifier::{IntentClassifier, Prediction, TfidfVectorizer, DEFAULT_THRESHOLD};
pub use facts::FactTable;
pub use intents::{default_intents, load_intents, IntentDef};
pub use responder::Responder;
pub use session::{Session, DEFAULT_NAME};
