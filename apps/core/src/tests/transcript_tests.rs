//! Transcript Tests
//!
//! Rendering format and the plain-text save path.

use crate::error::AppError;
use crate::transcript::{Speaker, Transcript};

#[test]
fn test_full_conversation_render() {
    let mut transcript = Transcript::new();
    transcript.push(Speaker::Bot, "Hello! I'm your smart AI chatbot 🤖");
    transcript.push(Speaker::User, "my name is Sam");
    transcript.push(Speaker::Bot, "Nice to meet you, Sam! 🤝");

    let rendered = transcript.render();
    assert!(rendered.starts_with("Bot: Hello!"));
    assert!(rendered.contains("You: my name is Sam\n\n"));
    assert!(rendered.ends_with("Bot: Nice to meet you, Sam! 🤝\n\n"));
}

#[test]
fn test_save_writes_rendered_text() {
    let mut transcript = Transcript::new();
    transcript.push(Speaker::User, "hi");
    transcript.push(Speaker::Bot, "Hey friend 😁!");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    transcript.save(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, "You: hi\n\nBot: Hey friend 😁!");
}

#[test]
fn test_save_empty_is_validation_error() {
    let transcript = Transcript::new();
    let dir = tempfile::tempdir().unwrap();

    let err = transcript.save(&dir.path().join("chat.txt")).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    // Nothing should have been written.
    assert!(!dir.path().join("chat.txt").exists());
}

#[test]
fn test_clear_then_save_is_rejected() {
    let mut transcript = Transcript::new();
    transcript.push(Speaker::User, "hi");
    transcript.clear();

    let dir = tempfile::tempdir().unwrap();
    assert!(transcript.save(&dir.path().join("chat.txt")).is_err());
}

#[test]
fn test_entries_are_timestamped_in_order() {
    let mut transcript = Transcript::new();
    transcript.push(Speaker::User, "first");
    transcript.push(Speaker::Bot, "second");

    let entries = transcript.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].timestamp <= entries[1].timestamp);
    assert_eq!(entries[0].speaker, Speaker::User);
    assert_eq!(entries[1].speaker, Speaker::Bot);
}
