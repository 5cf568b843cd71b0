//! # SmartBot Core
//!
//! Chat brain for the SmartBot desktop widget: a handful of ordered
//! string-matching rules, one small trained intent classifier, and the
//! transcript/gallery glue around them.
//!
//! Single-threaded and synchronous by design — one reply per user message,
//! no state beyond the current session and the visible transcript.

pub mod brain;
pub mod error;
pub mod gallery;
pub mod transcript;

pub use brain::{Responder, Session};
pub use error::AppError;
pub use gallery::ImageGallery;
pub use transcript::{Speaker, Transcript};

#[cfg(test)]
mod tests;
