//! Chat session state.
//!
//! The only mutable state in the core: the user's display name, captured
//! from a name-declaration message. Passed explicitly to each reply call;
//! reset on restart.

use serde::{Deserialize, Serialize};

/// Placeholder used until the user declares a name.
pub const DEFAULT_NAME: &str = "friend";

/// Per-conversation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with the placeholder name.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// The captured display name, or the placeholder.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Substitute `{name}` in a reply template.
    pub fn render(&self, template: &str) -> String {
        template.replace("{name}", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        let session = Session::new();
        assert_eq!(session.name(), "friend");
    }

    #[test]
    fn test_render_substitution() {
        let mut session = Session::new();
        session.set_name("Sam");

        assert_eq!(session.render("Hey {name} 😁!"), "Hey Sam 😁!");
        assert_eq!(session.render("no placeholder"), "no placeholder");
    }
}
