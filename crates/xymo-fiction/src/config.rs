//! Configuration for an interactive session.

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Emit the world's intro banner when the session starts.
    pub show_intro: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { show_intro: true }
    }
}

impl SessionConfig {
    /// Enable or disable the intro banner.
    pub fn with_intro(mut self, show: bool) -> Self {
        self.show_intro = show;
        self
    }
}
