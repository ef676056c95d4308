pub mod input;
pub mod safety;

pub use input::TextInput;
pub use safety::{HarmBlockThreshold, SafetySettings};

use serde::Serialize;
use tracing::{debug, trace};

pub const DEFAULT_MAX_TOKENS: u32 = 8000;

/// Returned by [`ModelEnvironment::process`] when the prompt fails validation.
pub const INVALID_INPUT: &str = "Invalid input";

pub const PROCESSED_PREFIX: &str = "Processed: ";

/// Holds the safety settings and token budget a model would run under.
///
/// Both values are fixed at construction and only readable afterwards. Neither
/// influences `validate_input` or `process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEnvironment {
    safety_settings: SafetySettings,
    max_tokens: u32,
}

impl Default for ModelEnvironment {
    fn default() -> Self {
        Self {
            safety_settings: SafetySettings::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ModelEnvironment {
    pub fn new() -> Self {
        let env = Self::default();
        trace!(
            harm_category = %env.safety_settings.harm_category,
            content_filter = env.safety_settings.content_filter,
            max_tokens = env.max_tokens,
            "model environment created"
        );
        env
    }

    #[inline]
    pub fn safety_settings(&self) -> &SafetySettings {
        &self.safety_settings
    }

    #[inline]
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// `false` for an absent or empty value, `true` for anything else.
    /// Whitespace counts as content.
    pub fn validate_input<T: TextInput + ?Sized>(&self, text: &T) -> bool {
        match text.as_text() {
            Some(s) if !s.is_empty() => true,
            Some(_) => {
                debug!(absent = false, "rejected empty input");
                false
            }
            None => {
                debug!(absent = true, "rejected empty input");
                false
            }
        }
    }

    pub fn process<T: TextInput + ?Sized>(&self, prompt: &T) -> String {
        if !self.validate_input(prompt) {
            return INVALID_INPUT.to_string();
        }
        // validate_input only passes Some(non-empty)
        let text = prompt.as_text().unwrap_or_default();
        format!("{PROCESSED_PREFIX}{text}")
    }
}
