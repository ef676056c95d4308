//! A fixed model environment.
//!
//! [`ModelEnvironment`] carries inert safety settings and a token budget, and
//! formats prompts that pass a non-empty check.

pub mod config;
pub mod environment;
pub mod errors;
pub mod logging;

pub use config::SecurityConfig;
pub use environment::{
    HarmBlockThreshold, ModelEnvironment, SafetySettings, TextInput, DEFAULT_MAX_TOKENS,
    INVALID_INPUT, PROCESSED_PREFIX,
};
pub use errors::{EnvError, Result};
pub use logging::init_logging;
