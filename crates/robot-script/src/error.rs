//! Script error types

use robot_config::ConfigError;
use robot_core::DecodeError;
use std::io;
use thiserror::Error;

/// Result type for script operations
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors raised while loading or configuring a script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("loading script failed: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("invalid value for setting '{setting}' (value = {value})")]
    InvalidSetting { setting: String, value: String },
}

impl ScriptError {
    /// The decode error, if this is one
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            ScriptError::Decode(err) => Some(err),
            ScriptError::Config(ConfigError::Classify { source, .. }) => Some(source),
            _ => None,
        }
    }
}

/// Non-fatal failures raised while executing a command
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("error executing command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
