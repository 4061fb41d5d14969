//! Error types for the agent core.

/// Errors raised by the agent core.
///
/// None of these occur while the shipped behavior graph runs. They signal a
/// caller breaking a contract: a malformed configuration or an explicit target
/// with missing coordinates.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AgentError {
    /// A required argument was missing or unusable.
    #[error("invalid argument: {what}")]
    InvalidArgument { what: &'static str },

    /// The agent configuration cannot be used.
    #[error("invalid agent configuration: {0}")]
    InvalidConfig(String),
}

impl AgentError {
    /// Returns a static string identifier for this error variant.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "AGENT_INVALID_ARGUMENT",
            Self::InvalidConfig(_) => "AGENT_INVALID_CONFIG",
        }
    }
}
