//! Error types for tone-mapping operations.

use thiserror::Error;

/// Error type for tone-mapping operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Configuration or buffer error from the core types.
    #[error(transparent)]
    Core(#[from] tonemap_core::Error),

    /// Filter description could not be parsed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl OpsError {
    /// Returns `true` for errors raised while configuring a filter,
    /// including unreadable filter descriptions.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Self::Core(e) => e.is_configuration_error(),
            Self::Yaml(_) => true,
        }
    }

    /// The wrapped core error, if any.
    pub fn as_core(&self) -> Option<&tonemap_core::Error> {
        match self {
            Self::Core(e) => Some(e),
            Self::Yaml(_) => None,
        }
    }
}

/// Result type for tone-mapping operations.
pub type OpsResult<T> = Result<T, OpsError>;
