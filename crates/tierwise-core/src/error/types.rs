//! Core error types for Tierwise

use std::fmt;
use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Kind of index a lookup missed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    /// Alias → canonical id map
    Alias,
    /// Pricing index (canonical ids and legacy keys)
    Pricing,
    /// Neither a canonical id nor an alias
    Model,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Alias => write!(f, "alias"),
            ResourceType::Pricing => write!(f, "pricing"),
            ResourceType::Model => write!(f, "model"),
        }
    }
}

/// Main error type for Tierwise
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Invalid catalog or configuration content
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Failure reading a catalog or configuration file
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Failure deserializing a catalog or configuration document
    #[error("{format} parse error: {message}")]
    Parse {
        message: String,
        format: &'static str,
    },

    /// Lookup key absent from the relevant index
    #[error("{resource_type} not found: {key}")]
    NotFound {
        key: String,
        resource_type: ResourceType,
    },

    /// Plan id is not a configured plan
    #[error("Unknown plan: {plan_id}")]
    UnknownPlan { plan_id: String },
}

impl RegistryError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "TIERWISE_CONFIG",
            Self::Io { .. } => "TIERWISE_IO",
            Self::Parse { .. } => "TIERWISE_PARSE",
            Self::NotFound { .. } => "TIERWISE_NOT_FOUND",
            Self::UnknownPlan { .. } => "TIERWISE_UNKNOWN_PLAN",
        }
    }

    /// Optional context attached to the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// Whether this error belongs to load/build time and must abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::Io { .. } | Self::Parse { .. }
        )
    }

    /// Whether this error is a recoverable lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
