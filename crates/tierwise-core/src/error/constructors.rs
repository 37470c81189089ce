//! Constructor methods for RegistryError

use super::types::{RegistryError, ResourceType};

impl RegistryError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a parse error for the given document format
    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            format,
        }
    }

    /// Create a not-found error for a lookup key
    pub fn not_found(key: impl Into<String>, resource_type: ResourceType) -> Self {
        Self::NotFound {
            key: key.into(),
            resource_type,
        }
    }

    /// Create an unknown-plan error
    pub fn unknown_plan(plan_id: impl Into<String>) -> Self {
        Self::UnknownPlan {
            plan_id: plan_id.into(),
        }
    }

    /// Add context to a configuration error; other variants are returned unchanged
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if let Self::Config { context: c, .. } = &mut self {
            *c = Some(context.into());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RegistryError::config("x").error_code(), "TIERWISE_CONFIG");
        assert_eq!(
            RegistryError::not_found("x", ResourceType::Alias).error_code(),
            "TIERWISE_NOT_FOUND"
        );
        assert_eq!(
            RegistryError::unknown_plan("x").error_code(),
            "TIERWISE_UNKNOWN_PLAN"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(RegistryError::config("dup").is_fatal());
        assert!(RegistryError::parse("TOML", "bad").is_fatal());
        assert!(RegistryError::io_with_path("missing", "/tmp/x").is_fatal());
        assert!(!RegistryError::unknown_plan("gold").is_fatal());
        assert!(!RegistryError::not_found("gpt", ResourceType::Pricing).is_fatal());
    }

    #[test]
    fn test_display() {
        let err = RegistryError::not_found("no-such-alias", ResourceType::Alias);
        assert_eq!(err.to_string(), "alias not found: no-such-alias");

        let err = RegistryError::unknown_plan("tier_9_99");
        assert_eq!(err.to_string(), "Unknown plan: tier_9_99");
    }

    #[test]
    fn test_with_context() {
        let err = RegistryError::config("duplicate alias").with_context("record 'a'");
        assert_eq!(err.context(), Some("record 'a'"));

        let err = RegistryError::unknown_plan("x").with_context("ignored");
        assert_eq!(err.context(), None);
    }
}
