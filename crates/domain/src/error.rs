//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PurifierError`] via `#[from]` (no `String` variants).

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum PurifierError {
    #[error("configuration error")]
    Config(#[from] ConfigError),

    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The registry collaborator failed (listing calls, snapshot loading).
    #[error("registry error")]
    Registry(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Problems with the persisted card configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither `device_id` nor the legacy `entity` is configured.
    #[error("no device or entity configured")]
    MissingTarget,

    /// The configuration object could not be decoded.
    #[error("invalid card configuration")]
    Invalid(#[source] serde_json::Error),
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("identifier must not be empty")]
    EmptyId,
}

/// A lookup that returned nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_with_kind_and_id() {
        let err = NotFoundError {
            entity: "Device",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Device not found: abc");
    }

    #[test]
    fn should_convert_missing_target_into_config_variant() {
        let err: PurifierError = ConfigError::MissingTarget.into();
        assert!(matches!(
            err,
            PurifierError::Config(ConfigError::MissingTarget)
        ));
    }

    #[test]
    fn should_convert_validation_error() {
        let err: PurifierError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            PurifierError::Validation(ValidationError::EmptyName)
        ));
    }
}
