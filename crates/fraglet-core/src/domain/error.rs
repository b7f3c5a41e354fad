// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for display and status mapping)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The requested block does not exist on the resolved template.
    ///
    /// Deliberately a dedicated variant so callers can tell "wrong block
    /// name" apart from every other failure. Carries both names.
    #[error("Block '{block}' not found on template '{template}'")]
    BlockNotFound { block: String, template: String },

    /// A renderer identifier that could not be parsed as `package:path`.
    #[error("Invalid asset specification '{spec}': {reason}")]
    InvalidAssetSpec { spec: String, reason: String },

    #[error("Block name must not be empty")]
    EmptyBlockName,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BlockNotFound { block, template } => vec![
                format!("Template '{}' defines no block named '{}'", template, block),
                "Check the {% block ... %} names in the template".into(),
                "Block names are case-sensitive".into(),
            ],
            Self::InvalidAssetSpec { spec, reason } => vec![
                format!("'{}' is not a valid renderer name: {}", spec, reason),
                "Use a plain template path or 'package:relative/path'".into(),
            ],
            Self::EmptyBlockName => vec![
                "Pass the name of the block to render".into(),
                "Use the full-template render path to render the whole page".into(),
            ],
        }
    }

    /// Error category for display styling and HTTP/exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BlockNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidAssetSpec { .. } | Self::EmptyBlockName => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_not_found_names_both_parties() {
        let err = DomainError::BlockNotFound {
            block: "sidebar".into(),
            template: "simple_page.html.jinja2".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sidebar"));
        assert!(msg.contains("simple_page.html.jinja2"));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn invalid_spec_is_validation() {
        let err = DomainError::InvalidAssetSpec {
            spec: "a:b:c".into(),
            reason: "too many ':'".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
