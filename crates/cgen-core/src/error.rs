use thiserror::Error;

/// Rejection of a component name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Component name is required")]
    Missing,

    #[error("Component name must be camelCase")]
    NotCamelCase { suggestion: String },
}

impl NameError {
    /// Corrected name derived from the rejected input, if one exists.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            NameError::Missing => None,
            NameError::NotCamelCase { suggestion } => Some(suggestion),
        }
    }
}

/// Unrecognized `--language` value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language: {0} (expected ts or js)")]
pub struct LanguageError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(NameError::Missing.to_string(), "Component name is required");
        let err = NameError::NotCamelCase {
            suggestion: "userProfile".into(),
        };
        assert_eq!(err.to_string(), "Component name must be camelCase");
        assert_eq!(err.suggestion(), Some("userProfile"));
        assert_eq!(NameError::Missing.suggestion(), None);
    }

    #[test]
    fn test_language_error_names_value() {
        let err = LanguageError("xx".into());
        assert!(err.to_string().contains("xx"));
    }
}
