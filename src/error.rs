//! Error types for path validation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine-readable code for a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ErrorCode {
    EmptyPath,
    TooLong,
    IllegalChar,
    Traversal,
    Syntax,
    AbsoluteNotAllowed,
    RelativeNotAllowed,
}

/// A single validation finding.
///
/// A path can accumulate several of these in one pass; they are independent
/// findings, not a decision tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ValidationError {
    /// Empty or zero-length path
    #[error("empty paths are not allowed")]
    EmptyPath,

    /// Path exceeds the effective maximum length
    #[error("path is {length} characters, limit is {limit}")]
    TooLong { length: usize, limit: usize },

    /// Character forbidden by the target OS, with its position
    #[error("illegal character {ch:?} at position {position}")]
    IllegalChar { ch: char, position: usize },

    /// Raw input contains a `..` sequence
    #[error("path contains a '..' traversal sequence")]
    Traversal,

    /// OS-specific malformed syntax (bad drive/UNC prefix, reserved name)
    #[error("malformed path syntax: {detail}")]
    Syntax { detail: String },

    /// Absolute path where policy requires relative
    #[error("absolute paths are not allowed")]
    AbsoluteNotAllowed,

    /// Relative path where policy requires absolute
    #[error("relative paths are not allowed")]
    RelativeNotAllowed,
}

impl ValidationError {
    /// The stable code for this finding.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyPath => ErrorCode::EmptyPath,
            ValidationError::TooLong { .. } => ErrorCode::TooLong,
            ValidationError::IllegalChar { .. } => ErrorCode::IllegalChar,
            ValidationError::Traversal => ErrorCode::Traversal,
            ValidationError::Syntax { .. } => ErrorCode::Syntax,
            ValidationError::AbsoluteNotAllowed => ErrorCode::AbsoluteNotAllowed,
            ValidationError::RelativeNotAllowed => ErrorCode::RelativeNotAllowed,
        }
    }

    /// Character position of the finding, where one exists.
    pub fn position(&self) -> Option<usize> {
        match self {
            ValidationError::IllegalChar { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Outcome of [`validate_path`](crate::validate_path).
///
/// Either the path passed every check and a normalized form is available, or
/// it failed and the full ordered list of findings is reported. The two are
/// mutually exclusive: a normalized path is produced only when zero errors
/// were found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
pub enum ValidationResult {
    Valid { normalized: String },
    Invalid { errors: Vec<ValidationError> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// The normalized path, if the input validated.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid { normalized } => Some(normalized),
            ValidationResult::Invalid { .. } => None,
        }
    }

    /// All findings, in check order. Empty when valid.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationResult::Valid { .. } => &[],
            ValidationResult::Invalid { errors } => errors,
        }
    }

    /// Convert into a standard `Result` for `?`-style handling.
    ///
    /// # Examples
    /// ```
    /// use pathvet::{validate_path, ValidationOptions};
    ///
    /// let normalized = validate_path("src/main.rs", &ValidationOptions::default())
    ///     .into_result()
    ///     .unwrap();
    /// assert_eq!(normalized, "src/main.rs");
    /// ```
    pub fn into_result(self) -> Result<String, Vec<ValidationError>> {
        match self {
            ValidationResult::Valid { normalized } => Ok(normalized),
            ValidationResult::Invalid { errors } => Err(errors),
        }
    }
}
