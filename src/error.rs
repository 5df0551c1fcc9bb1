//! Error types for the data board.

use thiserror::Error;

/// Coarse classification of board failures.
///
/// Every domain failure maps onto exactly one kind, so callers can branch on
/// what went wrong without caring about the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required string argument was blank.
    EmptyField,
    /// The supplied password does not match the owner's.
    Unauthorized,
    /// The item to create already exists.
    DuplicateItem,
    /// The referenced category or post does not exist.
    ItemNotFound,
    /// A friend acted on a category they cannot see.
    NotAllowed,
    /// Password reset with identical current and new values.
    SamePassword,
    /// Input was well-formed but inconsistent (bad timestamp, mismatched category).
    Invalid,
    /// Failure outside the board model (I/O, configuration).
    Environment,
}

/// Common error type for the data board.
#[derive(Error, Debug)]
pub enum BoardError {
    /// A required field was empty or whitespace only.
    #[error("required field is empty")]
    EmptyField,

    /// Owner authentication failed.
    #[error("unauthorized: wrong password")]
    Unauthorized,

    /// Attempted to create something that already exists.
    #[error("{0} already exists")]
    DuplicateItem(String),

    /// Resource not found.
    #[error("{0} not found")]
    ItemNotFound(String),

    /// Friend lacks visibility on the category.
    #[error("{friend} is not allowed to see category {category}")]
    NotAllowed {
        /// Friend who attempted the action.
        friend: String,
        /// Category the post belongs to.
        category: String,
    },

    /// New password equals the current one.
    #[error("new password must differ from the current one")]
    SamePassword,

    /// Post tagged with one category was filed under another.
    #[error("post belongs to category {post} but was filed under {target}")]
    CategoryMismatch {
        /// Category carried by the post.
        post: String,
        /// Category named by the caller.
        target: String,
    },

    /// Creation timestamp must be a positive number of seconds.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl BoardError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::EmptyField => ErrorKind::EmptyField,
            BoardError::Unauthorized => ErrorKind::Unauthorized,
            BoardError::DuplicateItem(_) => ErrorKind::DuplicateItem,
            BoardError::ItemNotFound(_) => ErrorKind::ItemNotFound,
            BoardError::NotAllowed { .. } => ErrorKind::NotAllowed,
            BoardError::SamePassword => ErrorKind::SamePassword,
            BoardError::CategoryMismatch { .. } | BoardError::InvalidTimestamp(_) => {
                ErrorKind::Invalid
            }
            BoardError::Io(_) | BoardError::Config(_) => ErrorKind::Environment,
        }
    }

    pub(crate) fn category_not_found(name: &str) -> Self {
        BoardError::ItemNotFound(format!("category {name}"))
    }

    pub(crate) fn post_not_found() -> Self {
        BoardError::ItemNotFound("post".to_string())
    }
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_display() {
        assert_eq!(BoardError::EmptyField.to_string(), "required field is empty");
    }

    #[test]
    fn test_not_found_display() {
        let err = BoardError::category_not_found("Funny");
        assert_eq!(err.to_string(), "category Funny not found");
        assert_eq!(BoardError::post_not_found().to_string(), "post not found");
    }

    #[test]
    fn test_not_allowed_display() {
        let err = BoardError::NotAllowed {
            friend: "Sofia".to_string(),
            category: "Pets".to_string(),
        };
        assert_eq!(err.to_string(), "Sofia is not allowed to see category Pets");
    }

    #[test]
    fn test_duplicate_display() {
        let err = BoardError::DuplicateItem("category Funny".to_string());
        assert_eq!(err.to_string(), "category Funny already exists");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(BoardError::EmptyField.kind(), ErrorKind::EmptyField);
        assert_eq!(BoardError::Unauthorized.kind(), ErrorKind::Unauthorized);
        assert_eq!(BoardError::SamePassword.kind(), ErrorKind::SamePassword);
        assert_eq!(BoardError::post_not_found().kind(), ErrorKind::ItemNotFound);
        assert_eq!(BoardError::InvalidTimestamp(0).kind(), ErrorKind::Invalid);
        assert_eq!(
            BoardError::Config("bad".to_string()).kind(),
            ErrorKind::Environment
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardError = io_err.into();
        assert!(matches!(err, BoardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
        assert_eq!(err.kind(), ErrorKind::Environment);
    }
}
