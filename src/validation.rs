//! Input validation for document IDs.
//!
//! Document IDs double as file names inside a collection directory, so any
//! ID coming from a client is checked before it is turned into a path.

use crate::error::{BookshelfError, Result};

/// Maximum allowed length for a document ID.
pub const MAX_ID_LENGTH: usize = 64;

/// Characters forbidden in IDs to prevent path traversal.
const FORBIDDEN_ID_CHARS: &[char] = &['/', '\\', '\0', ':'];

/// Validates a document ID.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(BookshelfError::InvalidId("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(BookshelfError::InvalidId(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.contains("..") {
        return Err(BookshelfError::InvalidId(
            "ID cannot contain '..' (path traversal)".to_string(),
        ));
    }
    if id.starts_with('.') {
        return Err(BookshelfError::InvalidId(
            "ID cannot start with '.'".to_string(),
        ));
    }
    for c in FORBIDDEN_ID_CHARS {
        if id.contains(*c) {
            return Err(BookshelfError::InvalidId(format!(
                "ID cannot contain '{}'",
                c.escape_default()
            )));
        }
    }
    Ok(())
}
