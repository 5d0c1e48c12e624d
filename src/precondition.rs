//! Argument validation helpers.

use crate::error::{FilterError, Result};

/// Returns the wrapped value, or [`FilterError::NullArgument`] naming `name` when absent.
pub fn check_not_null<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(FilterError::NullArgument { name })
}

/// Fails with [`FilterError::InvalidArgument`] carrying `message` when `valid` is false.
pub fn check_argument(valid: bool, message: impl Into<String>) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(FilterError::InvalidArgument(message.into()))
    }
}
