//! Result type alias for medsync
//!
//! This module provides a convenient Result type alias that uses
//! MedSyncError as the error type.

use super::errors::MedSyncError;

/// Result type alias for medsync operations
///
/// This is a convenience type alias that uses `MedSyncError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use medsync::domain::result::Result;
/// use medsync::domain::errors::MedSyncError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MedSyncError::NotFound("apt-1".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MedSyncError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::MedSyncError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(MedSyncError::Other("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
