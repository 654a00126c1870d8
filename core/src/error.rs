use thiserror::Error;

/// Result type for clinic operations
pub type Result<T> = std::result::Result<T, ClinicError>;

/// Error types for clinic operations
///
/// Business-rule rejections (duplicate patient, ineligible procedure, ...)
/// are not errors; see [`crate::Registration`] and [`crate::VisitOutcome`].
#[derive(Error, Debug)]
pub enum ClinicError {
    /// Text that does not match the `dd/MM/yyyy` pattern or names no real date
    #[error("Invalid date '{0}': expected dd/MM/yyyy")]
    InvalidDate(String),

    /// Range text without the ` - ` separator
    #[error("Invalid period '{0}': expected dd/MM/yyyy - dd/MM/yyyy")]
    InvalidRange(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ClinicError {
    /// Returns whether the error came from operator input rather than the terminal
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ClinicError::InvalidDate(_) | ClinicError::InvalidRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_recoverable() {
        assert!(ClinicError::InvalidDate("x".to_string()).is_input_error());
        assert!(ClinicError::InvalidRange("x".to_string()).is_input_error());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!ClinicError::from(io).is_input_error());
    }

    #[test]
    fn test_error_messages() {
        let err = ClinicError::InvalidDate("32/01/2024".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date '32/01/2024': expected dd/MM/yyyy"
        );
    }
}
