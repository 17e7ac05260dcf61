//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.create_dir(&dir)
    ///     .with_path_context("create directory", &dir)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Filesystem {
            context: action.to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_path_context_formats_message() {
        let result: io::Result<()> = Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "Permission denied",
        ));

        let err = result
            .with_path_context("create directory", Path::new("/base/root"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "create directory /base/root: Permission denied"
        );
    }

    #[test]
    fn test_with_path_context_passes_ok_through() {
        let result: io::Result<u8> = Ok(7);
        assert_eq!(result.with_path_context("noop", Path::new("x")).unwrap(), 7);
    }
}
