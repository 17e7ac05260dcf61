//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory; the parent must exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Canonicalize path (resolve symlinks, make absolute).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Input source abstraction: a file path or standard input.
pub trait InputReader: Send + Sync {
    /// Read all of stdin to a string.
    fn read_stdin(&self) -> io::Result<String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

/// Real stdin reader.
#[derive(Debug, Default)]
pub struct StdinReader;

impl InputReader for StdinReader {
    fn read_stdin(&self) -> io::Result<String> {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    }
}
