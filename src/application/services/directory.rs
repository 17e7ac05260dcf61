//! Directory materialization service
//!
//! Walks an outline tree depth-first, pre-order, creating one directory per
//! node under a base path. Directories that already exist are accepted, so
//! repeated runs over the same tree are safe. Nothing is rolled back on
//! failure.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::Node;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Materialize `root` and its descendants under `base` on the real filesystem.
///
/// `base` must be an existing, writable directory. The root's own value names
/// the first directory created.
pub fn materialize(root: &Node, base: &Path) -> ApplicationResult<()> {
    DirectoryService::new(Arc::new(RealFileSystem)).materialize(root, base)
}

/// Service for turning outline trees into directories.
pub struct DirectoryService {
    fs: Arc<dyn FileSystem>,
}

impl DirectoryService {
    /// Create a new directory service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Create a directory for `root` under `base`, then recurse into its children.
    ///
    /// The first I/O failure other than "already exists as a directory" aborts
    /// the walk.
    #[instrument(level = "debug", skip(self, root), fields(root = root.value(), base = %base.display()))]
    pub fn materialize(&self, root: &Node, base: &Path) -> ApplicationResult<()> {
        self.create_node(root, base)
    }

    fn create_node(&self, node: &Node, parent: &Path) -> ApplicationResult<()> {
        let dir = parent.join(node.value());
        self.ensure_dir(&dir)?;
        for child in node.children() {
            self.create_node(child, &dir)?;
        }
        Ok(())
    }

    fn ensure_dir(&self, dir: &Path) -> ApplicationResult<()> {
        match self.fs.create_dir(dir) {
            Ok(()) => {
                debug!("created: {}", dir.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.fs.is_dir(dir) => {
                trace!("exists: {}", dir.display());
                Ok(())
            }
            Err(e) => Err(e).with_path_context("create directory", dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::application::ApplicationError;
    use crate::domain::Tree;

    /// In-memory filesystem that records directory creation.
    #[derive(Default)]
    struct MockFileSystem {
        dirs: Mutex<HashSet<PathBuf>>,
        files: HashSet<PathBuf>,
        denied: HashSet<PathBuf>,
        created: Mutex<Vec<PathBuf>>,
    }

    impl MockFileSystem {
        fn with_dir(self, path: &str) -> Self {
            self.dirs.lock().unwrap().insert(PathBuf::from(path));
            self
        }

        fn with_file(mut self, path: &str) -> Self {
            self.files.insert(PathBuf::from(path));
            self
        }

        fn deny(mut self, path: &str) -> Self {
            self.denied.insert(PathBuf::from(path));
            self
        }

        fn created(&self) -> Vec<PathBuf> {
            self.created.lock().unwrap().clone()
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no file: {}", path.display()),
            ))
        }

        fn exists(&self, path: &Path) -> bool {
            self.is_dir(path) || self.files.contains(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.lock().unwrap().contains(path)
        }

        fn create_dir(&self, path: &Path) -> io::Result<()> {
            if self.denied.contains(path) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "Permission denied",
                ));
            }
            if self.exists(path) {
                return Err(io::Error::new(io::ErrorKind::AlreadyExists, "File exists"));
            }
            self.dirs.lock().unwrap().insert(path.to_path_buf());
            self.created.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
            Ok(path.to_path_buf())
        }
    }

    fn sample_tree() -> Tree {
        Tree::new("root", [(0, "a"), (1, "a1"), (1, "a2"), (0, "b")]).unwrap()
    }

    #[test]
    fn test_materialize_creates_directories_in_preorder() {
        let fs = Arc::new(MockFileSystem::default().with_dir("/base"));
        let service = DirectoryService::new(fs.clone());

        service.materialize(sample_tree().root(), Path::new("/base")).unwrap();

        let expected: Vec<PathBuf> = [
            "/base/root",
            "/base/root/a",
            "/base/root/a/a1",
            "/base/root/a/a2",
            "/base/root/b",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(fs.created(), expected);
    }

    #[test]
    fn test_materialize_accepts_existing_directories() {
        let fs = Arc::new(
            MockFileSystem::default()
                .with_dir("/base")
                .with_dir("/base/root")
                .with_dir("/base/root/a"),
        );
        let service = DirectoryService::new(fs.clone());

        service.materialize(sample_tree().root(), Path::new("/base")).unwrap();

        assert_eq!(fs.created().len(), 3);
    }

    #[test]
    fn test_materialize_fails_when_file_occupies_name() {
        let fs = Arc::new(
            MockFileSystem::default()
                .with_dir("/base")
                .with_file("/base/root"),
        );
        let service = DirectoryService::new(fs.clone());

        let err = service
            .materialize(sample_tree().root(), Path::new("/base"))
            .unwrap_err();

        match err {
            ApplicationError::Filesystem { path, source, .. } => {
                assert_eq!(path, PathBuf::from("/base/root"));
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(fs.created().is_empty());
    }

    #[test]
    fn test_materialize_aborts_without_rollback() {
        let fs = Arc::new(
            MockFileSystem::default()
                .with_dir("/base")
                .deny("/base/root/a/a2"),
        );
        let service = DirectoryService::new(fs.clone());

        let err = service
            .materialize(sample_tree().root(), Path::new("/base"))
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Filesystem { ref source, .. }
                if source.kind() == io::ErrorKind::PermissionDenied
        ));
        // Earlier directories stay, later siblings are never attempted
        let created = fs.created();
        assert_eq!(created.len(), 3);
        assert!(!created.contains(&PathBuf::from("/base/root/b")));
    }
}
