//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DirectoryService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, InputReader, RealFileSystem, StdinReader};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Stdin abstraction
    pub stdin: Arc<dyn InputReader>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(StdinReader))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        stdin: Arc<dyn InputReader>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            stdin,
        }
    }

    /// Directory materialization service sharing this container's filesystem.
    pub fn directory_service(&self) -> DirectoryService {
        DirectoryService::new(Arc::clone(&self.fs))
    }
}
