//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, InputReader)
//! but are themselves concrete structs, not traits.

mod directory;

pub use directory::{materialize, DirectoryService};
