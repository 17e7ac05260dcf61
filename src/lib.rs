//! Create a directory structure from an indented plain-text outline.
//!
//! The pipeline is `parse` → `Tree::new` → `materialize`:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let lines = arbori::parse("src\n bin\n lib\ndocs\n");
//! let tree = arbori::Tree::new("project", lines)?;
//! arbori::materialize(tree.root(), Path::new("/tmp"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use application::{materialize, ApplicationError, ApplicationResult};
pub use domain::{parse, parse_with, BlankLines, DomainError, DomainResult, Node, ParsedLine, Tree};
