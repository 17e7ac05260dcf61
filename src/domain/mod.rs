//! Domain layer: outline parsing and tree construction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod parser;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use parser::{parse, parse_with, BlankLines, ParsedLine};
pub use tree::{validate_value, Node, NodeIterator, Tree, ILLEGAL_CHARACTERS};
