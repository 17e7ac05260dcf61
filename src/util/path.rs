use std::path::{Path, PathBuf};

/// Marker for reading the outline from standard input.
pub const STDIN_MARKER: &str = "-";

pub trait PathExt {
    fn is_stdin_marker(&self) -> bool;
}

impl PathExt for Path {
    fn is_stdin_marker(&self) -> bool {
        self.as_os_str() == STDIN_MARKER
    }
}

/// Split a canonical output directory into the root node value and the base
/// directory the root is created under.
///
/// The filesystem root has no final component and yields an empty value.
/// Returns `None` when the final component is not valid UTF-8.
pub fn split_output_dir(dir: &Path) -> Option<(String, PathBuf)> {
    let value = match dir.file_name() {
        Some(name) => name.to_str()?.to_string(),
        None => String::new(),
    };
    let base = dir.parent().unwrap_or(dir).to_path_buf();
    Some((value, base))
}
