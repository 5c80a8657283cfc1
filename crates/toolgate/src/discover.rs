//! Python source discovery

use std::path::PathBuf;

use tracing::warn;
use walkdir::WalkDir;

/// Expand the given paths into a deterministic list of Python files
///
/// Directories are walked recursively for `*.py` files in lexicographic
/// order; explicit file arguments are kept as given, extension
/// notwithstanding. Unreadable directory entries are logged and skipped.
pub fn python_files(paths: &[PathBuf]) -> Vec<String> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => {
                        if entry.path().extension().is_some_and(|ext| ext == "py") {
                            files.push(entry.path().display().to_string());
                        }
                    }
                    Ok(_) => {}
                    Err(error) => warn!(%error, "skipping unreadable directory entry"),
                }
            }
        } else {
            files.push(path.display().to_string());
        }
    }
    files
}
