use log::warn;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Expands ~ and env vars if possible (only for UTF-8 paths), and always returns an absolute, lexically
/// cleaned PathBuf without trailing separators. Relative paths are resolved against `base`.
/// Does NOT touch the filesystem; the path need not exist, and symlinks are kept as given.
pub fn expand_and_resolve_path<P: AsRef<Path>, B: AsRef<Path>>(input: P, base: B) -> PathBuf {
    let input = input.as_ref();
    let expanded: PathBuf = match input.to_str() {
        Some(s) => {
            if let Ok(expanded) = shellexpand::full(s) {
                PathBuf::from(expanded.as_ref())
            } else {
                warn!("Failed to expand path {:?}. Using original path.", input);
                input.to_path_buf()
            }
        }
        None => {
            warn!("Path {:?} is not valid UTF-8. Skipping path expansion.", input);
            input.to_path_buf()
        }
    };

    let abs = if expanded.is_absolute() {
        expanded
    } else {
        base.as_ref().join(expanded)
    };

    //Cleaning rebuilds from components, which also drops trailing separators. Root stays "/"
    abs.clean()
}
