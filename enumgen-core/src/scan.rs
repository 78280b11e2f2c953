//! Deterministic discovery of declaration files with directory pruning.
//!
//! Output order matters for generated code, so results are sorted and
//! explicit inputs keep the order they were given in.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{EnumgenError, EnumgenResult};

/// Directories to exclude by default (standard Rust project conventions).
const EXCLUDED_DIRS: &[&str] = &["target", ".git", "node_modules", ".cargo"];

/// Checks if a directory entry should be pruned (excluded from traversal).
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

fn is_rs_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "rs")
}

/// Gathers all .rs files below `root`, sorted by path.
///
/// Automatically excludes `target/`, `.git/`, `node_modules/`, and `.cargo/`.
pub fn gather_rs_files(root: &Path) -> EnumgenResult<Vec<PathBuf>> {
    let excludes: HashSet<&str> = EXCLUDED_DIRS.iter().copied().collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &excludes))
        .filter_map(|entry| match entry {
            Ok(e) if is_rs_file(e.path()) => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                let message = e.to_string();
                Some(Err(match e.into_io_error() {
                    Some(io) => EnumgenError::io(path, io),
                    None => EnumgenError::Io {
                        path,
                        message,
                        source: None,
                    },
                }))
            }
        })
        .collect::<EnumgenResult<Vec<_>>>()?;

    files.sort();
    Ok(files)
}

/// Expands `inputs` into the list of declaration files to read.
///
/// Directories are scanned with [`gather_rs_files`]; files are taken as
/// given. Any path in `skip` (typically the output file) is dropped, and
/// duplicates keep their first position.
pub fn resolve_inputs(inputs: &[PathBuf], skip: &[PathBuf]) -> EnumgenResult<Vec<PathBuf>> {
    let skip: HashSet<PathBuf> = skip.iter().map(|p| normalize(p)).collect();
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for input in inputs {
        let expanded = if input.is_dir() {
            gather_rs_files(input)?
        } else if input.is_file() {
            vec![input.clone()]
        } else {
            return Err(EnumgenError::io(
                input,
                std::io::Error::new(std::io::ErrorKind::NotFound, "input does not exist"),
            ));
        };

        for file in expanded {
            let key = normalize(&file);
            if skip.contains(&key) || !seen.insert(key) {
                continue;
            }
            files.push(file);
        }
    }

    Ok(files)
}

fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_test_tree(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("enumgen_scan_{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::create_dir_all(dir.join("target/debug")).unwrap();

        fs::write(dir.join("b.rs"), "").unwrap();
        fs::write(dir.join("a.rs"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::write(dir.join("nested/c.rs"), "").unwrap();
        fs::write(dir.join("target/debug/built.rs"), "").unwrap();
        dir
    }

    #[test]
    fn test_gather_sorted_and_pruned() {
        let dir = create_test_tree("gather");
        let files = gather_rs_files(&dir).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(&dir).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(rel, vec!["a.rs", "b.rs", "nested/c.rs"]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_resolve_skips_output_and_duplicates() {
        let dir = create_test_tree("resolve");
        let inputs = vec![dir.join("b.rs"), dir.clone()];
        let files = resolve_inputs(&inputs, &[dir.join("a.rs")]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["b.rs", "c.rs"]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_resolve_missing_input() {
        let missing = std::env::temp_dir().join("enumgen_scan_definitely_missing.rs");
        let err = resolve_inputs(&[missing], &[]).unwrap_err();
        assert!(matches!(err, EnumgenError::Io { .. }));
    }
}
