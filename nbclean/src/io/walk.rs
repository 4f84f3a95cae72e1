//! Notebook discovery under a root directory.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::{DirEntry, WalkDir};

use crate::error::FileError;
use crate::io::config::CleanerConfig;

/// Iterate over every notebook file below `root`, in file-name order.
///
/// Hidden entries are pruned before descent, so nothing inside a hidden
/// directory is ever yielded. The root itself is exempt from the hidden check.
/// Entries that cannot be read are yielded as [`FileError::Walk`] and the walk
/// continues with the next entry.
pub fn discover_notebooks<'a>(
    root: &'a Path,
    cfg: &'a CleanerConfig,
) -> impl Iterator<Item = Result<PathBuf, FileError>> + 'a {
    let suffix = format!(".{}", cfg.extension);
    WalkDir::new(root)
        .follow_links(cfg.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(move |entry| match entry {
            Ok(entry) if is_notebook(&entry, &suffix) => Some(Ok(entry.into_path())),
            Ok(entry) => {
                trace!(path = %entry.path().display(), "not a notebook");
                None
            }
            Err(source) => Some(Err(FileError::Walk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })),
        })
}

/// A regular file, or a link to one, whose name ends with `suffix`.
///
/// Links are only resolved for the file check; linked directories are still
/// descended only when `follow_links` is set.
fn is_notebook(entry: &DirEntry, suffix: &str) -> bool {
    let is_file = if entry.path_is_symlink() {
        entry.path().is_file()
    } else {
        entry.file_type().is_file()
    };
    is_file && entry.file_name().to_string_lossy().ends_with(suffix)
}

/// Dot-prefixed names are hidden everywhere; Windows also honours the
/// hidden attribute.
pub fn is_hidden(entry: &DirEntry) -> bool {
    if entry.file_name().to_string_lossy().starts_with('.') {
        return true;
    }
    has_hidden_attribute(entry)
}

#[cfg(windows)]
fn has_hidden_attribute(entry: &DirEntry) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    entry
        .metadata()
        .map(|meta| meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
fn has_hidden_attribute(_entry: &DirEntry) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, "{}").expect("write file");
    }

    fn discovered(root: &Path, cfg: &CleanerConfig) -> Vec<PathBuf> {
        discover_notebooks(root, cfg)
            .map(|item| item.expect("walk entry"))
            .map(|path| path.strip_prefix(root).expect("under root").to_path_buf())
            .collect()
    }

    /// Verifies recursive discovery in name order, ignoring other extensions.
    #[test]
    fn finds_nested_notebooks_in_name_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        touch(&root.join("b.ipynb"));
        touch(&root.join("a.ipynb"));
        touch(&root.join("sub/deeper/c.ipynb"));
        touch(&root.join("notes.txt"));
        touch(&root.join("ipynb"));

        let found = discovered(root, &CleanerConfig::default());
        assert_eq!(
            found,
            vec![
                PathBuf::from("a.ipynb"),
                PathBuf::from("b.ipynb"),
                PathBuf::from("sub/deeper/c.ipynb"),
            ]
        );
    }

    /// Verifies hidden files and everything below hidden directories are skipped.
    #[test]
    fn hidden_entries_are_pruned() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        touch(&root.join(".ipynb_checkpoints/a-checkpoint.ipynb"));
        touch(&root.join(".hidden.ipynb"));
        touch(&root.join("visible/.secret/deep.ipynb"));
        touch(&root.join("visible/ok.ipynb"));

        let found = discovered(root, &CleanerConfig::default());
        assert_eq!(found, vec![PathBuf::from("visible/ok.ipynb")]);
    }

    #[test]
    fn hidden_root_is_still_walked() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join(".notebooks");
        touch(&root.join("a.ipynb"));

        let found = discovered(&root, &CleanerConfig::default());
        assert_eq!(found, vec![PathBuf::from("a.ipynb")]);
    }

    #[test]
    fn directory_named_like_a_notebook_is_descended_not_matched() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        touch(&root.join("dir.ipynb/inner.ipynb"));

        let found = discovered(root, &CleanerConfig::default());
        assert_eq!(found, vec![PathBuf::from("dir.ipynb/inner.ipynb")]);
    }

    #[test]
    fn custom_extension_is_honoured() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        touch(&root.join("a.ipynb"));
        touch(&root.join("b.nb"));

        let cfg = CleanerConfig {
            extension: "nb".to_string(),
            ..CleanerConfig::default()
        };
        assert_eq!(discovered(root, &cfg), vec![PathBuf::from("b.nb")]);
    }

    /// Verifies a multi-dot extension matches on the whole name suffix.
    #[test]
    fn multi_part_extension_matches_name_suffix() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        touch(&root.join("a.nb.json"));
        touch(&root.join("b.json"));
        touch(&root.join("nb.json"));

        let cfg = CleanerConfig {
            extension: "nb.json".to_string(),
            ..CleanerConfig::default()
        };
        assert_eq!(discovered(root, &cfg), vec![PathBuf::from("a.nb.json")]);
    }

    /// Verifies a link to a notebook is a candidate even when links are not
    /// followed, while a linked directory is not descended.
    #[cfg(unix)]
    #[test]
    fn linked_notebook_is_found_without_following_directories() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("root");
        let outside = temp.path().join("outside");
        touch(&outside.join("target.ipynb"));
        touch(&outside.join("nested/inner.ipynb"));
        fs::create_dir_all(&root).expect("create root");
        symlink(outside.join("target.ipynb"), root.join("link.ipynb")).expect("file link");
        symlink(outside.join("nested"), root.join("linked_dir")).expect("dir link");
        symlink(outside.join("missing.ipynb"), root.join("dangling.ipynb")).expect("dangling");

        let found = discovered(&root, &CleanerConfig::default());
        assert_eq!(found, vec![PathBuf::from("link.ipynb")]);

        // Followed dangling links surface as walk errors.
        fs::remove_file(root.join("dangling.ipynb")).expect("remove dangling");
        let follow = CleanerConfig {
            follow_links: true,
            ..CleanerConfig::default()
        };
        let found = discovered(&root, &follow);
        assert_eq!(
            found,
            vec![
                PathBuf::from("link.ipynb"),
                PathBuf::from("linked_dir/inner.ipynb"),
            ]
        );
    }
}
