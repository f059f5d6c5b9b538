//! In-memory description of a project skeleton

use std::collections::BTreeMap;

/// Directories and files a template set wants on disk, relative to the project root
///
/// Paths always use `/` as separator. Directories keep their declaration order,
/// files are kept sorted so two trees built from the same inputs compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    pub directories: Vec<String>,
    pub files: BTreeMap<String, String>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a directory (duplicates are ignored)
    pub fn dir(&mut self, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        if !self.directories.contains(&path) {
            self.directories.push(path);
        }
        self
    }

    pub fn dirs<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for path in paths {
            self.dir(path);
        }
        self
    }

    /// Add a file, replacing any content previously registered at the same path
    pub fn file(&mut self, path: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn contains_dir(&self, path: &str) -> bool {
        self.directories.iter().any(|d| d == path)
    }

    /// Directory prefixes of file paths that were never declared
    ///
    /// Empty for every well-formed tree.
    pub fn undeclared_directories(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for path in self.files.keys() {
            for prefix in parent_prefixes(path) {
                if !self.contains_dir(prefix) && !missing.iter().any(|m| m == prefix) {
                    missing.push(prefix.to_string());
                }
            }
        }
        missing
    }
}

/// `a/b/c.txt` yields `a` and `a/b`
fn parent_prefixes(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(idx, _)| &path[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_is_deduplicated_and_ordered() {
        let mut tree = FileTree::new();
        tree.dirs(["src", "src/utils", "src"]);
        assert_eq!(tree.directories, vec!["src", "src/utils"]);
    }

    #[test]
    fn test_root_files_need_no_directory() {
        let mut tree = FileTree::new();
        tree.file("package.json", "{}").file("README.md", "# x");
        assert!(tree.undeclared_directories().is_empty());
    }

    #[test]
    fn test_every_ancestor_must_be_declared() {
        let mut tree = FileTree::new();
        tree.dir("src/app")
            .file("src/app/api/hello/route.ts", "export {}");
        assert_eq!(
            tree.undeclared_directories(),
            vec!["src", "src/app/api", "src/app/api/hello"]
        );
    }

    #[test]
    fn test_file_overwrites_previous_entry() {
        let mut tree = FileTree::new();
        tree.file("package.json", "old").file("package.json", "new");
        assert_eq!(tree.files.len(), 1);
        assert_eq!(tree.files["package.json"], "new");
    }
}
