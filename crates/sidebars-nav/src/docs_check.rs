//! Coverage of document files by sidebars.
//!
//! The site generator resolves slugs to files under its content directory.
//! [`DocsIndex`] mirrors that resolution so authors can catch dangling slugs
//! and unreferenced documents before a site build.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{SidebarError, SidebarSet};

/// Document slugs found under a content directory.
#[derive(Debug, Default)]
pub struct DocsIndex {
    root: PathBuf,
    slugs: BTreeSet<String>,
}

impl DocsIndex {
    #[cfg(test)]
    fn from_slugs(root: PathBuf, slugs: impl IntoIterator<Item = String>) -> Self {
        Self {
            root,
            slugs: slugs.into_iter().collect(),
        }
    }

    /// Walk `root` and record the slug of every document file.
    ///
    /// A slug is the `/`-separated path relative to `root` with the file
    /// extension removed. Hidden files and directories are skipped.
    /// Extensions are matched case-insensitively without the leading dot.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `root` cannot be read.
    pub fn scan(root: &Path, extensions: &[String]) -> Result<Self, SidebarError> {
        let extensions: HashSet<String> =
            extensions.iter().map(|e| e.to_ascii_lowercase()).collect();
        let mut slugs = BTreeSet::new();
        scan_directory(root, "", &extensions, &mut slugs)?;

        debug!(root = %root.display(), documents = slugs.len(), "Scanned content directory");
        Ok(Self {
            root: root.to_path_buf(),
            slugs,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    /// Slugs in lexical order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

fn scan_directory(
    dir: &Path,
    prefix: &str,
    extensions: &HashSet<String>,
    slugs: &mut BTreeSet<String>,
) -> Result<(), SidebarError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            scan_directory(&path, &join_slug(prefix, &name), extensions, slugs)?;
            continue;
        }

        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.contains(&e.to_ascii_lowercase()));
        if matches && let Some(stem) = path.file_stem() {
            slugs.insert(join_slug(prefix, &stem.to_string_lossy()));
        }
    }
    Ok(())
}

fn join_slug(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}

/// Sidebar slug without a document file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingDocument {
    pub product: String,
    pub slug: String,
}

/// Result of comparing sidebars with the documents on disk.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Slugs referenced by a sidebar but not found on disk, in sidebar order.
    pub missing: Vec<MissingDocument>,
    /// Documents on disk referenced by no sidebar, in lexical order.
    pub orphaned: Vec<String>,
}

impl CoverageReport {
    /// Check whether every sidebar slug resolves to a document.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare the slugs of every sidebar with the indexed documents.
#[must_use]
pub fn check_documents(set: &SidebarSet, index: &DocsIndex) -> CoverageReport {
    let mut report = CoverageReport::default();
    let mut referenced = HashSet::new();

    for (product, sidebar) in set.iter() {
        for slug in sidebar.documents() {
            referenced.insert(slug);
            if !index.contains(slug) {
                report.missing.push(MissingDocument {
                    product: product.to_owned(),
                    slug: slug.to_owned(),
                });
            }
        }
    }

    for slug in index.slugs() {
        if !referenced.contains(slug) {
            warn!(slug = %slug, "Document is not referenced by any sidebar");
            report.orphaned.push(slug.to_owned());
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use pretty_assertions::assert_eq;

    fn md() -> Vec<String> {
        vec!["md".to_owned(), "mdx".to_owned()]
    }

    fn write(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# Title\n").unwrap();
    }

    #[test]
    fn test_scan_collects_nested_slugs() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "yaradare/index.md");
        write(dir.path(), "yaradare/using/scan.mdx");
        write(dir.path(), "intro.MD");

        let index = DocsIndex::scan(dir.path(), &md()).unwrap();

        assert_eq!(
            index.slugs().collect::<Vec<_>>(),
            vec!["intro", "yaradare/index", "yaradare/using/scan"]
        );
    }

    #[test]
    fn test_scan_skips_hidden_and_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), ".drafts/secret.md");
        write(dir.path(), ".hidden.md");
        write(dir.path(), "img/logo.png");
        write(dir.path(), "guide.md");

        let index = DocsIndex::scan(dir.path(), &md()).unwrap();

        assert_eq!(index.slugs().collect::<Vec<_>>(), vec!["guide"]);
    }

    #[test]
    fn test_scan_missing_directory_returns_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = DocsIndex::scan(&dir.path().join("missing"), &md());

        assert!(matches!(result, Err(SidebarError::Io(_))));
    }

    #[test]
    fn test_complete_coverage() {
        let set = builtin::sidebars();
        let slugs = set
            .iter()
            .flat_map(|(_, sidebar)| sidebar.documents())
            .map(str::to_owned);
        let index = DocsIndex::from_slugs(PathBuf::from("docs"), slugs);

        let report = check_documents(set, &index);

        assert!(report.is_complete());
        assert!(report.orphaned.is_empty());
    }

    #[test]
    fn test_missing_and_orphaned_documents_reported() {
        let dir = tempfile::tempdir().unwrap();
        for slug in builtin::sidebars().get("yaradare").unwrap().documents() {
            if slug != "yaradare/configure/rules" {
                write(dir.path(), &format!("{slug}.md"));
            }
        }
        write(dir.path(), "yaradare/changelog.md");
        let set = SidebarSet::new(vec![(
            "yaradare".to_owned(),
            builtin::sidebars().get("yaradare").unwrap().clone(),
        )]);

        let index = DocsIndex::scan(dir.path(), &md()).unwrap();
        let report = check_documents(&set, &index);

        assert_eq!(
            report,
            CoverageReport {
                missing: vec![MissingDocument {
                    product: "yaradare".to_owned(),
                    slug: "yaradare/configure/rules".to_owned(),
                }],
                orphaned: vec!["yaradare/changelog".to_owned()],
            }
        );
        assert!(!report.is_complete());
    }
}
