//! Ordered sidebar of a single product.
//!
//! Declaration order is render order and also the order used for
//! previous/next navigation between documents.

use serde::{Deserialize, Serialize};

use crate::NavigationEntry;

/// Previous/next documents around a given document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager<'a> {
    /// Document rendered before the current one.
    pub previous: Option<&'a str>,
    /// Document rendered after the current one.
    pub next: Option<&'a str>,
}

/// Ordered navigation entries of one product.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar {
    entries: Vec<NavigationEntry>,
}

impl Sidebar {
    #[must_use]
    pub fn new(entries: Vec<NavigationEntry>) -> Self {
        Self { entries }
    }

    /// Top-level entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Document slugs in depth-first declaration order.
    #[must_use]
    pub fn documents(&self) -> Vec<&str> {
        fn collect<'a>(entries: &'a [NavigationEntry], out: &mut Vec<&'a str>) {
            for entry in entries {
                match entry {
                    NavigationEntry::Document(slug) => out.push(slug),
                    NavigationEntry::Category { items, .. } => collect(items, out),
                    NavigationEntry::Heading { .. } => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.entries, &mut out);
        out
    }

    /// Check whether the sidebar references a document anywhere in its tree.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.documents().contains(&slug)
    }

    /// Get previous/next documents for a slug.
    ///
    /// Returns `None` if the slug is not referenced by this sidebar.
    #[must_use]
    pub fn pager(&self, slug: &str) -> Option<Pager<'_>> {
        let documents = self.documents();
        let position = documents.iter().position(|&doc| doc == slug)?;

        Some(Pager {
            previous: position
                .checked_sub(1)
                .and_then(|i| documents.get(i).copied()),
            next: documents.get(position + 1).copied(),
        })
    }

    /// Get the labels of the categories enclosing a slug, outermost first.
    ///
    /// Returns `None` if the slug is not referenced by this sidebar, and an
    /// empty list for top-level documents.
    #[must_use]
    pub fn breadcrumbs(&self, slug: &str) -> Option<Vec<&str>> {
        let mut trail = Vec::new();
        find_trail(&self.entries, slug, &mut trail).then_some(trail)
    }
}

/// Depth-first search that leaves the enclosing category labels in `trail`.
fn find_trail<'a>(entries: &'a [NavigationEntry], slug: &str, trail: &mut Vec<&'a str>) -> bool {
    for entry in entries {
        match entry {
            NavigationEntry::Document(doc) if doc == slug => return true,
            NavigationEntry::Category { label, items } => {
                trail.push(label);
                if find_trail(items, slug, trail) {
                    return true;
                }
                trail.pop();
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nested_sidebar() -> Sidebar {
        Sidebar::new(vec![
            NavigationEntry::heading("Product", "sidebar-title"),
            NavigationEntry::document("p/index"),
            NavigationEntry::document("p/quickstart"),
            NavigationEntry::category(
                "Usage",
                vec![
                    NavigationEntry::document("p/using/build"),
                    NavigationEntry::category(
                        "Advanced",
                        vec![NavigationEntry::document("p/using/advanced/tuning")],
                    ),
                ],
            ),
            NavigationEntry::category("Configuration", vec![NavigationEntry::document("p/cli")]),
        ])
    }

    #[test]
    fn test_documents_in_depth_first_order() {
        let sidebar = nested_sidebar();

        assert_eq!(
            sidebar.documents(),
            vec![
                "p/index",
                "p/quickstart",
                "p/using/build",
                "p/using/advanced/tuning",
                "p/cli",
            ]
        );
    }

    #[test]
    fn test_empty_sidebar_has_no_documents() {
        let sidebar = Sidebar::default();

        assert!(sidebar.is_empty());
        assert!(sidebar.documents().is_empty());
    }

    #[test]
    fn test_pager_first_document_has_no_previous() {
        let sidebar = nested_sidebar();

        let pager = sidebar.pager("p/index").unwrap();

        assert_eq!(pager.previous, None);
        assert_eq!(pager.next, Some("p/quickstart"));
    }

    #[test]
    fn test_pager_crosses_category_boundaries() {
        let sidebar = nested_sidebar();

        let pager = sidebar.pager("p/using/advanced/tuning").unwrap();

        assert_eq!(pager.previous, Some("p/using/build"));
        assert_eq!(pager.next, Some("p/cli"));
    }

    #[test]
    fn test_pager_last_document_has_no_next() {
        let sidebar = nested_sidebar();

        let pager = sidebar.pager("p/cli").unwrap();

        assert_eq!(pager.previous, Some("p/using/advanced/tuning"));
        assert_eq!(pager.next, None);
    }

    #[test]
    fn test_pager_unknown_slug_returns_none() {
        let sidebar = nested_sidebar();

        assert!(sidebar.pager("p/missing").is_none());
    }

    #[test]
    fn test_breadcrumbs_nested_document() {
        let sidebar = nested_sidebar();

        let crumbs = sidebar.breadcrumbs("p/using/advanced/tuning").unwrap();

        assert_eq!(crumbs, vec!["Usage", "Advanced"]);
    }

    #[test]
    fn test_breadcrumbs_top_level_document_is_empty() {
        let sidebar = nested_sidebar();

        let crumbs = sidebar.breadcrumbs("p/quickstart").unwrap();

        assert!(crumbs.is_empty());
    }

    #[test]
    fn test_breadcrumbs_skip_unrelated_categories() {
        let sidebar = nested_sidebar();

        let crumbs = sidebar.breadcrumbs("p/cli").unwrap();

        assert_eq!(crumbs, vec!["Configuration"]);
    }

    #[test]
    fn test_breadcrumbs_unknown_slug_returns_none() {
        let sidebar = nested_sidebar();

        assert!(sidebar.breadcrumbs("p/missing").is_none());
    }

    #[test]
    fn test_contains() {
        let sidebar = nested_sidebar();

        assert!(sidebar.contains("p/using/build"));
        assert!(!sidebar.contains("Usage"));
    }
}
