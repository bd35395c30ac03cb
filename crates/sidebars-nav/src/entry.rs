//! Sidebar entries and their external representation.
//!
//! Entries serialize to the shapes the site generator reads:
//!
//! - heading: `{"type": "html", "value": "...", "className": "..."}`
//! - document: `"product/page"`
//! - category: `{"type": "category", "label": "...", "items": [...]}`
//!
//! The long document form `{"type": "doc", "id": "..."}` is accepted on
//! input and normalized to the bare slug.

use serde::{Deserialize, Serialize};

/// A single item of a sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry", into = "RawEntry")]
pub enum NavigationEntry {
    /// Non-clickable section title.
    Heading {
        /// Display text.
        text: String,
        /// Presentational style class.
        class_name: String,
    },
    /// Reference to a document by slug.
    Document(String),
    /// Collapsible, labeled group of entries.
    Category {
        /// Display label.
        label: String,
        /// Child entries in render order.
        items: Vec<NavigationEntry>,
    },
}

impl NavigationEntry {
    /// Create a heading entry.
    pub fn heading(text: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::Heading {
            text: text.into(),
            class_name: class_name.into(),
        }
    }

    /// Create a document reference.
    pub fn document(slug: impl Into<String>) -> Self {
        Self::Document(slug.into())
    }

    /// Create a category entry.
    pub fn category(label: impl Into<String>, items: Vec<NavigationEntry>) -> Self {
        Self::Category {
            label: label.into(),
            items,
        }
    }

    /// Slug of this entry if it is a document reference.
    #[must_use]
    pub fn as_document(&self) -> Option<&str> {
        match self {
            Self::Document(slug) => Some(slug),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading { .. })
    }

    #[must_use]
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category { .. })
    }
}

/// Wire shape of an entry: bare slug or tagged object.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Slug(String),
    Tagged(TaggedEntry),
}

/// Tagged object entries, discriminated by `type`.
///
/// `className` and `items` default to empty so that missing values are
/// reported by validation with a location instead of failing the parse.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedEntry {
    Html {
        value: String,
        #[serde(rename = "className", default)]
        class_name: String,
    },
    Doc {
        id: String,
    },
    Category {
        label: String,
        #[serde(default)]
        items: Vec<NavigationEntry>,
    },
}

impl From<RawEntry> for NavigationEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Slug(slug) | RawEntry::Tagged(TaggedEntry::Doc { id: slug }) => {
                Self::Document(slug)
            }
            RawEntry::Tagged(TaggedEntry::Html { value, class_name }) => Self::Heading {
                text: value,
                class_name,
            },
            RawEntry::Tagged(TaggedEntry::Category { label, items }) => {
                Self::Category { label, items }
            }
        }
    }
}

impl From<NavigationEntry> for RawEntry {
    fn from(entry: NavigationEntry) -> Self {
        match entry {
            NavigationEntry::Heading { text, class_name } => Self::Tagged(TaggedEntry::Html {
                value: text,
                class_name,
            }),
            NavigationEntry::Document(slug) => Self::Slug(slug),
            NavigationEntry::Category { label, items } => {
                Self::Tagged(TaggedEntry::Category { label, items })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_document_serializes_as_bare_string() {
        let entry = NavigationEntry::document("yaradare/index");

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value, json!("yaradare/index"));
    }

    #[test]
    fn test_heading_serializes_as_html_item() {
        let entry = NavigationEntry::heading("Deepfence Yaradare", "sidebar-title");

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "html",
                "value": "Deepfence Yaradare",
                "className": "sidebar-title",
            })
        );
    }

    #[test]
    fn test_category_serializes_with_items() {
        let entry = NavigationEntry::category(
            "Configuration",
            vec![NavigationEntry::document("yaradare/configure/cli")],
        );

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "category",
                "label": "Configuration",
                "items": ["yaradare/configure/cli"],
            })
        );
    }

    #[test]
    fn test_long_doc_form_normalizes_to_slug() {
        let entry: NavigationEntry =
            serde_json::from_value(json!({"type": "doc", "id": "yaradare/quickstart"})).unwrap();

        assert_eq!(entry, NavigationEntry::document("yaradare/quickstart"));
    }

    #[test]
    fn test_nested_categories_parse() {
        let entry: NavigationEntry = serde_json::from_value(json!({
            "type": "category",
            "label": "Outer",
            "items": [
                "a/one",
                {"type": "category", "label": "Inner", "items": ["a/two"]},
            ],
        }))
        .unwrap();

        assert_eq!(
            entry,
            NavigationEntry::category(
                "Outer",
                vec![
                    NavigationEntry::document("a/one"),
                    NavigationEntry::category("Inner", vec![NavigationEntry::document("a/two")]),
                ],
            )
        );
    }

    #[test]
    fn test_category_without_items_parses_as_empty() {
        let entry: NavigationEntry =
            serde_json::from_value(json!({"type": "category", "label": "Empty"})).unwrap();

        assert_eq!(entry, NavigationEntry::category("Empty", Vec::new()));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<NavigationEntry, _> =
            serde_json::from_value(json!({"type": "link", "href": "https://example.com"}));

        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_scalar_is_rejected() {
        let result: Result<NavigationEntry, _> = serde_json::from_value(json!(42));

        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_entries_parse() {
        let yaml = r"
- type: html
  value: Title
  className: sidebar-title
- product/index
- type: category
  label: Usage
  items:
    - product/using/scan
";
        let entries: Vec<NavigationEntry> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_heading());
        assert_eq!(entries[1].as_document(), Some("product/index"));
        assert!(entries[2].is_category());
    }
}
