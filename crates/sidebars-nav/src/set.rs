//! Ordered mapping from product key to sidebar.
//!
//! The set serializes to the generator's sidebars object: a map whose keys
//! are product keys in declaration order. Parsing keeps duplicate keys so
//! that [`SidebarSet::validate`] can report them instead of silently keeping
//! the last one.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::validate::validate_set;
use crate::{Pager, Sidebar, SidebarError, SourceFormat, ValidationReport, ValidationRules};

/// Position of a document within the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location<'a> {
    /// Product key of the sidebar containing the document.
    pub product: &'a str,
    /// Enclosing category labels, outermost first.
    pub breadcrumbs: Vec<&'a str>,
    /// Previous/next documents in that sidebar.
    pub pager: Pager<'a>,
}

/// Sidebars of all products, in declaration order.
///
/// Construction does not validate. Use [`SidebarSet::load`] or call
/// [`SidebarSet::validate`] before trusting the set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarSet {
    products: Vec<(String, Sidebar)>,
}

impl SidebarSet {
    #[must_use]
    pub fn new(products: Vec<(String, Sidebar)>) -> Self {
        Self { products }
    }

    /// Get the sidebar of a product.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::NotFound`] if no sidebar is registered under `product`.
    pub fn get(&self, product: &str) -> Result<&Sidebar, SidebarError> {
        self.products
            .iter()
            .find(|(key, _)| key == product)
            .map(|(_, sidebar)| sidebar)
            .ok_or_else(|| SidebarError::NotFound(product.to_owned()))
    }

    /// Product keys in declaration order.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over `(product key, sidebar)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sidebar)> {
        self.products
            .iter()
            .map(|(key, sidebar)| (key.as_str(), sidebar))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find the sidebar that references a document.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::DocumentNotFound`] if no sidebar references `slug`.
    pub fn locate(&self, slug: &str) -> Result<Location<'_>, SidebarError> {
        self.iter()
            .find_map(|(product, sidebar)| {
                let breadcrumbs = sidebar.breadcrumbs(slug)?;
                let pager = sidebar.pager(slug)?;
                Some(Location {
                    product,
                    breadcrumbs,
                    pager,
                })
            })
            .ok_or_else(|| SidebarError::DocumentNotFound(slug.to_owned()))
    }

    /// Check the set against the construction rules.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationReport`] listing every violation found.
    pub fn validate(&self, rules: &ValidationRules) -> Result<(), ValidationReport> {
        validate_set(self, rules)
    }

    /// Parse a set from source text without validating it.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the text is not a well-formed sidebars object.
    pub fn parse(content: &str, format: SourceFormat) -> Result<Self, SidebarError> {
        match format {
            SourceFormat::Json => Ok(serde_json::from_str(content)?),
            SourceFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }

    /// Load and validate a set from a JSON or YAML file.
    ///
    /// The format is detected from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unknown, the file cannot be read
    /// or parsed, or the set violates the construction rules.
    pub fn load(path: &Path, rules: &ValidationRules) -> Result<Self, SidebarError> {
        let format = SourceFormat::from_path(path)
            .ok_or_else(|| SidebarError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)?;
        let set = Self::parse(&content, format)?;
        set.validate(rules)?;

        debug!(
            path = %path.display(),
            products = set.len(),
            "Loaded sidebars"
        );
        Ok(set)
    }
}

impl Serialize for SidebarSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.products.len()))?;
        for (key, sidebar) in &self.products {
            map.serialize_entry(key, sidebar)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SidebarSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = SidebarSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from product key to sidebar entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut products = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, sidebar)) = access.next_entry::<String, Sidebar>()? {
                    products.push((key, sidebar));
                }
                Ok(SidebarSet { products })
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}
