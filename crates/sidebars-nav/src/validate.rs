//! Construction rules for sidebars.
//!
//! Every sidebar must follow the same layout:
//!
//! 1. one heading with the product title and the configured style class
//! 2. a reference to the landing document (`<...>/index`)
//! 3. a reference to the quickstart document (`<...>/quickstart`)
//! 4. one or more non-empty categories
//!
//! Slugs must be well-formed and unique within a sidebar, and product keys
//! must be unique across the set. All violations are collected in a single
//! pass so authors can fix them together.

use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::{NavigationEntry, Sidebar, SidebarSet};

/// Style class expected on sidebar headings unless configured otherwise.
pub const DEFAULT_HEADING_CLASS: &str = "sidebar-title";

/// Last slug segment of the landing document.
const LANDING_SEGMENT: &str = "index";

/// Last slug segment of the quickstart document.
const QUICKSTART_SEGMENT: &str = "quickstart";

/// Number of leading entries with a fixed role (heading, landing, quickstart).
const PREAMBLE_LEN: usize = 3;

/// Tunable parts of the construction rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationRules {
    /// Style class every heading must carry.
    pub heading_class: String,
}

impl ValidationRules {
    pub fn new(heading_class: impl Into<String>) -> Self {
        Self {
            heading_class: heading_class.into(),
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_CLASS)
    }
}

/// Kind of construction rule violation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("product key cannot be empty")]
    EmptyProductKey,
    #[error("product key is declared more than once")]
    DuplicateProduct,
    #[error("sidebar has no entries")]
    EmptySidebar,
    #[error("sidebar must begin with a heading")]
    MissingHeading,
    #[error("headings are only allowed as the first entry")]
    MisplacedHeading,
    #[error("heading text cannot be empty")]
    EmptyHeadingText,
    #[error("heading class must be `{expected}`, found `{found}`")]
    HeadingClass { expected: String, found: String },
    #[error("expected a reference to the landing document (`.../index`)")]
    MissingLanding,
    #[error("expected a reference to the quickstart document (`.../quickstart`)")]
    MissingQuickstart,
    #[error("sidebar must declare at least one category")]
    MissingCategory,
    #[error("only categories may follow the quickstart document")]
    ExpectedCategory,
    #[error("category label cannot be empty")]
    EmptyLabel,
    #[error("category `{label}` has no items")]
    EmptyCategory { label: String },
    #[error("invalid slug `{slug}`: {reason}")]
    InvalidSlug { slug: String, reason: &'static str },
    #[error("duplicate slug `{slug}` (first declared at {first})")]
    DuplicateSlug { slug: String, first: String },
}

/// A single rule violation with its position in the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// Product key of the offending sidebar.
    pub product: String,
    /// Entry path such as `yaradare[3].items[1]`, or the product key itself
    /// for sidebar-level violations.
    pub location: String,
    pub kind: ValidationErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// All violations found while validating a [`SidebarSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Check whether any violation has the given kind.
    #[must_use]
    pub fn has(&self, predicate: impl Fn(&ValidationErrorKind) -> bool) -> bool {
        self.errors.iter().any(|e| predicate(&e.kind))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sidebar validation failed ({} error", self.errors.len())?;
        if self.errors.len() != 1 {
            write!(f, "s")?;
        }
        write!(f, ")")?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Validate a set against the construction rules.
///
/// # Errors
///
/// Returns a [`ValidationReport`] listing every violation found.
pub(crate) fn validate_set(
    set: &SidebarSet,
    rules: &ValidationRules,
) -> Result<(), ValidationReport> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (product, sidebar) in set.iter() {
        if product.trim().is_empty() {
            errors.push(ValidationError {
                product: product.to_owned(),
                location: format!("{product:?}"),
                kind: ValidationErrorKind::EmptyProductKey,
            });
        }
        if !seen.insert(product) {
            errors.push(ValidationError {
                product: product.to_owned(),
                location: product.to_owned(),
                kind: ValidationErrorKind::DuplicateProduct,
            });
            continue;
        }
        SidebarValidator::new(product, rules, &mut errors).check(sidebar);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport { errors })
    }
}

/// Reason a slug is malformed, if it is.
fn slug_problem(slug: &str) -> Option<&'static str> {
    if slug.is_empty() {
        Some("slug cannot be empty")
    } else if slug.chars().any(char::is_whitespace) {
        Some("slug cannot contain whitespace")
    } else if slug.starts_with('/') || slug.ends_with('/') {
        Some("slug cannot start or end with `/`")
    } else if slug.split('/').any(str::is_empty) {
        Some("slug cannot contain empty segments")
    } else {
        None
    }
}

fn last_segment(slug: &str) -> &str {
    slug.rsplit('/').next().unwrap_or(slug)
}

/// Per-sidebar validation state.
struct SidebarValidator<'a, 'e> {
    product: &'a str,
    rules: &'a ValidationRules,
    errors: &'e mut Vec<ValidationError>,
    /// Slug to location of its first declaration.
    slugs: HashMap<&'a str, String>,
}

impl<'a, 'e> SidebarValidator<'a, 'e> {
    fn new(
        product: &'a str,
        rules: &'a ValidationRules,
        errors: &'e mut Vec<ValidationError>,
    ) -> Self {
        Self {
            product,
            rules,
            errors,
            slugs: HashMap::new(),
        }
    }

    fn report(&mut self, location: String, kind: ValidationErrorKind) {
        self.errors.push(ValidationError {
            product: self.product.to_owned(),
            location,
            kind,
        });
    }

    fn check(&mut self, sidebar: &'a Sidebar) {
        let entries = sidebar.entries();
        if entries.is_empty() {
            self.report(self.product.to_owned(), ValidationErrorKind::EmptySidebar);
            return;
        }

        self.check_preamble(entries);
        if entries.len() <= PREAMBLE_LEN {
            self.report(self.product.to_owned(), ValidationErrorKind::MissingCategory);
        }

        for (i, entry) in entries.iter().enumerate() {
            let location = format!("{}[{i}]", self.product);
            match entry {
                NavigationEntry::Heading { .. } => {
                    if i != 0 {
                        self.report(location, ValidationErrorKind::MisplacedHeading);
                    }
                }
                NavigationEntry::Document(slug) => {
                    if i >= PREAMBLE_LEN {
                        self.report(location.clone(), ValidationErrorKind::ExpectedCategory);
                    }
                    self.check_slug(location, slug);
                }
                NavigationEntry::Category { label, items } => {
                    self.check_category(&location, label, items);
                }
            }
        }
    }

    /// Check the fixed roles of the first three entries.
    fn check_preamble(&mut self, entries: &[NavigationEntry]) {
        let product = self.product;
        let location = |i: usize| format!("{product}[{i}]");

        match entries.first() {
            Some(NavigationEntry::Heading { text, class_name }) => {
                if text.trim().is_empty() {
                    self.report(location(0), ValidationErrorKind::EmptyHeadingText);
                }
                if *class_name != self.rules.heading_class {
                    self.report(
                        location(0),
                        ValidationErrorKind::HeadingClass {
                            expected: self.rules.heading_class.clone(),
                            found: class_name.clone(),
                        },
                    );
                }
            }
            _ => self.report(location(0), ValidationErrorKind::MissingHeading),
        }

        let anchors = [
            (1, LANDING_SEGMENT, ValidationErrorKind::MissingLanding),
            (2, QUICKSTART_SEGMENT, ValidationErrorKind::MissingQuickstart),
        ];
        for (i, segment, kind) in anchors {
            let matches = entries
                .get(i)
                .and_then(NavigationEntry::as_document)
                .is_some_and(|slug| last_segment(slug) == segment);
            if !matches {
                self.report(location(i), kind);
            }
        }
    }

    fn check_category(&mut self, location: &str, label: &str, items: &'a [NavigationEntry]) {
        if label.trim().is_empty() {
            self.report(location.to_owned(), ValidationErrorKind::EmptyLabel);
        }
        if items.is_empty() {
            self.report(
                location.to_owned(),
                ValidationErrorKind::EmptyCategory {
                    label: label.to_owned(),
                },
            );
        }

        for (j, item) in items.iter().enumerate() {
            let child = format!("{location}.items[{j}]");
            match item {
                NavigationEntry::Heading { .. } => {
                    self.report(child, ValidationErrorKind::MisplacedHeading);
                }
                NavigationEntry::Document(slug) => self.check_slug(child, slug),
                NavigationEntry::Category { label, items } => {
                    self.check_category(&child, label, items);
                }
            }
        }
    }

    fn check_slug(&mut self, location: String, slug: &'a str) {
        if let Some(reason) = slug_problem(slug) {
            self.report(
                location,
                ValidationErrorKind::InvalidSlug {
                    slug: slug.to_owned(),
                    reason,
                },
            );
            return;
        }

        match self.slugs.entry(slug) {
            Entry::Occupied(first) => {
                let first = first.get().clone();
                self.report(
                    location,
                    ValidationErrorKind::DuplicateSlug {
                        slug: slug.to_owned(),
                        first,
                    },
                );
            }
            Entry::Vacant(vacant) => {
                vacant.insert(location);
            }
        }
    }
}
