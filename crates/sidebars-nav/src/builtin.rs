//! Sidebars shipped with the product documentation.
//!
//! Both products share one layout, so each sidebar is built from a
//! `ProductDocs` description. A product that needs a different layout can
//! still be written out entry by entry.

use std::sync::LazyLock;

use crate::validate::DEFAULT_HEADING_CLASS;
use crate::{NavigationEntry, Sidebar, SidebarSet};

/// Documentation layout of one product.
struct ProductDocs {
    /// Product key and slug prefix.
    key: &'static str,
    /// Heading text.
    title: &'static str,
    /// Label of the usage category.
    usage_label: &'static str,
    /// Pages under `<key>/using/`.
    usage: &'static [&'static str],
    /// Pages under `<key>/configure/`.
    configuration: &'static [&'static str],
}

impl ProductDocs {
    fn slug(&self, page: &str) -> NavigationEntry {
        NavigationEntry::document(format!("{}/{page}", self.key))
    }

    fn pages(&self, dir: &str, pages: &[&str]) -> Vec<NavigationEntry> {
        pages
            .iter()
            .map(|page| self.slug(&format!("{dir}/{page}")))
            .collect()
    }

    fn sidebar(&self) -> Sidebar {
        Sidebar::new(vec![
            NavigationEntry::heading(self.title, DEFAULT_HEADING_CLASS),
            self.slug("index"),
            self.slug("quickstart"),
            NavigationEntry::category(self.usage_label, self.pages("using", self.usage)),
            NavigationEntry::category(
                "Configuration",
                self.pages("configure", self.configuration),
            ),
        ])
    }
}

const PRODUCTS: &[ProductDocs] = &[
    ProductDocs {
        key: "yaradare",
        title: "Deepfence Yaradare",
        usage_label: "Using YaRadare",
        usage: &["build", "scan"],
        configuration: &["cli", "output", "rules"],
    },
    ProductDocs {
        key: "yarahunter",
        title: "Deepfence YaraHunter",
        usage_label: "Using YaraHunter",
        usage: &["build", "scan"],
        configuration: &["cli", "output", "rules"],
    },
];

static SIDEBARS: LazyLock<SidebarSet> = LazyLock::new(|| {
    SidebarSet::new(
        PRODUCTS
            .iter()
            .map(|product| (product.key.to_owned(), product.sidebar()))
            .collect(),
    )
});

/// Sidebars of all documented products.
#[must_use]
pub fn sidebars() -> &'static SidebarSet {
    &SIDEBARS
}
