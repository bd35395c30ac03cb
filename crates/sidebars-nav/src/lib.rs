//! Documentation sidebar definitions.
//!
//! This crate provides:
//! - [`NavigationEntry`]: headings, document references and categories
//! - [`Sidebar`]: the ordered entries of one product, with pager and
//!   breadcrumb traversal
//! - [`SidebarSet`]: the ordered mapping from product key to sidebar,
//!   parsed from and exported to the site generator's sidebars object
//! - [`builtin::sidebars`]: the sidebars shipped with the documentation
//! - [`DocsIndex`] and [`check_documents`]: document coverage checks
//!
//! # Quick Start
//!
//! ```
//! use sidebars_nav::{builtin, ValidationRules};
//!
//! let sidebars = builtin::sidebars();
//! sidebars.validate(&ValidationRules::default()).unwrap();
//!
//! let yaradare = sidebars.get("yaradare").unwrap();
//! let pager = yaradare.pager("yaradare/quickstart").unwrap();
//! assert_eq!(pager.previous, Some("yaradare/index"));
//! assert_eq!(pager.next, Some("yaradare/using/build"));
//! ```

pub mod builtin;
mod docs_check;
mod entry;
mod error;
mod format;
mod set;
mod sidebar;
mod validate;

pub use docs_check::{CoverageReport, DocsIndex, MissingDocument, check_documents};
pub use entry::NavigationEntry;
pub use error::SidebarError;
pub use format::{ExportFormat, SourceFormat};
pub use set::{Location, SidebarSet};
pub use sidebar::{Pager, Sidebar};
pub use validate::{
    DEFAULT_HEADING_CLASS, ValidationError, ValidationErrorKind, ValidationReport, ValidationRules,
};
