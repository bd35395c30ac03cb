//! CLI command implementations.

pub(crate) mod check_docs;
pub(crate) mod export;
pub(crate) mod locate;
pub(crate) mod show;
mod source;
pub(crate) mod validate;

pub(crate) use check_docs::CheckDocsArgs;
pub(crate) use export::ExportArgs;
pub(crate) use locate::LocateArgs;
pub(crate) use show::ShowArgs;
pub(crate) use validate::ValidateArgs;
