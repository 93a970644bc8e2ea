//! Template storage
//!
//! Reference responses ("templates") that the validators compare live
//! responses against. One JSON file per method, cached in memory, with
//! a tar-archive bootstrap path for shipping defaults.

pub mod bootstrap;
pub mod errors;
pub mod store;

pub use bootstrap::{bootstrap_from_archive, pack_templates};
pub use errors::{TemplateError, TemplateResult};
pub use store::{TemplateStore, TEMPLATE_DIR};
