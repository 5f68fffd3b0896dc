//! Domain Entities
//!
//! Read-only tables loaded once per process:
//! - `Catalog` - module metadata keyed by `ModuleId`
//! - `Template` - named default bundles of enabled/blocked modules

mod catalog;
mod module_meta;
mod template;

pub use catalog::Catalog;
pub use module_meta::{ModuleMeta, Stress, Tier, PROTECTED_PRIORITY};
pub use template::Template;
