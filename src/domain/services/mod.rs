//! Domain Services
//!
//! Pure resolution logic over the catalog and override layers.
//! These services have no I/O dependencies and are easily testable.

mod catalog_audit;
mod config_merger;
mod layout_resolver;

pub use catalog_audit::{audit_catalog, CatalogIssue, Severity};
pub use config_merger::{
    resolve_effective_config, DecisionAction, EffectiveConfig, ModuleDecision, OverrideTier,
};
pub use layout_resolver::{
    explain_layout, resolve_canvas, resolve_layout, Exclusion, ExclusionReason, LayoutExplanation,
};
