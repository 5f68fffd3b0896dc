//! Slotwise - deterministic layout resolution for operator canvases
//!
//! Given the current work state, a closed catalog of optional UI modules and
//! three tiers of overrides (operator, organization, platform), Slotwise decides
//! which modules are active and which screen slot each one lands in. The same
//! inputs always produce the same layout, and a damaged catalog degrades to a
//! fixed fallback layout rather than an empty screen.

pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use config::{CanvasConfig, ConfigWarning, LoadedConfig};
pub use domain::entities::{Catalog, ModuleMeta, Stress, Template, Tier, PROTECTED_PRIORITY};
pub use domain::policies::fallback_layout;
pub use domain::ports::{render_layout, ModuleRenderer, RenderedSlot};
pub use domain::services::{
    audit_catalog, explain_layout, resolve_canvas, resolve_effective_config, resolve_layout,
    CatalogIssue, EffectiveConfig, Exclusion, ExclusionReason, LayoutExplanation, OverrideTier,
    Severity,
};
pub use domain::value_objects::{
    CanvasLocks, CanvasSlot, CanvasState, Layout, LayoutSource, ModuleId, ModuleRef,
    OrgCanvasLocks, PlatformCanvasLocks, TechCanvasConfig, TemplateId,
};
pub use error::{SlotwiseError, SlotwiseResult};
