//! Catalog audit
//!
//! Static checks over a catalog and the template table. Resolution never
//! consults these; they exist so a broken catalog is noticed before the
//! fallback layout quietly takes over in production.

use serde::Serialize;

use crate::domain::entities::{Catalog, Template};
use crate::domain::value_objects::{CanvasState, ModuleId, TemplateId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// State would render the fallback layout
    MissingProtected { state: CanvasState },
    /// More than one entry qualifies as protected for a state
    DuplicateProtected {
        state: CanvasState,
        modules: Vec<ModuleId>,
    },
    /// Priority 1000 entry that never fills a protected slot
    StrayProtected { module: ModuleId },
    SelfConflict { module: ModuleId },
    NoAllowedStates { module: ModuleId },
    /// Default slot is illegal in every state the module allows
    UnreachableSlot { module: ModuleId },
    TemplateReferencesMissing {
        template: TemplateId,
        module: ModuleId,
    },
}

impl CatalogIssue {
    pub fn severity(&self) -> Severity {
        match self {
            CatalogIssue::MissingProtected { .. } | CatalogIssue::DuplicateProtected { .. } => {
                Severity::Error
            }
            _ => Severity::Warning,
        }
    }
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::MissingProtected { state } => {
                write!(f, "no protected module for state '{state}'")
            }
            CatalogIssue::DuplicateProtected { state, modules } => {
                let names: Vec<&str> = modules.iter().map(ModuleId::as_str).collect();
                write!(
                    f,
                    "state '{state}' has {} protected modules: {}",
                    modules.len(),
                    names.join(", ")
                )
            }
            CatalogIssue::StrayProtected { module } => write!(
                f,
                "'{module}' has protected priority but never fills a protected slot"
            ),
            CatalogIssue::SelfConflict { module } => {
                write!(f, "'{module}' declares a conflict with itself")
            }
            CatalogIssue::NoAllowedStates { module } => {
                write!(f, "'{module}' is not allowed in any state")
            }
            CatalogIssue::UnreachableSlot { module } => write!(
                f,
                "'{module}' targets a slot that none of its states show"
            ),
            CatalogIssue::TemplateReferencesMissing { template, module } => {
                write!(f, "template '{template}' references missing module '{module}'")
            }
        }
    }
}

pub fn audit_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut protected_in_use: Vec<ModuleId> = Vec::new();

    for state in CanvasState::ALL {
        let candidates = catalog.protected_candidates(state);
        match candidates.len() {
            0 => issues.push(CatalogIssue::MissingProtected { state }),
            1 => {}
            _ => issues.push(CatalogIssue::DuplicateProtected {
                state,
                modules: candidates.clone(),
            }),
        }
        protected_in_use.extend(candidates);
    }

    for (id, meta) in catalog.iter() {
        if meta.is_protected() && !protected_in_use.contains(&id) {
            issues.push(CatalogIssue::StrayProtected { module: id });
        }
        if meta.conflicts_with(id) {
            issues.push(CatalogIssue::SelfConflict { module: id });
        }
        if meta.allowed_states.is_empty() {
            issues.push(CatalogIssue::NoAllowedStates { module: id });
        } else if !meta
            .allowed_states
            .iter()
            .any(|state| state.allows_slot(meta.default_slot))
        {
            issues.push(CatalogIssue::UnreachableSlot { module: id });
        }
    }

    for template in Template::all() {
        for id in template.default_enabled.iter().chain(template.default_blocked) {
            if !catalog.contains(*id) {
                issues.push(CatalogIssue::TemplateReferencesMissing {
                    template: template.id,
                    module: *id,
                });
            }
        }
    }

    issues
}
