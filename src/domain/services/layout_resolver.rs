//! Layout resolver
//!
//! Places enabled modules into slots for one canvas state:
//! 1. The protected slot gets the state's protected module, alone. If the
//!    catalog has none, the fallback layout is returned instead.
//! 2. Enabled modules are filtered by block lists, catalog membership, allowed
//!    states and template exclusions.
//! 3. Conflicting pairs drop the lower priority member (ties drop the later id).
//! 4. Survivors go to their default slot if that slot is legal and unprotected.
//! 5. Each slot is ordered by priority descending, then id ascending.
//!
//! Nothing here fails. Bad references are dropped one at a time.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::{Catalog, ModuleMeta};
use crate::domain::policies::{conflict_loser, fallback_layout, Contender, Loser};
use crate::domain::value_objects::{
    CanvasSlot, CanvasState, Layout, LayoutSource, ModuleId, ModuleRef, OrgCanvasLocks,
    PlatformCanvasLocks, TechCanvasConfig, TemplateId,
};

use super::config_merger::{resolve_effective_config, DecisionAction, EffectiveConfig};

/// Why an enabled module did not make it into the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ExclusionReason {
    Blocked,
    /// Turned off by a tier without blocking it
    Disabled,
    Unknown,
    NotInCatalog,
    NotAllowedInState,
    BlockedInTemplate,
    LostConflict { winner: ModuleId },
    IllegalSlot { slot: CanvasSlot },
    ProtectedSlot,
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExclusionReason::Blocked => write!(f, "blocked by configuration"),
            ExclusionReason::Disabled => write!(f, "disabled by configuration"),
            ExclusionReason::Unknown => write!(f, "unknown module"),
            ExclusionReason::NotInCatalog => write!(f, "missing from catalog"),
            ExclusionReason::NotAllowedInState => write!(f, "not allowed in this state"),
            ExclusionReason::BlockedInTemplate => write!(f, "unavailable in this template"),
            ExclusionReason::LostConflict { winner } => write!(f, "conflicts with {winner}"),
            ExclusionReason::IllegalSlot { slot } => write!(f, "slot {slot} not shown in this state"),
            ExclusionReason::ProtectedSlot => write!(f, "targets the protected slot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    pub module: ModuleRef,
    #[serde(flatten)]
    pub reason: ExclusionReason,
}

/// A layout together with every exclusion made while resolving it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutExplanation {
    pub state: CanvasState,
    pub protected_module: Option<ModuleId>,
    pub layout: Layout,
    pub exclusions: Vec<Exclusion>,
}

impl LayoutExplanation {
    pub fn exclusion_for(&self, id: ModuleId) -> Option<&ExclusionReason> {
        self.exclusions
            .iter()
            .find(|e| e.module == ModuleRef::Known(id))
            .map(|e| &e.reason)
    }

    /// Add the modules the override merge removed before resolution ran.
    ///
    /// Modules already reported, or still placed (a protected module is
    /// anchored even when blocked), are skipped.
    pub fn with_merge_exclusions(mut self, effective: &EffectiveConfig) -> Self {
        for decision in effective.removals() {
            let placed = decision
                .module
                .known()
                .is_some_and(|id| self.layout.contains(id));
            let reported = self.exclusions.iter().any(|e| e.module == decision.module);
            if placed || reported {
                continue;
            }
            let reason = match decision.action {
                DecisionAction::Blocked => ExclusionReason::Blocked,
                _ => ExclusionReason::Disabled,
            };
            tracing::debug!(
                module = %decision.module,
                tier = %decision.tier,
                %reason,
                "module removed by overrides"
            );
            self.exclusions.push(Exclusion {
                module: decision.module.clone(),
                reason,
            });
        }
        self
    }
}

/// Resolve the slot layout for `state`.
pub fn resolve_layout(
    catalog: &Catalog,
    state: CanvasState,
    enabled_modules: &BTreeSet<ModuleRef>,
    blocked_modules: Option<&BTreeSet<ModuleRef>>,
    template_id: Option<TemplateId>,
) -> Layout {
    explain_layout(catalog, state, enabled_modules, blocked_modules, template_id).layout
}

/// Merge the override layers and resolve the layout in one call.
pub fn resolve_canvas(
    catalog: &Catalog,
    state: CanvasState,
    tech: &TechCanvasConfig,
    org: Option<&OrgCanvasLocks>,
    platform: Option<&PlatformCanvasLocks>,
) -> Layout {
    let effective = resolve_effective_config(tech, org, platform);
    resolve_layout(
        catalog,
        state,
        &effective.enabled_modules,
        Some(&effective.blocked_modules),
        Some(effective.template_id),
    )
}

/// Same as [`resolve_layout`], also reporting why each dropped module was
/// dropped.
pub fn explain_layout(
    catalog: &Catalog,
    state: CanvasState,
    enabled_modules: &BTreeSet<ModuleRef>,
    blocked_modules: Option<&BTreeSet<ModuleRef>>,
    template_id: Option<TemplateId>,
) -> LayoutExplanation {
    let mut exclusions = Vec::new();
    let mut exclude = |module: ModuleRef, reason: ExclusionReason| {
        tracing::debug!(module = %module, state = %state, %reason, "module excluded");
        exclusions.push(Exclusion { module, reason });
    };

    let protected_candidates = catalog.protected_candidates(state);
    let Some(&protected) = protected_candidates.first() else {
        tracing::warn!(
            state = %state,
            "catalog has no protected module for state, using fallback layout"
        );
        return LayoutExplanation {
            state,
            protected_module: None,
            layout: fallback_layout(state),
            exclusions,
        };
    };
    if protected_candidates.len() > 1 {
        tracing::warn!(
            state = %state,
            chosen = %protected,
            count = protected_candidates.len(),
            "catalog has more than one protected module for state"
        );
    }

    let protected_slot = state.protected_slot();
    let mut layout = Layout::empty(LayoutSource::Catalog);
    layout.push(protected_slot, protected);

    let mut candidates: Vec<(ModuleId, &ModuleMeta)> = Vec::new();
    for module in enabled_modules {
        let id = match module {
            ModuleRef::Known(id) => *id,
            ModuleRef::Unknown(_) => {
                exclude(module.clone(), ExclusionReason::Unknown);
                continue;
            }
        };
        if id == protected {
            continue;
        }
        if blocked_modules.is_some_and(|blocked| blocked.contains(module)) {
            exclude(module.clone(), ExclusionReason::Blocked);
            continue;
        }
        let Some(meta) = catalog.get(id) else {
            exclude(module.clone(), ExclusionReason::NotInCatalog);
            continue;
        };
        if !meta.allows_state(state) {
            exclude(module.clone(), ExclusionReason::NotAllowedInState);
            continue;
        }
        if template_id.is_some_and(|template| meta.is_blocked_in(template)) {
            exclude(module.clone(), ExclusionReason::BlockedInTemplate);
            continue;
        }
        candidates.push((id, meta));
    }

    let mut excluded = vec![false; candidates.len()];
    for i in 0..candidates.len() {
        if excluded[i] {
            continue;
        }
        for j in (i + 1)..candidates.len() {
            if excluded[j] {
                continue;
            }
            let (a, a_meta) = candidates[i];
            let (b, b_meta) = candidates[j];
            if !a_meta.conflicts_with(b) && !b_meta.conflicts_with(a) {
                continue;
            }

            let loser = conflict_loser(
                Contender {
                    id: a.as_str(),
                    priority: a_meta.priority,
                },
                Contender {
                    id: b.as_str(),
                    priority: b_meta.priority,
                },
            );
            match loser {
                Loser::First => {
                    excluded[i] = true;
                    exclude(a.into(), ExclusionReason::LostConflict { winner: b });
                    break;
                }
                Loser::Second => {
                    excluded[j] = true;
                    exclude(b.into(), ExclusionReason::LostConflict { winner: a });
                }
            }
        }
    }

    let mut placed: BTreeSet<ModuleId> = BTreeSet::from([protected]);
    for (&(id, meta), dropped) in candidates.iter().zip(&excluded) {
        if *dropped {
            continue;
        }
        let slot = meta.default_slot;
        if !state.allows_slot(slot) {
            exclude(id.into(), ExclusionReason::IllegalSlot { slot });
            continue;
        }
        if slot == protected_slot {
            exclude(id.into(), ExclusionReason::ProtectedSlot);
            continue;
        }
        if placed.insert(id) {
            layout.push(slot, id);
        }
    }

    layout.sort_slots_by_key(|id| {
        let priority = catalog.get(*id).map_or(0, |meta| meta.priority);
        (Reverse(priority), *id)
    });

    tracing::debug!(
        state = %state,
        placed = placed.len(),
        excluded = exclusions.len(),
        "resolved canvas layout"
    );

    LayoutExplanation {
        state,
        protected_module: Some(protected),
        layout,
        exclusions,
    }
}
