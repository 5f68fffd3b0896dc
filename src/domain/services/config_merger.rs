//! Config merger
//!
//! Folds a template and the three override tiers into one effective
//! configuration. Tiers apply in order, each one able to undo the last:
//! - template: seeds enabled and blocked sets
//! - operator: adds/removes from enabled only
//! - organization, then platform: force on, or force off (removed from enabled
//!   and added to blocked)
//!
//! `blocked_modules` only ever grows. A module forced off at organization level
//! and forced back on by the platform ends up in both sets, and the layout
//! resolver drops it.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::Template;
use crate::domain::value_objects::{
    CanvasLocks, ModuleId, ModuleRef, OrgCanvasLocks, PlatformCanvasLocks, TechCanvasConfig,
    TemplateId,
};

/// Precedence level that made a decision, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideTier {
    Template,
    Operator,
    Organization,
    Platform,
}

impl std::fmt::Display for OverrideTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OverrideTier::Template => "template",
            OverrideTier::Operator => "operator",
            OverrideTier::Organization => "organization",
            OverrideTier::Platform => "platform",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    /// Added to the enabled set
    Enabled,
    /// Removed from the enabled set
    Disabled,
    /// Added to the blocked set (and removed from enabled, if present)
    Blocked,
}

/// One step of the merge, kept for provenance output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDecision {
    pub module: ModuleRef,
    pub tier: OverrideTier,
    pub action: DecisionAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    pub template_id: TemplateId,
    pub enabled_modules: BTreeSet<ModuleRef>,
    pub blocked_modules: BTreeSet<ModuleRef>,
    /// Decisions in application order
    pub decisions: Vec<ModuleDecision>,
}

impl EffectiveConfig {
    pub fn is_enabled(&self, id: ModuleId) -> bool {
        self.enabled_modules.contains(&ModuleRef::Known(id))
    }

    pub fn is_blocked(&self, id: ModuleId) -> bool {
        self.blocked_modules.contains(&ModuleRef::Known(id))
    }

    /// The last decision any tier made about `module`
    pub fn final_decision(&self, module: &ModuleRef) -> Option<&ModuleDecision> {
        self.decisions.iter().rev().find(|d| &d.module == module)
    }

    /// Final decisions for modules one tier enabled and a later tier took
    /// back out, in the order they were first enabled.
    pub fn removals(&self) -> Vec<&ModuleDecision> {
        let mut seen = BTreeSet::new();
        self.decisions
            .iter()
            .filter(|d| d.action == DecisionAction::Enabled)
            .filter(|d| seen.insert(&d.module))
            .filter(|d| !self.enabled_modules.contains(&d.module))
            .filter_map(|d| self.final_decision(&d.module))
            .collect()
    }
}

struct Merge {
    enabled: BTreeSet<ModuleRef>,
    blocked: BTreeSet<ModuleRef>,
    decisions: Vec<ModuleDecision>,
}

impl Merge {
    fn record(&mut self, module: &ModuleRef, tier: OverrideTier, action: DecisionAction) {
        self.decisions.push(ModuleDecision {
            module: module.clone(),
            tier,
            action,
        });
    }

    fn enable(&mut self, module: &ModuleRef, tier: OverrideTier) {
        self.enabled.insert(module.clone());
        self.record(module, tier, DecisionAction::Enabled);
    }

    fn disable(&mut self, module: &ModuleRef, tier: OverrideTier) {
        self.enabled.remove(module);
        self.record(module, tier, DecisionAction::Disabled);
    }

    fn block(&mut self, module: &ModuleRef, tier: OverrideTier) {
        self.enabled.remove(module);
        self.blocked.insert(module.clone());
        self.record(module, tier, DecisionAction::Blocked);
    }

    fn apply_locks(&mut self, locks: &CanvasLocks, tier: OverrideTier) {
        for module in &locks.force_enabled {
            self.enable(module, tier);
        }
        for module in &locks.force_disabled {
            self.block(module, tier);
        }
    }
}

pub fn resolve_effective_config(
    tech: &TechCanvasConfig,
    org: Option<&OrgCanvasLocks>,
    platform: Option<&PlatformCanvasLocks>,
) -> EffectiveConfig {
    let template = Template::get(tech.template_id);
    let mut merge = Merge {
        enabled: BTreeSet::new(),
        blocked: BTreeSet::new(),
        decisions: Vec::new(),
    };

    for id in template.default_enabled {
        merge.enable(&ModuleRef::Known(*id), OverrideTier::Template);
    }
    for id in template.default_blocked {
        let module = ModuleRef::Known(*id);
        merge.blocked.insert(module.clone());
        merge.record(&module, OverrideTier::Template, DecisionAction::Blocked);
    }

    for module in &tech.enabled_overrides {
        merge.enable(module, OverrideTier::Operator);
    }
    for module in &tech.disabled_overrides {
        merge.disable(module, OverrideTier::Operator);
    }

    if let Some(org) = org {
        merge.apply_locks(org, OverrideTier::Organization);
    }
    if let Some(platform) = platform {
        merge.apply_locks(platform, OverrideTier::Platform);
    }

    tracing::debug!(
        template = %tech.template_id,
        enabled = merge.enabled.len(),
        blocked = merge.blocked.len(),
        "resolved effective canvas config"
    );

    EffectiveConfig {
        template_id: tech.template_id,
        enabled_modules: merge.enabled,
        blocked_modules: merge.blocked,
        decisions: merge.decisions,
    }
}
