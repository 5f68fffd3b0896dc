//! Module metadata entity

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::value_objects::{CanvasSlot, CanvasState, ModuleId, TemplateId};

/// Priority reserved for the protected module of a state
pub const PROTECTED_PRIORITY: u16 = 1000;

/// Maturity of a module. Informational; the resolver never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Core,
    Advanced,
    Experimental,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Core => "core",
            Tier::Advanced => "advanced",
            Tier::Experimental => "experimental",
        }
    }
}

/// How much pressure a module puts on the operator. Informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Stress {
    Calm,
    #[default]
    Neutral,
    Pressure,
}

impl Stress {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stress::Calm => "calm",
            Stress::Neutral => "neutral",
            Stress::Pressure => "pressure",
        }
    }
}

/// Static description of a single module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleMeta {
    pub allowed_states: BTreeSet<CanvasState>,
    pub default_slot: CanvasSlot,
    pub priority: u16,
    pub tier: Tier,
    pub stress: Stress,
    pub conflicts_with: BTreeSet<ModuleId>,
    pub blocked_in_templates: BTreeSet<TemplateId>,
}

impl ModuleMeta {
    pub fn new(default_slot: CanvasSlot, priority: u16) -> Self {
        Self {
            allowed_states: BTreeSet::new(),
            default_slot,
            priority,
            tier: Tier::default(),
            stress: Stress::default(),
            conflicts_with: BTreeSet::new(),
            blocked_in_templates: BTreeSet::new(),
        }
    }

    pub fn with_states(mut self, states: &[CanvasState]) -> Self {
        self.allowed_states = states.iter().copied().collect();
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_stress(mut self, stress: Stress) -> Self {
        self.stress = stress;
        self
    }

    pub fn with_conflicts(mut self, modules: &[ModuleId]) -> Self {
        self.conflicts_with = modules.iter().copied().collect();
        self
    }

    pub fn with_blocked_templates(mut self, templates: &[TemplateId]) -> Self {
        self.blocked_in_templates = templates.iter().copied().collect();
        self
    }

    pub fn is_protected(&self) -> bool {
        self.priority == PROTECTED_PRIORITY
    }

    pub fn allows_state(&self, state: CanvasState) -> bool {
        self.allowed_states.contains(&state)
    }

    pub fn is_blocked_in(&self, template: TemplateId) -> bool {
        self.blocked_in_templates.contains(&template)
    }

    pub fn conflicts_with(&self, other: ModuleId) -> bool {
        self.conflicts_with.contains(&other)
    }
}
