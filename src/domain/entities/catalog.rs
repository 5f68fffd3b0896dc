//! Module catalog
//!
//! Flat `ModuleId -> ModuleMeta` table. The built-in catalog is built once and
//! shared; derived catalogs (`with_entry`, `without`) exist so callers can
//! simulate partial or corrupted catalogs.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::module_meta::{ModuleMeta, Stress, Tier, PROTECTED_PRIORITY};
use crate::domain::value_objects::{CanvasSlot, CanvasState, ModuleId, TemplateId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<ModuleId, ModuleMeta>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(build_builtin);

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (ModuleId, ModuleMeta)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn with_entry(mut self, id: ModuleId, meta: ModuleMeta) -> Self {
        self.entries.insert(id, meta);
        self
    }

    pub fn without(mut self, id: ModuleId) -> Self {
        self.entries.remove(&id);
        self
    }

    pub fn get(&self, id: ModuleId) -> Option<&ModuleMeta> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &ModuleMeta)> {
        self.entries.iter().map(|(id, meta)| (*id, meta))
    }

    /// Every entry that qualifies as the protected module for `state`.
    ///
    /// A healthy catalog yields exactly one.
    pub fn protected_candidates(&self, state: CanvasState) -> Vec<ModuleId> {
        let slot = state.protected_slot();
        self.iter()
            .filter(|(_, meta)| {
                meta.priority == PROTECTED_PRIORITY
                    && meta.default_slot == slot
                    && meta.allows_state(state)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// The protected module for `state`, if the catalog has one
    pub fn protected_module(&self, state: CanvasState) -> Option<ModuleId> {
        self.protected_candidates(state).into_iter().next()
    }
}

fn build_builtin() -> Catalog {
    use CanvasSlot::*;
    use CanvasState::*;

    let all_states = [Briefing, Working, Paused, WrapUp];

    Catalog::from_entries([
        // Protected anchors, one per state
        (
            ModuleId::JobBriefProtected,
            ModuleMeta::new(FocusAnchor, PROTECTED_PRIORITY)
                .with_states(&[Briefing])
                .with_stress(Stress::Calm),
        ),
        (
            ModuleId::FocusArcProtected,
            ModuleMeta::new(FocusAnchor, PROTECTED_PRIORITY)
                .with_states(&[Working, Paused])
                .with_stress(Stress::Calm),
        ),
        (
            ModuleId::CloseoutProtected,
            ModuleMeta::new(FocusAnchor, PROTECTED_PRIORITY).with_states(&[WrapUp]),
        ),
        // Top strip
        (
            ModuleId::SessionTimer,
            ModuleMeta::new(TopStrip, 50).with_states(&all_states),
        ),
        (
            ModuleId::BreakReminder,
            ModuleMeta::new(TopStrip, 10)
                .with_states(&[Working, Paused])
                .with_tier(Tier::Advanced)
                .with_stress(Stress::Calm),
        ),
        (
            ModuleId::MoneyTicker,
            ModuleMeta::new(TopStrip, 30)
                .with_states(&[WrapUp])
                .with_tier(Tier::Experimental)
                .with_stress(Stress::Pressure)
                .with_conflicts(&[ModuleId::EarningsGoalRing])
                .with_blocked_templates(&[TemplateId::GuidedTrainee]),
        ),
        // Side rail
        (
            ModuleId::SafetyChecklist,
            ModuleMeta::new(SideRail, 80)
                .with_states(&[Briefing, Working])
                .with_stress(Stress::Calm),
        ),
        (
            ModuleId::StepCoach,
            ModuleMeta::new(SideRail, 60)
                .with_states(&[Briefing, Working])
                .with_stress(Stress::Calm)
                .with_conflicts(&[ModuleId::TipsCarousel]),
        ),
        (
            ModuleId::PartsLookup,
            ModuleMeta::new(SideRail, 45)
                .with_states(&[Working])
                .with_tier(Tier::Advanced),
        ),
        (
            ModuleId::TipsCarousel,
            ModuleMeta::new(SideRail, 20)
                .with_states(&[Briefing, Working, Paused])
                .with_tier(Tier::Advanced)
                .with_stress(Stress::Calm)
                .with_conflicts(&[ModuleId::StepCoach]),
        ),
        // Bottom actions
        (
            ModuleId::CustomerSignature,
            ModuleMeta::new(BottomActions, 70).with_states(&[WrapUp]),
        ),
        (
            ModuleId::SmartUpsell,
            ModuleMeta::new(BottomActions, 40)
                .with_states(&[Working, WrapUp])
                .with_tier(Tier::Advanced)
                .with_stress(Stress::Pressure)
                .with_blocked_templates(&[TemplateId::GuidedTrainee]),
        ),
        (
            ModuleId::PhotoCapture,
            ModuleMeta::new(BottomActions, 40)
                .with_states(&[Working, WrapUp])
                .with_stress(Stress::Calm),
        ),
        (
            ModuleId::QuickNotes,
            ModuleMeta::new(BottomActions, 35)
                .with_states(&all_states)
                .with_stress(Stress::Calm),
        ),
        (
            ModuleId::ReviewPrompt,
            ModuleMeta::new(BottomActions, 25)
                .with_states(&[WrapUp])
                .with_tier(Tier::Experimental)
                .with_stress(Stress::Pressure)
                .with_conflicts(&[ModuleId::SmartUpsell]),
        ),
        // Corner badge
        (
            ModuleId::EarningsGoalRing,
            ModuleMeta::new(CornerBadge, 25)
                .with_states(&[Working, WrapUp])
                .with_tier(Tier::Experimental)
                .with_stress(Stress::Pressure),
        ),
        (
            ModuleId::StreakBadge,
            ModuleMeta::new(CornerBadge, 15)
                .with_states(&[Working, WrapUp])
                .with_tier(Tier::Experimental)
                .with_stress(Stress::Pressure)
                .with_blocked_templates(&[TemplateId::ZenMaster, TemplateId::GuidedTrainee]),
        ),
    ])
}
