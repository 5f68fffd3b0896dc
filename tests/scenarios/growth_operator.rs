//! Scenario: Sales-Focused Operator
//!
//! Journey: an operator picks the growth template and walks a job from
//! briefing to wrap-up.
//!
//! Success Criteria:
//! - Working state shows the full growth layout with ties broken by id
//! - Wrap-up swaps in the signature and review prompt
//! - The protected module always anchors the screen

use slotwise::{
    explain_layout, resolve_canvas, resolve_effective_config, CanvasSlot, CanvasState, Catalog,
    ExclusionReason, ModuleId, TechCanvasConfig, TemplateId,
};

fn growth() -> TechCanvasConfig {
    TechCanvasConfig::new(TemplateId::GrowthBeast)
}

/// SCENARIO: working state under growth_beast
#[test]
fn scenario_growth_working_layout() {
    let layout = resolve_canvas(Catalog::builtin(), CanvasState::Working, &growth(), None, None);

    assert_eq!(
        layout.slot(CanvasSlot::FocusAnchor),
        &[ModuleId::FocusArcProtected]
    );
    assert_eq!(layout.slot(CanvasSlot::TopStrip), &[ModuleId::SessionTimer]);
    assert_eq!(layout.slot(CanvasSlot::SideRail), &[ModuleId::PartsLookup]);
    // photo_capture and smart_upsell tie at 40; id breaks the tie
    assert_eq!(
        layout.slot(CanvasSlot::BottomActions),
        &[
            ModuleId::PhotoCapture,
            ModuleId::SmartUpsell,
            ModuleId::QuickNotes
        ]
    );
    assert_eq!(
        layout.slot(CanvasSlot::CornerBadge),
        &[ModuleId::EarningsGoalRing, ModuleId::StreakBadge]
    );
}

/// SCENARIO: the same operator moves on to wrap-up
#[test]
fn scenario_growth_wrap_up_conflicts() {
    let effective = resolve_effective_config(&growth(), None, None);
    let explanation = explain_layout(
        Catalog::builtin(),
        CanvasState::WrapUp,
        &effective.enabled_modules,
        Some(&effective.blocked_modules),
        Some(TemplateId::GrowthBeast),
    );
    let layout = &explanation.layout;

    assert_eq!(
        layout.slot(CanvasSlot::FocusAnchor),
        &[ModuleId::CloseoutProtected]
    );
    // money_ticker (30) beats earnings_goal_ring (25)
    assert_eq!(
        layout.slot(CanvasSlot::TopStrip),
        &[ModuleId::SessionTimer, ModuleId::MoneyTicker]
    );
    assert_eq!(
        explanation.exclusion_for(ModuleId::EarningsGoalRing),
        Some(&ExclusionReason::LostConflict {
            winner: ModuleId::MoneyTicker
        })
    );
    // smart_upsell (40) beats review_prompt (25)
    assert!(layout.contains(ModuleId::SmartUpsell));
    assert_eq!(
        explanation.exclusion_for(ModuleId::ReviewPrompt),
        Some(&ExclusionReason::LostConflict {
            winner: ModuleId::SmartUpsell
        })
    );
    assert_eq!(
        layout.slot(CanvasSlot::BottomActions).first(),
        Some(&ModuleId::CustomerSignature)
    );
    assert_eq!(layout.slot(CanvasSlot::CornerBadge), &[ModuleId::StreakBadge]);
}

/// SCENARIO: briefing never shows badges, even for growth operators
#[test]
fn scenario_growth_briefing_is_quiet() {
    let layout = resolve_canvas(Catalog::builtin(), CanvasState::Briefing, &growth(), None, None);

    assert_eq!(
        layout.slot(CanvasSlot::FocusAnchor),
        &[ModuleId::JobBriefProtected]
    );
    assert!(layout.slot(CanvasSlot::CornerBadge).is_empty());
    assert_eq!(layout.slot(CanvasSlot::TopStrip), &[ModuleId::SessionTimer]);
}
