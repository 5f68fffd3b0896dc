//! Scenario: Organization Lockdown
//!
//! Journey: an operator on zen_master tries to turn sales modules back on,
//! while their organization and the platform apply their own locks.
//!
//! Success Criteria:
//! - Template blocks hold against operator enables
//! - Org force-disable beats operator enable
//! - Every decision is traceable to the tier that made it

use slotwise::{
    explain_layout, resolve_canvas, resolve_effective_config, CanvasLocks, CanvasSlot,
    CanvasState, Catalog, ExclusionReason, ModuleId, ModuleRef, OverrideTier, TechCanvasConfig,
    TemplateId,
};

/// SCENARIO: zen operator enables smart_upsell; the template still refuses it
#[test]
fn scenario_zen_operator_cannot_enable_blocked_module() {
    let tech = TechCanvasConfig::new(TemplateId::ZenMaster)
        .with_enabled([ModuleId::SmartUpsell, ModuleId::StepCoach]);
    let effective = resolve_effective_config(&tech, None, None);

    let explanation = explain_layout(
        Catalog::builtin(),
        CanvasState::Working,
        &effective.enabled_modules,
        Some(&effective.blocked_modules),
        Some(TemplateId::ZenMaster),
    );
    let layout = &explanation.layout;

    assert!(!layout.contains(ModuleId::SmartUpsell));
    assert_eq!(
        explanation.exclusion_for(ModuleId::SmartUpsell),
        Some(&ExclusionReason::Blocked)
    );
    assert_eq!(
        layout.slot(CanvasSlot::SideRail),
        &[ModuleId::SafetyChecklist, ModuleId::StepCoach]
    );
    assert_eq!(
        layout.slot(CanvasSlot::BottomActions),
        &[ModuleId::PhotoCapture, ModuleId::QuickNotes]
    );
    assert!(layout.slot(CanvasSlot::CornerBadge).is_empty());
}

/// SCENARIO: balanced operator, org removes the upsell and the timer
#[test]
fn scenario_org_disable_beats_operator_enable() {
    let tech = TechCanvasConfig::new(TemplateId::Balanced).with_enabled([ModuleId::SmartUpsell]);
    let org = CanvasLocks::default()
        .with_force_disabled([ModuleId::SmartUpsell, ModuleId::SessionTimer]);

    let layout = resolve_canvas(Catalog::builtin(), CanvasState::Working, &tech, Some(&org), None);

    assert!(!layout.contains(ModuleId::SmartUpsell));
    assert_eq!(layout.slot(CanvasSlot::TopStrip), &[ModuleId::BreakReminder]);
}

/// SCENARIO: platform re-enables something the org disabled
///
/// The module returns to the enabled set, but the org block still stands, so
/// it stays off screen.
#[test]
fn scenario_platform_enable_after_org_disable() {
    let tech = TechCanvasConfig::new(TemplateId::Balanced);
    let org = CanvasLocks::default().with_force_disabled([ModuleId::QuickNotes]);
    let platform = CanvasLocks::default().with_force_enabled([ModuleId::QuickNotes]);

    let effective = resolve_effective_config(&tech, Some(&org), Some(&platform));
    let quick_notes = ModuleRef::Known(ModuleId::QuickNotes);

    assert!(effective.is_enabled(ModuleId::QuickNotes));
    assert!(effective.is_blocked(ModuleId::QuickNotes));
    assert_eq!(
        effective.final_decision(&quick_notes).map(|d| d.tier),
        Some(OverrideTier::Platform)
    );

    let layout = resolve_canvas(
        Catalog::builtin(),
        CanvasState::Working,
        &tech,
        Some(&org),
        Some(&platform),
    );
    assert!(!layout.contains(ModuleId::QuickNotes));
}
