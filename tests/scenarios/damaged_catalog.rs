//! Scenario: Damaged Catalog
//!
//! Journey: a catalog ships without the protected module for one state.
//!
//! Success Criteria:
//! - The affected state renders its fallback layout
//! - Other states are unaffected
//! - `slotwise check` style auditing flags the problem

use slotwise::{
    audit_catalog, fallback_layout, resolve_canvas, CanvasSlot, CanvasState, Catalog,
    CatalogIssue, LayoutSource, ModuleId, Severity, TechCanvasConfig, TemplateId,
};

fn damaged() -> Catalog {
    Catalog::builtin().clone().without(ModuleId::FocusArcProtected)
}

/// SCENARIO: working and paused both lose their anchor
#[test]
fn scenario_missing_protected_uses_fallback() {
    let catalog = damaged();
    let tech = TechCanvasConfig::new(TemplateId::GrowthBeast);

    for state in [CanvasState::Working, CanvasState::Paused] {
        let layout = resolve_canvas(&catalog, state, &tech, None, None);
        assert_eq!(layout, fallback_layout(state));
        assert_eq!(layout.source(), LayoutSource::Fallback);
        assert_eq!(
            layout.slot(CanvasSlot::FocusAnchor),
            &[ModuleId::FocusArcProtected]
        );
    }

    let wrap_up = resolve_canvas(&catalog, CanvasState::WrapUp, &tech, None, None);
    assert_eq!(wrap_up.source(), LayoutSource::Catalog);
}

/// SCENARIO: the audit reports the gap as an error
#[test]
fn scenario_audit_flags_missing_protected() {
    assert!(audit_catalog(Catalog::builtin()).is_empty());

    let issues = audit_catalog(&damaged());
    let errors: Vec<&CatalogIssue> = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .collect();

    assert_eq!(
        errors,
        vec![
            &CatalogIssue::MissingProtected {
                state: CanvasState::Working
            },
            &CatalogIssue::MissingProtected {
                state: CanvasState::Paused
            },
        ]
    );
}
