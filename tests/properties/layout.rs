//! Property tests for layout resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;

use slotwise::{
    resolve_canvas, resolve_effective_config, resolve_layout, CanvasLocks, CanvasSlot,
    CanvasState, Catalog, ModuleId, ModuleRef, TechCanvasConfig, TemplateId,
};

fn state() -> impl Strategy<Value = CanvasState> {
    prop::sample::select(CanvasState::ALL.to_vec())
}

fn template() -> impl Strategy<Value = TemplateId> {
    prop::sample::select(TemplateId::ALL.to_vec())
}

fn module_set() -> impl Strategy<Value = BTreeSet<ModuleRef>> {
    prop::collection::btree_set(
        prop::sample::select(ModuleId::ALL.to_vec()).prop_map(ModuleRef::Known),
        0..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the protected slot holds exactly the state's protected module.
    #[test]
    fn property_protected_slot_is_exclusive(
        state in state(),
        enabled in module_set(),
        blocked in module_set(),
    ) {
        let catalog = Catalog::builtin();
        let layout = resolve_layout(catalog, state, &enabled, Some(&blocked), None);

        let protected = catalog.protected_module(state).unwrap();
        prop_assert_eq!(layout.slot(state.protected_slot()), &[protected][..]);
    }

    /// PROPERTY: blocked modules never appear (except the protected one).
    #[test]
    fn property_blocked_never_emitted(
        state in state(),
        enabled in module_set(),
        blocked in module_set(),
    ) {
        let catalog = Catalog::builtin();
        let layout = resolve_layout(catalog, state, &enabled, Some(&blocked), None);
        let protected = catalog.protected_module(state).unwrap();

        for id in layout.modules().filter(|id| *id != protected) {
            prop_assert!(!blocked.contains(&ModuleRef::Known(id)), "{} was blocked", id);
        }
    }

    /// PROPERTY: every placed module is legal for the state and sits in its
    /// own default slot, and no module is placed twice.
    #[test]
    fn property_placement_respects_catalog(
        state in state(),
        template_id in prop::option::of(template()),
        enabled in module_set(),
    ) {
        let catalog = Catalog::builtin();
        let layout = resolve_layout(catalog, state, &enabled, None, template_id);

        let mut seen = BTreeSet::new();
        for (slot, ids) in layout.iter() {
            for id in ids {
                let meta = catalog.get(*id).unwrap();
                prop_assert!(seen.insert(*id), "{} placed twice", id);
                prop_assert!(meta.allows_state(state));
                prop_assert!(state.allows_slot(slot));
                prop_assert_eq!(meta.default_slot, slot);
                if let Some(template_id) = template_id {
                    prop_assert!(!meta.is_blocked_in(template_id));
                }
            }
        }
    }

    /// PROPERTY: no two placed modules conflict with each other.
    #[test]
    fn property_no_conflicting_pair_survives(
        state in state(),
        enabled in module_set(),
    ) {
        let catalog = Catalog::builtin();
        let layout = resolve_layout(catalog, state, &enabled, None, None);
        let placed: Vec<ModuleId> = layout.modules().collect();

        for a in &placed {
            for b in &placed {
                prop_assert!(!catalog.get(*a).unwrap().conflicts_with(*b), "{} vs {}", a, b);
            }
        }
    }

    /// PROPERTY: slots are ordered by priority descending, then id ascending.
    #[test]
    fn property_slot_order(
        state in state(),
        enabled in module_set(),
    ) {
        let catalog = Catalog::builtin();
        let layout = resolve_layout(catalog, state, &enabled, None, None);

        for slot in CanvasSlot::ALL {
            let keys: Vec<(std::cmp::Reverse<u16>, ModuleId)> = layout
                .slot(slot)
                .iter()
                .map(|id| (std::cmp::Reverse(catalog.get(*id).unwrap().priority), *id))
                .collect();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(keys, sorted);
        }
    }

    /// PROPERTY: resolving twice gives the same layout.
    #[test]
    fn property_resolution_is_deterministic(
        state in state(),
        template_id in template(),
        enabled in prop::collection::vec(prop::sample::select(ModuleId::ALL.to_vec()), 0..6),
        org_disabled in prop::collection::vec(prop::sample::select(ModuleId::ALL.to_vec()), 0..4),
    ) {
        let tech = TechCanvasConfig::new(template_id).with_enabled(enabled);
        let org = CanvasLocks::default().with_force_disabled(org_disabled);
        let catalog = Catalog::builtin();

        let first = resolve_canvas(catalog, state, &tech, Some(&org), None);
        let second = resolve_canvas(catalog, state, &tech, Some(&org), None);
        prop_assert_eq!(&first, &second);

        let effective = resolve_effective_config(&tech, Some(&org), None);
        let direct = resolve_layout(
            catalog,
            state,
            &effective.enabled_modules,
            Some(&effective.blocked_modules),
            Some(template_id),
        );
        prop_assert_eq!(first, direct);
    }
}
