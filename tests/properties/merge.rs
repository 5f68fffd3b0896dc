//! Property tests for override merging.

use proptest::prelude::*;

use slotwise::{
    resolve_effective_config, CanvasLocks, ModuleId, ModuleRef, Template, TechCanvasConfig,
    TemplateId,
};

fn template() -> impl Strategy<Value = TemplateId> {
    prop::sample::select(TemplateId::ALL.to_vec())
}

fn module_set() -> impl Strategy<Value = Vec<ModuleId>> {
    prop::collection::vec(prop::sample::select(ModuleId::ALL.to_vec()), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: anything the org force-disables is blocked, whatever the operator asked for.
    #[test]
    fn property_org_disable_always_blocks(
        template_id in template(),
        enabled in module_set(),
        org_disabled in module_set(),
    ) {
        let tech = TechCanvasConfig::new(template_id).with_enabled(enabled);
        let org = CanvasLocks::default().with_force_disabled(org_disabled.clone());

        let effective = resolve_effective_config(&tech, Some(&org), None);

        for id in org_disabled {
            prop_assert!(effective.is_blocked(id));
            prop_assert!(!effective.is_enabled(id));
        }
    }

    /// PROPERTY: platform force-enable puts a module back in the enabled set.
    #[test]
    fn property_platform_enable_wins_enabled_set(
        template_id in template(),
        disabled in module_set(),
        org_disabled in module_set(),
        platform_enabled in module_set(),
    ) {
        let tech = TechCanvasConfig::new(template_id).with_disabled(disabled);
        let org = CanvasLocks::default().with_force_disabled(org_disabled);
        let platform = CanvasLocks::default().with_force_enabled(platform_enabled.clone());

        let effective = resolve_effective_config(&tech, Some(&org), Some(&platform));

        for id in platform_enabled {
            prop_assert!(effective.is_enabled(id));
        }
    }

    /// PROPERTY: blocks never shrink; template blocks survive every layer.
    #[test]
    fn property_template_blocks_survive(
        template_id in template(),
        enabled in module_set(),
        platform_enabled in module_set(),
    ) {
        let tech = TechCanvasConfig::new(template_id).with_enabled(enabled);
        let platform = CanvasLocks::default().with_force_enabled(platform_enabled);

        let effective = resolve_effective_config(&tech, None, Some(&platform));

        for id in Template::get(template_id).default_blocked {
            prop_assert!(effective.blocked_modules.contains(&ModuleRef::Known(*id)));
        }
    }

    /// PROPERTY: the merge is a pure function of its inputs.
    #[test]
    fn property_merge_is_deterministic(
        template_id in template(),
        enabled in module_set(),
        disabled in module_set(),
        org_disabled in module_set(),
    ) {
        let tech = TechCanvasConfig::new(template_id)
            .with_enabled(enabled)
            .with_disabled(disabled);
        let org = CanvasLocks::default().with_force_disabled(org_disabled);

        let first = resolve_effective_config(&tech, Some(&org), None);
        let second = resolve_effective_config(&tech, Some(&org), None);

        prop_assert_eq!(first, second);
    }
}
