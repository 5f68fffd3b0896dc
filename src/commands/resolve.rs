use std::path::Path;

use anyhow::{Context, Result};
use slotwise::config::{self, parse_module_list};
use slotwise::{explain_layout, CanvasConfig, CanvasState, Catalog, TemplateId};

use crate::ui::views::layout::LayoutView;

/// Operator-level overrides given on the command line
#[derive(Debug, Default)]
pub struct ResolveOverrides {
    pub template: Option<TemplateId>,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
}

impl ResolveOverrides {
    /// Flags win over both the file and `SLOTWISE_*`
    fn apply(&self, mut config: CanvasConfig) -> CanvasConfig {
        if let Some(template) = self.template {
            config.tech.template_id = template;
        }
        for entry in &self.enable {
            config.tech.enabled_overrides.extend(parse_module_list(entry));
        }
        for entry in &self.disable {
            config.tech.disabled_overrides.extend(parse_module_list(entry));
        }
        config
    }
}

pub fn cmd_resolve(
    state: CanvasState,
    config_path: Option<&Path>,
    overrides: &ResolveOverrides,
    explain: bool,
    json: bool,
) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot read current directory")?;
    let loaded = config::discover(config_path, &cwd)?;
    for warning in &loaded.warnings {
        eprintln!("warning: {warning}");
    }

    let config = overrides.apply(loaded.config.with_env_overrides()?);
    // File typos were already reported with a line number
    for unknown in config.unknown_modules() {
        if !loaded.warnings.iter().any(|w| w.key == unknown.as_str()) {
            tracing::warn!(module = %unknown, "ignoring unknown module");
        }
    }

    let effective = config.effective();
    let catalog = Catalog::builtin();
    let explanation = explain_layout(
        catalog,
        state,
        &effective.enabled_modules,
        Some(&effective.blocked_modules),
        Some(effective.template_id),
    )
    .with_merge_exclusions(&effective);

    if json {
        let mut event = serde_json::json!({
            "event": "layout",
            "command": "resolve",
            "state": state,
            "template": effective.template_id,
            "config": loaded.source.as_ref().map(|p| p.display().to_string()),
            "layout": explanation.layout,
        });
        if explain {
            event["exclusions"] = serde_json::to_value(&explanation.exclusions)?;
            event["decisions"] = serde_json::to_value(&effective.decisions)?;
        }
        crate::ui::json::emit(event)?;
        return Ok(());
    }

    print!(
        "{}",
        LayoutView::new(&explanation, effective.template_id, catalog)
            .with_config_source(loaded.source.as_deref())
            .with_exclusions(explain)
            .render()
    );
    Ok(())
}
