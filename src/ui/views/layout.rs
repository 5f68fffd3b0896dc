use std::path::Path;

use slotwise::{render_layout, Catalog, LayoutExplanation, ModuleId, ModuleRenderer, TemplateId};

use crate::ui::header::CommandHeader;

/// Renders a module as `name (priority)`
pub struct TextModuleRenderer<'a> {
    catalog: &'a Catalog,
}

impl<'a> TextModuleRenderer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl ModuleRenderer for TextModuleRenderer<'_> {
    type Unit = String;

    fn render(&self, module: ModuleId) -> Option<String> {
        // Fallback layouts can name modules the catalog has lost
        Some(match self.catalog.get(module) {
            Some(meta) => format!("{module} ({})", meta.priority),
            None => module.to_string(),
        })
    }
}

pub struct LayoutView<'a> {
    explanation: &'a LayoutExplanation,
    template: TemplateId,
    catalog: &'a Catalog,
    config_source: Option<&'a Path>,
    show_exclusions: bool,
}

impl<'a> LayoutView<'a> {
    pub fn new(
        explanation: &'a LayoutExplanation,
        template: TemplateId,
        catalog: &'a Catalog,
    ) -> Self {
        Self {
            explanation,
            template,
            catalog,
            config_source: None,
            show_exclusions: false,
        }
    }

    pub fn with_config_source(mut self, source: Option<&'a Path>) -> Self {
        self.config_source = source;
        self
    }

    pub fn with_exclusions(mut self, show: bool) -> Self {
        self.show_exclusions = show;
        self
    }

    pub fn render(&self) -> String {
        let layout = &self.explanation.layout;

        let mut header = CommandHeader::new("Canvas Layout");
        header.add("State", self.explanation.state.to_string());
        header.add("Template", self.template.to_string());
        header.add(
            "Config",
            self.config_source
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in defaults".to_string()),
        );
        header.add(
            "Source",
            if layout.is_fallback() {
                "fallback"
            } else {
                "catalog"
            },
        );

        let mut out = header.render();
        out.push('\n');

        if layout.is_fallback() {
            out.push_str("! no protected module in catalog, showing fallback layout\n\n");
        }

        let renderer = TextModuleRenderer::new(self.catalog);
        for rendered in render_layout(layout, &renderer) {
            out.push_str(&format!("{}\n", rendered.slot));
            for unit in rendered.units {
                out.push_str(&format!("  - {unit}\n"));
            }
        }

        if self.show_exclusions {
            out.push_str("\nExcluded\n");
            if self.explanation.exclusions.is_empty() {
                out.push_str("  (none)\n");
            }
            for exclusion in &self.explanation.exclusions {
                out.push_str(&format!("  - {}: {}\n", exclusion.module, exclusion.reason));
            }
        }

        out
    }
}
