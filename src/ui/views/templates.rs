use slotwise::{ModuleId, Template, TemplateId};

pub fn render_templates<'a>(templates: impl IntoIterator<Item = &'a Template>) -> String {
    let mut out = String::new();
    for template in templates {
        let marker = if template.id == TemplateId::default() {
            " (default)"
        } else {
            ""
        };
        out.push_str(&format!("{}{marker}\n", template.id));
        out.push_str(&format!("  {}: {}\n", template.label, template.description));
        out.push_str(&format!("  enabled: {}\n", join(template.default_enabled)));
        if !template.default_blocked.is_empty() {
            out.push_str(&format!("  blocked: {}\n", join(template.default_blocked)));
        }
    }
    out
}

fn join(ids: &[ModuleId]) -> String {
    let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    names.join(", ")
}
