use slotwise::{CatalogIssue, Severity};

use crate::ui::header::CommandHeader;

pub fn render_check_report(module_count: usize, issues: &[CatalogIssue]) -> String {
    let errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    let mut header = CommandHeader::new("Catalog Check");
    header.add("Modules", module_count.to_string());
    let mut out = header.render();
    out.push('\n');

    if issues.is_empty() {
        out.push_str("✓ catalog is consistent\n");
        return out;
    }

    for issue in issues {
        let tag = match issue.severity() {
            Severity::Error => "error",
            Severity::Warning => "warn ",
        };
        out.push_str(&format!("  {tag}  {issue}\n"));
    }
    out.push_str(&format!("\n{errors} error(s), {warnings} warning(s)\n"));
    out
}
