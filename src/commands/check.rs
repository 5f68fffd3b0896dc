use anyhow::Result;
use slotwise::{audit_catalog, Catalog, Severity};

pub fn cmd_check(json: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let issues = audit_catalog(catalog);
    let errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    if json {
        let mut out = std::io::stdout().lock();
        for issue in &issues {
            crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "issue",
                    "command": "check",
                    "severity": issue.severity(),
                    "message": issue.to_string(),
                    "issue": issue,
                }),
            )?;
        }
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "modules": catalog.len(),
                "errors": errors,
                "warnings": issues.len() - errors,
                "success": errors == 0,
            }),
        )?;
    } else {
        print!(
            "{}",
            crate::ui::views::check::render_check_report(catalog.len(), &issues)
        );
    }

    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
