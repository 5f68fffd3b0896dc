use anyhow::Result;
use slotwise::Template;

pub fn cmd_templates(json: bool) -> Result<()> {
    if json {
        let mut out = std::io::stdout().lock();
        for template in Template::all() {
            crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "template",
                    "command": "templates",
                    "template": template,
                }),
            )?;
        }
        return Ok(());
    }

    print!("{}", crate::ui::views::templates::render_templates(Template::all()));
    Ok(())
}
