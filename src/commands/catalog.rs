use anyhow::Result;
use slotwise::Catalog;

pub fn cmd_catalog(json: bool) -> Result<()> {
    let catalog = Catalog::builtin();

    if json {
        let mut out = std::io::stdout().lock();
        for (id, meta) in catalog.iter() {
            crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "module",
                    "command": "catalog",
                    "id": id,
                    "meta": meta,
                }),
            )?;
        }
        return Ok(());
    }

    print!("{}", crate::ui::views::catalog::render_catalog(catalog));
    Ok(())
}
