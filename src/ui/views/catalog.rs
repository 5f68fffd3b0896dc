use slotwise::{CanvasState, Catalog};

/// One row per module, ordered by id
pub fn render_catalog(catalog: &Catalog) -> String {
    let rows: Vec<[String; 6]> = catalog
        .iter()
        .map(|(id, meta)| {
            let states: Vec<&str> = meta.allowed_states.iter().map(CanvasState::as_str).collect();
            let mut notes = Vec::new();
            if !meta.conflicts_with.is_empty() {
                let names: Vec<&str> = meta.conflicts_with.iter().map(|m| m.as_str()).collect();
                notes.push(format!("conflicts: {}", names.join(",")));
            }
            if !meta.blocked_in_templates.is_empty() {
                let names: Vec<&str> = meta.blocked_in_templates.iter().map(|t| t.as_str()).collect();
                notes.push(format!("blocked in: {}", names.join(",")));
            }
            [
                id.to_string(),
                meta.default_slot.to_string(),
                meta.priority.to_string(),
                format!("{}/{}", meta.tier.as_str(), meta.stress.as_str()),
                states.join(","),
                notes.join("; "),
            ]
        })
        .collect();

    let headers = ["MODULE", "SLOT", "PRIORITY", "TIER", "STATES", "NOTES"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!("\n{} modules\n", rows.len()));
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
