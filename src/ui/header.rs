/// Title line followed by `label: value` rows
#[derive(Debug, Clone)]
pub struct CommandHeader {
    title: String,
    items: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self) -> String {
        let width = self.items.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let mut out = format!("{}\n", self.title);
        for (label, value) in &self.items {
            out.push_str(&format!("  {:<width$}  {}\n", format!("{label}:"), value, width = width + 1));
        }
        out
    }
}
