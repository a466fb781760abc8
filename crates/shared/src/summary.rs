use std::collections::BTreeMap;

use crate::omnivore::SavedItem;

/// Aggregate counts over a library: archive state, page types, labels.
#[derive(Debug, Default)]
pub struct LibrarySummary {
    pub inbox: usize,
    pub archived: usize,
    pub page_types: BTreeMap<String, usize>,
    pub labels: BTreeMap<String, usize>,
}

impl LibrarySummary {
    /// Tally every item in one pass. An item counts toward exactly one of
    /// inbox/archive, toward its page type if it has a non-empty one, and
    /// toward each label attached to it.
    pub fn from_items(items: &[SavedItem]) -> Self {
        let mut summary = Self::default();

        for item in items {
            if item.is_archived {
                summary.archived += 1;
            } else {
                summary.inbox += 1;
            }

            if let Some(page_type) = item.page_type.as_deref() {
                if !page_type.is_empty() {
                    *summary.page_types.entry(capitalize(page_type)).or_insert(0) += 1;
                }
            }

            for label in item.labels.iter().flatten() {
                *summary.labels.entry(label.name.clone()).or_insert(0) += 1;
            }
        }

        summary
    }

    /// Render the full report as text. The caller decides where it goes;
    /// nothing here touches stdout.
    pub fn render(&self, width: usize) -> String {
        let mut out = String::new();

        out.push('\n');
        out.push_str(&format!("* Inbox: {}\n", self.inbox));
        out.push_str(&format!("* Archive: {}\n", self.archived));
        out.push('\n');
        out.push_str("* Page types:\n");
        out.push_str(&render_table(&self.page_types, width));
        out.push('\n');
        out.push_str("* Labels:\n");
        out.push_str(&render_table(&self.labels, width));
        out.push('\n');

        out
    }
}

/// First character uppercased, the rest lowercased ("PDF" becomes "Pdf").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Lay out "key: value" pairs in as many columns as fit within `width`
/// characters, in lexicographic key order. Keys are left-aligned and values
/// right-aligned to the widest entry, pairs within a row are joined with
/// " | ". An empty mapping renders as "(none)" instead of a table.
pub fn render_table(counts: &BTreeMap<String, usize>, width: usize) -> String {
    if counts.is_empty() {
        return String::from("(none)\n");
    }

    let max_key_len = counts.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let max_val_len = counts
        .values()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(0);

    // Each cell costs "key: value" plus the " | " separator. Always at
    // least one column, even when a single cell overflows the width.
    let cols = (width / (max_key_len + max_val_len + 5)).max(1);

    let mut out = String::new();
    let mut row: Vec<String> = Vec::new();
    for (key, val) in counts {
        row.push(format!(
            "{:<key_width$}: {:>val_width$}",
            key,
            val,
            key_width = max_key_len,
            val_width = max_val_len
        ));
        if row.len() >= cols {
            out.push_str(&row.join(" | "));
            out.push('\n');
            row.clear();
        }
    }
    if !row.is_empty() {
        out.push_str(&row.join(" | "));
        out.push('\n');
    }

    out
}
