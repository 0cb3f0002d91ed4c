//! Fixed-width text report of a snapshot.

use unicode_width::UnicodeWidthStr;

use crate::snapshot::Snapshot;

/// Spaces between the widest name and the price column.
const COLUMN_GUTTER: usize = 2;

/// Renders one line per item: name, padding to a shared price column,
/// `￥` + price, then `至` + availability end.
///
/// Padding is computed from display width, not character count, so names
/// mixing CJK (width 2) and ASCII (width 1) glyphs still align. Rows come
/// out in name order. An empty snapshot renders the empty string.
#[must_use]
pub fn render(snapshot: &Snapshot) -> String {
    let cell_width = snapshot
        .keys()
        .map(|name| UnicodeWidthStr::width(name.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (name, detail) in snapshot {
        let padding = cell_width + COLUMN_GUTTER - UnicodeWidthStr::width(name.as_str());
        out.push_str(name);
        out.push_str(&" ".repeat(padding));
        out.push_str(&format!("￥{}  至{}\n", detail.price, detail.ends));
    }
    out
}
