use crate::models::Sheet;
use crate::utils::formatting::rule;
use crate::utils::table::Table;

/// Width of the rule printed under the title.
pub const TITLE_RULE_WIDTH: usize = 100;

/// Render a loaded sheet as an aligned, pipe-separated table.
///
/// Column width is `max(header width, longest value width)`. Every row is
/// read through the sheet header, so all rows share the same columns.
pub fn render_sheet(title: &str, sheet: &Sheet) -> String {
    if sheet.is_empty() {
        return format!("{title}: No data");
    }

    let table = Table::fitted(sheet.headers(), sheet.rows());
    format!("\n{title}\n{}\n{}", rule(TITLE_RULE_WIDTH), table.render())
}
