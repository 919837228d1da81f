use crate::extraction::Table;
use crate::model::LineItem;
use crate::parsing::values::{norm, parse_quantity};
use crate::profile::schema::Profile;

/// Column positions resolved from a table's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub name: usize,
    pub qty: usize,
    pub barcode: Option<usize>,
    /// True when `barcode` points at the linked-code column.
    pub barcode_fallback: bool,
}

impl Columns {
    /// Highest column index a data row must reach.
    fn max_index(&self) -> usize {
        self.name.max(self.qty).max(self.barcode.unwrap_or(0))
    }
}

/// Items and warnings extracted from one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableItems {
    /// False when the header row lacks the name or quantity column.
    pub recognized: bool,
    pub items: Vec<LineItem>,
    pub warnings: Vec<String>,
}

/// Locate the required columns in a header row.
///
/// Returns None unless both the product-name and quantity headers are
/// present. Matching is exact on trimmed cells; the first occurrence wins.
pub fn resolve_columns(header: &[String], profile: &Profile) -> Option<Columns> {
    let position = |label: &str| header.iter().position(|h| norm(h) == label.trim());

    let name = position(&profile.name_header)?;
    let qty = position(&profile.qty_header)?;

    let primary = position(&profile.barcode_header);
    let fallback = match primary {
        Some(_) => None,
        None => profile.linked_code_header.as_deref().and_then(position),
    };

    Some(Columns {
        name,
        qty,
        barcode: primary.or(fallback),
        barcode_fallback: fallback.is_some(),
    })
}

/// Extract validated line items from one table.
///
/// Unrecognized tables yield nothing and no warnings. Data rows are
/// dropped when they are short or summary rows (silently), without a
/// positive quantity (warning) or without a barcode (warning). A fully
/// blank row has no quantity, so it warns too.
pub fn parse_table(table: &Table, profile: &Profile) -> TableItems {
    let Some(header) = table.header() else {
        return TableItems::default();
    };
    let Some(columns) = resolve_columns(header, profile) else {
        log::debug!(
            "skipping table without '{}'/'{}' headers",
            profile.name_header,
            profile.qty_header
        );
        return TableItems::default();
    };

    let mut result = TableItems {
        recognized: true,
        ..Default::default()
    };

    if columns.barcode_fallback {
        result.warnings.push(format!(
            "'{}' column not found, using '{}' as barcode",
            profile.barcode_header,
            profile.linked_code_header.as_deref().unwrap_or_default()
        ));
    } else if columns.barcode.is_none() {
        log::debug!("table has no barcode column; every row will be dropped");
    }

    for (i, cells) in table.data_rows().iter().enumerate() {
        // 1-based, counting the header row
        let row_number = i + 2;

        if cells.len() <= columns.max_index() {
            continue;
        }

        let name = norm(&cells[columns.name]);
        let qty_raw = norm(&cells[columns.qty]);
        let barcode = columns.barcode.map(|idx| norm(&cells[idx])).unwrap_or("");

        if profile.summary_markers.iter().any(|m| name.contains(m.as_str())) {
            continue;
        }

        let display_name = if name.is_empty() {
            profile.placeholder_name.as_str()
        } else {
            name
        };

        let qty = parse_quantity(qty_raw);
        if qty == 0 {
            result.warnings.push(format!(
                "row {row_number} ({display_name}): invalid quantity '{qty_raw}', skipped"
            ));
            continue;
        }

        if barcode.is_empty() {
            result.warnings.push(format!(
                "row {row_number} ({display_name}): missing barcode, skipped"
            ));
            continue;
        }

        result.items.push(LineItem {
            barcode: barcode.to_string(),
            name: display_name.to_string(),
            qty,
        });
    }

    result
}
