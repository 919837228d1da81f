use serde::{Deserialize, Serialize};

/// Language-specific labels used to recognize an order document.
///
/// Header labels are matched exactly against trimmed header cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Label preceding the shipment order number in paragraph text.
    pub order_label: String,
    pub name_header: String,
    pub qty_header: String,
    /// Preferred barcode column.
    pub barcode_header: String,
    /// Used when `barcode_header` is missing from a table.
    #[serde(default)]
    pub linked_code_header: Option<String>,
    /// Rows whose name contains any of these are summary rows.
    #[serde(default)]
    pub summary_markers: Vec<String>,
    pub placeholder_name: String,
    pub unknown_order_id: String,
}
