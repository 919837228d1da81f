use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One picked product line. Only rows with a barcode and a positive
/// quantity become a `LineItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub barcode: String,
    pub name: String,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn empty(order_id: impl Into<String>) -> Self {
        Order {
            order_id: order_id.into(),
            items: Vec::new(),
        }
    }

    /// Sum of all item quantities.
    pub fn total_qty(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.qty)).sum()
    }
}

/// The file handed to the picking app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersFile {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub orders: Vec<Order>,
}

impl OrdersFile {
    /// Indented JSON with non-ASCII text left unescaped.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Result of converting one document: the output file plus every soft
/// anomaly met on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub file: OrdersFile,
    pub warnings: Vec<String>,
}

impl Conversion {
    pub fn item_count(&self) -> usize {
        self.file.orders.iter().map(|o| o.items.len()).sum()
    }
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
