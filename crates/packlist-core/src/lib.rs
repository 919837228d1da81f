pub mod assemble;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profile;

use chrono::NaiveDate;

use assemble::assemble_orders;
use error::PacklistError;
use extraction::docx::DocxLoader;
use extraction::{Document, DocumentLoader};
use model::{Conversion, OrdersFile};
use parsing::identifier::extract_order_ids;
use profile::schema::Profile;

/// File name the picking app expects.
pub const DEFAULT_OUTPUT_FILE: &str = "orders.json";

/// What to do when a document contains no shipment order number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingOrderIdPolicy {
    /// Use the profile's sentinel id and record a warning.
    #[default]
    Sentinel,
    /// Fail the whole conversion.
    Fail,
}

/// Options for a single conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub profile: Profile,
    /// Date written to the output; `None` means today (local time).
    pub date: Option<NaiveDate>,
    pub missing_order_id: MissingOrderIdPolicy,
}

impl ConvertOptions {
    /// Options using the builtin profile.
    pub fn with_default_profile() -> Result<Self, PacklistError> {
        Ok(ConvertOptions {
            profile: profile::builtin::default_profile()?,
            date: None,
            missing_order_id: MissingOrderIdPolicy::default(),
        })
    }
}

/// Parse a `YYYY-MM-DD` date, as written to the output file.
pub fn parse_date(s: &str) -> Result<NaiveDate, PacklistError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| PacklistError::InvalidDate(s.to_string()))
}

/// Main API entry point: convert the bytes of a .docx order document.
pub fn convert_docx(bytes: &[u8], options: &ConvertOptions) -> Result<Conversion, PacklistError> {
    convert_with(bytes, &DocxLoader::new(), options)
}

/// Convert using any document loading backend.
pub fn convert_with(
    bytes: &[u8],
    loader: &dyn DocumentLoader,
    options: &ConvertOptions,
) -> Result<Conversion, PacklistError> {
    let doc = loader.load(bytes)?;
    log::debug!("document loaded with '{}' backend", loader.backend_name());
    convert_document(&doc, options)
}

/// Convert an already loaded document.
///
/// Only the missing-order-id policy can make this fail; every other
/// anomaly ends up in `Conversion::warnings`.
pub fn convert_document(
    doc: &Document,
    options: &ConvertOptions,
) -> Result<Conversion, PacklistError> {
    let profile = &options.profile;
    let mut warnings = Vec::new();

    let mut order_ids = extract_order_ids(&doc.paragraphs, profile);
    log::info!("found {} shipment order number(s)", order_ids.len());

    if order_ids.is_empty() {
        match options.missing_order_id {
            MissingOrderIdPolicy::Fail => {
                return Err(PacklistError::MissingOrderId {
                    label: profile.order_label.clone(),
                });
            }
            MissingOrderIdPolicy::Sentinel => {
                warnings.push(format!(
                    "no shipment order number found (label '{}'), using '{}'",
                    profile.order_label, profile.unknown_order_id
                ));
                order_ids.push(profile.unknown_order_id.clone());
            }
        }
    }

    let assembled = assemble_orders(&order_ids, &doc.tables, profile);
    warnings.extend(assembled.warnings);

    for w in &warnings {
        log::warn!("{w}");
    }

    let date = options
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let conversion = Conversion {
        file: OrdersFile {
            date,
            orders: assembled.orders,
        },
        warnings,
    };
    log::info!(
        "assembled {} order(s) with {} item(s)",
        conversion.file.orders.len(),
        conversion.item_count()
    );

    Ok(conversion)
}
