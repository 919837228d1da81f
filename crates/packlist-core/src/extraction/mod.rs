pub mod docx;

use crate::error::PacklistError;
use serde::Serialize;

/// A body-level paragraph of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Paragraph { text: text.into() }
    }
}

/// A top-level table. Row 0 is the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Table { rows }
    }

    /// Build a table from string slices, mostly for tests.
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Table {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Paragraphs and tables of a loaded document, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
    pub tables: Vec<Table>,
}

/// Trait for document loading backends.
pub trait DocumentLoader: Send + Sync {
    /// Turn raw file bytes into a `Document`.
    fn load(&self, bytes: &[u8]) -> Result<Document, PacklistError>;

    /// Name of this loading backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
