use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::PacklistError;
use crate::extraction::{Document, DocumentLoader, Paragraph, Table};

const DOCUMENT_PART: &str = "word/document.xml";

/// Loader for Office Open XML word-processing files (.docx).
///
/// Reads `word/document.xml` from the ZIP container and collects body
/// paragraphs and top-level tables. Headers, footers, text boxes and
/// deleted text are ignored.
pub struct DocxLoader;

impl DocxLoader {
    pub fn new() -> Self {
        DocxLoader
    }
}

impl Default for DocxLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLoader for DocxLoader {
    fn load(&self, bytes: &[u8]) -> Result<Document, PacklistError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| PacklistError::Document(format!("not a DOCX (ZIP) container: {e}")))?;

        let mut xml = Vec::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| PacklistError::Document(format!("{DOCUMENT_PART} not found: {e}")))?
            .read_to_end(&mut xml)
            .map_err(|e| PacklistError::Document(format!("failed to read {DOCUMENT_PART}: {e}")))?;

        let doc = parse_document_xml(&xml)?;
        log::debug!(
            "loaded {} paragraph(s) and {} table(s) from {DOCUMENT_PART}",
            doc.paragraphs.len(),
            doc.tables.len()
        );
        Ok(doc)
    }

    fn backend_name(&self) -> &str {
        "docx"
    }
}

/// A top-level table cell under construction.
#[derive(Debug, Default)]
struct CellBuilder {
    paragraphs: Vec<String>,
    grid_span: usize,
    v_merge_continue: bool,
}

/// Event-driven walker over `word/document.xml`.
///
/// Nested tables are flattened into the text of the enclosing top-level
/// cell. `gridSpan` cells are repeated once per grid column and `vMerge`
/// continuation cells take the text of the cell above, so column indices
/// taken from the header row stay valid for every data row.
#[derive(Debug, Default)]
struct BodyWalker {
    doc: Document,
    in_body: bool,
    textbox_depth: usize,
    table_depth: usize,
    run_depth: usize,
    in_text: bool,
    paragraphs: Vec<String>,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    prev_row: Vec<String>,
    cell: Option<CellBuilder>,
}

impl BodyWalker {
    fn active(&self) -> bool {
        self.in_body && self.textbox_depth == 0
    }

    fn start(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"body" => self.in_body = true,
            b"txbxContent" => self.textbox_depth += 1,
            _ if !self.active() => {}
            b"tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.rows.clear();
                    self.prev_row.clear();
                }
            }
            b"tr" if self.table_depth == 1 => self.row.clear(),
            b"tc" if self.table_depth == 1 => self.cell = Some(CellBuilder::default()),
            b"p" => self.paragraphs.push(String::new()),
            b"r" => self.run_depth += 1,
            b"t" if self.run_depth > 0 => self.in_text = true,
            _ => self.empty(e),
        }
    }

    fn empty(&mut self, e: &BytesStart<'_>) {
        if !self.active() {
            return;
        }
        match e.local_name().as_ref() {
            b"p" => {
                self.paragraphs.push(String::new());
                self.end_paragraph();
            }
            b"tab" if self.run_depth > 0 => self.push_text("\t"),
            b"cr" if self.run_depth > 0 => self.push_text("\n"),
            b"br" if self.run_depth > 0 => {
                if get_attr(e, b"type").as_deref() != Some("page") {
                    self.push_text("\n");
                }
            }
            b"gridSpan" if self.table_depth == 1 => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.grid_span = get_attr(e, b"val")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(1);
                }
            }
            b"vMerge" if self.table_depth == 1 => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.v_merge_continue = get_attr(e, b"val").as_deref() != Some("restart");
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, local_name: &[u8]) {
        match local_name {
            b"body" => self.in_body = false,
            b"txbxContent" => self.textbox_depth = self.textbox_depth.saturating_sub(1),
            _ if !self.active() => {}
            b"tbl" => {
                if self.table_depth == 1 {
                    let rows = std::mem::take(&mut self.rows);
                    self.doc.tables.push(Table::new(rows));
                }
                self.table_depth = self.table_depth.saturating_sub(1);
            }
            b"tr" if self.table_depth == 1 => {
                let row = std::mem::take(&mut self.row);
                self.prev_row = row.clone();
                self.rows.push(row);
            }
            b"tc" if self.table_depth == 1 => self.end_cell(),
            b"p" => self.end_paragraph(),
            b"r" => self.run_depth = self.run_depth.saturating_sub(1),
            b"t" => self.in_text = false,
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.active() && self.in_text {
            self.push_text(text);
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(current) = self.paragraphs.last_mut() {
            current.push_str(text);
        }
    }

    fn end_paragraph(&mut self) {
        let Some(text) = self.paragraphs.pop() else {
            return;
        };
        if self.table_depth == 0 {
            self.doc.paragraphs.push(Paragraph::new(text));
        } else if let Some(cell) = self.cell.as_mut() {
            cell.paragraphs.push(text);
        }
    }

    fn end_cell(&mut self) {
        let Some(cell) = self.cell.take() else {
            return;
        };
        let column = self.row.len();
        let text = if cell.v_merge_continue {
            self.prev_row
                .get(column)
                .cloned()
                .unwrap_or_else(|| cell.paragraphs.join("\n"))
        } else {
            cell.paragraphs.join("\n")
        };
        for _ in 0..cell.grid_span.max(1) {
            self.row.push(text.clone());
        }
    }
}

/// Parse the main document part into paragraphs and tables.
pub fn parse_document_xml(xml: &[u8]) -> Result<Document, PacklistError> {
    let mut reader = Reader::from_reader(xml);
    let mut walker = BodyWalker::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => walker.start(&e),
            Ok(Event::Empty(e)) => walker.empty(&e),
            Ok(Event::End(e)) => walker.end(e.local_name().as_ref()),
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|err| {
                    PacklistError::Document(format!("bad text in {DOCUMENT_PART}: {err}"))
                })?;
                walker.text(&text);
            }
            Ok(Event::CData(e)) => {
                let raw = e.into_inner();
                walker.text(&String::from_utf8_lossy(&raw));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(PacklistError::Document(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
        buf.clear();
    }

    Ok(walker.doc)
}

/// Look up an attribute by local name, ignoring the namespace prefix.
fn get_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}
