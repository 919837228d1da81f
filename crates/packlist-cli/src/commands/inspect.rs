use packlist_core::error::PacklistError;
use packlist_core::extraction::docx::DocxLoader;
use packlist_core::extraction::DocumentLoader;
use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf) -> Result<(), PacklistError> {
    let bytes = std::fs::read(&input_file)?;
    let doc = DocxLoader::new().load(&bytes)?;
    output::table::print_document(&doc);
    Ok(())
}
