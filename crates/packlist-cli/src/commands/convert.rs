use packlist_core::error::PacklistError;
use packlist_core::{ConvertOptions, MissingOrderIdPolicy};
use std::path::{Path, PathBuf};

use crate::commands::profile::resolve_profile;
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    date: Option<&str>,
    strict: bool,
    profile_path: Option<&Path>,
) -> Result<(), PacklistError> {
    let options = ConvertOptions {
        profile: resolve_profile(profile_path)?,
        date: date.map(packlist_core::parse_date).transpose()?,
        missing_order_id: if strict {
            MissingOrderIdPolicy::Fail
        } else {
            MissingOrderIdPolicy::Sentinel
        },
    };

    log::debug!("using profile '{}'", options.profile.name);
    let bytes = std::fs::read(&input_file)?;
    let conversion = packlist_core::convert_docx(&bytes, &options)?;

    match output_file {
        Some(path) => {
            // Serialize fully before touching the file
            let json = conversion.file.to_json_pretty()?;
            std::fs::write(&path, json)?;
            eprintln!("Converted {}, written to {}", input_file.display(), path.display());
            for order in &conversion.file.orders {
                eprintln!("  {}: {} item(s)", order.order_id, order.items.len());
            }
            output::table::print_warnings(&conversion.warnings);
        }
        None => match output_format {
            "json" => output::json::print_conversion(&conversion)?,
            _ => output::table::print(&conversion),
        },
    }

    Ok(())
}
