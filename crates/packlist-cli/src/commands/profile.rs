use packlist_core::error::PacklistError;
use packlist_core::profile::schema::Profile;
use packlist_core::profile::{builtin, load_profile};
use std::path::Path;

/// The custom profile when a path is given, the builtin one otherwise.
pub fn resolve_profile(path: Option<&Path>) -> Result<Profile, PacklistError> {
    match path {
        Some(p) => load_profile(p),
        None => builtin::default_profile(),
    }
}

pub fn show(path: Option<&Path>) -> Result<(), PacklistError> {
    let profile = resolve_profile(path)?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub fn validate(path: &Path) -> Result<(), PacklistError> {
    let profile = load_profile(path)?;
    println!("Valid profile: {} (v{})", profile.name, profile.version);
    println!("  order label:  {}", profile.order_label);
    println!(
        "  headers:      {} / {} / {}",
        profile.name_header, profile.qty_header, profile.barcode_header
    );
    if let Some(ref linked) = profile.linked_code_header {
        println!("  fallback:     {linked}");
    }
    if !profile.summary_markers.is_empty() {
        println!("  summary rows: {}", profile.summary_markers.join(", "));
    }
    Ok(())
}
