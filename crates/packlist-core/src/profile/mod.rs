pub mod builtin;
pub mod schema;

use crate::error::PacklistError;
use schema::Profile;
use std::path::Path;

/// Load a profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<Profile, PacklistError> {
    let content = std::fs::read_to_string(path).map_err(|e| PacklistError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<Profile, PacklistError> {
    let profile: Profile = serde_json::from_str(json).map_err(|e| PacklistError::ProfileLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<Profile, PacklistError> {
    let profile: Profile = serde_json::from_str(json).map_err(PacklistError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile can drive extraction.
pub fn validate_profile(profile: &Profile) -> Result<(), PacklistError> {
    let required = [
        ("order_label", &profile.order_label),
        ("name_header", &profile.name_header),
        ("qty_header", &profile.qty_header),
        ("barcode_header", &profile.barcode_header),
        ("placeholder_name", &profile.placeholder_name),
        ("unknown_order_id", &profile.unknown_order_id),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(PacklistError::ProfileInvalid(format!(
                "{field} must not be empty"
            )));
        }
    }

    let mut headers = vec![
        profile.name_header.trim(),
        profile.qty_header.trim(),
        profile.barcode_header.trim(),
    ];
    if let Some(ref linked) = profile.linked_code_header {
        if linked.trim().is_empty() {
            return Err(PacklistError::ProfileInvalid(
                "linked_code_header must not be empty when set".into(),
            ));
        }
        headers.push(linked.trim());
    }
    for (i, h) in headers.iter().enumerate() {
        if headers[..i].contains(h) {
            return Err(PacklistError::ProfileInvalid(format!(
                "header label '{h}' is used for more than one column"
            )));
        }
    }

    if profile.summary_markers.iter().any(|m| m.is_empty()) {
        return Err(PacklistError::ProfileInvalid(
            "summary markers must not be empty strings".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "name": "Test",
        "version": "1.0",
        "order_label": "Order No",
        "name_header": "Product",
        "qty_header": "Qty",
        "barcode_header": "Barcode",
        "linked_code_header": "Linked code",
        "summary_markers": ["Total"],
        "placeholder_name": "(no name)",
        "unknown_order_id": "UNKNOWN"
    }"#;

    #[test]
    fn test_parse_valid_profile() {
        let p = parse_profile_str(VALID).unwrap();
        assert_eq!(p.name, "Test");
        assert_eq!(p.summary_markers, vec!["Total"]);
        assert!(p.description.is_none());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "name": "Min",
            "version": "1.0",
            "order_label": "Order No",
            "name_header": "Product",
            "qty_header": "Qty",
            "barcode_header": "Barcode",
            "placeholder_name": "-",
            "unknown_order_id": "UNKNOWN"
        }"#;
        let p = parse_profile_str(json).unwrap();
        assert!(p.linked_code_header.is_none());
        assert!(p.summary_markers.is_empty());
    }

    #[test]
    fn test_empty_label_rejected() {
        let json = VALID.replace(r#""order_label": "Order No""#, r#""order_label": " ""#);
        let err = parse_profile_str(&json).unwrap_err();
        assert!(matches!(err, PacklistError::ProfileInvalid(ref m) if m.contains("order_label")));
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let json = VALID.replace(r#""qty_header": "Qty""#, r#""qty_header": "Product""#);
        assert!(parse_profile_str(&json).is_err());
    }

    #[test]
    fn test_linked_code_same_as_barcode_rejected() {
        let json = VALID.replace(
            r#""linked_code_header": "Linked code""#,
            r#""linked_code_header": "Barcode""#,
        );
        assert!(parse_profile_str(&json).is_err());
    }

    #[test]
    fn test_empty_summary_marker_rejected() {
        let json = VALID.replace(r#"["Total"]"#, r#"["Total", ""]"#);
        assert!(parse_profile_str(&json).is_err());
    }

    #[test]
    fn test_load_profile_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, VALID).unwrap();
        let p = load_profile(&path).unwrap();
        assert_eq!(p.qty_header, "Qty");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, PacklistError::ProfileLoad { .. }));
    }
}
