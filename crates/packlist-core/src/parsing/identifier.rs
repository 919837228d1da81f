use crate::extraction::Paragraph;
use crate::profile::schema::Profile;

/// Find every shipment order number in the paragraphs, in document order.
///
/// Consecutive identical matches are collapsed into one (a number repeated
/// on the next line is the same shipment), repeats further apart are kept.
pub fn extract_order_ids(paragraphs: &[Paragraph], profile: &Profile) -> Vec<String> {
    let label = profile.order_label.trim();
    let mut ids: Vec<String> = Vec::new();

    for paragraph in paragraphs {
        for token in tokens_after_label(&paragraph.text, label) {
            if ids.last().map(String::as_str) == Some(token) {
                continue;
            }
            ids.push(token.to_string());
        }
    }

    ids
}

/// Extract every token appearing after `label` in `text`.
///
/// Handles "Label: TOKEN", "Label TOKEN" and "LabelTOKEN". A token is a run
/// of ASCII letters, digits and hyphens; a label followed by anything else
/// yields nothing for that occurrence.
fn tokens_after_label<'a>(text: &'a str, label: &str) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    if label.is_empty() {
        return tokens;
    }

    let mut rest = text;
    while let Some(idx) = rest.find(label) {
        let after = &rest[idx + label.len()..];
        let value = after.trim_start_matches(|c: char| c == ':' || c.is_whitespace());
        let end = value
            .find(|c: char| !is_token_char(c))
            .unwrap_or(value.len());
        if end > 0 {
            tokens.push(&value[..end]);
            rest = &value[end..];
        } else {
            rest = after;
        }
    }

    tokens
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
