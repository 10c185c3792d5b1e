//! Form-field validation shared by the admin editors.

/// Trims and checks a slug against the charset the server enforces.
///
/// # Errors
/// Returns the message the editor shows under the field.
pub fn normalize_slug(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Slug is required".to_string());
    }
    let valid = trimmed
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
    if !valid {
        return Err("Slug may only use lowercase letters, digits and hyphens".to_string());
    }
    if trimmed.starts_with('-') || trimmed.ends_with('-') {
        return Err("Slug may not start or end with a hyphen".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_lowercase_digits_and_hyphens() {
        assert_eq!(normalize_slug(" kafi-2 "), Ok("kafi-2".to_string()));
    }

    #[test]
    fn slug_rejects_empty_uppercase_and_edge_hyphens() {
        assert!(normalize_slug("   ").is_err());
        assert!(normalize_slug("Kafi").is_err());
        assert!(normalize_slug("سنڌي").is_err());
        assert!(normalize_slug("-kafi").is_err());
        assert!(normalize_slug("kafi-").is_err());
    }
}
