//! Input normalization for keyword and regex scanning.

/// Case-fold and trim an utterance. All keyword/regex scanning runs over this
/// copy; callers keep the original text for the draft's `description`.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_case_and_trims() {
        assert_eq!(normalize("  Gastei 20 no Supermercado  "), "gastei 20 no supermercado");
    }

    #[test]
    fn test_normalize_keeps_accents() {
        assert_eq!(normalize("CAFÉ"), "café");
    }
}
