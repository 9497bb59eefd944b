//! Validation of card texts before they are stored.

use crate::error::ValidationError;
use crate::matching::normalize;

/// Check that a card can be created from the given texts.
///
/// Both texts must be non-blank and must differ once normalized the same
/// way answers are graded.
pub fn validate_card(original: &str, translated: &str, deck_path: &str) -> Result<(), ValidationError> {
    let original = normalize(original);
    let translated = normalize(translated);

    if original.trim().is_empty() {
        return Err(ValidationError::EmptyOriginal);
    }
    if translated.trim().is_empty() {
        return Err(ValidationError::EmptyTranslation);
    }
    if original == translated {
        return Err(ValidationError::IdenticalTexts);
    }
    if deck_path.trim().is_empty() {
        return Err(ValidationError::MissingDeck);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_distinct_texts() {
        assert_eq!(validate_card("house", "casa", "spanish"), Ok(()));
    }

    #[test]
    fn rejects_blank_texts() {
        assert_eq!(validate_card("  ", "casa", "spanish"), Err(ValidationError::EmptyOriginal));
        assert_eq!(validate_card("house", "", "spanish"), Err(ValidationError::EmptyTranslation));
    }

    #[test]
    fn rejects_texts_equal_after_normalization() {
        assert_eq!(
            validate_card(" Hello  World", "hello world", "english"),
            Err(ValidationError::IdenticalTexts)
        );
    }

    #[test]
    fn rejects_missing_deck() {
        assert_eq!(validate_card("house", "casa", " "), Err(ValidationError::MissingDeck));
    }
}
