use super::validation::{check_cover_letter, normalize_cover_letter, FieldErrors, Validation};
use crate::models::{Attachment, CoverLetterDraft};

/// Edit buffers of the cover letter screen. The portfolio is optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverLetterForm {
    pub body: String,
    pub portfolio_file: Option<Attachment>,
}

impl CoverLetterForm {
    pub fn from_draft(draft: &CoverLetterDraft) -> Self {
        Self {
            body: draft.body.clone(),
            portfolio_file: draft.portfolio_file.clone(),
        }
    }

    /// Characters counted against the limit (after trimming)
    pub fn char_count(&self) -> usize {
        self.body.trim().chars().count()
    }

    pub fn validate(&self) -> Validation<CoverLetterDraft> {
        let mut errors = FieldErrors::new();
        check_cover_letter(&self.body, &mut errors, "cover_letter");

        Validation::from_errors(errors, || CoverLetterDraft {
            body: normalize_cover_letter(&self.body),
            portfolio_file: self.portfolio_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::MAX_COVER_LETTER_CHARS;

    #[test]
    fn test_short_letter_is_rejected() {
        let form = CoverLetterForm {
            body: "Too short.".to_string(),
            portfolio_file: None,
        };
        let result = form.validate();
        assert_eq!(
            result.errors().unwrap().get("cover_letter"),
            Some("Cover letters need at least 50 characters.")
        );
    }

    #[test]
    fn test_valid_letter_is_trimmed_and_capped() {
        let form = CoverLetterForm {
            body: format!("\n{}\n", "x".repeat(MAX_COVER_LETTER_CHARS + 1)),
            portfolio_file: None,
        };
        let draft = form.validate().ok().unwrap();
        assert_eq!(draft.body.len(), MAX_COVER_LETTER_CHARS);
        assert!(draft.portfolio_file.is_none());
    }

    #[test]
    fn test_char_count_ignores_surrounding_whitespace() {
        let form = CoverLetterForm {
            body: "  hello  ".to_string(),
            portfolio_file: None,
        };
        assert_eq!(form.char_count(), 5);
    }
}
