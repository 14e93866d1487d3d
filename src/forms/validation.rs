use std::collections::BTreeMap;

/// Field name to message, in field order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Outcome of validating a form
#[derive(Clone, Debug, PartialEq)]
pub enum Validation<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> Validation<T> {
    /// `Valid(make())` when `errors` is empty
    pub fn from_errors(errors: FieldErrors, make: impl FnOnce() -> T) -> Self {
        if errors.is_empty() {
            Validation::Valid(make())
        } else {
            Validation::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Validation::Valid(value) => Some(value),
            Validation::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }
}

pub const MIN_COVER_LETTER_CHARS: usize = 50;
pub const MAX_COVER_LETTER_CHARS: usize = 2000;

/// Trim, then cut to the character limit
pub fn normalize_cover_letter(text: &str) -> String {
    text.trim().chars().take(MAX_COVER_LETTER_CHARS).collect()
}

/// Shared cover letter rule for the cover letter and manual entry forms
pub fn check_cover_letter(text: &str, errors: &mut FieldErrors, field: &'static str) {
    let length = text.trim().chars().count();
    if length == 0 {
        errors.add(field, "Please write a cover letter.");
    } else if length < MIN_COVER_LETTER_CHARS {
        errors.add(
            field,
            format!(
                "Cover letters need at least {} characters.",
                MIN_COVER_LETTER_CHARS
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_errors() {
        let ok: Validation<u8> = Validation::from_errors(FieldErrors::new(), || 7);
        assert_eq!(ok.ok(), Some(7));

        let mut errors = FieldErrors::new();
        errors.add("name", "required");
        let bad: Validation<u8> = Validation::from_errors(errors, || 7);
        assert!(!bad.is_valid());
        assert_eq!(bad.errors().unwrap().get("name"), Some("required"));
    }

    #[test]
    fn test_cover_letter_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        // 50 Hangul syllables are 150 bytes but 50 characters
        check_cover_letter(&"가".repeat(50), &mut errors, "cover_letter");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_cover_letter_whitespace_only_is_missing() {
        let mut errors = FieldErrors::new();
        check_cover_letter("   \n\t ", &mut errors, "cover_letter");
        assert_eq!(errors.get("cover_letter"), Some("Please write a cover letter."));
    }

    #[test]
    fn test_normalize_trims_and_truncates() {
        let long = format!("  {}  ", "a".repeat(MAX_COVER_LETTER_CHARS + 10));
        let normalized = normalize_cover_letter(&long);
        assert_eq!(normalized.chars().count(), MAX_COVER_LETTER_CHARS);
        assert!(!normalized.starts_with(' '));
    }
}
