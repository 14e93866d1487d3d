//! Typed form records and their validation
//!
//! Forms run before anything reaches the navigation controller, which
//! trusts the payloads it receives.

mod cover_letter;
mod interview_form;
mod profile;
mod validation;

pub use cover_letter::CoverLetterForm;
pub use interview_form::InterviewForm;
pub use profile::ProfileForm;
pub use validation::{
    check_cover_letter, normalize_cover_letter, FieldErrors, Validation, MAX_COVER_LETTER_CHARS,
    MIN_COVER_LETTER_CHARS,
};

use crate::models::{Attachment, AttachmentRule};
use crate::Result;
use std::path::Path;
use tracing::info;

/// Inspect a picked file and check it against `rule`.
/// `Ok(None)` means the pick was cancelled.
pub fn pick_attachment(path: impl AsRef<Path>, rule: &AttachmentRule) -> Result<Option<Attachment>> {
    let Some(attachment) = Attachment::from_path(path)? else {
        return Ok(None);
    };
    rule.check(&attachment)?;
    info!(
        "[FORM] Attached {} ({})",
        attachment.name,
        attachment.display_size()
    );
    Ok(Some(attachment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MB;
    use crate::MockviewError;
    use std::io::Write;

    #[test]
    fn test_pick_attachment_applies_rule() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.key");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"keynote")
            .unwrap();

        let result = pick_attachment(&path, &AttachmentRule::portfolio(50 * MB));
        assert!(matches!(result, Err(MockviewError::AttachmentError(_))));
    }

    #[test]
    fn test_pick_attachment_cancelled() {
        let result = pick_attachment("", &AttachmentRule::resume(10 * MB)).unwrap();
        assert!(result.is_none());
    }
}
