//! File attachments (resume, portfolio)
//!
//! Stands in for the document picker: a local path is inspected and checked
//! against an [`AttachmentRule`] by the screen that asked for it.

use crate::{MockviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub locator: String,
}

const EXTENSION_MIME: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
];

/// Guess a MIME type from a file extension
pub fn mime_for_extension(ext: &str) -> String {
    let ext = ext.to_ascii_lowercase();
    EXTENSION_MIME
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| (*mime).to_string())
        .unwrap_or_else(|| format!("application/{}", ext))
}

impl Attachment {
    /// Inspect a local file. An empty path means the picker was cancelled.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(None);
        }

        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(MockviewError::AttachmentError(format!(
                "{} is not a file.",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_for_extension(&extension_of(&name));

        Ok(Some(Self {
            name,
            size_bytes: metadata.len(),
            mime_type,
            locator: path.display().to_string(),
        }))
    }

    pub fn extension(&self) -> String {
        extension_of(&self.name)
    }

    /// Human readable size, e.g. "1.5 MB"
    pub fn display_size(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    }
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "-".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// Which files a screen accepts for one attachment slot
#[derive(Debug, Clone)]
pub struct AttachmentRule {
    pub label: &'static str,
    pub mime_types: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub max_bytes: u64,
}

impl AttachmentRule {
    pub fn resume(max_bytes: u64) -> Self {
        Self {
            label: "PDF, DOC, DOCX",
            mime_types: &[
                "application/pdf",
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ],
            extensions: &["pdf", "doc", "docx"],
            max_bytes,
        }
    }

    pub fn portfolio(max_bytes: u64) -> Self {
        Self {
            label: "PDF, PPT, PPTX, DOC, DOCX, JPG, PNG, GIF",
            mime_types: &[
                "application/pdf",
                "application/vnd.ms-powerpoint",
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "image/jpeg",
                "image/png",
                "image/gif",
            ],
            extensions: &[
                "pdf", "ppt", "pptx", "doc", "docx", "jpg", "jpeg", "png", "gif",
            ],
            max_bytes,
        }
    }

    /// Accept by MIME type or extension, then enforce the size limit
    pub fn check(&self, attachment: &Attachment) -> Result<()> {
        let ok_by_mime = self.mime_types.contains(&attachment.mime_type.as_str());
        let ok_by_ext = self.extensions.contains(&attachment.extension().as_str());
        if !(ok_by_mime || ok_by_ext) {
            return Err(MockviewError::AttachmentError(format!(
                "Only {} files can be uploaded.",
                self.label
            )));
        }

        if attachment.size_bytes > self.max_bytes {
            return Err(MockviewError::AttachmentError(format!(
                "Files must be {} MB or smaller.",
                self.max_bytes / MB
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn attachment(name: &str, mime: &str, size: u64) -> Attachment {
        Attachment {
            name: name.to_string(),
            size_bytes: size,
            mime_type: mime.to_string(),
            locator: format!("/tmp/{}", name),
        }
    }

    #[test]
    fn test_resume_rule_accepts_by_extension() {
        let rule = AttachmentRule::resume(10 * MB);
        // Unknown MIME but allowed extension
        let file = attachment("CV.DOCX", "application/octet-stream", 1000);
        assert!(rule.check(&file).is_ok());
    }

    #[test]
    fn test_resume_rule_rejects_images() {
        let rule = AttachmentRule::resume(10 * MB);
        let file = attachment("photo.png", "image/png", 1000);
        let err = rule.check(&file).unwrap_err();
        assert_eq!(err.user_message(), "Only PDF, DOC, DOCX files can be uploaded.");
    }

    #[test]
    fn test_size_limit_is_enforced() {
        let rule = AttachmentRule::portfolio(50 * MB);
        let at_limit = attachment("deck.pptx", "", 50 * MB);
        let over = attachment("deck.pptx", "", 50 * MB + 1);
        assert!(rule.check(&at_limit).is_ok());
        assert!(matches!(
            rule.check(&over),
            Err(MockviewError::AttachmentError(_))
        ));
    }

    #[test]
    fn test_from_path_inspects_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 300]).unwrap();

        let attachment = Attachment::from_path(&path).unwrap().unwrap();
        assert_eq!(attachment.name, "resume.pdf");
        assert_eq!(attachment.size_bytes, 300);
        assert_eq!(attachment.mime_type, "application/pdf");
    }

    #[test]
    fn test_empty_path_is_cancellation() {
        assert!(Attachment::from_path("").unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Attachment::from_path("/definitely/not/here.pdf");
        assert!(matches!(result, Err(MockviewError::IOError(_))));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "-");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * MB), "10 MB");
    }
}
