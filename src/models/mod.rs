mod attachment;
pub mod catalog;
mod types;

pub use attachment::{format_file_size, mime_for_extension, Attachment, AttachmentRule, MB};
pub use catalog::{demo_listings, JobDetail, JobFilter};
pub use types::{
    AnswerRecord, CoverLetterDraft, InterviewInput, InterviewResult, JobApplication, JobListing,
    ManualEntry, Profile,
};
