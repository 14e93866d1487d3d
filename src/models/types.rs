use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Attachment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub deadline: String,
    pub tags: Vec<String>,
    pub employment_type: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Personal details saved from the profile screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub resume_file: Option<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterDraft {
    pub body: String,
    pub portfolio_file: Option<Attachment>,
}

/// A job plus the cover letter written for it, submitted from the cover
/// letter screen. Any field left `None` falls back to earlier navigation data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub job: Option<JobListing>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub cover_letter: Option<String>,
}

impl JobApplication {
    pub fn for_listing(job: &JobListing, cover_letter: impl Into<String>) -> Self {
        Self {
            job: Some(job.clone()),
            title: Some(job.title.clone()),
            company: Some(job.company.clone()),
            description: job.description.clone(),
            cover_letter: Some(cover_letter.into()),
        }
    }
}

/// Validated payload of the manual "prepare interview" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub resume: Attachment,
    pub cover_letter: String,
    pub portfolio: Option<Attachment>,
}

/// Normalized bundle handed to an interview session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewInput {
    pub position: String,
    pub company: String,
    pub job_description: String,
    pub resume: Option<Attachment>,
    pub cover_letter: String,
    pub portfolio: Option<Attachment>,
}

impl From<ManualEntry> for InterviewInput {
    fn from(entry: ManualEntry) -> Self {
        Self {
            position: entry.job_title,
            company: entry.company,
            job_description: entry.job_description,
            resume: Some(entry.resume),
            cover_letter: entry.cover_letter,
            portfolio: entry.portfolio,
        }
    }
}

/// Outcome of answering or skipping one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub duration_seconds: u32,
    pub skipped: bool,
    pub created_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn recorded(question: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            question: question.into(),
            duration_seconds,
            skipped: false,
            created_at: Utc::now(),
        }
    }

    pub fn skipped(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            duration_seconds: 0,
            skipped: true,
            created_at: Utc::now(),
        }
    }
}

/// Produced once when a session finishes; immutable afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewResult {
    pub session_id: Uuid,
    pub answers: Vec<AnswerRecord>,
    pub interview_input: InterviewInput,
}

impl InterviewResult {
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| !a.skipped).count()
    }

    pub fn total_seconds(&self) -> u32 {
        self.answers.iter().map(|a| a.duration_seconds).sum()
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
