use super::validation::{check_cover_letter, normalize_cover_letter, FieldErrors, Validation};
use crate::models::{Attachment, ManualEntry, Profile};

/// Edit buffers of the manual interview setup screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterviewForm {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub resume: Option<Attachment>,
    pub cover_letter: String,
    pub portfolio: Option<Attachment>,
}

impl InterviewForm {
    /// Fill the resume from a saved profile unless one is already attached
    pub fn prefill_from_profile(&mut self, profile: &Profile) {
        if self.resume.is_none() {
            self.resume = profile.resume_file.clone();
        }
    }

    pub fn validate(&self) -> Validation<ManualEntry> {
        let mut errors = FieldErrors::new();

        if self.job_title.trim().is_empty() {
            errors.add("job_title", "Please enter the position you are applying for.");
        }
        if self.resume.is_none() {
            errors.add("resume", "Please upload your resume.");
        }
        check_cover_letter(&self.cover_letter, &mut errors, "cover_letter");

        if !errors.is_empty() {
            return Validation::Invalid(errors);
        }
        match &self.resume {
            Some(resume) => Validation::Valid(ManualEntry {
                job_title: self.job_title.trim().to_string(),
                company: self.company.trim().to_string(),
                job_description: self.job_description.trim().to_string(),
                resume: resume.clone(),
                cover_letter: normalize_cover_letter(&self.cover_letter),
                portfolio: self.portfolio.clone(),
            }),
            None => Validation::Invalid(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume() -> Attachment {
        Attachment {
            name: "resume.pdf".to_string(),
            size_bytes: 1024,
            mime_type: "application/pdf".to_string(),
            locator: "/tmp/resume.pdf".to_string(),
        }
    }

    fn letter() -> String {
        "I have spent three years building payment systems and want to grow here.".to_string()
    }

    #[test]
    fn test_valid_form_trims_fields() {
        let form = InterviewForm {
            job_title: "  Backend Engineer ".to_string(),
            company: " Acme ".to_string(),
            resume: Some(resume()),
            cover_letter: letter(),
            ..Default::default()
        };
        let entry = form.validate().ok().unwrap();
        assert_eq!(entry.job_title, "Backend Engineer");
        assert_eq!(entry.company, "Acme");
        assert!(entry.portfolio.is_none());
    }

    #[test]
    fn test_missing_resume_and_title() {
        let form = InterviewForm {
            cover_letter: letter(),
            ..Default::default()
        };
        let result = form.validate();
        let errors = result.errors().unwrap();
        assert!(errors.get("job_title").is_some());
        assert_eq!(errors.get("resume"), Some("Please upload your resume."));
        assert!(errors.get("cover_letter").is_none());
    }

    #[test]
    fn test_prefill_keeps_existing_resume() {
        let mut other = resume();
        other.name = "other.pdf".to_string();
        let profile = Profile {
            resume_file: Some(other),
            ..Default::default()
        };

        let mut form = InterviewForm::default();
        form.prefill_from_profile(&profile);
        assert_eq!(form.resume.as_ref().unwrap().name, "other.pdf");

        let mut form = InterviewForm {
            resume: Some(resume()),
            ..Default::default()
        };
        form.prefill_from_profile(&profile);
        assert_eq!(form.resume.as_ref().unwrap().name, "resume.pdf");
    }
}
