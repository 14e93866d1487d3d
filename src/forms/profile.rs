use super::validation::{FieldErrors, Validation};
use crate::models::{Attachment, Profile};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9\-+()]{10,}$").expect("valid phone regex"))
}

/// Edit buffers of the profile screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`, optional
    pub birth_date: String,
    pub address: String,
    pub resume_file: Option<Attachment>,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            birth_date: profile
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            address: profile.address.clone().unwrap_or_default(),
            resume_file: profile.resume_file.clone(),
        }
    }

    pub fn validate(&self) -> Validation<Profile> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Please enter your name.");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "Please enter your email.");
        } else if !email_pattern().is_match(email) {
            errors.add("email", "Please enter a valid email address.");
        }

        let phone: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if phone.is_empty() {
            errors.add("phone", "Please enter your phone number.");
        } else if !phone_pattern().is_match(&phone) {
            errors.add("phone", "Please enter a valid phone number.");
        }

        let birth_date = match self.birth_date.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("birth_date", "Use the YYYY-MM-DD format.");
                    None
                }
            },
        };

        let address = self.address.trim();
        Validation::from_errors(errors, || Profile {
            name: name.to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            birth_date,
            address: (!address.is_empty()).then(|| address.to_string()),
            resume_file: self.resume_file.clone(),
        })
    }
}
