//! Built-in demo job listings and the list screen's filter

use super::JobListing;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const CATEGORIES: &[&str] = &["Frontend", "Backend", "Data", "Planning"];
pub const LOCATIONS: &[&str] = &["Seoul", "Gyeonggi", "Busan"];

fn listing(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    experience: &str,
    deadline: &str,
    tags: &[&str],
    employment_type: &str,
    category: &str,
) -> JobListing {
    JobListing {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        experience: experience.to_string(),
        deadline: deadline.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        employment_type: employment_type.to_string(),
        category: category.to_string(),
        description: None,
    }
}

/// The demo listings shown on the job list screen
pub fn demo_listings() -> Vec<JobListing> {
    vec![
        listing(
            1,
            "Frontend Developer (React)",
            "J-GEAR",
            "Gyeonggi Goyang",
            "Junior/Senior",
            "~ 08.31 (Sun)",
            &["Full-time", "5-day week", "Partly remote"],
            "Full-time",
            "Frontend",
        ),
        listing(
            2,
            "Backend Developer (Node.js)",
            "TechStartup",
            "Seoul Gangnam",
            "3+ years",
            "~ 09.15 (Sun)",
            &["Full-time", "4-day week", "Fully remote"],
            "Full-time",
            "Backend",
        ),
        listing(
            3,
            "Data Analyst",
            "DataCorp",
            "Seoul Mapo",
            "Junior/Senior",
            "~ 09.30 (Mon)",
            &["Full-time", "5-day week", "Hybrid"],
            "Full-time",
            "Data",
        ),
        listing(
            4,
            "UI/UX Planner",
            "Design Studio",
            "Busan Haeundae",
            "2+ years",
            "~ 09.10 (Tue)",
            &["Full-time", "5-day week", "On-site"],
            "Full-time",
            "Planning",
        ),
        listing(
            5,
            "Frontend Intern",
            "GrowthCo",
            "Gyeonggi Seongnam",
            "Intern",
            "~ 08.25 (Sun)",
            &["Intern", "5-day week", "On-site"],
            "Intern",
            "Frontend",
        ),
    ]
}

/// Search text plus category and location toggles
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub query: String,
    pub categories: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, job: &JobListing) -> bool {
        let q = self.query.trim().to_lowercase();
        let matches_search = q.is_empty()
            || job.title.to_lowercase().contains(&q)
            || job.company.to_lowercase().contains(&q);

        let matches_category =
            self.categories.is_empty() || self.categories.contains(&job.category);

        let matches_location = self.locations.is_empty()
            || self.locations.iter().any(|loc| job.location.contains(loc.as_str()));

        matches_search && matches_category && matches_location
    }

    pub fn apply<'a>(&self, jobs: &'a [JobListing]) -> Vec<&'a JobListing> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }

    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    pub fn toggle_location(&mut self, location: &str) {
        if !self.locations.remove(location) {
            self.locations.insert(location.to_string());
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || !self.categories.is_empty() || !self.locations.is_empty()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.categories.clear();
        self.locations.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiringStep {
    pub step: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkConditions {
    pub salary: String,
    pub work_location: String,
    pub employment_type: String,
    pub work_hours: String,
}

/// Static detail page content for a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    pub listing: JobListing,
    pub responsibilities: Vec<String>,
    pub essential: Vec<String>,
    pub preferred: Vec<String>,
    pub tech_stack: Vec<String>,
    pub process: Vec<HiringStep>,
    pub conditions: WorkConditions,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl JobDetail {
    pub fn for_listing(listing: &JobListing) -> Self {
        let process = ["Documents", "Coding test", "First interview", "Final interview"]
            .iter()
            .enumerate()
            .map(|(i, step)| HiringStep {
                step: step.to_string(),
                status: if i == 0 {
                    StepStatus::Active
                } else {
                    StepStatus::Inactive
                },
            })
            .collect();

        Self {
            listing: listing.clone(),
            responsibilities: strings(&[
                "Build web applications with React",
                "Improve user interface and user experience",
                "Integrate backend APIs and handle data",
                "Take part in code review and quality work",
                "Ensure cross-browser compatibility",
            ]),
            essential: strings(&[
                "2+ years of hands-on React",
                "Fluent JavaScript (ES6+)",
                "HTML5 and CSS3",
                "Git version control",
            ]),
            preferred: strings(&[
                "TypeScript",
                "Next.js",
                "State management libraries (Redux, Zustand)",
                "Web accessibility and performance tuning",
            ]),
            tech_stack: strings(&[
                "React",
                "JavaScript",
                "TypeScript",
                "Next.js",
                "Tailwind CSS",
                "Git",
            ]),
            process,
            conditions: WorkConditions {
                salary: "Negotiable".to_string(),
                work_location: listing.location.clone(),
                employment_type: listing.employment_type.clone(),
                work_hours: "09:00 ~ 18:00 (5 days)".to_string(),
            },
        }
    }
}
