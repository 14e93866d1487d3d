use serde::{Deserialize, Serialize};

/// The mutually exclusive views of the app
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenId {
    #[default]
    Main,
    Input,
    Interview,
    Results,
    JobList,
    JobDetail,
    Profile,
    CoverLetter,
}

impl ScreenId {
    pub const ALL: [ScreenId; 8] = [
        ScreenId::Main,
        ScreenId::Input,
        ScreenId::Interview,
        ScreenId::Results,
        ScreenId::JobList,
        ScreenId::JobDetail,
        ScreenId::Profile,
        ScreenId::CoverLetter,
    ];

    /// Title shown in the navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Main => "AI Mock Interview",
            ScreenId::Input => "Interview Setup",
            ScreenId::Interview => "Mock Interview",
            ScreenId::Results => "Interview Results",
            ScreenId::JobList => "Job Listings",
            ScreenId::JobDetail => "Job Details",
            ScreenId::Profile => "My Profile",
            ScreenId::CoverLetter => "Cover Letter",
        }
    }

    /// The main menu and job list draw their own headers
    pub fn shows_nav_bar(&self) -> bool {
        !matches!(self, ScreenId::Main | ScreenId::JobList)
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScreenId::Main => "main",
            ScreenId::Input => "input",
            ScreenId::Interview => "interview",
            ScreenId::Results => "results",
            ScreenId::JobList => "jobList",
            ScreenId::JobDetail => "jobDetail",
            ScreenId::Profile => "profile",
            ScreenId::CoverLetter => "coverLetter",
        };
        write!(f, "{}", name)
    }
}
