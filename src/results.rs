//! Display-side view of a finished interview
//!
//! Scores and feedback here are fixed sample figures shown on the results
//! screen. They are not derived from the answers; only [`ResultSummary`]
//! reads the actual [`InterviewResult`].

use crate::models::InterviewResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillScore {
    pub skill: &'static str,
    pub score: u8,
}

pub const SKILL_SCORES: [SkillScore; 6] = [
    SkillScore { skill: "Communication", score: 85 },
    SkillScore { skill: "Expertise", score: 78 },
    SkillScore { skill: "Problem solving", score: 82 },
    SkillScore { skill: "Leadership", score: 75 },
    SkillScore { skill: "Confidence", score: 88 },
    SkillScore { skill: "Passion", score: 90 },
];

/// Rounded mean of [`SKILL_SCORES`]
pub fn overall_score() -> u8 {
    let sum: u32 = SKILL_SCORES.iter().map(|s| u32::from(s.score)).sum();
    let count = SKILL_SCORES.len() as u32;
    ((sum + count / 2) / count) as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBadge {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBadge {
    pub fn for_score(score: u8) -> Self {
        match score {
            85.. => ScoreBadge::Excellent,
            70..=84 => ScoreBadge::Good,
            60..=69 => ScoreBadge::Fair,
            _ => ScoreBadge::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBadge::Excellent => "Excellent",
            ScoreBadge::Good => "Good",
            ScoreBadge::Fair => "Fair",
            ScoreBadge::NeedsWork => "Needs work",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Strengths,
    Improvements,
    Suggestions,
}

impl FeedbackKind {
    pub fn title(&self) -> &'static str {
        match self {
            FeedbackKind::Strengths => "Strengths",
            FeedbackKind::Improvements => "Areas to improve",
            FeedbackKind::Suggestions => "Suggestions",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FeedbackGroup {
    pub kind: FeedbackKind,
    pub items: [&'static str; 3],
}

pub const FEEDBACK: [FeedbackGroup; 3] = [
    FeedbackGroup {
        kind: FeedbackKind::Strengths,
        items: [
            "Answers were clear and logically structured.",
            "Concrete examples backed up your experience.",
            "You showed real enthusiasm for the role.",
        ],
    },
    FeedbackGroup {
        kind: FeedbackKind::Improvements,
        items: [
            "Some answers ran long; aim for a tighter core message.",
            "Quantify results where you can.",
            "Tie your experience more directly to the company's needs.",
        ],
    },
    FeedbackGroup {
        kind: FeedbackKind::Suggestions,
        items: [
            "Practice answers in the STAR format.",
            "Research the company's recent news before the interview.",
            "Prepare one or two questions to ask the interviewer.",
        ],
    },
];

/// Counts taken from the actual result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub position: String,
    pub company: String,
    pub question_count: usize,
    pub answered: usize,
    pub skipped: usize,
    pub total_seconds: u32,
}

impl ResultSummary {
    pub fn from_result(result: &InterviewResult) -> Self {
        let answered = result.answered_count();
        Self {
            position: result.interview_input.position.clone(),
            company: result.interview_input.company.clone(),
            question_count: result.answers.len(),
            answered,
            skipped: result.answers.len() - answered,
            total_seconds: result.total_seconds(),
        }
    }

    /// Total answer time in whole minutes, rounded
    pub fn total_minutes(&self) -> u32 {
        (self.total_seconds + 30) / 60
    }

    pub fn headline(&self) -> String {
        match (self.position.is_empty(), self.company.is_empty()) {
            (false, false) => format!("{} at {}", self.position, self.company),
            (false, true) => self.position.clone(),
            (true, false) => self.company.clone(),
            (true, true) => "Mock interview".to_string(),
        }
    }

    /// Text for the share action
    pub fn share_message(&self) -> String {
        format!(
            "I finished a mock interview for {}: {}/{} questions answered in about {} min, overall score {}.",
            self.headline(),
            self.answered,
            self.question_count,
            self.total_minutes(),
            overall_score()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerRecord, InterviewInput};
    use uuid::Uuid;

    fn result() -> InterviewResult {
        InterviewResult {
            session_id: Uuid::new_v4(),
            answers: vec![
                AnswerRecord::recorded("Q1", 40),
                AnswerRecord::skipped("Q2"),
                AnswerRecord::recorded("Q3", 50),
            ],
            interview_input: InterviewInput {
                position: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_overall_score() {
        assert_eq!(overall_score(), 83);
        assert_eq!(ScoreBadge::for_score(overall_score()), ScoreBadge::Good);
    }

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(ScoreBadge::for_score(85), ScoreBadge::Excellent);
        assert_eq!(ScoreBadge::for_score(84), ScoreBadge::Good);
        assert_eq!(ScoreBadge::for_score(70), ScoreBadge::Good);
        assert_eq!(ScoreBadge::for_score(60), ScoreBadge::Fair);
        assert_eq!(ScoreBadge::for_score(59), ScoreBadge::NeedsWork);
    }

    #[test]
    fn test_summary_counts() {
        let summary = ResultSummary::from_result(&result());
        assert_eq!(summary.question_count, 3);
        assert_eq!(summary.answered, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total_seconds, 90);
        assert_eq!(summary.total_minutes(), 2);
        assert_eq!(summary.headline(), "Backend Engineer at Acme");
    }

    #[test]
    fn test_share_message() {
        let message = ResultSummary::from_result(&result()).share_message();
        assert!(message.contains("Backend Engineer at Acme"));
        assert!(message.contains("2/3"));
    }

    #[test]
    fn test_feedback_groups() {
        assert_eq!(FEEDBACK.len(), 3);
        assert!(FEEDBACK.iter().all(|g| g.items.len() == 3));
    }
}
