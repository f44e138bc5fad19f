//! # Teacher Dashboard
//!
//! Tab pointer plus the teacher-side data: class analytics, the
//! leaderboard, content management, and submission verification.
//! All tabular data is local mock data (no server reconciliation).

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Teacher dashboard tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeacherTab {
    #[default]
    Dashboard,
    Leaderboard,
    Manage,
    Verify,
    Roles,
}

impl TeacherTab {
    /// All tabs in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Leaderboard,
        Self::Manage,
        Self::Verify,
        Self::Roles,
    ];
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub name: String,
    pub points: i64,
    pub streak: u32,
}

/// Active/completed counts for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    pub day: String,
    pub active: u32,
    pub completed: u32,
}

/// Headline class metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub total_students: u32,
    pub avg_eco_points: i64,
    pub daily_active_percent: u8,
}

/// Verification status of a student submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

/// One submitted challenge awaiting verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u32,
    pub student_name: String,
    pub challenge_title: String,
    pub date: String,
    pub status: SubmissionStatus,
}

/// A teacher-authored challenge from the Manage tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoredChallenge {
    pub title: String,
    pub description: String,
    pub points: i64,
}

/// State owned by one teacher dashboard instance.
#[derive(Debug, Clone)]
pub struct TeacherDashboard {
    tab: TeacherTab,
    submissions: Vec<Submission>,
    authored: Vec<AuthoredChallenge>,
}

impl TeacherDashboard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab: TeacherTab::Dashboard,
            submissions: demo_submissions(),
            authored: Vec::new(),
        }
    }

    /// The active tab.
    #[must_use]
    pub fn tab(&self) -> TeacherTab {
        self.tab
    }

    /// Switch tabs. Idempotent.
    pub fn select_tab(&mut self, tab: TeacherTab) {
        self.tab = tab;
    }

    /// Pending and reviewed submissions.
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Approve or reject a submission by id.
    ///
    /// Only pending submissions change; reviewing an already-reviewed
    /// or unknown id is a silent no-op. Returns whether a change took.
    pub fn review(&mut self, id: u32, approve: bool) -> bool {
        let Some(submission) = self.submissions.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        if submission.status != SubmissionStatus::Pending {
            return false;
        }
        submission.status = if approve {
            SubmissionStatus::Approved
        } else {
            SubmissionStatus::Rejected
        };
        true
    }

    /// Create a challenge from the Manage form.
    ///
    /// Title and description must be non-blank, points positive.
    pub fn create_challenge(
        &mut self,
        title: &str,
        description: &str,
        points: i64,
    ) -> Result<(), CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::missing_field("title"));
        }
        if description.trim().is_empty() {
            return Err(CoreError::missing_field("description"));
        }
        if points <= 0 {
            return Err(CoreError::Validation("points must be positive".to_string()));
        }
        self.authored.push(AuthoredChallenge {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            points,
        });
        Ok(())
    }

    /// Challenges authored this session.
    #[must_use]
    pub fn authored(&self) -> &[AuthoredChallenge] {
        &self.authored
    }
}

impl Default for TeacherDashboard {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Mock data
// -----------------------------------------------------------------------------

/// Headline metrics for the analytics tab.
#[must_use]
pub fn class_summary() -> ClassSummary {
    ClassSummary {
        total_students: 120,
        avg_eco_points: 780,
        daily_active_percent: 85,
    }
}

/// The weekly activity chart data.
#[must_use]
pub fn weekly_activity() -> Vec<ActivityDay> {
    let day = |day: &str, active: u32, completed: u32| ActivityDay {
        day: day.to_string(),
        active,
        completed,
    };
    vec![
        day("Mon", 40, 24),
        day("Tue", 30, 13),
        day("Wed", 20, 48),
        day("Thu", 27, 39),
        day("Fri", 18, 28),
        day("Sat", 23, 38),
        day("Sun", 34, 43),
    ]
}

/// The class leaderboard.
#[must_use]
pub fn leaderboard() -> Vec<LeaderboardRow> {
    let row = |rank: u32, name: &str, points: i64, streak: u32| LeaderboardRow {
        rank,
        name: name.to_string(),
        points,
        streak,
    };
    vec![
        row(1, "Aarav Sharma", 1250, 12),
        row(2, "Saanvi Patel", 1100, 10),
        row(3, "Vivaan Singh", 980, 15),
        row(4, "Myra Gupta", 950, 8),
        row(5, "Reyansh Kumar", 800, 5),
    ]
}

fn demo_submissions() -> Vec<Submission> {
    let sub = |id: u32, student: &str, title: &str, date: &str| Submission {
        id,
        student_name: student.to_string(),
        challenge_title: title.to_string(),
        date: date.to_string(),
        status: SubmissionStatus::Pending,
    };
    vec![
        sub(1, "Diya Joshi", "Waste Segregation Photo", "2024-07-20"),
        sub(2, "Kabir Verma", "Plant a Sapling Video", "2024-07-19"),
        sub(3, "Anika Reddy", "DIY Recycled Craft", "2024-07-19"),
    ]
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard_tab() {
        let teacher = TeacherDashboard::new();
        assert_eq!(teacher.tab(), TeacherTab::Dashboard);
        assert_eq!(teacher.submissions().len(), 3);
    }

    #[test]
    fn tab_selection_is_idempotent() {
        let mut teacher = TeacherDashboard::new();
        teacher.select_tab(TeacherTab::Verify);
        teacher.select_tab(TeacherTab::Verify);
        assert_eq!(teacher.tab(), TeacherTab::Verify);
    }

    #[test]
    fn review_moves_pending_to_final_state() {
        let mut teacher = TeacherDashboard::new();
        assert!(teacher.review(1, true));
        assert!(teacher.review(2, false));

        assert_eq!(teacher.submissions()[0].status, SubmissionStatus::Approved);
        assert_eq!(teacher.submissions()[1].status, SubmissionStatus::Rejected);
    }

    #[test]
    fn re_review_is_silent_noop() {
        let mut teacher = TeacherDashboard::new();
        teacher.review(1, true);
        assert!(!teacher.review(1, false));
        assert_eq!(teacher.submissions()[0].status, SubmissionStatus::Approved);
    }

    #[test]
    fn unknown_submission_id_is_noop() {
        let mut teacher = TeacherDashboard::new();
        assert!(!teacher.review(99, true));
    }

    #[test]
    fn create_challenge_validates_fields() {
        let mut teacher = TeacherDashboard::new();

        assert!(teacher.create_challenge("", "desc", 50).is_err());
        assert!(teacher.create_challenge("title", " ", 50).is_err());
        assert!(teacher.create_challenge("title", "desc", 0).is_err());
        assert!(teacher.authored().is_empty());

        teacher
            .create_challenge("River Cleanup", "Join the weekend cleanup.", 120)
            .expect("valid challenge");
        assert_eq!(teacher.authored().len(), 1);
    }
}
