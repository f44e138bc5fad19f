//! # Challenges
//!
//! The fixed challenge list with idempotent submission: the first
//! submit awards the points and queues a pending-verification notice,
//! any further submit of the same challenge silently no-ops.

use serde::{Deserialize, Serialize};

/// One eco-challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub points: i64,
    pub submitted: bool,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    /// Points delta to apply to the ledger.
    pub points: i64,
    /// The transient message to show.
    pub message: String,
}

/// The challenge board state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeBoard {
    challenges: Vec<Challenge>,
}

impl ChallengeBoard {
    /// The demo challenge set. "Waste Segregation" starts submitted.
    #[must_use]
    pub fn new() -> Self {
        let entry = |title: &str, description: &str, points: i64, submitted: bool| Challenge {
            title: title.to_string(),
            description: description.to_string(),
            points,
            submitted,
        };
        Self {
            challenges: vec![
                entry(
                    "Tree Plantation Drive",
                    "Plant a sapling in your community and upload a picture.",
                    100,
                    false,
                ),
                entry(
                    "Waste Segregation",
                    "Correctly segregate your household waste for 3 days.",
                    50,
                    true,
                ),
                entry(
                    "Use Public Transport",
                    "Use public transport instead of a private vehicle and share your experience.",
                    75,
                    false,
                ),
                entry(
                    "DIY Upcycling",
                    "Create something new from old waste materials.",
                    80,
                    false,
                ),
            ],
        }
    }

    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Submit a challenge by index.
    ///
    /// Returns the award on the first submission; `None` for an
    /// already-submitted challenge or an out-of-range index.
    pub fn submit(&mut self, index: usize) -> Option<Award> {
        let challenge = self.challenges.get_mut(index)?;
        if challenge.submitted {
            return None;
        }
        challenge.submitted = true;
        Some(Award {
            points: challenge.points,
            message: format!(
                "\u{1f33f} {} points awarded! Your submission is pending teacher verification.",
                challenge.points
            ),
        })
    }
}

impl Default for ChallengeBoard {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
