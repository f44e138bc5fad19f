//! # Personal Goals
//!
//! A simple eco-goal checklist: add (non-blank) and toggle.

use serde::{Deserialize, Serialize};

/// One personal goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub text: String,
    pub done: bool,
}

/// The goal checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    /// The demo goal set.
    #[must_use]
    pub fn new() -> Self {
        let goal = |text: &str, done: bool| Goal {
            text: text.to_string(),
            done,
        };
        Self {
            goals: vec![
                goal("Carry a reusable water bottle all week", true),
                goal("Switch to LED bulbs at home", false),
                goal("Have two meat-free days", false),
            ],
        }
    }

    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Add a goal. Blank text is a no-op; returns whether it took.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.goals.push(Goal {
            text: text.to_string(),
            done: false,
        });
        true
    }

    /// Toggle completion by index. Out of range is a no-op.
    pub fn toggle(&mut self, index: usize) {
        if let Some(goal) = self.goals.get_mut(index) {
            goal.done = !goal.done;
        }
    }
}

impl Default for GoalList {
    fn default() -> Self {
        Self::new()
    }
}
