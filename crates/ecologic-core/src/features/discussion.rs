//! # Group Discussion
//!
//! The class chat view. Messages are local mock data; sending appends
//! a message as the current student (no network, per the non-goals).

use serde::{Deserialize, Serialize};

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub user: String,
    pub text: String,
    pub is_me: bool,
    pub is_teacher: bool,
}

/// The discussion thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discussion {
    messages: Vec<Message>,
}

impl Discussion {
    /// The seeded class thread.
    #[must_use]
    pub fn new() -> Self {
        let msg = |user: &str, text: &str, is_me: bool, is_teacher: bool| Message {
            user: user.to_string(),
            text: text.to_string(),
            is_me,
            is_teacher,
        };
        Self {
            messages: vec![
                msg(
                    "Aarav",
                    "Hey everyone! I just planted a mango sapling for the challenge! \u{1f331}",
                    false,
                    false,
                ),
                msg(
                    "Saanvi",
                    "That's awesome, Aarav! I'm trying to convince my family to start composting.",
                    false,
                    false,
                ),
                msg(
                    "You",
                    "Great ideas! I'm planning to use public transport more often.",
                    true,
                    false,
                ),
                msg(
                    "Teacher",
                    "Wonderful initiatives, class! Keep up the great work. Every small step counts.",
                    false,
                    true,
                ),
            ],
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Send a message as the current student. Blank text no-ops.
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(Message {
            user: "You".to_string(),
            text: text.to_string(),
            is_me: true,
            is_teacher: false,
        });
        true
    }
}

impl Default for Discussion {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_as_me() {
        let mut discussion = Discussion::new();
        let before = discussion.messages().len();

        assert!(discussion.send("I rode my bike to school!"));
        assert!(!discussion.send("  "));

        let messages = discussion.messages();
        assert_eq!(messages.len(), before + 1);
        assert!(messages[messages.len() - 1].is_me);
    }
}
