//! # Badges
//!
//! The static badge cabinet: which are earned is mock data for now.

use serde::{Deserialize, Serialize};

/// One badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub icon: String,
    pub earned: bool,
}

/// All badges, earned and not.
#[must_use]
pub fn all_badges() -> Vec<Badge> {
    let badge = |name: &str, icon: &str, earned: bool| Badge {
        name: name.to_string(),
        icon: icon.to_string(),
        earned,
    };
    vec![
        badge("Tree Planter", "\u{1f333}", true),
        badge("Recycle Pro", "\u{267b}\u{fe0f}", true),
        badge("Water Saver", "\u{1f4a7}", false),
        badge("Energy Star", "\u{1f4a1}", true),
        badge("Compost King", "\u{1f331}", false),
        badge("Eco-Warrior", "\u{1f6e1}\u{fe0f}", false),
    ]
}

/// Only the earned badges, for the profile view.
#[must_use]
pub fn earned_badges() -> Vec<Badge> {
    all_badges().into_iter().filter(|b| b.earned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earned_subset_is_consistent() {
        let earned = earned_badges();
        assert_eq!(earned.len(), 3);
        assert!(earned.iter().all(|b| b.earned));
    }
}
