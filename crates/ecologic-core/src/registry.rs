//! # Feature View Registry
//!
//! The closed catalog of student dashboard features. The set is known
//! at build time, so dispatch is a tagged enum rather than any dynamic
//! lookup.
//!
//! A reserved subset of identifiers has no implemented view yet; the
//! registry routes those to a generic "coming soon" notice (title,
//! message, icon) instead of a blank view.

use serde::{Deserialize, Serialize};

/// Stable identifier for one dashboard capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureId {
    Challenges,
    Quiz,
    Shop,
    Journaling,
    GroupDiscussion,
    PersonalGoals,
    PetRescue,
    Lessons,
    ImpactCalculator,
    Badges,
    HabitHeatmap,
    SpinWheel,
    Profile,
}

/// All registered features, in dashboard grid order.
pub const ALL_FEATURES: &[FeatureId] = &[
    FeatureId::Challenges,
    FeatureId::Quiz,
    FeatureId::Shop,
    FeatureId::Journaling,
    FeatureId::GroupDiscussion,
    FeatureId::PersonalGoals,
    FeatureId::PetRescue,
    FeatureId::Lessons,
    FeatureId::ImpactCalculator,
    FeatureId::Badges,
    FeatureId::HabitHeatmap,
    FeatureId::SpinWheel,
];

impl FeatureId {
    /// Parse a feature identifier from its stable string key.
    ///
    /// Unknown keys are not expected anywhere in the app; callers may
    /// treat `None` as a no-op.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "challenges" => Some(Self::Challenges),
            "quiz" => Some(Self::Quiz),
            "shop" => Some(Self::Shop),
            "journaling" => Some(Self::Journaling),
            "groupDiscussion" => Some(Self::GroupDiscussion),
            "personalGoals" => Some(Self::PersonalGoals),
            "petRescue" => Some(Self::PetRescue),
            "lessons" => Some(Self::Lessons),
            "impactCalculator" => Some(Self::ImpactCalculator),
            "badges" => Some(Self::Badges),
            "habitHeatmap" => Some(Self::HabitHeatmap),
            "spinWheel" => Some(Self::SpinWheel),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    /// The stable string key for this feature.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Challenges => "challenges",
            Self::Quiz => "quiz",
            Self::Shop => "shop",
            Self::Journaling => "journaling",
            Self::GroupDiscussion => "groupDiscussion",
            Self::PersonalGoals => "personalGoals",
            Self::PetRescue => "petRescue",
            Self::Lessons => "lessons",
            Self::ImpactCalculator => "impactCalculator",
            Self::Badges => "badges",
            Self::HabitHeatmap => "habitHeatmap",
            Self::SpinWheel => "spinWheel",
            Self::Profile => "profile",
        }
    }

    /// True for registered identifiers whose view does not exist yet.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Lessons | Self::SpinWheel)
    }
}

/// Content of an informational notice (modal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Optional heading, e.g. "Coming Soon!".
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Optional display glyph.
    pub icon: Option<String>,
}

impl Notice {
    /// A titled notice with an icon.
    #[must_use]
    pub fn titled(
        title: impl Into<String>,
        message: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            message: message.into(),
            icon: Some(icon.into()),
        }
    }

    /// A bare informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            icon: None,
        }
    }
}

/// Where a feature selection routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The feature has a view; the view pointer should move to it.
    View(FeatureId),
    /// The feature is reserved; show this notice, pointer unchanged.
    ComingSoon(Notice),
}

/// Resolve a feature identifier to its route.
#[must_use]
pub fn resolve(id: FeatureId) -> Route {
    if id.is_reserved() {
        Route::ComingSoon(coming_soon_notice())
    } else {
        Route::View(id)
    }
}

/// The generic coming-soon notice used by reserved features.
#[must_use]
pub fn coming_soon_notice() -> Notice {
    Notice::titled(
        "Coming Soon!",
        "Our team is cultivating exciting new features to help you grow. Stay tuned!",
        "\u{1f343}",
    )
}

/// The coming-soon notice shown when the virtual garden is clicked.
#[must_use]
pub fn garden_notice() -> Notice {
    Notice::titled(
        "Garden Feature Coming Soon!",
        "Get ready to grow your own virtual garden by completing challenges. \
         This feature is currently sprouting and will be available soon!",
        "\u{2728}",
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_for_every_feature() {
        for &id in ALL_FEATURES {
            assert_eq!(FeatureId::parse(id.key()), Some(id));
        }
        assert_eq!(FeatureId::parse(FeatureId::Profile.key()), Some(FeatureId::Profile));
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(FeatureId::parse("leaderboard"), None);
        assert_eq!(FeatureId::parse(""), None);
    }

    #[test]
    fn reserved_features_route_to_coming_soon() {
        assert!(matches!(resolve(FeatureId::Lessons), Route::ComingSoon(_)));
        assert!(matches!(resolve(FeatureId::SpinWheel), Route::ComingSoon(_)));
    }

    #[test]
    fn implemented_features_route_to_views() {
        assert_eq!(resolve(FeatureId::Quiz), Route::View(FeatureId::Quiz));
        assert_eq!(resolve(FeatureId::Shop), Route::View(FeatureId::Shop));
    }

    #[test]
    fn coming_soon_notice_carries_title_message_icon() {
        let notice = coming_soon_notice();
        assert!(notice.title.is_some());
        assert!(!notice.message.is_empty());
        assert!(notice.icon.is_some());
    }
}
