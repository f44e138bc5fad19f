//! # Localization Table
//!
//! Static mapping of language code to label strings. Pure data.
//!
//! English and Hindi carry full tables; Bengali and Telugu are
//! placeholders and fall back to English until translated.

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "te")]
    Telugu,
}

impl Language {
    /// All selectable languages, in picker order.
    pub const ALL: [Self; 4] = [Self::English, Self::Hindi, Self::Bengali, Self::Telugu];

    /// The two-letter code stored under `language-preference`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Bengali => "bn",
            Self::Telugu => "te",
        }
    }

    /// Parse a stored code. Unknown codes yield `None` and callers
    /// fall back to the default language.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "hi" => Some(Self::Hindi),
            "bn" => Some(Self::Bengali),
            "te" => Some(Self::Telugu),
            _ => None,
        }
    }

    /// Native-script display name for the language picker.
    #[must_use]
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "\u{939}\u{93f}\u{902}\u{926}\u{940}",
            Self::Bengali => "\u{9ac}\u{9be}\u{982}\u{9b2}\u{9be}",
            Self::Telugu => "\u{c24}\u{c46}\u{c32}\u{c41}\u{c17}\u{c41}",
        }
    }
}

/// The label set for one language.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub app_title: &'static str,
    pub fact_of_the_day: &'static str,
    pub leaderboard: &'static str,
    pub streak: &'static str,
    pub eco_points: &'static str,
    pub challenges: &'static str,
    pub quizzes: &'static str,
    pub shop: &'static str,
    pub journaling: &'static str,
    pub group_discussion: &'static str,
    pub personal_goals: &'static str,
    pub pet_rescue: &'static str,
    pub lessons: &'static str,
    pub impact_calculator: &'static str,
    pub badges: &'static str,
    pub habit_heatmap: &'static str,
    pub spin_wheel: &'static str,
    pub my_garden: &'static str,
    pub select_role: &'static str,
    pub student: &'static str,
    pub teacher: &'static str,
    pub terms: &'static str,
    pub dashboard: &'static str,
    pub analytics: &'static str,
    pub manage_content: &'static str,
    pub create_challenge: &'static str,
    pub verify_submissions: &'static str,
    pub assign_roles: &'static str,
}

static EN: Labels = Labels {
    app_title: "EcoLogic",
    fact_of_the_day: "Eco Fact of the Day",
    leaderboard: "Leaderboard",
    streak: "Streak",
    eco_points: "Eco Points",
    challenges: "Challenges",
    quizzes: "Quizzes",
    shop: "Shop",
    journaling: "Journaling",
    group_discussion: "Group Discussion",
    personal_goals: "Personal Goals",
    pet_rescue: "Pet Rescue",
    lessons: "Lessons",
    impact_calculator: "Impact Calculator",
    badges: "Badges",
    habit_heatmap: "Habit Heatmap",
    spin_wheel: "Spin Wheel",
    my_garden: "My Garden",
    select_role: "Select your role",
    student: "Student",
    teacher: "Teacher",
    terms: "I accept the terms and conditions",
    dashboard: "Dashboard",
    analytics: "Class Analytics",
    manage_content: "Manage Content",
    create_challenge: "Create Challenge",
    verify_submissions: "Verify Submissions",
    assign_roles: "Assign Roles",
};

static HI: Labels = Labels {
    app_title: "EcoLogic",
    fact_of_the_day: "\u{906}\u{91c} \u{915}\u{93e} \u{907}\u{915}\u{94b} \u{924}\u{925}\u{94d}\u{92f}",
    leaderboard: "\u{932}\u{940}\u{921}\u{930}\u{92c}\u{94b}\u{930}\u{94d}\u{921}",
    streak: "\u{938}\u{94d}\u{91f}\u{94d}\u{930}\u{940}\u{915}",
    eco_points: "\u{907}\u{915}\u{94b} \u{905}\u{902}\u{915}",
    challenges: "\u{91a}\u{941}\u{928}\u{94c}\u{924}\u{93f}\u{92f}\u{93e}\u{901}",
    quizzes: "\u{92a}\u{94d}\u{930}\u{936}\u{94d}\u{928}\u{94b}\u{924}\u{94d}\u{924}\u{930}\u{940}",
    shop: "\u{926}\u{941}\u{915}\u{93e}\u{928}",
    journaling: "\u{921}\u{93e}\u{92f}\u{930}\u{940}",
    group_discussion: "\u{938}\u{92e}\u{942}\u{939} \u{91a}\u{930}\u{94d}\u{91a}\u{93e}",
    personal_goals: "\u{935}\u{94d}\u{92f}\u{915}\u{94d}\u{924}\u{93f}\u{917}\u{924} \u{932}\u{915}\u{94d}\u{937}\u{94d}\u{92f}",
    pet_rescue: "\u{92a}\u{936}\u{941} \u{92c}\u{91a}\u{93e}\u{935}",
    lessons: "\u{92a}\u{93e}\u{920}",
    impact_calculator: "\u{92a}\u{94d}\u{930}\u{92d}\u{93e}\u{935} \u{915}\u{948}\u{932}\u{915}\u{941}\u{932}\u{947}\u{91f}\u{930}",
    badges: "\u{92c}\u{948}\u{91c}",
    habit_heatmap: "\u{906}\u{926}\u{924} \u{92e}\u{93e}\u{928}\u{91a}\u{93f}\u{924}\u{94d}\u{930}",
    spin_wheel: "\u{938}\u{94d}\u{92a}\u{93f}\u{928} \u{935}\u{94d}\u{939}\u{940}\u{932}",
    my_garden: "\u{92e}\u{947}\u{930}\u{93e} \u{92c}\u{917}\u{940}\u{91a}\u{93e}",
    select_role: "\u{905}\u{92a}\u{928}\u{940} \u{92d}\u{942}\u{92e}\u{93f}\u{915}\u{93e} \u{91a}\u{941}\u{928}\u{947}\u{902}",
    student: "\u{935}\u{93f}\u{926}\u{94d}\u{92f}\u{93e}\u{930}\u{94d}\u{925}\u{940}",
    teacher: "\u{936}\u{93f}\u{915}\u{94d}\u{937}\u{915}",
    terms: "\u{92e}\u{948}\u{902} \u{928}\u{93f}\u{92f}\u{92e} \u{914}\u{930} \u{936}\u{930}\u{94d}\u{924}\u{947}\u{902} \u{938}\u{94d}\u{935}\u{940}\u{915}\u{93e}\u{930} \u{915}\u{930}\u{924}\u{93e} \u{939}\u{942}\u{901}",
    dashboard: "\u{921}\u{948}\u{936}\u{92c}\u{94b}\u{930}\u{94d}\u{921}",
    analytics: "\u{915}\u{915}\u{94d}\u{937}\u{93e} \u{935}\u{93f}\u{936}\u{94d}\u{932}\u{947}\u{937}\u{923}",
    manage_content: "\u{938}\u{93e}\u{92e}\u{917}\u{94d}\u{930}\u{940} \u{92a}\u{94d}\u{930}\u{92c}\u{902}\u{927}\u{928}",
    create_challenge: "\u{91a}\u{941}\u{928}\u{94c}\u{924}\u{940} \u{92c}\u{928}\u{93e}\u{90f}\u{902}",
    verify_submissions: "\u{92a}\u{94d}\u{930}\u{938}\u{94d}\u{924}\u{941}\u{924}\u{93f}\u{92f}\u{93e}\u{901} \u{91c}\u{93e}\u{902}\u{91a}\u{947}\u{902}",
    assign_roles: "\u{92d}\u{942}\u{92e}\u{93f}\u{915}\u{93e}\u{90f}\u{901} \u{938}\u{94c}\u{902}\u{92a}\u{947}\u{902}",
};

/// Look up the label table for a language.
///
/// Bengali and Telugu fall back to English (placeholder tables).
#[must_use]
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English | Language::Bengali | Language::Telugu => &EN,
        Language::Hindi => &HI,
    }
}

// =============================================================================
// TESTS
// =============================================================================
