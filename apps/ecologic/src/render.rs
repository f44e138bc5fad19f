//! # Text Rendering
//!
//! Plain-text views for the terminal client. Rendering is read-only:
//! nothing here mutates state.

use ecologic_core::dashboard::{Modal, StudentDashboard, View};
use ecologic_core::features::teacher::{self, TeacherDashboard, TeacherTab};
use ecologic_core::features::{badges, challenges::ChallengeBoard, quiz::QuizState, shop};
use ecologic_core::i18n::{labels, Language};
use ecologic_core::journal::Journal;
use ecologic_core::pet::{rescue_roster, Pet};
use ecologic_core::registry::{FeatureId, Notice, ALL_FEATURES};

/// Separator line used between screens.
const RULE: &str = "----------------------------------------";

pub fn login_screen(language: Language) {
    let t = labels(language);
    println!("{RULE}");
    println!("\u{1f343} {}", t.app_title);
    println!("Welcome back! Log in or register to continue.");
    println!("  login <email> <password>");
    println!("  register <username> <email> <password> <student|teacher> <yes>");
    println!("  lang <en|hi|bn|te>   (current: {})", language.native_name());
    println!("{RULE}");
}

pub fn notice(notice: &Notice) {
    println!("{RULE}");
    if let Some(icon) = &notice.icon {
        println!("{icon}");
    }
    if let Some(title) = &notice.title {
        println!("{title}");
    }
    println!("{}", notice.message);
    println!("(type 'dismiss' to close)");
    println!("{RULE}");
}

pub fn modal(modal: &Modal) {
    match modal {
        Modal::ComingSoon(n) | Modal::Info(n) => notice(n),
    }
}

pub fn student_home(dash: &StudentDashboard, language: Language) {
    let t = labels(language);
    let stats = dash.stats();
    println!("{RULE}");
    println!("\u{1f343} {}", t.app_title);
    println!(
        "{} #{}   {} \u{1f525}{}   {} \u{1f33f}{}",
        t.leaderboard,
        stats.rank,
        t.streak,
        stats.streak,
        t.eco_points,
        dash.ledger().balance()
    );
    if let Some(pet) = dash.pet() {
        pet_card(pet);
    }
    println!("{}: (type 'garden')", t.my_garden);
    println!("Features:");
    for &id in ALL_FEATURES {
        let name = feature_name(id, language);
        let tag = if id.is_reserved() { " (soon)" } else { "" };
        println!("  {} - {name}{tag}", id.key());
    }
    println!("(open <feature>, profile, logout, quit)");
    println!("{RULE}");
}

pub fn pet_card(pet: &Pet) {
    println!(
        "{} {}  \u{1f356} hunger {}/100  \u{1f4a7} thirst {}/100",
        pet.icon, pet.name, pet.hunger, pet.thirst
    );
}

pub fn feature_name(id: FeatureId, language: Language) -> &'static str {
    let t = labels(language);
    match id {
        FeatureId::Challenges => t.challenges,
        FeatureId::Quiz => t.quizzes,
        FeatureId::Shop => t.shop,
        FeatureId::Journaling => t.journaling,
        FeatureId::GroupDiscussion => t.group_discussion,
        FeatureId::PersonalGoals => t.personal_goals,
        FeatureId::PetRescue => t.pet_rescue,
        FeatureId::Lessons => t.lessons,
        FeatureId::ImpactCalculator => t.impact_calculator,
        FeatureId::Badges => t.badges,
        FeatureId::HabitHeatmap => t.habit_heatmap,
        FeatureId::SpinWheel => t.spin_wheel,
        FeatureId::Profile => "Profile",
    }
}

pub fn feature_view(
    view: View,
    dash: &StudentDashboard,
    board: &ChallengeBoard,
    quiz: Option<&QuizState>,
    journal: &Journal,
    language: Language,
) {
    let View::Feature(id) = view else {
        student_home(dash, language);
        return;
    };

    println!("{RULE}");
    println!("< {} (type 'back')", feature_name(id, language));
    match id {
        FeatureId::Challenges => {
            for (i, c) in board.challenges().iter().enumerate() {
                let state = if c.submitted { "submitted" } else { "open" };
                println!("  [{i}] {} (\u{1f33f}{}) - {state}", c.title, c.points);
                println!("      {}", c.description);
            }
            println!("(submit <n>)");
        }
        FeatureId::Quiz => {
            if let Some(quiz) = quiz {
                quiz_view(quiz);
            }
        }
        FeatureId::Shop => {
            println!("Your balance: \u{1f33f}{}", dash.ledger().balance());
            for (i, item) in shop::catalog().iter().enumerate() {
                println!("  [{i}] {} {} - \u{1f33f}{}", item.icon, item.name, item.price);
            }
            println!("(buy <n>)");
        }
        FeatureId::Journaling => {
            println!("(write <text>)");
            for entry in journal.entries() {
                println!("  {} - {}", entry.date, entry.text);
            }
        }
        FeatureId::PetRescue => {
            for (i, pet) in rescue_roster().iter().enumerate() {
                println!("  [{i}] {} {} ({})", pet.icon, pet.name, pet.species);
                println!("      \"{}\"", pet.story);
            }
            println!("(adopt <n>)");
        }
        FeatureId::Badges => {
            for badge in badges::all_badges() {
                let mark = if badge.earned { "\u{2714}" } else { " " };
                println!("  [{mark}] {} {}", badge.icon, badge.name);
            }
        }
        FeatureId::ImpactCalculator => {
            println!("(impact <bottles-avoided> <meat-free-meals>)");
        }
        FeatureId::GroupDiscussion => {
            println!("(say <text>)");
        }
        FeatureId::PersonalGoals => {
            println!("(goal <text>, toggle <n>)");
        }
        FeatureId::HabitHeatmap => {
            heatmap_view();
        }
        FeatureId::Profile => {
            profile_view(dash, language);
        }
        // Reserved features never reach here; the registry routes
        // them to the coming-soon notice.
        FeatureId::Lessons | FeatureId::SpinWheel => {}
    }
    println!("{RULE}");
}

/// Mock activity heatmap for last month. Intensity glyphs only; the
/// underlying data is demo noise.
pub fn heatmap_view() {
    println!("Your Eco-Activity Last Month");
    const GLYPHS: [char; 4] = ['.', '-', '+', '#'];
    for week in 0..5 {
        let mut row = String::new();
        for day in 0..7 {
            let level = (week * 7 + day) * 5 % 4;
            row.push(GLYPHS[level]);
            row.push(' ');
        }
        println!("  {row}");
    }
}

pub fn quiz_view(quiz: &QuizState) {
    if quiz.is_finished() {
        println!("Quiz Complete! You earned \u{1f33f}{} Eco Points!", quiz.score());
        return;
    }
    if let Some(question) = quiz.current_question() {
        println!(
            "Question {}/{}: {}",
            quiz.current_index() + 1,
            quiz.question_count(),
            question.prompt
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  [{i}] {option}");
        }
        println!("(answer <n>)");
    }
}

pub fn profile_view(dash: &StudentDashboard, language: Language) {
    let t = labels(language);
    let stats = dash.stats();
    println!("My Profile");
    println!("{} #{}   {} \u{1f525}{}", t.leaderboard, stats.rank, t.streak, stats.streak);
    if let Some(pet) = dash.pet() {
        println!("My Companion:");
        pet_card(pet);
    }
    let earned = badges::earned_badges();
    println!("My Badges ({}):", earned.len());
    for badge in earned {
        println!("  {} {}", badge.icon, badge.name);
    }
}

pub fn teacher_view(teacher_dash: &TeacherDashboard, language: Language) {
    let t = labels(language);
    println!("{RULE}");
    println!("\u{1f343} {} - {}", t.app_title, t.teacher);
    println!(
        "Tabs: dashboard leaderboard manage verify roles (current: {:?})",
        teacher_dash.tab()
    );
    match teacher_dash.tab() {
        TeacherTab::Dashboard => {
            let summary = teacher::class_summary();
            println!("{}", t.analytics);
            println!("  Total Students: {}", summary.total_students);
            println!("  Avg. Eco Points: {}", summary.avg_eco_points);
            println!("  Daily Active: {}%", summary.daily_active_percent);
            println!("Last 7 days (active/completed):");
            for day in teacher::weekly_activity() {
                println!("  {} {:>3} / {:>3}", day.day, day.active, day.completed);
            }
        }
        TeacherTab::Leaderboard => {
            println!("{}", t.leaderboard);
            for row in teacher::leaderboard() {
                println!(
                    "  #{} {} - \u{1f33f}{} \u{1f525}{}",
                    row.rank, row.name, row.points, row.streak
                );
            }
        }
        TeacherTab::Manage => {
            println!("{}", t.manage_content);
            println!("(create <title> | <description> | <points>)");
            for challenge in teacher_dash.authored() {
                println!("  {} (\u{1f33f}{})", challenge.title, challenge.points);
            }
        }
        TeacherTab::Verify => {
            println!("{}", t.verify_submissions);
            for sub in teacher_dash.submissions() {
                println!(
                    "  [{}] {} by {} on {} - {:?}",
                    sub.id, sub.challenge_title, sub.student_name, sub.date, sub.status
                );
            }
            println!("(approve <id>, reject <id>)");
        }
        TeacherTab::Roles => {
            println!("{}", t.assign_roles);
            println!("Role assignment UI placeholder.");
        }
    }
    println!("(tab <name>, logout, quit)");
    println!("{RULE}");
}

pub fn fact_banner(fact: &str, language: Language) {
    let t = labels(language);
    println!("\u{1f4a1} {}: \"{fact}\"", t.fact_of_the_day);
}
