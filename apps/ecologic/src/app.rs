//! # Application Event Loop
//!
//! Single-threaded cooperative loop: stdin command lines and ticker
//! events interleave through one `select!`, and every mutation funnels
//! through a named core operation. No state is shared with any other
//! task; the ticker and the fact fetch only deliver events.

use crate::cli::Config;
use crate::facts::FactProvider;
use crate::render;
use crate::ticker::{AppEvent, PetTicker};
use ecologic_core::dashboard::StudentDashboard;
use ecologic_core::error::CoreError;
use ecologic_core::features::challenges::ChallengeBoard;
use ecologic_core::features::discussion::Discussion;
use ecologic_core::features::goals::GoalList;
use ecologic_core::features::quiz::{QuizState, FEEDBACK_DELAY_MS};
use ecologic_core::features::shop;
use ecologic_core::features::teacher::{TeacherDashboard, TeacherTab};
use ecologic_core::features::impact;
use ecologic_core::i18n::Language;
use ecologic_core::journal::Journal;
use ecologic_core::pet::rescue_roster;
use ecologic_core::registry::FeatureId;
use ecologic_core::session::{Registration, Role, Session};
use ecologic_core::storage::ClientStore;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Per-mount student dashboard state. Feature sub-state (quiz run,
/// challenge board) lives and dies with the dashboard, like the view
/// components it models.
pub struct StudentState {
    pub dash: StudentDashboard,
    pub board: ChallengeBoard,
    pub quiz: Option<QuizState>,
    pub goals: GoalList,
    pub discussion: Discussion,
    ticker: Option<PetTicker>,
}

impl StudentState {
    fn new() -> Self {
        Self {
            dash: StudentDashboard::new(),
            board: ChallengeBoard::new(),
            quiz: None,
            goals: GoalList::new(),
            discussion: Discussion::new(),
            ticker: None,
        }
    }
}

/// The application root: session, language, durable storage, and the
/// mounted dashboard (at most one).
pub struct App {
    pub session: Session,
    pub language: Language,
    pub journal: Journal,
    pub student: Option<StudentState>,
    pub teacher: Option<TeacherDashboard>,
    store: ClientStore,
    facts: FactProvider,
    events_tx: mpsc::Sender<AppEvent>,
    tick_interval: Duration,
}

impl App {
    /// Build the app from process config. Returns the event receiver
    /// the run loop (or a test) drains.
    pub fn new(config: &Config) -> Result<(Self, mpsc::Receiver<AppEvent>), CoreError> {
        std::fs::create_dir_all(&config.data_dir)
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        let store = ClientStore::open(&config.store_path())?;

        // CLI override wins for this run; otherwise the saved
        // preference, read once at startup.
        let language = config
            .language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_else(|| store.load_language());
        let journal = store.load_journal();

        let (events_tx, events_rx) = mpsc::channel(32);

        Ok((
            Self {
                session: Session::new(),
                language,
                journal,
                student: None,
                teacher: None,
                store,
                facts: FactProvider::new(config.api_key.clone()),
                events_tx,
                tick_interval: Duration::from_millis(config.tick_interval_ms),
            },
            events_rx,
        ))
    }

    /// Drive the loop until quit or end of input.
    pub async fn run(mut self, mut events: mpsc::Receiver<AppEvent>) -> Result<(), CoreError> {
        render::login_screen(self.language);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line {
                        Ok(Some(line)) => match self.handle_command(&line).await {
                            Ok(Outcome::Quit) => break,
                            Ok(Outcome::Continue) => {}
                            Err(err) => println!("! {err}"),
                        },
                        Ok(None) => break, // stdin closed
                        Err(err) => {
                            debug!(error = %err, "stdin read failed");
                            break;
                        }
                    }
                }
                Some(event) = events.recv() => self.handle_event(event),
            }
        }
        Ok(())
    }

    /// Apply one delivered event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PetTick => {
                if let Some(state) = self.student.as_mut() {
                    state.dash.tick_pet();
                    if let Some(pet) = state.dash.pet() {
                        debug!(hunger = pet.hunger, thirst = pet.thirst, "pet tick");
                        if pet.is_neglected() {
                            println!("\u{26a0} {} needs care!", pet.name);
                        }
                    }
                }
            }
            AppEvent::Fact(fact) => render::fact_banner(&fact, self.language),
        }
    }

    /// Handle one command line.
    pub async fn handle_command(&mut self, line: &str) -> Result<Outcome, CoreError> {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Outcome::Continue);
        };
        let rest = line[cmd.len()..].trim();

        match cmd {
            "quit" | "exit" => return Ok(Outcome::Quit),
            "help" => {
                render::login_screen(self.language);
                return Ok(Outcome::Continue);
            }
            "lang" => {
                self.set_language(rest)?;
                return Ok(Outcome::Continue);
            }
            _ => {}
        }

        if !self.session.is_authenticated() {
            return self.handle_unauthenticated(cmd, rest);
        }
        match self.session.role() {
            Some(Role::Student) => self.handle_student(cmd, rest).await,
            Some(Role::Teacher) => self.handle_teacher(cmd, rest),
            None => Ok(Outcome::Continue),
        }
    }

    // -------------------------------------------------------------------------
    // Login screen
    // -------------------------------------------------------------------------

    fn handle_unauthenticated(&mut self, cmd: &str, rest: &str) -> Result<Outcome, CoreError> {
        match cmd {
            "login" => {
                let mut args = rest.split_whitespace();
                let email = args.next().unwrap_or("");
                let password = args.next().unwrap_or("");
                let role = self.session.login(email, password)?;
                info!(?role, "logged in");
                self.mount_dashboard(role);
            }
            "register" => {
                let mut args = rest.split_whitespace();
                let form = Registration {
                    username: args.next().unwrap_or("").to_string(),
                    email: args.next().unwrap_or("").to_string(),
                    password: args.next().unwrap_or("").to_string(),
                    role: match args.next() {
                        Some("student") => Some(Role::Student),
                        Some("teacher") => Some(Role::Teacher),
                        _ => None,
                    },
                    terms_accepted: args.next() == Some("yes"),
                };
                let role = self.session.register(&form)?;
                info!(?role, "registered");
                self.mount_dashboard(role);
            }
            _ => render::login_screen(self.language),
        }
        Ok(Outcome::Continue)
    }

    fn mount_dashboard(&mut self, role: Role) {
        match role {
            Role::Student => {
                self.student = Some(StudentState::new());
                self.spawn_fact_fetch();
                self.render_student();
            }
            Role::Teacher => {
                self.teacher = Some(TeacherDashboard::new());
                self.render_teacher();
            }
        }
    }

    /// Fire-and-forget fact fetch at dashboard mount. The banner
    /// prints whenever the result (or fallback) arrives; nothing else
    /// waits on it.
    fn spawn_fact_fetch(&self) {
        let provider = self.facts.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let fact = provider.fetch_fact().await;
            let _ = tx.send(AppEvent::Fact(fact)).await;
        });
    }

    fn set_language(&mut self, code: &str) -> Result<(), CoreError> {
        let Some(language) = Language::from_code(code) else {
            return Err(CoreError::Validation(format!("unknown language '{code}'")));
        };
        self.language = language;
        self.store.save_language(language)?;
        println!("Language: {}", language.native_name());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Student dashboard
    // -------------------------------------------------------------------------

    async fn handle_student(&mut self, cmd: &str, rest: &str) -> Result<Outcome, CoreError> {
        match cmd {
            "logout" => {
                self.unmount();
                render::login_screen(self.language);
                return Ok(Outcome::Continue);
            }
            "open" => {
                if let Some(id) = FeatureId::parse(rest) {
                    self.open_feature(id);
                } else {
                    debug!(key = rest, "unknown feature key ignored");
                }
            }
            "profile" => self.open_feature(FeatureId::Profile),
            "back" => {
                if let Some(state) = self.student.as_mut() {
                    state.dash.back();
                }
            }
            "dismiss" => {
                if let Some(state) = self.student.as_mut() {
                    state.dash.dismiss_modal();
                }
            }
            "garden" => {
                if let Some(state) = self.student.as_mut() {
                    state.dash.garden_click();
                }
            }
            "submit" => self.submit_challenge(parse_index(rest)),
            "answer" => {
                self.answer_quiz(parse_index(rest)).await;
            }
            "buy" => self.buy_item(parse_index(rest))?,
            "adopt" => self.adopt_pet(parse_index(rest)),
            "write" => {
                if self.journal.add(rest, current_date()) {
                    self.store.save_journal(&self.journal)?;
                }
            }
            "say" => {
                if let Some(state) = self.student.as_mut() {
                    state.discussion.send(rest);
                    for message in state.discussion.messages() {
                        println!("  {}: {}", message.user, message.text);
                    }
                    return Ok(Outcome::Continue);
                }
            }
            "goal" => {
                if let Some(state) = self.student.as_mut() {
                    state.goals.add(rest);
                    render_goals(state);
                    return Ok(Outcome::Continue);
                }
            }
            "toggle" => {
                if let Some(state) = self.student.as_mut() {
                    if let Some(index) = parse_index(rest) {
                        state.goals.toggle(index);
                    }
                    render_goals(state);
                    return Ok(Outcome::Continue);
                }
            }
            "impact" => {
                let mut args = rest.split_whitespace();
                let bottles = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
                let meals = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
                let grams = impact::co2_saved_grams(bottles, meals);
                println!(
                    "You've saved an estimated {} of CO2 this week! Amazing!",
                    impact::format_kg(grams)
                );
                return Ok(Outcome::Continue);
            }
            _ => {}
        }
        self.render_student();
        Ok(Outcome::Continue)
    }

    fn open_feature(&mut self, id: FeatureId) {
        let Some(state) = self.student.as_mut() else {
            return;
        };
        // A quiz run lives for one visit to the view.
        if id == FeatureId::Quiz {
            state.quiz = Some(QuizState::new());
        }
        state.dash.select_feature(id);
    }

    fn submit_challenge(&mut self, index: Option<usize>) {
        let Some(state) = self.student.as_mut() else {
            return;
        };
        let Some(index) = index else { return };
        if let Some(award) = state.board.submit(index) {
            state.dash.ledger_mut().apply_delta(award.points);
            state.dash.show_info(award.message);
        }
    }

    /// Answer the current quiz question, reveal feedback for the
    /// fixed delay, then auto-advance. Input is not read while the
    /// feedback is revealed, which is the terminal equivalent of
    /// disabling the option buttons.
    async fn answer_quiz(&mut self, option: Option<usize>) {
        let Some(state) = self.student.as_mut() else {
            return;
        };
        let Some(option) = option else { return };
        let Some(quiz) = state.quiz.as_mut() else {
            return;
        };

        let Some(feedback) = quiz.answer(option) else {
            return;
        };
        println!("{feedback:?}!");
        tokio::time::sleep(Duration::from_millis(FEEDBACK_DELAY_MS)).await;
        quiz.advance();

        if let Some(score) = quiz.take_final_score() {
            state.dash.ledger_mut().apply_delta(score);
            state
                .dash
                .show_info(format!("Quiz complete! You earned \u{1f33f}{score} Eco Points!"));
        }
    }

    fn buy_item(&mut self, index: Option<usize>) -> Result<(), CoreError> {
        let Some(state) = self.student.as_mut() else {
            return Ok(());
        };
        let items = shop::catalog();
        let Some(item) = index.and_then(|i| items.get(i)) else {
            return Ok(());
        };

        match shop::buy(item, state.dash.ledger_mut()) {
            Ok(purchase) => {
                if let Some(care) = purchase.care {
                    state.dash.care_for_pet(care);
                }
                state.dash.show_info(purchase.message);
            }
            // Surfaced as a transient message, never an error.
            Err(CoreError::InsufficientBalance { .. }) => {
                state.dash.show_info("Not enough points!");
            }
            Err(other) => return Err(other),
        }
        Ok(())
    }

    fn adopt_pet(&mut self, index: Option<usize>) {
        let Some(state) = self.student.as_mut() else {
            return;
        };
        let roster = rescue_roster();
        let Some(pet) = index.and_then(|i| roster.get(i)) else {
            return;
        };

        if state.dash.adopt_pet(pet.name.clone(), pet.icon.clone()) {
            // The decay timer starts with the pet and stops with it.
            state.ticker = Some(PetTicker::start(self.tick_interval, self.events_tx.clone()));
            state.dash.back();
            info!(name = %pet.name, "adopted");
        } else {
            debug!("already caring for a companion; adoption ignored");
        }
    }

    /// Tear down whichever dashboard is mounted. Dropping the student
    /// state drops the ticker, cancelling the decay task.
    fn unmount(&mut self) {
        self.student = None;
        self.teacher = None;
        self.session.logout();
    }

    fn render_student(&self) {
        if let Some(state) = &self.student {
            if let Some(modal) = state.dash.modal() {
                render::modal(modal);
            } else {
                render::feature_view(
                    state.dash.view(),
                    &state.dash,
                    &state.board,
                    state.quiz.as_ref(),
                    &self.journal,
                    self.language,
                );
            }
        }
    }

    // -------------------------------------------------------------------------
    // Teacher dashboard
    // -------------------------------------------------------------------------

    fn handle_teacher(&mut self, cmd: &str, rest: &str) -> Result<Outcome, CoreError> {
        match cmd {
            "logout" => {
                self.unmount();
                render::login_screen(self.language);
                return Ok(Outcome::Continue);
            }
            "tab" => {
                if let Some(teacher) = self.teacher.as_mut() {
                    if let Some(tab) = parse_tab(rest) {
                        teacher.select_tab(tab);
                    }
                }
            }
            "approve" | "reject" => {
                if let Some(teacher) = self.teacher.as_mut() {
                    if let Some(id) = rest.split_whitespace().next().and_then(|a| a.parse().ok()) {
                        teacher.review(id, cmd == "approve");
                    }
                }
            }
            "create" => {
                if let Some(teacher) = self.teacher.as_mut() {
                    let mut fields = rest.splitn(3, '|').map(str::trim);
                    let title = fields.next().unwrap_or("");
                    let description = fields.next().unwrap_or("");
                    let points = fields.next().and_then(|p| p.parse().ok()).unwrap_or(0);
                    teacher.create_challenge(title, description, points)?;
                    println!("Challenge created.");
                }
            }
            _ => {}
        }
        self.render_teacher();
        Ok(Outcome::Continue)
    }

    fn render_teacher(&self) {
        if let Some(teacher) = &self.teacher {
            render::teacher_view(teacher, self.language);
        }
    }
}

fn render_goals(state: &StudentState) {
    for (i, goal) in state.goals.goals().iter().enumerate() {
        let mark = if goal.done { "x" } else { " " };
        println!("  [{mark}] [{i}] {}", goal.text);
    }
}

fn parse_index(rest: &str) -> Option<usize> {
    rest.split_whitespace().next().and_then(|a| a.parse().ok())
}

fn parse_tab(name: &str) -> Option<TeacherTab> {
    match name {
        "dashboard" => Some(TeacherTab::Dashboard),
        "leaderboard" => Some(TeacherTab::Leaderboard),
        "manage" => Some(TeacherTab::Manage),
        "verify" => Some(TeacherTab::Verify),
        "roles" => Some(TeacherTab::Roles),
        _ => None,
    }
}

/// Today as `YYYY-MM-DD` in the user's local timezone.
fn current_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

// =============================================================================
// TESTS
// =============================================================================
