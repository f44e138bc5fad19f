//! # Student Dashboard State
//!
//! The per-dashboard sub-state machine: a view pointer over the
//! feature catalog, the single-slot modal queue, the Eco Points
//! ledger, the user's stats, and the optional adopted pet.
//!
//! All mutation funnels through the named operations here; subordinate
//! views never write fields directly (single-writer invariant).

use crate::ledger::EcoLedger;
use crate::pet::{Pet, PetResource};
use crate::registry::{self, FeatureId, Notice, Route};
use serde::{Deserialize, Serialize};

/// The currently visible view inside a dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// The dashboard home (fact banner, stats, grid).
    #[default]
    Dashboard,
    /// One feature view.
    Feature(FeatureId),
}

/// The two mutually exclusive transient notices.
///
/// At most one is visible at a time; each is dismissed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// "Coming soon" for reserved features and the garden.
    ComingSoon(Notice),
    /// Generic informational message (awards, purchase results).
    Info(Notice),
}

/// Header stats shown on the dashboard home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Leaderboard rank.
    pub rank: u32,
    /// Consecutive active days.
    pub streak: u32,
}

impl Default for UserStats {
    fn default() -> Self {
        // Seed values from the demo profile.
        Self { rank: 5, streak: 12 }
    }
}

/// State owned by one student dashboard instance.
///
/// Created on dashboard mount, torn down with the session. The pet
/// decay timer lives in the app layer; it must run exactly while
/// [`StudentDashboard::pet`] is `Some`.
#[derive(Debug)]
pub struct StudentDashboard {
    view: View,
    modal: Option<Modal>,
    ledger: EcoLedger,
    stats: UserStats,
    pet: Option<Pet>,
}

/// Starting Eco Points balance for the demo profile.
pub const INITIAL_ECO_POINTS: i64 = 1250;

impl StudentDashboard {
    /// Fresh dashboard state: home view, no modal, no pet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: View::Dashboard,
            modal: None,
            ledger: EcoLedger::new(INITIAL_ECO_POINTS),
            stats: UserStats::default(),
            pet: None,
        }
    }

    // -------------------------------------------------------------------------
    // View pointer
    // -------------------------------------------------------------------------

    /// The currently visible view.
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Select a feature from the grid.
    ///
    /// Reserved features queue the coming-soon notice and leave the
    /// view pointer untouched; implemented ones move the pointer.
    pub fn select_feature(&mut self, id: FeatureId) {
        match registry::resolve(id) {
            Route::View(id) => self.view = View::Feature(id),
            Route::ComingSoon(notice) => self.modal = Some(Modal::ComingSoon(notice)),
        }
    }

    /// Return to the dashboard home. Idempotent.
    pub fn back(&mut self) {
        self.view = View::Dashboard;
    }

    /// The virtual garden is a placeholder; clicking it queues its
    /// own coming-soon notice.
    pub fn garden_click(&mut self) {
        self.modal = Some(Modal::ComingSoon(registry::garden_notice()));
    }

    // -------------------------------------------------------------------------
    // Modal slot
    // -------------------------------------------------------------------------

    /// The visible notice, if any.
    #[must_use]
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Queue a generic informational notice, replacing any visible one.
    pub fn show_info(&mut self, message: impl Into<String>) {
        self.modal = Some(Modal::Info(Notice::info(message)));
    }

    /// Dismiss the visible notice. No-op when none is shown.
    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    // -------------------------------------------------------------------------
    // Ledger and stats
    // -------------------------------------------------------------------------

    /// Shared access to the Eco Points ledger.
    #[must_use]
    pub fn ledger(&self) -> &EcoLedger {
        &self.ledger
    }

    /// Mutable access for feature operations that award or spend.
    pub fn ledger_mut(&mut self) -> &mut EcoLedger {
        &mut self.ledger
    }

    /// Header stats.
    #[must_use]
    pub fn stats(&self) -> UserStats {
        self.stats
    }

    // -------------------------------------------------------------------------
    // Pet ownership
    // -------------------------------------------------------------------------

    /// The adopted pet, if any.
    #[must_use]
    pub fn pet(&self) -> Option<&Pet> {
        self.pet.as_ref()
    }

    /// Adopt a pet from the rescue view.
    ///
    /// A second adoption while a pet exists is a silent no-op; the
    /// existing companion is kept. Returns whether the adoption took.
    pub fn adopt_pet(&mut self, name: impl Into<String>, icon: impl Into<String>) -> bool {
        if self.pet.is_some() {
            return false;
        }
        self.pet = Some(Pet::adopt(name, icon));
        true
    }

    /// Apply one decay tick to the pet, if present.
    pub fn tick_pet(&mut self) {
        if let Some(pet) = self.pet.as_mut() {
            pet.tick();
        }
    }

    /// Top up one pet resource (shop purchase side effect). No-op
    /// without a pet.
    pub fn care_for_pet(&mut self, resource: PetResource) {
        if let Some(pet) = self.pet.as_mut() {
            pet.replenish(resource);
        }
    }

}

impl Default for StudentDashboard {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
