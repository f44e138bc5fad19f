//! # EcoLogic Core
//!
//! The deterministic state engine for the EcoLogic learning client.
//!
//! This crate is pure logic: every screen transition, point delta, and
//! pet resource change in the application is a named operation on one
//! of the state machines defined here. There is no async code, no
//! network access, no randomness, and no floating-point arithmetic.
//! Time only enters through explicit `tick()` calls driven by the app
//! layer.
//!
//! ## Module map
//!
//! - [`session`] - authentication phase and role assignment
//! - [`registry`] - the closed feature catalog and coming-soon routing
//! - [`dashboard`] - view pointer, modal slot, student dashboard state
//! - [`pet`] - the decaying two-resource virtual pet
//! - [`ledger`] - the Eco Points balance
//! - [`features`] - feature view state machines (quiz, shop, ...)
//! - [`i18n`] - static localization table
//! - [`journal`] - local journal entries
//! - [`facts`] - the fixed fallback fact set
//! - [`storage`] - durable string key-value store (redb)

pub mod dashboard;
pub mod error;
pub mod facts;
pub mod features;
pub mod i18n;
pub mod journal;
pub mod ledger;
pub mod pet;
pub mod registry;
pub mod session;
pub mod storage;

pub use dashboard::{Modal, StudentDashboard, View};
pub use error::CoreError;
pub use i18n::Language;
pub use journal::{Journal, JournalEntry};
pub use ledger::EcoLedger;
pub use pet::{Pet, PetResource};
pub use registry::{FeatureId, Notice, Route};
pub use session::{Role, Session};
pub use storage::ClientStore;
