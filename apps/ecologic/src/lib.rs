//! # EcoLogic Binary
//!
//! This library exposes the app modules for testing and integration.
//!
//! The binary wires them together in `main.rs`: config from clap, a
//! tokio event loop over stdin commands, the pet decay ticker, and the
//! one-shot fact provider.

pub mod app;
pub mod cli;
pub mod facts;
pub mod render;
pub mod ticker;

// Re-export ecologic_core for convenience
pub use ecologic_core;
