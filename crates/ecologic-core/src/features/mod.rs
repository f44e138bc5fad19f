//! # Feature View State Machines
//!
//! One module per implemented dashboard feature. Each is a pure state
//! machine: it reports point deltas and messages back to the caller
//! instead of touching the ledger or modal slot itself.

pub mod badges;
pub mod challenges;
pub mod discussion;
pub mod goals;
pub mod impact;
pub mod quiz;
pub mod shop;
pub mod teacher;
