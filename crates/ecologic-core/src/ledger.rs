//! # Eco Points Ledger
//!
//! A single signed counter updated by additive deltas: positive for
//! rewards (challenges, quizzes), negative for purchases.
//!
//! The ledger itself does not enforce non-negativity; affordability is
//! the caller's concern and goes through [`EcoLedger::try_spend`]. The
//! displayed balance is always the running sum of every applied delta
//! since construction.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// The Eco Points balance owned by a student dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcoLedger {
    balance: i64,
}

impl EcoLedger {
    /// Create a ledger with the given starting balance.
    #[must_use]
    pub fn new(initial: i64) -> Self {
        Self { balance: initial }
    }

    /// Current balance.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Apply a signed delta unconditionally (saturating).
    ///
    /// Negative amounts are allowed and may drive the balance below
    /// zero; purchase gating belongs to [`Self::try_spend`].
    pub fn apply_delta(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Spend `cost` points, gated on a sufficient balance.
    ///
    /// On success the cost is deducted. On failure the balance is
    /// untouched and the caller gets the transient message data.
    pub fn try_spend(&mut self, cost: i64) -> Result<(), CoreError> {
        if cost > self.balance {
            return Err(CoreError::InsufficientBalance {
                need: cost,
                have: self.balance,
            });
        }
        self.balance = self.balance.saturating_sub(cost);
        Ok(())
    }
}

impl Default for EcoLedger {
    fn default() -> Self {
        Self::new(0)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deltas_accumulate_with_running_totals() {
        let mut ledger = EcoLedger::new(1250);

        ledger.apply_delta(100);
        assert_eq!(ledger.balance(), 1350);

        ledger.apply_delta(-50);
        assert_eq!(ledger.balance(), 1300);

        ledger.apply_delta(20);
        assert_eq!(ledger.balance(), 1320); // initial + 70
    }

    #[test]
    fn apply_delta_allows_negative_balance() {
        let mut ledger = EcoLedger::new(10);
        ledger.apply_delta(-25);
        assert_eq!(ledger.balance(), -15);
    }

    #[test]
    fn try_spend_gates_on_balance() {
        let mut ledger = EcoLedger::new(40);

        let err = ledger.try_spend(50).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientBalance { need: 50, have: 40 }
        ));
        assert_eq!(ledger.balance(), 40); // Untouched on failure

        ledger.try_spend(30).unwrap();
        assert_eq!(ledger.balance(), 10);
    }

    proptest! {
        /// The balance always equals initial plus the sum of deltas.
        #[test]
        fn balance_is_sum_of_deltas(
            initial in -1000i64..1000,
            deltas in prop::collection::vec(-500i64..500, 0..50),
        ) {
            let mut ledger = EcoLedger::new(initial);
            let mut expected = initial;
            for delta in deltas {
                ledger.apply_delta(delta);
                expected = expected.saturating_add(delta);
                prop_assert_eq!(ledger.balance(), expected);
            }
        }
    }
}
