//! # Shop
//!
//! The Eco Points shop. Purchases are gated on balance by the caller's
//! ledger; pet food and the water bowl additionally carry a pet-care
//! side effect the dashboard applies on success.

use crate::error::CoreError;
use crate::ledger::EcoLedger;
use crate::pet::PetResource;
use serde::{Deserialize, Serialize};

/// One shop item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub name: String,
    pub price: i64,
    pub icon: String,
    /// Pet resource this item replenishes, if any.
    pub care: Option<PetResource>,
}

/// Outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    /// Pet-care side effect for the dashboard to apply.
    pub care: Option<PetResource>,
    /// Transient message to show.
    pub message: String,
}

/// The fixed shop catalog.
#[must_use]
pub fn catalog() -> Vec<ShopItem> {
    let item = |name: &str, price: i64, icon: &str, care: Option<PetResource>| ShopItem {
        name: name.to_string(),
        price,
        icon: icon.to_string(),
        care,
    };
    vec![
        item("Pet Food", 50, "\u{1f356}", Some(PetResource::Hunger)),
        item("Water Bowl", 30, "\u{1f4a7}", Some(PetResource::Thirst)),
        item("Flower Seeds", 200, "\u{1f338}", None),
        item("Garden Gnome", 300, "\u{1f344}", None),
        item("Bird Feeder", 250, "\u{1f426}", None),
        item("Bee Hotel", 400, "\u{1f41d}", None),
    ]
}

/// Buy an item, spending from the ledger.
///
/// Insufficient balance surfaces as [`CoreError::InsufficientBalance`]
/// with the ledger untouched; the caller turns it into a transient
/// "Not enough points!" message, never an exception.
pub fn buy(item: &ShopItem, ledger: &mut EcoLedger) -> Result<Purchase, CoreError> {
    ledger.try_spend(item.price)?;
    let message = match item.care {
        Some(PetResource::Hunger) => "You replenished your pet's hunger!".to_string(),
        Some(PetResource::Thirst) => "You replenished your pet's thirst!".to_string(),
        None => "Purchase successful!".to_string(),
    };
    Ok(Purchase {
        care: item.care,
        message,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn purchase_deducts_price() {
        let mut ledger = EcoLedger::new(100);
        let items = catalog();
        let purchase = buy(&items[1], &mut ledger).unwrap(); // Water Bowl, 30

        assert_eq!(ledger.balance(), 70);
        assert_eq!(purchase.care, Some(PetResource::Thirst));
    }

    #[test]
    fn insufficient_balance_leaves_ledger_untouched() {
        let mut ledger = EcoLedger::new(20);
        let items = catalog();

        let err = buy(&items[5], &mut ledger).unwrap_err(); // Bee Hotel, 400
        assert!(matches!(err, CoreError::InsufficientBalance { .. }));
        assert_eq!(ledger.balance(), 20);
    }

    #[test]
    fn non_care_items_have_no_side_effect() {
        let mut ledger = EcoLedger::new(500);
        let items = catalog();
        let purchase = buy(&items[2], &mut ledger).unwrap(); // Flower Seeds

        assert_eq!(purchase.care, None);
        assert_eq!(purchase.message, "Purchase successful!");
    }
}
