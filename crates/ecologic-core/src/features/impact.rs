//! # Impact Calculator
//!
//! Estimated CO2 savings from weekly habits, computed in integer
//! grams to keep the core float-free. The view renders grams as
//! kilograms with one decimal place.

/// CO2 grams saved per avoided plastic bottle.
pub const GRAMS_PER_BOTTLE: u64 = 100;

/// CO2 grams saved per meat-free meal.
pub const GRAMS_PER_MEATLESS_MEAL: u64 = 2500;

/// Estimated CO2 savings in grams for a week of habits.
#[must_use]
pub fn co2_saved_grams(plastic_bottles: u64, meatless_meals: u64) -> u64 {
    plastic_bottles
        .saturating_mul(GRAMS_PER_BOTTLE)
        .saturating_add(meatless_meals.saturating_mul(GRAMS_PER_MEATLESS_MEAL))
}

/// Format grams as "X.Y kg" without floating point.
#[must_use]
pub fn format_kg(grams: u64) -> String {
    let whole = grams / 1000;
    let tenths = (grams % 1000) / 100;
    format!("{whole}.{tenths} kg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottles_and_meals_accumulate() {
        // 4 bottles + 2 meals = 400 g + 5000 g
        assert_eq!(co2_saved_grams(4, 2), 5400);
        assert_eq!(co2_saved_grams(0, 0), 0);
    }

    #[test]
    fn kilogram_formatting() {
        assert_eq!(format_kg(5400), "5.4 kg");
        assert_eq!(format_kg(100), "0.1 kg");
        assert_eq!(format_kg(0), "0.0 kg");
        assert_eq!(format_kg(12050), "12.0 kg");
    }
}
