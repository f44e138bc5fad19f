//! # Pet Resource Model
//!
//! A rescued pet with two decaying resources, hunger and thirst, each
//! held in `[0, MAX_RESOURCE]` at all observable times.
//!
//! The core never owns a timer. Decay happens only when the app layer
//! calls [`Pet::tick`], once per scheduled interval, so the model stays
//! fully deterministic and testable without a clock.

use serde::{Deserialize, Serialize};

/// Upper bound for both pet resources.
pub const MAX_RESOURCE: u8 = 100;

/// Hunger decays by this much per tick.
pub const HUNGER_DECAY_PER_TICK: u8 = 1;

/// Thirst decays faster than hunger.
pub const THIRST_DECAY_PER_TICK: u8 = 2;

/// The two replenishable pet resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetResource {
    /// Topped up by pet food.
    Hunger,
    /// Topped up by a water bowl.
    Thirst,
}

/// An adopted pet.
///
/// Created by [`Pet::adopt`] with both resources at maximum. Mutated
/// only through [`Pet::tick`] and [`Pet::replenish`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Display name, e.g. "Rusty".
    pub name: String,
    /// Display glyph, e.g. a dog emoji.
    pub icon: String,
    /// Satiety level in `[0, 100]`. 0 means starving.
    pub hunger: u8,
    /// Hydration level in `[0, 100]`. 0 means parched.
    pub thirst: u8,
}

impl Pet {
    /// Adopt a new pet. Both resources start at maximum.
    #[must_use]
    pub fn adopt(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            hunger: MAX_RESOURCE,
            thirst: MAX_RESOURCE,
        }
    }

    /// Apply one decay step: hunger -1, thirst -2, floored at 0.
    pub fn tick(&mut self) {
        self.hunger = self.hunger.saturating_sub(HUNGER_DECAY_PER_TICK);
        self.thirst = self.thirst.saturating_sub(THIRST_DECAY_PER_TICK);
    }

    /// Reset the named resource to maximum. The other is untouched.
    pub fn replenish(&mut self, resource: PetResource) {
        match resource {
            PetResource::Hunger => self.hunger = MAX_RESOURCE,
            PetResource::Thirst => self.thirst = MAX_RESOURCE,
        }
    }

    /// True when either resource has hit zero.
    #[must_use]
    pub fn is_neglected(&self) -> bool {
        self.hunger == 0 || self.thirst == 0
    }
}

/// A rescue animal available for adoption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescuePet {
    pub name: String,
    pub species: String,
    pub icon: String,
    pub story: String,
}

/// The animals waiting in the rescue view.
#[must_use]
pub fn rescue_roster() -> Vec<RescuePet> {
    let pet = |name: &str, species: &str, icon: &str, story: &str| RescuePet {
        name: name.to_string(),
        species: species.to_string(),
        icon: icon.to_string(),
        story: story.to_string(),
    };
    vec![
        pet(
            "Rusty",
            "Stray Dog",
            "\u{1f436}",
            "Found wandering near the school. Loves long walks and belly rubs!",
        ),
        pet(
            "Whiskers",
            "Kitten",
            "\u{1f431}",
            "Rescued from a tree. A bit shy but very playful.",
        ),
        pet(
            "Shelly",
            "Turtle",
            "\u{1f422}",
            "Found near a polluted pond. Now safe and sound.",
        ),
    ]
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn adopt_starts_full() {
        let pet = Pet::adopt("Rusty", "\u{1f436}");
        assert_eq!(pet.hunger, MAX_RESOURCE);
        assert_eq!(pet.thirst, MAX_RESOURCE);
    }

    #[test]
    fn tick_decays_thirst_faster() {
        let mut pet = Pet::adopt("Whiskers", "\u{1f431}");
        pet.tick();
        assert_eq!(pet.hunger, 99);
        assert_eq!(pet.thirst, 98);
    }

    #[test]
    fn tick_clamps_at_zero() {
        let mut pet = Pet::adopt("Shelly", "\u{1f422}");
        pet.hunger = 5;
        pet.thirst = 1;

        pet.tick();
        assert_eq!(pet.hunger, 4);
        assert_eq!(pet.thirst, 0); // Clamped, not -1

        pet.tick();
        assert_eq!(pet.hunger, 3);
        assert_eq!(pet.thirst, 0); // Stays at floor
    }

    #[test]
    fn replenish_resets_only_named_resource() {
        let mut pet = Pet::adopt("Rusty", "\u{1f436}");
        pet.hunger = 13;
        pet.thirst = 42;

        pet.replenish(PetResource::Hunger);
        assert_eq!(pet.hunger, MAX_RESOURCE);
        assert_eq!(pet.thirst, 42);

        pet.replenish(PetResource::Thirst);
        assert_eq!(pet.thirst, MAX_RESOURCE);
    }

    #[test]
    fn neglect_detection() {
        let mut pet = Pet::adopt("Shelly", "\u{1f422}");
        assert!(!pet.is_neglected());
        pet.thirst = 0;
        assert!(pet.is_neglected());
    }

    proptest! {
        /// Both resources stay in bounds under any tick/replenish sequence.
        #[test]
        fn resources_stay_in_bounds(ops in prop::collection::vec(0u8..3, 0..200)) {
            let mut pet = Pet::adopt("Rusty", "\u{1f436}");
            for op in ops {
                match op {
                    0 => pet.tick(),
                    1 => pet.replenish(PetResource::Hunger),
                    _ => pet.replenish(PetResource::Thirst),
                }
                prop_assert!(pet.hunger <= MAX_RESOURCE);
                prop_assert!(pet.thirst <= MAX_RESOURCE);
            }
        }
    }
}
