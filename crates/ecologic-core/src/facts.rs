//! # Fallback Fact Set
//!
//! The fixed local facts used whenever the external text-generation
//! call cannot run (missing credential, network failure, malformed
//! response). Selection is deterministic for a given seed so the
//! fallback path never needs a randomness source in core.

/// The fixed fallback facts.
pub const FALLBACK_FACTS: &[&str] = &[
    "Recycling one aluminum can saves enough energy to run a TV for three hours.",
    "The world's oceans contain nearly 200,000 different kinds of viruses.",
    "A single tree can absorb as much as 48 pounds of carbon dioxide per year.",
    "Bamboo is the fastest-growing woody plant in the world; it can grow up to 35 inches in a single day.",
    "Composting your food scraps can reduce household waste by up to 30%.",
];

/// Select a fallback fact deterministically from a seed.
///
/// The app layer seeds this with the day number, giving a stable
/// "fact of the day" while offline.
#[must_use]
pub fn fallback_fact(seed: u64) -> &'static str {
    let index = (seed % FALLBACK_FACTS.len() as u64) as usize;
    FALLBACK_FACTS[index]
}

// =============================================================================
// TESTS
// =============================================================================
