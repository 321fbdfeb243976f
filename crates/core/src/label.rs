// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random, human-friendly default session labels.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const ADJECTIVES: &[&str] = &[
    "bold", "bright", "calm", "clever", "daring", "eager", "gentle", "lively", "nimble", "radiant",
    "steady", "swift", "vivid",
];

pub const NOUNS: &[&str] = &[
    "albatross",
    "badger",
    "copper",
    "dolphin",
    "falcon",
    "juniper",
    "lynx",
    "maple",
    "otter",
    "pine",
    "raven",
    "spruce",
    "swift",
    "walnut",
];

/// Label returned when a word list is empty.
pub const FALLBACK_LABEL: &str = "session";

/// Generates `adjective-noun-NNN` labels.
///
/// The random source is owned by the generator and guarded by a mutex, so a
/// single generator can be shared across threads.
pub struct LabelGenerator {
    adjectives: &'static [&'static str],
    nouns: &'static [&'static str],
    rng: Mutex<StdRng>,
}

impl LabelGenerator {
    /// Generator over the built-in word lists, seeded from the OS.
    pub fn new() -> Self {
        Self::with_words(ADJECTIVES, NOUNS, StdRng::from_os_rng())
    }

    /// Deterministic generator for tests and reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self::with_words(ADJECTIVES, NOUNS, StdRng::seed_from_u64(seed))
    }

    pub fn with_words(
        adjectives: &'static [&'static str],
        nouns: &'static [&'static str],
        rng: StdRng,
    ) -> Self {
        Self {
            adjectives,
            nouns,
            rng: Mutex::new(rng),
        }
    }

    /// Produce a fresh label such as `calm-otter-007`.
    pub fn generate(&self) -> String {
        if self.adjectives.is_empty() || self.nouns.is_empty() {
            return FALLBACK_LABEL.to_string();
        }
        let mut rng = self.rng.lock();
        let adjective = self.adjectives[rng.random_range(0..self.adjectives.len())];
        let noun = self.nouns[rng.random_range(0..self.nouns.len())];
        let number = rng.random_range(0..1000u32);
        format!("{}-{}-{:03}", adjective, noun, number)
    }
}

impl Default for LabelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
