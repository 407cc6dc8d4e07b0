//! Fire-once scroll reveal.
//!
//! Every rendered card is observed once. The first time it is reported
//! visible it is revealed and stops being observed; later visibility reports
//! for the same card are ignored until the grid is rendered again.

use std::collections::HashMap;
use std::hash::Hash;

/// Class added to a card when it is revealed.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Delay between cards revealed in the same visibility batch.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Fraction of a card that must be visible to count as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// A card to reveal, with its transition delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal<K> {
    pub key: K,
    pub delay_ms: u32,
}

/// One pending flag per observed card. Cards sharing a key each hold their
/// own flag.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    observed: HashMap<K, usize>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            observed: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every card, as when the grid is cleared for a re-render.
    pub fn reset(&mut self) {
        self.observed.clear();
    }

    pub fn observe(&mut self, key: K) {
        *self.observed.entry(key).or_default() += 1;
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.contains_key(key)
    }

    /// Number of cards still waiting for their first reveal.
    pub fn observed_len(&self) -> usize {
        self.observed.values().sum()
    }

    fn consume(&mut self, key: &K) -> bool {
        match self.observed.get_mut(key) {
            Some(pending) if *pending > 1 => {
                *pending -= 1;
                true
            }
            Some(_) => {
                self.observed.remove(key);
                true
            }
            None => false,
        }
    }

    /// Handle one batch of visibility reports, `(card, is_visible)` in
    /// delivery order. The stagger uses the position within the batch.
    pub fn on_visibility<I>(&mut self, batch: I) -> Vec<Reveal<K>>
    where
        I: IntoIterator<Item = (K, bool)>,
    {
        let mut reveals = Vec::new();
        for (index, (key, visible)) in batch.into_iter().enumerate() {
            if visible && self.consume(&key) {
                let delay_ms = u32::try_from(index)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(REVEAL_STAGGER_MS);
                reveals.push(Reveal { key, delay_ms });
            }
        }
        reveals
    }
}
