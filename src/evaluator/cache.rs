//! Classifier seam with an opt-in lookup table.
//!
//! [`DirectClassifier`] runs the category detectors on every call.
//! [`CachedClassifier`] puts a read-through table in front of them, keyed by
//! the sorted five-card hand; it can be filled lazily or all at once with
//! [`CachedClassifier::precompute`]. Both return identical classifications, so
//! callers and tests can swap one for the other.

use super::{best_hand_with, classify, classify_unchecked, Classification, EvalError, HAND_SIZE};
use crate::cards::Card;
use crate::deck::Deck;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

/// Anything that can classify a hand of five or more cards.
pub trait Classifier {
    fn classify(&self, cards: &[Card]) -> Result<Classification, EvalError>;
}

/// Classifier that evaluates every hand from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectClassifier;

impl Classifier for DirectClassifier {
    fn classify(&self, cards: &[Card]) -> Result<Classification, EvalError> {
        classify(cards)
    }
}

/// Order-independent key of a five-card hand: the sorted card indices,
/// six bits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandKey(u32);

impl HandKey {
    pub fn from_five(cards: &[Card; 5]) -> Self {
        let mut idx = (*cards).map(Card::index);
        idx.sort_unstable();
        HandKey(idx.iter().fold(0u32, |k, &i| (k << 6) | i as u32))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Number of distinct five-card hands in a 52-card deck.
pub const FIVE_CARD_HANDS: usize = 2_598_960;

/// Read-through cache over the direct classifier.
///
/// Misses are computed and stored; hits are served from the table. The
/// table sits behind an `RwLock`, so a filled cache can be shared between
/// threads and read without contention.
#[derive(Debug, Default)]
pub struct CachedClassifier {
    table: RwLock<HashMap<HandKey, Classification>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cache already holding every five-card hand.
    pub fn precomputed() -> Self {
        let cache = Self::new();
        cache.precompute();
        cache
    }

    /// Classify all C(52,5) hands into the table in one batch.
    pub fn precompute(&self) {
        self.precompute_from(Deck::standard().as_slice());
    }

    /// Store every five-card subset of `cards`, logging progress every 10%.
    pub(crate) fn precompute_from(&self, cards: &[Card]) {
        let total = super::binomial(cards.len(), HAND_SIZE);
        let step = (total / 10).max(1);

        info!("Computing {total} hand classifications");
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let stored = table.len();
        table.reserve(total.saturating_sub(stored));
        for (n, idx) in super::Combinations::new(cards.len(), HAND_SIZE).enumerate() {
            let five = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
            table.entry(HandKey::from_five(&five)).or_insert_with(|| classify_unchecked(&five));
            if (n + 1) % step == 0 {
                info!("{}% done", (n + 1) * 100 / total);
            }
        }
        info!("Got {} hands total", table.len());
    }

    /// Classify exactly five cards through the table.
    pub fn lookup(&self, five: &[Card; 5]) -> Classification {
        let key = HandKey::from_five(five);
        let cached = self.table.read().unwrap_or_else(PoisonError::into_inner).get(&key).copied();
        if let Some(c) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return c;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let c = classify_unchecked(five);
        debug!("cache miss for key {:#x}: {c}", key.raw());
        self.table.write().unwrap_or_else(PoisonError::into_inner).insert(key, c);
        c
    }

    /// Number of stored hands.
    pub fn len(&self) -> usize {
        self.table.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Classifier for CachedClassifier {
    /// Five cards go straight to the table; larger hands take the best of
    /// their five-card subsets, each looked up in the table.
    fn classify(&self, cards: &[Card]) -> Result<Classification, EvalError> {
        if let Ok(five) = <&[Card; 5]>::try_from(cards) {
            return Ok(self.lookup(five));
        }
        best_hand_with(cards, |sub| match <&[Card; 5]>::try_from(sub) {
            Ok(five) => self.lookup(five),
            Err(_) => classify_unchecked(sub),
        })
        .map(|e| e.classification)
    }
}
