use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A standard 52-card deck. Cards are dealt from the top (the end of the
/// underlying vector).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use hand_ranker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle with a ChaCha RNG seeded from `seed`.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Take `n` cards off the top, or nothing if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Option<Vec<Card>> {
        let at = self.cards.len().checked_sub(n)?;
        let mut hand = self.cards.split_off(at);
        hand.reverse();
        Some(hand)
    }

    /// Deal two disjoint hands of `hand_size` cards each, or `None` if the
    /// deck cannot cover both.
    pub fn deal_two(&mut self, hand_size: usize) -> Option<(Vec<Card>, Vec<Card>)> {
        if self.len() < hand_size * 2 {
            return None;
        }
        let a = self.deal(hand_size)?;
        let b = self.deal(hand_size)?;
        Some((a, b))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
