use super::straight_info::{rank_bit, RankMask};
use crate::cards::{Card, Rank, Suit};

/// Per-suit rank sets of a hand, used for flush and straight-flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    masks: [RankMask; 4],
}

impl SuitInfo {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut masks = [0; 4];
        for card in cards {
            masks[card.suit().index()] |= rank_bit(card.rank());
        }
        SuitInfo { masks }
    }

    pub fn mask(&self, suit: Suit) -> RankMask {
        self.masks[suit.index()]
    }

    /// Number of distinct ranks held in `suit`.
    pub fn len(&self, suit: Suit) -> usize {
        self.mask(suit).count_ones() as usize
    }

    /// Suits holding at least five distinct ranks.
    pub fn flush_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::ALL.into_iter().filter(move |&s| self.len(s) >= 5)
    }

    /// Ranks held in `suit`, highest first.
    pub fn ranks_desc(&self, suit: Suit) -> impl Iterator<Item = Rank> + '_ {
        let mask = self.mask(suit);
        Rank::ALL.into_iter().rev().filter(move |&r| mask & rank_bit(r) != 0)
    }
}
