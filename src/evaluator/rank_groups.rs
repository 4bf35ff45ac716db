use crate::cards::{Card, Rank};

/// Rank multiplicities of a hand, kept as a fixed-size count array
/// indexed by rank value (2..=14).
///
/// Example: AAAKQ has counts[14] = 3, counts[13] = 1, counts[12] = 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; 15],
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            let slot = &mut counts[card.rank().value() as usize];
            *slot = slot.saturating_add(1);
        }
        Self::from_counts(&counts)
    }

    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        Self { counts: *rank_counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Ranks appearing exactly `n` times, in descending order.
    fn with_count(&self, n: u8) -> Vec<Rank> {
        Rank::ALL.iter().rev().copied().filter(|&r| self.count(r) == n).collect()
    }

    /// Returns the highest rank appearing four (or more) times, if any.
    pub fn quad(&self) -> Option<Rank> {
        Rank::ALL.iter().rev().copied().find(|&r| self.count(r) >= 4)
    }

    /// Returns all three-of-a-kind ranks, in descending order.
    pub fn triples(&self) -> Vec<Rank> {
        self.with_count(3)
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2)
    }

    /// Returns all singleton ranks, in descending order.
    pub fn singles(&self) -> Vec<Rank> {
        self.with_count(1)
    }

    /// Two triples, or a triple plus a pair.
    pub fn has_full_house(&self) -> bool {
        let triples = self.triples().len();
        triples >= 2 || (triples == 1 && !self.pairs().is_empty())
    }
}
