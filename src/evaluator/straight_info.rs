use crate::cards::Rank;

/// Set of ranks as a bitmask; bit `v` is set when rank value `v` is present.
pub type RankMask = u16;

pub fn rank_bit(rank: Rank) -> RankMask {
    1 << rank.value()
}

/// Whether a set of ranks contains a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Find the highest run of five consecutive ranks in `mask`.
    /// The Ace counts both above the King and below the Two, so A-2-3-4-5
    /// is a straight topped by the Five.
    pub fn from_mask(mask: RankMask) -> Self {
        // Mirror the Ace into the low slot (bit 1).
        let mask = if mask & rank_bit(Rank::Ace) != 0 { mask | 0b10 } else { mask };
        let top_rank = (5u8..=14)
            .rev()
            .find(|&top| {
                let run: RankMask = 0b1_1111 << (top - 4);
                mask & run == run
            })
            .and_then(Rank::from_value);
        StraightInfo { top_rank }
    }

    pub fn from_ranks<I: IntoIterator<Item = Rank>>(ranks: I) -> Self {
        Self::from_mask(ranks.into_iter().fold(0, |m, r| m | rank_bit(r)))
    }
}
