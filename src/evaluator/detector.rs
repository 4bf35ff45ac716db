use super::hand_analysis::HandAnalysis;
use super::straight_info::StraightInfo;
use super::{pack_tiebreak, Category, TIEBREAK_RADIX};
use crate::cards::Rank;
use std::iter;

/// Strategy pattern: each detector recognises one category and, when the
/// hand qualifies, produces the tiebreak ranking hands within it.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64>;
}

fn rank_value(rank: Rank) -> u64 {
    rank.value() as u64
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: the best five-run inside any single suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        let suits = &analysis.suit_info;
        suits
            .flush_suits()
            .filter_map(|s| StraightInfo::from_mask(suits.mask(s)).top_rank)
            .max()
            .map(rank_value)
    }
}

/// Four of a Kind: tiebreak is the quad rank alone
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        analysis.rank_groups.quad().map(rank_value)
    }
}

/// Full House: tiebreak is the highest triple rank
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        let groups = &analysis.rank_groups;
        if !groups.has_full_house() {
            return None;
        }
        groups.triples().first().copied().map(rank_value)
    }
}

/// Flush: five highest ranks of the best flush suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        let suits = &analysis.suit_info;
        suits.flush_suits().map(|s| pack_tiebreak(suits.ranks_desc(s).take(5))).max()
    }
}

/// Straight: five consecutive ranks regardless of suit
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        analysis.straight_info.top_rank.map(rank_value)
    }
}

/// Three of a Kind: triple rank, then the two best singles.
/// The triple rank must lead: keying on the kickers alone ties different
/// trips that share kickers.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        let groups = &analysis.rank_groups;
        let trips = groups.triples().first().copied()?;
        Some(pack_tiebreak(iter::once(trips).chain(groups.singles().into_iter().take(2))))
    }
}

/// Two Pair: high pair, low pair, then the best leftover rank.
/// A third pair is not part of the hand, so its rank competes as a kicker.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        let groups = &analysis.rank_groups;
        let pairs = groups.pairs();
        if pairs.len() < 2 {
            return None;
        }
        let singles = groups.singles();
        let kicker = pairs[2..].iter().chain(singles.iter()).copied().max().map_or(0, rank_value);
        Some(pack_tiebreak([pairs[0], pairs[1]]) * TIEBREAK_RADIX + kicker)
    }
}

/// One Pair: pair rank, then the three best singles
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        let groups = &analysis.rank_groups;
        let pair = groups.pairs().first().copied()?;
        let kickers = pack_tiebreak(groups.singles().into_iter().take(3));
        Some(rank_value(pair) * TIEBREAK_RADIX.pow(3) + kickers)
    }
}

/// High Card: five best singles
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<u64> {
        Some(pack_tiebreak(analysis.rank_groups.singles().into_iter().take(5)))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
