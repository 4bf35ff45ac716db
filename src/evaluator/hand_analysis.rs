use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;

/// Pre-computed analysis of a hand of five or more cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let rank_groups = RankGroups::from_cards(cards);
        let suit_info = SuitInfo::from_cards(cards);
        let straight_info = StraightInfo::from_ranks(cards.iter().map(|c| c.rank()));
        Self { rank_groups, suit_info, straight_info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};

    fn analyze(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    #[test]
    fn test_royal_flush_analysis() {
        let a = analyze("As Ks Qs Js 10s");
        assert_eq!(a.suit_info.flush_suits().collect::<Vec<_>>(), vec![Suit::Spades]);
        assert_eq!(a.straight_info.top_rank, Some(Rank::Ace));
        assert_eq!(a.rank_groups.quad(), None);
        assert!(a.rank_groups.pairs().is_empty());
    }

    #[test]
    fn test_quads_analysis() {
        let a = analyze("As Ah Ad Ac Ks");
        assert_eq!(a.rank_groups.quad(), Some(Rank::Ace));
        assert_eq!(a.rank_groups.singles(), vec![Rank::King]);
        assert_eq!(a.suit_info.flush_suits().count(), 0);
        assert_eq!(a.straight_info.top_rank, None);
    }

    #[test]
    fn test_seven_card_analysis() {
        let a = analyze("9h 8h 7h 6h 5h 5c 5d");
        assert_eq!(a.straight_info.top_rank, Some(Rank::Nine));
        assert_eq!(a.rank_groups.triples(), vec![Rank::Five]);
        assert_eq!(a.suit_info.len(Suit::Hearts), 5);
    }

    #[test]
    fn test_wheel_straight_analysis() {
        let a = analyze("As 2h 3d 4c 5s");
        assert_eq!(a.straight_info.top_rank, Some(Rank::Five));
    }
}
