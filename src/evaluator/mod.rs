pub mod cache;
pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use cache::{CachedClassifier, Classifier, DirectClassifier, HandKey};
pub use combinations::{binomial, Combinations};

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::fmt;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Radix used to pack ranks into a tiebreak. Ranks are below 100, so each
/// slot is independent and packed values compare as plain integers.
pub const TIEBREAK_RADIX: u64 = 100;

/// Poker hand category from weakest (1) to strongest (9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category plus tiebreak. The derived ordering compares the category first
/// and the tiebreak second, which is exactly hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Classification {
    pub category: Category,
    pub tiebreak: u64,
}

impl Classification {
    pub const fn new(category: Category, tiebreak: u64) -> Self {
        Self { category, tiebreak }
    }

    /// Collapse into one comparable number: the category sits above every
    /// tiebreak slot (tiebreaks use at most five radix-100 digits).
    pub const fn value(self) -> HandValue {
        HandValue(self.category as u64 * 10_000_000_000 + self.tiebreak)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.tiebreak)
    }
}

/// Compact, comparable hand strength. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The best five cards found in a larger hand, and their classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Evaluation {
    pub best_five: [Card; 5],
    pub classification: Classification,
}

impl Evaluation {
    pub const fn category(&self) -> Category {
        self.classification.category
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("a hand needs at least 5 cards, got {0}")]
    NotEnoughCards(usize),
}

/// Fold ranks, most significant first, into a radix-100 integer.
///
/// ```
/// use hand_ranker::cards::Rank;
/// use hand_ranker::evaluator::pack_tiebreak;
///
/// assert_eq!(pack_tiebreak([Rank::King, Rank::Nine, Rank::Two]), 130902);
/// ```
pub fn pack_tiebreak<I: IntoIterator<Item = Rank>>(ranks: I) -> u64 {
    ranks.into_iter().fold(0, |acc, r| acc * TIEBREAK_RADIX + r.value() as u64)
}

fn check_size(cards: &[Card]) -> Result<(), EvalError> {
    if cards.len() < HAND_SIZE {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }
    Ok(())
}

/// Classification of a hand already known to hold at least five cards.
pub(crate) fn classify_unchecked(cards: &[Card]) -> Classification {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    DETECTORS
        .iter()
        .find_map(|d| d.tiebreak(&analysis).map(|t| Classification::new(d.category(), t)))
        .unwrap_or(Classification::new(Category::HighCard, 0))
}

/// Classify the best five-card hand that can be formed from `cards`.
///
/// Works directly on the whole card set, so a seven-card hand is classified
/// without enumerating its subsets.
///
/// ```
/// use hand_ranker::cards::parse_cards;
/// use hand_ranker::evaluator::{classify, Category};
///
/// let hand = parse_cards("Ac 2d 3h 4s 5c").unwrap();
/// let c = classify(&hand).unwrap();
/// assert_eq!(c.category, Category::Straight);
/// assert_eq!(c.tiebreak, 5);
/// ```
pub fn classify(cards: &[Card]) -> Result<Classification, EvalError> {
    check_size(cards)?;
    Ok(classify_unchecked(cards))
}

/// Pick the strongest five-card subset of `cards` by brute force.
/// On ties the first subset in lexicographic index order wins.
///
/// ```
/// use hand_ranker::cards::parse_cards;
/// use hand_ranker::evaluator::{best_hand, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh 10h 2c 2d").unwrap();
/// let best = best_hand(&cards).unwrap();
/// assert_eq!(best.category(), Category::StraightFlush);
/// assert!(best.best_five.iter().all(|c| c.suit() == cards[0].suit()));
/// ```
pub fn best_hand(cards: &[Card]) -> Result<Evaluation, EvalError> {
    best_hand_with(cards, classify_unchecked)
}

/// Subset search shared with the cached classifier.
pub(crate) fn best_hand_with<F>(
    cards: &[Card],
    mut classify_five: F,
) -> Result<Evaluation, EvalError>
where
    F: FnMut(&[Card]) -> Classification,
{
    check_size(cards)?;
    let mut best: Option<Evaluation> = None;

    for indices in Combinations::new(cards.len(), HAND_SIZE) {
        let five = [
            cards[indices[0]],
            cards[indices[1]],
            cards[indices[2]],
            cards[indices[3]],
            cards[indices[4]],
        ];
        let classification = classify_five(&five);

        if best.as_ref().map_or(true, |b| classification > b.classification) {
            best = Some(Evaluation { best_five: five, classification });
        }
    }

    best.ok_or(EvalError::NotEnoughCards(cards.len()))
}

/// Compare two hands of five or more cards each.
///
/// ```
/// use hand_ranker::cards::parse_cards;
/// use hand_ranker::evaluator::compare;
/// use std::cmp::Ordering;
///
/// let wheel = parse_cards("Ac 2d 3h 4s 5c").unwrap();
/// let six_high = parse_cards("2c 3d 4h 5s 6c").unwrap();
/// assert_eq!(compare(&wheel, &six_high).unwrap(), Ordering::Less);
/// ```
pub fn compare(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    let ca = classify(a)?;
    let cb = classify(b)?;
    Ok(ca.cmp(&cb))
}

/// [`compare`] as a sign: 1 when `a` wins, -1 when `b` wins, 0 on a tie.
pub fn comparator(a: &[Card], b: &[Card]) -> Result<i8, EvalError> {
    compare(a, b).map(|ord| ord as i8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).expect("valid cards")
    }

    #[test]
    fn too_few_cards_errors() {
        let hand = cards("As Ks Qs Js");
        assert_eq!(classify(&hand), Err(EvalError::NotEnoughCards(4)));
        assert_eq!(best_hand(&hand), Err(EvalError::NotEnoughCards(4)));
        assert!(compare(&hand, &cards("2c 3c 4c 5c 6c")).is_err());
        assert!(compare(&cards("2c 3c 4c 5c 6c"), &[]).is_err());
    }

    #[test]
    fn category_ordinals_ascend_with_strength() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.ordinal() as usize, i + 1);
        }
        assert!(Category::StraightFlush > Category::HighCard);
    }

    #[test]
    fn classification_orders_category_before_tiebreak() {
        let weak_flush = Classification::new(Category::Flush, 1);
        let strong_straight = Classification::new(Category::Straight, 14);
        assert!(weak_flush > strong_straight);
        assert!(weak_flush.value() > strong_straight.value());
    }

    #[test]
    fn value_is_order_preserving_at_the_extremes() {
        let best_high_card = classify(&cards("As Kd Qh Js 9c")).unwrap();
        let worst_pair = classify(&cards("2s 2d 3h 4s 5c")).unwrap();
        assert!(best_high_card < worst_pair);
        assert!(best_high_card.value() < worst_pair.value());
    }

    #[test]
    fn classify_each_category() {
        let cases = [
            ("2c 3c 4c 5c 6c", Category::StraightFlush, 6),
            ("2c 2d 2h 2s 6c", Category::FourOfAKind, 2),
            ("2c 2d 2h 6s 6c", Category::FullHouse, 2),
            ("2c 3c 4c 5c 7c", Category::Flush, 7_05_04_03_02),
            ("2c 3c 4c 5c 6d", Category::Straight, 6),
            ("2c 2d 2h 5s 6c", Category::ThreeOfAKind, 2_06_05),
            ("2c 2d 4h 6s 6c", Category::TwoPair, 6_02_04),
            ("2c 2d 3c 4c 6c", Category::Pair, 2_06_04_03),
            ("2c 3c 4c 5c 7d", Category::HighCard, 7_05_04_03_02),
        ];
        for (hand, category, tiebreak) in cases {
            let expected = Classification::new(category, tiebreak);
            assert_eq!(classify(&cards(hand)).unwrap(), expected, "{hand}");
        }
    }

    #[test]
    fn full_house_is_never_trips() {
        let c = classify(&cards("9c 9d 9h 4s 4c 2d Kh")).unwrap();
        assert_eq!(c.category, Category::FullHouse);
        assert_eq!(c.tiebreak, 9);
    }

    #[test]
    fn best_hand_matches_direct_classification() {
        let hand = cards("As Ah Kd Kc Qs Qh 2c");
        let best = best_hand(&hand).unwrap();
        assert_eq!(best.classification, classify(&hand).unwrap());
        assert_eq!(best.category(), Category::TwoPair);
    }

    #[test]
    fn best_hand_prefers_first_subset_on_ties() {
        // AAKK with either deuce as kicker ties; the first subset keeps 2s.
        let hand = cards("As Ah Kd Kc 2s 2h");
        let best = best_hand(&hand).unwrap();
        assert_eq!(best.best_five, [hand[0], hand[1], hand[2], hand[3], hand[4]]);
    }

    #[test]
    fn comparator_signs() {
        let a = cards("2c 3c 4c 5c 6c");
        let b = cards("2d 3d 4d 5d 6d");
        let c = cards("2c 2d 2h 2s 6c");
        assert_eq!(comparator(&a, &b).unwrap(), 0);
        assert_eq!(comparator(&a, &c).unwrap(), 1);
        assert_eq!(comparator(&c, &a).unwrap(), -1);
    }
}
