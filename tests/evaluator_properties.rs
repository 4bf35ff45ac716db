use hand_ranker::cards::{Card, Rank, Suit};
use hand_ranker::deck::Deck;
use hand_ranker::evaluator::{
    best_hand, classify, compare, CachedClassifier, Category, Classifier, Combinations,
    DirectClassifier,
};
use proptest::prelude::*;
use std::cmp::Ordering;

/// `n` distinct cards from a standard deck.
fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(Deck::standard().as_slice().to_vec(), n).prop_shuffle()
}

fn distinct_cards_in(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<Card>> {
    range.prop_flat_map(distinct_cards)
}

fn suit_permutation() -> impl Strategy<Value = Vec<Suit>> {
    Just(Suit::ALL.to_vec()).prop_shuffle()
}

fn rank(v: u8) -> Rank {
    Rank::from_value(v).expect("rank value in 2..=14")
}

fn straight_cards(top: u8) -> Vec<Card> {
    let values: Vec<u8> = if top == 5 { vec![14, 2, 3, 4, 5] } else { (top - 4..=top).collect() };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    values.into_iter().zip(suits).map(|(v, s)| Card::new(rank(v), s)).collect()
}

fn flush_rank_set() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == [2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().rev().collect())
}

proptest! {
    #[test]
    fn category_ordinal_is_in_range(cards in distinct_cards_in(5..=9)) {
        let ordinal = classify(&cards).unwrap().category.ordinal();
        prop_assert!((1..=9).contains(&ordinal));
    }

    #[test]
    fn comparison_is_reflexive_and_antisymmetric(a in distinct_cards(7), b in distinct_cards(7)) {
        prop_assert_eq!(compare(&a, &a).unwrap(), Ordering::Equal);
        prop_assert_eq!(compare(&a, &b).unwrap(), compare(&b, &a).unwrap().reverse());
    }

    #[test]
    fn comparison_is_transitive(
        a in distinct_cards(5),
        b in distinct_cards(5),
        c in distinct_cards(5),
    ) {
        let ab = compare(&a, &b).unwrap();
        let bc = compare(&b, &c).unwrap();
        if ab != Ordering::Less && bc != Ordering::Less {
            prop_assert_ne!(compare(&a, &c).unwrap(), Ordering::Less);
        }
    }

    #[test]
    fn relabelling_suits_keeps_the_classification(
        cards in distinct_cards_in(5..=8),
        perm in suit_permutation(),
    ) {
        let relabelled: Vec<Card> = cards
            .iter()
            .map(|c| Card::new(c.rank(), perm[c.suit().index()]))
            .collect();
        prop_assert_eq!(classify(&cards).unwrap(), classify(&relabelled).unwrap());
    }

    #[test]
    fn seven_cards_classify_as_their_best_subset(cards in distinct_cards(7)) {
        let whole = classify(&cards).unwrap();
        let best_subset = Combinations::new(cards.len(), 5)
            .map(|idx| classify(&idx.iter().map(|&i| cards[i]).collect::<Vec<_>>()).unwrap())
            .max()
            .unwrap();
        prop_assert_eq!(whole, best_subset);
    }

    #[test]
    fn best_hand_agrees_with_classify(cards in distinct_cards_in(5..=8)) {
        let eval = best_hand(&cards).unwrap();
        prop_assert_eq!(eval.classification, classify(&cards).unwrap());
        prop_assert_eq!(classify(&eval.best_five).unwrap(), eval.classification);
        prop_assert!(eval.best_five.iter().all(|c| cards.contains(c)));
    }

    #[test]
    fn cached_and_direct_classifiers_agree(cards in distinct_cards_in(5..=7)) {
        let cache = CachedClassifier::new();
        prop_assert_eq!(
            cache.classify(&cards).unwrap(),
            DirectClassifier.classify(&cards).unwrap()
        );
    }

    #[test]
    fn straights_order_by_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let hi = classify(&straight_cards(top_hi)).unwrap();
        let lo = classify(&straight_cards(top_lo)).unwrap();
        prop_assert_eq!(hi.category, Category::Straight);
        prop_assert_eq!(lo.category, Category::Straight);
        prop_assert!(hi > lo);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let hand = |ranks: &[u8]| -> Vec<Card> {
            ranks.iter().map(|&v| Card::new(rank(v), Suit::Hearts)).collect()
        };
        let e_a = classify(&hand(&a)).unwrap();
        let e_b = classify(&hand(&b)).unwrap();
        prop_assert_eq!(e_a.category, Category::Flush);
        prop_assert_eq!(e_b.category, Category::Flush);
        // Both lists are descending, so Vec ordering is the kicker ordering.
        prop_assert_eq!(e_a.cmp(&e_b), a.cmp(&b));
    }
}
