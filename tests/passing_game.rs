use hand_ranker::cards::parse_cards;
use hand_ranker::deck::Deck;
use hand_ranker::evaluator::comparator;
use hand_ranker::passing::{
    explore, find_winning_play, payoff_matrix, Outcome, PassingConfig, PassingError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn passing_nothing_reduces_to_a_plain_comparison() {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(7);
    let (a, b) = deck.deal_two(8).expect("deck holds two hands");
    let config = PassingConfig { hand_size: 8, pass_count: 0 };

    let matrix = payoff_matrix(&a, &b, &config).unwrap();
    assert_eq!(matrix.size(), 1);
    let sign = comparator(&a, &b).unwrap();
    assert_eq!(matrix.get(0, 0), sign);
    let expected = match sign {
        -1 => -1,
        _ => 1,
    };
    assert_eq!(find_winning_play(&matrix).sign(), expected);
}

#[test]
fn passing_the_whole_hand_swaps_the_hands() {
    let a = parse_cards("Ac Ad Ah As 2c").unwrap();
    let b = parse_cards("Kc Kd Qc Qd Jc").unwrap();
    let config = PassingConfig { hand_size: 5, pass_count: 5 };
    let matrix = payoff_matrix(&a, &b, &config).unwrap();
    assert_eq!(matrix.get(0, 0), -1);
    assert!(matches!(find_winning_play(&matrix), Outcome::PlayerB { col: 0, .. }));
}

#[test]
fn default_game_tally_covers_every_deal() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let tally = explore(&PassingConfig::default(), 2, &mut rng).unwrap();
    assert_eq!(tally.total(), 2);
    assert!((0.0..=1.0).contains(&tally.decided_fraction()));
}

#[test]
fn invalid_configs_fail_before_dealing() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let config = PassingConfig { hand_size: 3, pass_count: 1 };
    assert_eq!(explore(&config, 1, &mut rng), Err(PassingError::HandTooSmall(3)));
}
