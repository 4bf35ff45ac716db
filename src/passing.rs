//! Card-passing game explorer.
//!
//! Two players each hold `hand_size` cards and simultaneously pass
//! `pass_count` of them to the other. Every pair of passes is played out with
//! the hand comparator, giving a payoff matrix; a player has a winning play
//! when one of their passes never loses whatever the opponent passes.

use crate::cards::Card;
use crate::deck::{Deck, DECK_SIZE};
use crate::evaluator::{comparator, Combinations, EvalError, HAND_SIZE};
use log::{debug, info};
use rand::Rng;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PassingError {
    #[error("cannot pass {pass_count} cards from a hand of {hand_size}")]
    PassCount { pass_count: usize, hand_size: usize },
    #[error("hands of {0} cards are too small to form a poker hand")]
    HandTooSmall(usize),
    #[error("a 52-card deck cannot deal two hands of {0} cards")]
    DeckTooSmall(usize),
    #[error("expected a hand of {expected} cards, got {actual}")]
    HandSize { expected: usize, actual: usize },
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Shape of a passing game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassingConfig {
    pub hand_size: usize,
    pub pass_count: usize,
}

impl Default for PassingConfig {
    fn default() -> Self {
        Self { hand_size: 8, pass_count: 4 }
    }
}

impl PassingConfig {
    pub fn validate(&self) -> Result<(), PassingError> {
        if self.pass_count > self.hand_size {
            return Err(PassingError::PassCount {
                pass_count: self.pass_count,
                hand_size: self.hand_size,
            });
        }
        if self.hand_size < HAND_SIZE {
            return Err(PassingError::HandTooSmall(self.hand_size));
        }
        if self.hand_size * 2 > DECK_SIZE {
            return Err(PassingError::DeckTooSmall(self.hand_size));
        }
        Ok(())
    }

    /// Every possible pass, as sorted hand positions, in lexicographic order.
    pub fn passes(&self) -> Combinations {
        Combinations::new(self.hand_size, self.pass_count)
    }

    /// The pass used for row (or column) `index` of a payoff matrix.
    pub fn pass_at(&self, index: usize) -> Option<Vec<usize>> {
        self.passes().nth(index)
    }
}

/// Result of swapping cards: player A keeps what it did not pass and gains
/// what B passed, and the other way round.
pub fn exchange(
    a: &[Card],
    b: &[Card],
    pass_a: &[usize],
    pass_b: &[usize],
) -> (Vec<Card>, Vec<Card>) {
    let mut new_a = Vec::with_capacity(a.len());
    let mut new_b = Vec::with_capacity(b.len());
    for (i, &card) in a.iter().enumerate() {
        if pass_a.contains(&i) {
            new_b.push(card);
        } else {
            new_a.push(card);
        }
    }
    for (i, &card) in b.iter().enumerate() {
        if pass_b.contains(&i) {
            new_a.push(card);
        } else {
            new_b.push(card);
        }
    }
    (new_a, new_b)
}

/// Outcomes of every pass pair. Cell `(i, j)` is the comparator sign of A's
/// hand against B's when A makes pass `i` and B makes pass `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoffMatrix {
    passes: Vec<Vec<usize>>,
    cells: Vec<i8>,
}

impl PayoffMatrix {
    pub(crate) fn from_cells(passes: Vec<Vec<usize>>, cells: Vec<i8>) -> Self {
        debug_assert_eq!(passes.len() * passes.len(), cells.len());
        Self { passes, cells }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.passes.len()
    }

    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[row * self.size() + col]
    }

    pub fn row(&self, row: usize) -> &[i8] {
        let n = self.size();
        &self.cells[row * n..(row + 1) * n]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = i8> + '_ {
        self.cells.iter().skip(col).step_by(self.size().max(1)).copied()
    }

    /// Hand positions passed for row/column `index`.
    pub fn pass(&self, index: usize) -> &[usize] {
        &self.passes[index]
    }
}

/// Build the payoff matrix for two dealt hands.
pub fn payoff_matrix(
    a: &[Card],
    b: &[Card],
    config: &PassingConfig,
) -> Result<PayoffMatrix, PassingError> {
    config.validate()?;
    for hand in [a, b] {
        if hand.len() != config.hand_size {
            return Err(PassingError::HandSize { expected: config.hand_size, actual: hand.len() });
        }
    }

    let passes: Vec<Vec<usize>> = config.passes().collect();
    let mut cells = Vec::with_capacity(passes.len() * passes.len());
    for pass_a in &passes {
        for pass_b in &passes {
            let (new_a, new_b) = exchange(a, b, pass_a, pass_b);
            cells.push(comparator(&new_a, &new_b)?);
        }
    }
    Ok(PayoffMatrix::from_cells(passes, cells))
}

/// Who, if anyone, can force a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Row `row` never loses for player A.
    PlayerA { row: usize, pass: Vec<usize> },
    /// Column `col` never loses for player B.
    PlayerB { col: usize, pass: Vec<usize> },
    NoWinningPlay,
}

impl Outcome {
    pub fn sign(&self) -> i8 {
        match self {
            Outcome::PlayerA { .. } => 1,
            Outcome::PlayerB { .. } => -1,
            Outcome::NoWinningPlay => 0,
        }
    }
}

/// A wins if some row holds no -1; failing that, B wins if some column
/// holds no +1. Player A is checked first.
pub fn find_winning_play(matrix: &PayoffMatrix) -> Outcome {
    let n = matrix.size();
    if let Some(row) = (0..n).find(|&i| matrix.row(i).iter().all(|&v| v != -1)) {
        return Outcome::PlayerA { row, pass: matrix.pass(row).to_vec() };
    }
    if let Some(col) = (0..n).find(|&j| matrix.column(j).all(|v| v != 1)) {
        return Outcome::PlayerB { col, pass: matrix.pass(col).to_vec() };
    }
    Outcome::NoWinningPlay
}

/// Running count of outcomes over many deals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub player_a: u64,
    pub player_b: u64,
    pub no_winning_play: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::PlayerA { .. } => self.player_a += 1,
            Outcome::PlayerB { .. } => self.player_b += 1,
            Outcome::NoWinningPlay => self.no_winning_play += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.player_a + self.player_b + self.no_winning_play
    }

    /// Share of deals where one player could force a win.
    pub fn decided_fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.player_a + self.player_b) as f64 / total as f64,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A: {}, B: {}, none: {}, decided: {:.3}",
            self.player_a,
            self.player_b,
            self.no_winning_play,
            self.decided_fraction()
        )
    }
}

/// Deal `games` random pairs of hands and tally who can force a win.
pub fn explore<R: Rng + ?Sized>(
    config: &PassingConfig,
    games: usize,
    rng: &mut R,
) -> Result<Tally, PassingError> {
    config.validate()?;
    let mut tally = Tally::default();

    for game in 0..games {
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        let (a, b) =
            deck.deal_two(config.hand_size).ok_or(PassingError::DeckTooSmall(config.hand_size))?;
        let matrix = payoff_matrix(&a, &b, config)?;
        let outcome = find_winning_play(&matrix);
        debug!("game {game}: A={a:?} B={b:?} -> {outcome:?}");
        tally.record(&outcome);
    }

    info!("{tally}");
    Ok(tally)
}
