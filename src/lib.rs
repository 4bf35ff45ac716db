//! hand-ranker: poker hand classification and comparison
//!
//! Goals:
//! - Classify any set of five or more cards into its best poker hand
//! - A total order over hands: category first, then a packed tiebreak
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two hands
//! ```
//! use hand_ranker::cards::parse_cards;
//! use hand_ranker::evaluator::{classify, compare, Category};
//! use std::cmp::Ordering;
//!
//! let full_house = parse_cards("2c 2d 2h 6s 6c").unwrap();
//! let flush = parse_cards("2c 3c 4c 5c 7c").unwrap();
//!
//! assert_eq!(classify(&full_house).unwrap().category, Category::FullHouse);
//! assert_eq!(compare(&full_house, &flush).unwrap(), Ordering::Greater);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin hand-ranker -- compare "Ac 2d 3h 4s 5c" "2c 3d 4h 5s 6c"
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod passing;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
