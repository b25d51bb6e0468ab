//! mmillion: rules engine for a trick-taking game with four colour suits and
//! three animal cards (Bear, Bull, Tiger).
//!
//! The engine answers four questions and nothing else:
//! - what the deck looks like ([`deck`]);
//! - which card wins a trick ([`trick::winner`]);
//! - what a pile of won cards is worth ([`scoring::score_hand`]);
//! - whether a card may be played ([`play::valid_play`]).
//!
//! Every function is pure. Turn order, players, bidding and the trump-broken
//! flag belong to the caller; see [`rules`] for the bidding thresholds.
//!
//! ## Quick start: resolve a trick
//! ```
//! use mmillion::cards::{parse_cards, Suit};
//! use mmillion::scoring::score_hand;
//! use mmillion::trick::winner;
//!
//! let trick = parse_cards("Black 10; Black 30; Black 40; Tiger").unwrap();
//! assert_eq!(winner(Suit::Black, &trick), Ok(3));
//! assert_eq!(score_hand(&trick), 80_000);
//! ```

pub mod cards;
pub mod deck;
pub mod play;
pub mod rules;
pub mod scoring;
pub mod trick;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
