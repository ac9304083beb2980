//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that manages one round's full flow:
//! dealing, the player actions (hit, stand, double, split), dealer play, and
//! settlement. A rule-based basic-strategy advisor ([`suggest`]) and a
//! [`Table`] adapter for request/response callers sit alongside it.
//!
//! Randomness is injected: a [`Round`] is dealt from any [`rand::Rng`], and a
//! fixed draw order can be replayed through [`Shoe::from_draws`]. The whole
//! round state serializes with [`serde`], so a session store can persist it
//! between actions and restore it verbatim.
//!
//! # Example
//!
//! ```
//! use twentyone::{Action, Table};
//!
//! let mut table = Table::new(42);
//! let opening = table.start_round();
//! assert_eq!(opening.player_hands.len(), 1);
//!
//! let advice = table.advice().unwrap();
//! println!("suggested: {advice}");
//!
//! let settled = table.act(Action::Stand).unwrap();
//! assert!(settled.round_over);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;
pub mod shoe;
pub mod snapshot;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ShoeError, TableError};
pub use hand::Hand;
pub use result::Outcome;
pub use round::Round;
pub use shoe::Shoe;
pub use snapshot::RoundSnapshot;
pub use strategy::{Action, suggest};
pub use table::Table;
