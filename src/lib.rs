//! A heads-up blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds of one player against
//! a dealer with a fixed drawing rule, and keeps a running win count. The
//! game advances only through [`Command`]s; renderers read a
//! [`TableSnapshot`] after each one.
//!
//! # Example
//!
//! ```
//! use bjduel::{Command, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.apply(Command::StartRound).unwrap();
//! game.apply(Command::Forfeit).unwrap();
//!
//! let table = game.snapshot();
//! assert_eq!(table.banner(), Some("DEALER WINS"));
//! assert_eq!(table.score.pair(), (0, 1));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;
pub mod score;
pub mod snapshot;

// Re-export main types
pub use card::{CARD_BACK, Card, CardFace, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DeckError;
pub use game::{Command, CommandStatus, Game, Phase};
pub use hand::{BLACKJACK, Hand, Seat};
pub use options::GameOptions;
pub use policy::{DealerAction, DealerPolicy};
pub use result::{Outcome, ResolveReason, RoundResult};
pub use score::Scoreboard;
pub use snapshot::{CardView, TableSnapshot};
