//! The shuffled 52-card deck.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single deck of 52 distinct cards.
///
/// The deck rebuilds itself as soon as its last card is dealt, so callers
/// never see it empty. Cards waiting in the deck are face down.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
    /// Number of automatic rebuilds so far.
    rebuilds: u32,
    /// Shuffle source.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Builds and shuffles a fresh deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(&mut rng);
        Self {
            cards,
            rebuilds: 0,
            rng,
        }
    }

    /// Creates a deck that deals `draws` first, in order.
    ///
    /// The cards are turned face down. Once they run out the deck rebuilds
    /// a shuffled 52-card deck from `seed` like any other. Uniqueness is not
    /// checked for the staged cards.
    #[must_use]
    pub fn from_draw_order(draws: &[Card], seed: u64) -> Self {
        let mut cards: Vec<Card> = draws
            .iter()
            .map(|card| Card::with_face(card.rank(), card.suit(), false))
            .collect();
        cards.reverse();

        let mut deck = Self {
            cards,
            rebuilds: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.rebuild_if_empty();
        deck
    }

    /// Creates the 52 canonical cards, face down, and shuffles them.
    fn build(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::with_face(rank, suit, false));
            }
        }

        cards.shuffle(rng);
        cards
    }

    fn rebuild_if_empty(&mut self) {
        if self.cards.is_empty() {
            self.cards = Self::build(&mut self.rng);
            self.rebuilds += 1;
            log::info!("deck exhausted, rebuilt (rebuild #{})", self.rebuilds);
        }
    }

    /// Removes and returns the top card.
    ///
    /// If this empties the deck, a fresh shuffled deck replaces it before
    /// returning; the returned card is still the old deck's last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyAfterRebuild`] if the deck is still empty
    /// after rebuilding. This indicates a bug and does not happen in practice.
    pub fn draw_top(&mut self) -> Result<Card, DeckError> {
        self.rebuild_if_empty();
        let card = self.cards.pop().ok_or(DeckError::EmptyAfterRebuild)?;
        self.rebuild_if_empty();
        Ok(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty. Always `false` between draws.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many times the deck has rebuilt itself.
    #[must_use]
    pub const fn rebuilds(&self) -> u32 {
        self.rebuilds
    }

    /// Remaining cards from the top down.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}
