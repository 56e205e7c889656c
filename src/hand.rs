//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u32 = 21;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u32::from(card.point_value()));
    }

    // Soften one Ace at a time, rechecking after each.
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Scores a run of cards, counting Aces as 1 only as far as needed to stay
/// at or under 21.
///
/// ```
/// use bjduel::{Card, Rank, Suit, hand::total};
///
/// let cards = [Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::Ace, Suit::Hearts)];
/// assert_eq!(total(&cards), 12);
/// ```
#[must_use]
pub fn total(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
}

/// A hand of cards in deal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Side of the table holding the hand.
    owner: Seat,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(owner: Seat) -> Self {
        Self {
            cards: Vec::new(),
            owner,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn owner(&self) -> Seat {
        self.owner
    }

    /// Calculates the total of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn total(&self) -> u32 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns whether the first card is face down.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        self.cards.first().is_some_and(|card| !card.is_face_up())
    }

    /// Turns the first card face up if it is face down.
    ///
    /// Returns `true` if a card was turned.
    pub fn reveal_hole(&mut self) -> bool {
        match self.cards.first_mut() {
            Some(card) if !card.is_face_up() => {
                card.flip();
                true
            }
            _ => false,
        }
    }

    /// Total as a viewer may know it.
    ///
    /// `None` for an empty hand or while the hole card is face down.
    #[must_use]
    pub fn visible_total(&self) -> Option<u32> {
        if self.is_empty() || self.is_hole_hidden() {
            None
        } else {
            Some(self.total())
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
