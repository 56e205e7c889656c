//! Fixed dealer strategy.

use crate::hand::BLACKJACK;

/// Total at which a standard dealer stops drawing.
pub const DEALER_STAND_THRESHOLD: u32 = 17;

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealerAction {
    /// Take another card.
    Draw,
    /// Keep the current total.
    Stand,
    /// The hand is over 21.
    Bust,
}

/// The dealer's decision rule.
///
/// The dealer draws below the threshold and stands from it up to 21, soft
/// or hard alike. It never looks at the player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    stand_threshold: u32,
}

impl DealerPolicy {
    /// Creates a policy that stands from `stand_threshold` upward.
    #[must_use]
    pub const fn new(stand_threshold: u32) -> Self {
        Self { stand_threshold }
    }

    /// The total from which the dealer stands.
    #[must_use]
    pub const fn stand_threshold(&self) -> u32 {
        self.stand_threshold
    }

    /// Decides the dealer's next action for the given hand total.
    #[must_use]
    pub const fn decide(&self, dealer_total: u32) -> DealerAction {
        if dealer_total > BLACKJACK {
            DealerAction::Bust
        } else if dealer_total < self.stand_threshold {
            DealerAction::Draw
        } else {
            DealerAction::Stand
        }
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(DEALER_STAND_THRESHOLD)
    }
}

/// Standard dealer decision: draw below 17, stand on 17 through 21, bust
/// above 21.
///
/// ```
/// use bjduel::policy::{DealerAction, decide};
///
/// assert_eq!(decide(16), DealerAction::Draw);
/// assert_eq!(decide(17), DealerAction::Stand);
/// assert_eq!(decide(22), DealerAction::Bust);
/// ```
#[must_use]
pub const fn decide(dealer_total: u32) -> DealerAction {
    DealerPolicy::new(DEALER_STAND_THRESHOLD).decide(dealer_total)
}
