//! Game configuration options.

use crate::policy::{DEALER_STAND_THRESHOLD, DealerPolicy};

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjduel::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_autoplay(false)
///     .with_reveal_hole_on_player_loss(false);
/// assert_eq!(options.dealer_stand_threshold, 17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Total from which the dealer stands.
    pub dealer_stand_threshold: u32,
    /// Whether standing plays out the whole dealer turn at once.
    ///
    /// When `false`, the dealer is advanced with [`Game::dealer_step`](crate::Game::dealer_step).
    pub dealer_autoplay: bool,
    /// Whether the dealer's hole card is turned up when the player busts or
    /// forfeits.
    pub reveal_hole_on_player_loss: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stand_threshold: DEALER_STAND_THRESHOLD,
            dealer_autoplay: true,
            reveal_hole_on_player_loss: true,
        }
    }
}

impl GameOptions {
    /// Sets the dealer's stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stand_threshold(18);
    /// assert_eq!(options.dealer_stand_threshold, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand_threshold(mut self, threshold: u32) -> Self {
        self.dealer_stand_threshold = threshold;
        self
    }

    /// Sets whether the dealer turn plays out automatically on stand.
    #[must_use]
    pub const fn with_dealer_autoplay(mut self, autoplay: bool) -> Self {
        self.dealer_autoplay = autoplay;
        self
    }

    /// Sets whether the hole card is revealed when the player loses early.
    #[must_use]
    pub const fn with_reveal_hole_on_player_loss(mut self, reveal: bool) -> Self {
        self.reveal_hole_on_player_loss = reveal;
        self
    }

    /// The dealer policy these options describe.
    #[must_use]
    pub const fn dealer_policy(&self) -> DealerPolicy {
        DealerPolicy::new(self.dealer_stand_threshold)
    }
}
