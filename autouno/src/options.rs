//! Game configuration.

use crate::constants::{DEFAULT_HAND_SIZE, DEFAULT_SEED};

/// Knobs for a game. The defaults reproduce the classic table: every shuffle
/// seeded with 1234 and seven cards dealt to each player.
///
/// ```
/// use autouno::options::GameOptions;
///
/// let options = GameOptions::default().with_seed(7).with_hand_size(5);
/// assert_eq!(options.seed, 7);
/// assert_eq!(options.hand_size, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// Seed passed to every shuffle, including reshuffles.
    pub seed: u64,
    /// Cards dealt to each player by `initialize`.
    pub hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl GameOptions {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_table() {
        let options = GameOptions::default();
        assert_eq!(options.seed, 1234);
        assert_eq!(options.hand_size, 7);
    }
}
