//! A deterministic UNO table where every seat is played by the same simple
//! policy.
//!
//! ```
//! use autouno::uno::Uno;
//!
//! let mut uno = Uno::new(3);
//! uno.initialize();
//! assert!(uno.get_state().starts_with("player 0's turn, direction: clockwise"));
//!
//! uno.play_turn().unwrap();
//! ```

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod matcher;
pub mod options;
pub mod player;
pub mod reshuffle;
pub mod shuffle;
pub mod state;
pub mod turn;
pub mod uno;
