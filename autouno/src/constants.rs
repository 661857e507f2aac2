use strum::EnumCount;

use crate::card::{Card, CardColor};

pub const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub const SKIP_CARDS_PER_COLOR: u8 = 2;
pub const REVERSE_CARDS_PER_COLOR: u8 = 2;
pub const DRAW_TWO_CARDS_PER_COLOR: u8 = 2;

pub const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT) as u8;
pub const SKIP_CARDS_IN_DECK: u8 = SKIP_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub const REVERSE_CARDS_IN_DECK: u8 = REVERSE_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub const DRAW_TWO_CARDS_IN_DECK: u8 = DRAW_TWO_CARDS_PER_COLOR * CardColor::COUNT as u8;

pub const TOTAL_CARDS_IN_DECK: u8 =
    NUMBER_CARDS_IN_DECK + SKIP_CARDS_IN_DECK + REVERSE_CARDS_IN_DECK + DRAW_TWO_CARDS_IN_DECK;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

pub const DEFAULT_HAND_SIZE: usize = 7;
pub const DEFAULT_SEED: u64 = 1234;

/// Handed out when a draw finds both the deck and the discard pile empty.
pub const SENTINEL_CARD: Card = Card::number(CardColor::Red, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_card_count_constants() {
        assert_eq!(NUMBER_CARDS_PER_COLOR.len(), 19);
        assert_eq!(NUMBER_CARDS_IN_DECK, 76);

        assert_eq!(SKIP_CARDS_IN_DECK, 8);

        assert_eq!(REVERSE_CARDS_IN_DECK, 8);

        assert_eq!(DRAW_TWO_CARDS_IN_DECK, 8);

        assert_eq!(TOTAL_CARDS_IN_DECK, 100);
    }
}
