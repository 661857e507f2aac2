use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, CardKind},
    constants::*,
    shuffle::Shuffle,
};

/// The draw pile. The last card is the one drawn next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the full, unshuffled catalog.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::number(color, *number));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::new(color, CardKind::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::new(color, CardKind::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::new(color, CardKind::DrawTwo));
            }
        }

        Self(cards)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub(crate) fn shuffle<S: Shuffle + ?Sized>(&mut self, shuffler: &S, seed: u64) {
        shuffler.shuffle(&mut self.0, seed);
    }

    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Played cards. The last card is the top card every play must follow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscardPile(pub(crate) Vec<Card>);

impl DiscardPile {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn top(&self) -> Option<&Card> {
        self.0.last()
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
