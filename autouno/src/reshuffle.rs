use tracing::{debug, warn};

use crate::{
    card::Card,
    constants::SENTINEL_CARD,
    deck::{Deck, DiscardPile},
    shuffle::Shuffle,
};

/// How a single draw was satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(Card),
    /// Deck and discard pile were both exhausted, so [`SENTINEL_CARD`] was
    /// made up. Every such draw adds one card to the game.
    Exhausted(Card),
}

impl DrawOutcome {
    pub fn card(&self) -> Card {
        match self {
            DrawOutcome::Drawn(card) | DrawOutcome::Exhausted(card) => *card,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, DrawOutcome::Exhausted(_))
    }
}

/// Moves everything under the top card of `discard_pile` into `deck` and
/// shuffles it. Returns `false` when there was nothing to move.
pub(crate) fn reclaim_discards<S: Shuffle + ?Sized>(
    deck: &mut Deck,
    discard_pile: &mut DiscardPile,
    shuffler: &S,
    seed: u64,
) -> bool {
    if discard_pile.cards_count() <= 1 {
        return false;
    }

    let Some(top) = discard_pile.0.pop() else {
        return false;
    };
    deck.0.append(&mut discard_pile.0);
    discard_pile.push(top);
    deck.shuffle(shuffler, seed);

    debug!(cards = deck.cards_count(), %top, "reshuffled discard pile into deck");
    true
}

/// Draws one card, reshuffling the discard pile first if the deck is empty.
pub(crate) fn draw_card<S: Shuffle + ?Sized>(
    deck: &mut Deck,
    discard_pile: &mut DiscardPile,
    shuffler: &S,
    seed: u64,
) -> DrawOutcome {
    if deck.is_empty() {
        reclaim_discards(deck, discard_pile, shuffler, seed);
    }

    match deck.draw() {
        Some(card) => DrawOutcome::Drawn(card),
        None => {
            warn!(card = %SENTINEL_CARD, "deck and discard pile exhausted, fabricating card");
            DrawOutcome::Exhausted(SENTINEL_CARD)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        card::{CardColor, CardKind},
        shuffle::{IdentityShuffler, ReverseShuffler},
    };

    fn red(number: u8) -> Card {
        Card::number(CardColor::Red, number)
    }

    #[test]
    fn draws_from_deck_when_available() {
        let mut deck = Deck::from_cards(vec![red(1), red(2)]);
        let mut discard_pile = DiscardPile::from_cards(vec![red(3)]);

        let outcome = draw_card(&mut deck, &mut discard_pile, &IdentityShuffler, 0);

        assert_eq!(outcome, DrawOutcome::Drawn(red(2)));
        assert_eq!(deck.cards(), &[red(1)]);
        assert_eq!(discard_pile.cards(), &[red(3)]);
    }

    #[test]
    fn reshuffles_everything_but_the_top_card() {
        let mut deck = Deck::empty();
        let mut discard_pile = DiscardPile::from_cards(vec![red(1), red(2), red(3), red(4)]);

        let outcome = draw_card(&mut deck, &mut discard_pile, &ReverseShuffler, 0);

        // [1, 2, 3] reversed is [3, 2, 1], so 1 comes off the end.
        assert_eq!(outcome, DrawOutcome::Drawn(red(1)));
        assert_eq!(deck.cards(), &[red(3), red(2)]);
        assert_eq!(discard_pile.cards(), &[red(4)]);
    }

    #[test]
    fn fabricates_sentinel_when_only_top_card_remains() {
        let mut deck = Deck::empty();
        let top = Card::new(CardColor::Blue, CardKind::Skip);
        let mut discard_pile = DiscardPile::from_cards(vec![top]);

        let outcome = draw_card(&mut deck, &mut discard_pile, &IdentityShuffler, 0);

        assert_eq!(outcome, DrawOutcome::Exhausted(SENTINEL_CARD));
        assert!(outcome.is_exhausted());
        assert_eq!(outcome.card(), red(0));
        assert_eq!(discard_pile.cards(), &[top]);
        assert!(deck.is_empty());
    }

    #[test]
    fn reclaim_is_noop_with_single_discard() {
        let mut deck = Deck::empty();
        let mut discard_pile = DiscardPile::from_cards(vec![red(5)]);

        assert!(!reclaim_discards(&mut deck, &mut discard_pile, &IdentityShuffler, 0));
        assert!(deck.is_empty());
        assert_eq!(discard_pile.cards_count(), 1);
    }
}
