use crate::{
    card::Card,
    deck::{Deck, DiscardPile},
    player::Player,
};

/// Everything that changes while a game is played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    pub(crate) discard_pile: DiscardPile,
    pub(crate) current_player: usize,
    pub(crate) clockwise: bool,
    pub(crate) winner: Option<usize>,
    pub(crate) fabricated_cards: usize,
}

impl GameState {
    /// Empty hands, no deck and no discard pile.
    pub fn new(num_players: usize) -> Self {
        Self {
            players: (0..num_players).map(Player::new).collect(),
            deck: Deck::empty(),
            discard_pile: DiscardPile::empty(),
            current_player: 0,
            clockwise: true,
            winner: None,
            fabricated_cards: 0,
        }
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn discard_pile_mut(&mut self) -> &mut DiscardPile {
        &mut self.discard_pile
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.top()
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Not range checked; `play_turn` refuses to act for an index outside
    /// the table.
    pub fn set_current_player(&mut self, index: usize) {
        self.current_player = index;
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Sentinel cards made up by draws that found nothing to draw.
    pub fn fabricated_cards(&self) -> usize {
        self.fabricated_cards
    }

    /// Cards in the deck, the discard pile and every hand.
    pub fn total_cards(&self) -> usize {
        self.deck.cards_count()
            + self.discard_pile.cards_count()
            + self.players.iter().map(Player::cards_count).sum::<usize>()
    }

    /// Moves the turn one seat in the current direction.
    pub(crate) fn advance(&mut self) {
        let players = self.num_players();
        if players == 0 {
            return;
        }

        self.current_player = if self.clockwise {
            (self.current_player + 1) % players
        } else {
            (self.current_player + players - 1) % players
        };
    }

    pub(crate) fn reset(&mut self) {
        for player in &mut self.players {
            player.hand.clear();
        }
        self.deck = Deck::empty();
        self.discard_pile = DiscardPile::empty();
        self.current_player = 0;
        self.clockwise = true;
        self.winner = None;
        self.fabricated_cards = 0;
    }

    /// One line summary of the table, or `None` before there is a top card.
    pub fn snapshot(&self) -> Option<String> {
        let top = self.top_card()?;
        if self.current_player >= self.num_players() {
            return None;
        }

        let direction = if self.clockwise {
            "clockwise"
        } else {
            "counter-clockwise"
        };
        let counts = self
            .players
            .iter()
            .map(|player| format!("P{}:{}", player.index, player.cards_count()))
            .collect::<Vec<_>>()
            .join(", ");

        let snapshot = format!(
            "player {}'s turn, direction: {direction}, top: {top}, players cards: {counts}",
            self.current_player
        );

        Some(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, CardKind};

    #[test]
    fn advance_wraps_clockwise() {
        let mut state = GameState::new(4);
        state.current_player = 3;

        state.advance();

        assert_eq!(state.current_player(), 0);
    }

    #[test]
    fn advance_wraps_counter_clockwise() {
        let mut state = GameState::new(3);
        state.clockwise = false;

        state.advance();
        assert_eq!(state.current_player(), 2);

        state.advance();
        assert_eq!(state.current_player(), 1);
    }

    #[test]
    fn players_are_seated_in_order() {
        let state = GameState::new(4);

        for (seat, player) in state.players().iter().enumerate() {
            assert_eq!(player.index, seat);
        }
    }

    #[test]
    fn snapshot_is_empty_without_top_card() {
        let state = GameState::new(2);
        assert_eq!(state.snapshot(), None);
    }

    #[test]
    fn snapshot_lists_every_player() {
        let mut state = GameState::new(3);
        state.discard_pile.push(Card::new(CardColor::Blue, CardKind::DrawTwo));
        state.players[1].add_card(Card::number(CardColor::Red, 2));
        state.clockwise = false;
        state.current_player = 1;

        assert_eq!(
            state.snapshot().unwrap(),
            "player 1's turn, direction: counter-clockwise, top: Blue Draw Two, players cards: P0:0, P1:1, P2:0"
        );
    }

    #[test]
    fn snapshot_is_empty_for_out_of_range_player() {
        let mut state = GameState::new(2);
        state.discard_pile.push(Card::number(CardColor::Red, 2));
        state.current_player = 2;

        assert_eq!(state.snapshot(), None);
    }

    #[test]
    fn reset_clears_cards_and_turn_order() {
        let mut state = GameState::new(2);
        state.players[0].add_card(Card::number(CardColor::Red, 2));
        state.discard_pile.push(Card::number(CardColor::Red, 3));
        state.current_player = 1;
        state.clockwise = false;
        state.winner = Some(1);
        state.fabricated_cards = 2;

        state.reset();

        assert_eq!(state, GameState::new(2));
        assert_eq!(state.total_cards(), 0);
    }
}
