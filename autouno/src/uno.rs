use tracing::{debug, info, warn};

use crate::card::Card;
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::matcher::{can_follow, select_playable};
use crate::options::GameOptions;
use crate::player::Player;
use crate::reshuffle::{self, DrawOutcome};
use crate::shuffle::{SeededShuffler, Shuffle};
use crate::state::GameState;
use crate::turn::{CardEffect, PlayTurnResult, TurnActionResult};

/// A game where every player is automated.
///
/// Each [`Uno::play_turn`] call plays exactly one turn for the current
/// player: the first card picked by [`select_playable`] is played, or a card
/// is drawn and played straight away if it can follow the top card.
///
/// After any play that did not win, the turn moves on one seat *in addition*
/// to whatever the card itself did. A Skip therefore jumps two seats, and a
/// Reverse at a two player table hands the turn back to whoever played it.
#[derive(Debug)]
pub struct Uno<S = SeededShuffler> {
    state: GameState,
    options: GameOptions,
    shuffler: S,
}

impl Uno {
    /// Creates an undealt game. `num_players` is clamped to 2..=4.
    pub fn new(num_players: usize) -> Self {
        Self::with_shuffler(num_players, SeededShuffler)
    }
}

impl<S: Shuffle> Uno<S> {
    pub fn with_shuffler(num_players: usize, shuffler: S) -> Self {
        Self::with_options(num_players, GameOptions::default(), shuffler)
    }

    pub fn with_options(num_players: usize, options: GameOptions, shuffler: S) -> Self {
        let players = num_players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        if players != num_players {
            warn!(requested = num_players, players, "player count clamped");
        }

        Self {
            state: GameState::new(players),
            options,
            shuffler,
        }
    }

    /// Shuffles a fresh deck, deals every hand round-robin starting with
    /// player 0 and turns up the first card of the discard pile.
    ///
    /// Any game in progress is thrown away.
    pub fn initialize(&mut self) {
        let players = self.state.num_players();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return;
        }

        self.state.reset();

        let mut deck = Deck::new();
        if deck.is_empty() {
            debug!("empty catalog, nothing to deal");
            return;
        }
        deck.shuffle(&self.shuffler, self.options.seed);
        self.state.deck = deck;

        'deal: for _ in 0..self.options.hand_size {
            for player in &mut self.state.players {
                let Some(card) = self.state.deck.draw() else {
                    break 'deal;
                };
                player.add_card(card);
            }
        }

        if let Some(card) = self.state.deck.draw() {
            self.state.discard_pile.push(card);
        }

        info!(
            players,
            seed = self.options.seed,
            top = ?self.state.top_card(),
            "game initialized"
        );
    }

    /// Plays one turn for the current player.
    ///
    /// Returns an error, and changes nothing, if the game is over, has not
    /// been initialized, or the current player is not seated.
    pub fn play_turn(&mut self) -> Result<PlayTurnResult> {
        if self.state.is_game_over() {
            return Err(UnoError::GameOver);
        }

        let player = self.state.current_player;
        let players = self.state.num_players();
        if player >= players {
            return Err(UnoError::PlayerOutOfRange {
                index: player,
                players,
            });
        }

        let top = *self.state.top_card().ok_or(UnoError::NotInitialized)?;
        let fabricated_before = self.state.fabricated_cards;

        let turn_action_result = match select_playable(&self.state.players[player].hand, &top) {
            Some(index) => {
                let card = self.state.players[player].remove_card(index);
                self.state.discard_pile.push(card);
                debug!(player, %card, %top, "played card");

                if self.state.players[player].hand.is_empty() {
                    self.state.winner = Some(player);
                    info!(player, %card, "player won");

                    return Ok(PlayTurnResult {
                        player,
                        turn_action_result: TurnActionResult::Played {
                            card,
                            effect: CardEffect::Neutral,
                        },
                        won: true,
                        exhausted_draws: self.state.fabricated_cards - fabricated_before,
                    });
                }

                let effect = self.apply_effect(card);
                TurnActionResult::Played { card, effect }
            }
            None => {
                let card = self.draw_card().card();
                self.state.players[player].add_card(card);

                // The drawn card is still the last one in hand.
                if can_follow(&card, &top) {
                    self.state.players[player].hand.pop();
                    self.state.discard_pile.push(card);
                    debug!(player, %card, %top, "played drawn card");

                    let effect = self.apply_effect(card);
                    TurnActionResult::SelfDrawPlayed { card, effect }
                } else {
                    debug!(player, %card, %top, "drew unplayable card");
                    TurnActionResult::SelfDraw { card }
                }
            }
        };

        self.state.advance();

        Ok(PlayTurnResult {
            player,
            turn_action_result,
            won: false,
            exhausted_draws: self.state.fabricated_cards - fabricated_before,
        })
    }

    /// Plays turns until someone wins or `max_turns` turns have been played.
    pub fn run(&mut self, max_turns: usize) -> Option<usize> {
        for _ in 0..max_turns {
            if self.play_turn().is_err() || self.is_game_over() {
                break;
            }
        }

        self.get_winner()
    }

    pub fn is_initialized(&self) -> bool {
        !self.state.discard_pile.is_empty()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn get_winner(&self) -> Option<usize> {
        self.state.winner()
    }

    /// See [`GameState::snapshot`]; empty until the game is initialized.
    pub fn get_state(&self) -> String {
        self.state.snapshot().unwrap_or_default()
    }

    pub fn get_current_player(&self) -> usize {
        self.state.current_player()
    }

    pub fn get_top_card(&self) -> Option<&Card> {
        self.state.top_card()
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.state.get_player(index)
    }

    pub fn get_player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.state.get_player_mut(index)
    }

    pub fn get_game_state(&self) -> &GameState {
        &self.state
    }

    pub fn get_game_state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn get_options(&self) -> &GameOptions {
        &self.options
    }

    fn draw_card(&mut self) -> DrawOutcome {
        let outcome = reshuffle::draw_card(
            &mut self.state.deck,
            &mut self.state.discard_pile,
            &self.shuffler,
            self.options.seed,
        );
        if outcome.is_exhausted() {
            self.state.fabricated_cards += 1;
        }
        outcome
    }

    fn apply_effect(&mut self, card: Card) -> CardEffect {
        let effect = CardEffect::from(card.kind);

        match effect {
            CardEffect::Neutral => {}
            CardEffect::Skip => self.state.advance(),
            CardEffect::Reverse => {
                self.state.clockwise = !self.state.clockwise;
                if self.state.num_players() == 2 {
                    self.state.advance();
                }
            }
            CardEffect::DrawTwo => {
                self.state.advance();
                let victim = self.state.current_player;
                for _ in 0..2 {
                    let card = self.draw_card().card();
                    self.state.players[victim].add_card(card);
                }
                debug!(player = victim, "drew two cards");
            }
        }

        effect
    }
}
