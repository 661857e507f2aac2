use crate::card::{Card, CardKind};

/// What a played card did to the turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
}

impl From<CardKind> for CardEffect {
    fn from(kind: CardKind) -> Self {
        match kind {
            CardKind::Number(_) => CardEffect::Neutral,
            CardKind::Skip => CardEffect::Skip,
            CardKind::Reverse => CardEffect::Reverse,
            CardKind::DrawTwo => CardEffect::DrawTwo,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    /// A card from the hand was played.
    Played { card: Card, effect: CardEffect },
    /// Nothing in hand could be played and the drawn card could not either.
    SelfDraw { card: Card },
    /// Nothing in hand could be played, the drawn card was played at once.
    SelfDrawPlayed { card: Card, effect: CardEffect },
}

impl TurnActionResult {
    pub fn played_card(&self) -> Option<Card> {
        match self {
            TurnActionResult::Played { card, .. }
            | TurnActionResult::SelfDrawPlayed { card, .. } => Some(*card),
            TurnActionResult::SelfDraw { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub player: usize,
    pub turn_action_result: TurnActionResult,
    pub won: bool,
    /// Draws this turn that had to fabricate a card.
    pub exhausted_draws: usize,
}
