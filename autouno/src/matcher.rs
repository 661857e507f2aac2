//! Card matching rules and the automated player's choice of card.

use crate::card::{Card, CardKind};

/// Whether `candidate` may be played on `top`.
///
/// Color always matches. Otherwise two number cards need the same value and
/// two action cards need the same kind; a number never follows an action.
pub fn can_follow(candidate: &Card, top: &Card) -> bool {
    if candidate.color == top.color {
        return true;
    }

    match (candidate.kind, top.kind) {
        (CardKind::Number(value), CardKind::Number(top_value)) => value == top_value,
        (kind, top_kind) => kind.is_action() && kind == top_kind,
    }
}

/// Picks the index of the card an automated player plays on `top`.
///
/// Tiers are tried in order and the first card in hand order wins within a
/// tier:
///
/// 1. same color number
/// 2. same color skip
/// 3. same color reverse
/// 4. same color draw two
/// 5. same number in any color (only on a number top card)
/// 6. same action in any color (only on an action top card)
pub fn select_playable(hand: &[Card], top: &Card) -> Option<usize> {
    let same_color = |kind_matches: fn(&CardKind) -> bool| {
        hand.iter()
            .position(|card| card.color == top.color && kind_matches(&card.kind))
    };

    same_color(|kind| matches!(kind, CardKind::Number(_)))
        .or_else(|| same_color(|kind| *kind == CardKind::Skip))
        .or_else(|| same_color(|kind| *kind == CardKind::Reverse))
        .or_else(|| same_color(|kind| *kind == CardKind::DrawTwo))
        .or_else(|| hand.iter().position(|card| card.kind == top.kind))
}
