use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    EnumCountMacro,
    EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

/// What is printed on a card besides its color.
///
/// Only number cards carry a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl CardKind {
    pub fn is_action(&self) -> bool {
        !matches!(self, CardKind::Number(_))
    }
}

impl Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Number(number) => write!(f, "{number}"),
            CardKind::Skip => write!(f, "Skip"),
            CardKind::Reverse => write!(f, "Reverse"),
            CardKind::DrawTwo => write!(f, "Draw Two"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub color: CardColor,
    pub kind: CardKind,
}

impl Card {
    pub const fn new(color: CardColor, kind: CardKind) -> Self {
        Self { color, kind }
    }

    pub const fn number(color: CardColor, number: u8) -> Self {
        Self::new(color, CardKind::Number(number))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
