use crate::card::Card;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub index: usize,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            hand: Vec::new(),
        }
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
