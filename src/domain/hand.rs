use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::engine::errors::{EngineError, InvalidInput};

/// Рука карточной игры: ровно пять карт из одной колоды, без повторов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    pub const SIZE: usize = 5;

    /// Собрать руку, проверив размер и уникальность карт.
    pub fn new(cards: Vec<Card>) -> Result<Self, EngineError> {
        let mut seen = HashSet::with_capacity(Self::SIZE);
        for card in &cards {
            if !seen.insert(*card) {
                return Err(InvalidInput::DuplicateCard(*card).into());
            }
        }

        let len = cards.len();
        let cards: [Card; Self::SIZE] = cards
            .try_into()
            .map_err(|_| EngineError::from(InvalidInput::HandSize(len)))?;

        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Категория руки. Масти и старшинство рангов не учитываются:
/// ни флеша, ни стрита здесь нет, только повторы рангов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandCategory {
    FourOfAKind,
    FullHouse,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    Nothing,
}

impl HandCategory {
    /// Человеческое описание категории (уходит в outcome_description).
    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::Nothing => "No winning combination",
        }
    }
}
