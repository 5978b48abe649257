use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::game::GameKind;
use crate::domain::hand::{Hand, HandCategory};

/// Случайный исход раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    /// Выпавшая грань кубика (1..=6).
    Dice(u8),
    /// Розданная рука и её категория.
    Card { hand: Hand, category: HandCategory },
}

/// Итог одного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub game: GameKind,
    pub outcome: Outcome,
    /// "rolled 5", "Full House", ...
    pub outcome_description: String,
    /// 0 = проигрыш.
    pub payout_multiplier: u32,
    /// Всегда bet * payout_multiplier.
    pub win_amount: Chips,
    pub is_win: bool,
}

impl RoundResult {
    pub(crate) fn new(
        game: GameKind,
        outcome: Outcome,
        outcome_description: String,
        payout_multiplier: u32,
        bet: Chips,
    ) -> Self {
        let win_amount = bet.times(payout_multiplier);
        Self {
            game,
            outcome,
            outcome_description,
            payout_multiplier,
            win_amount,
            is_win: !win_amount.is_zero(),
        }
    }
}
