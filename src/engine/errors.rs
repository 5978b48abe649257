use crate::domain::{Card, Chips};

use thiserror::Error;

/// Текст статуса, когда на ставку не хватает баланса.
pub const INSUFFICIENT_BALANCE_STATUS: &str = "Not enough balance to play!";

/// Ошибки движка раундов.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Недостаточно баланса: баланс {balance}, ставка {bet}")]
    InsufficientBalance { balance: Chips, bet: Chips },

    #[error("Некорректные входные данные: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Раунд уже идёт")]
    RoundInProgress,

    #[error("Нет активного раунда")]
    NoActiveRound,
}

impl EngineError {
    /// Статус для UI. Для InsufficientBalance текст фиксированный.
    pub fn status_text(&self) -> String {
        match self {
            EngineError::InsufficientBalance { .. } => INSUFFICIENT_BALANCE_STATUS.to_string(),
            other => other.to_string(),
        }
    }
}

/// Причины InvalidInput. Вызывающий код должен отсекать их до резолва.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("ставка должна быть больше нуля")]
    ZeroBet,

    #[error("ставка {bet} выше лимита {max_bet}")]
    BetAboveMax { bet: Chips, max_bet: Chips },

    #[error("ставка {bet} ниже минимума {min_bet}")]
    BetBelowMin { bet: Chips, min_bet: Chips },

    #[error("грань кубика {0} вне диапазона 1..=6")]
    DieFaceOutOfRange(u8),

    #[error("в руке должно быть ровно 5 карт, получено {0}")]
    HandSize(usize),

    #[error("карта {0} встречается в руке дважды")]
    DuplicateCard(Card),
}
