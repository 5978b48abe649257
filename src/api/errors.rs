use serde::{Deserialize, Serialize};

use crate::domain::Chips;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Не хватает баланса; `message` — готовая строка статуса.
    InsufficientBalance {
        balance: Chips,
        bet: Chips,
        message: String,
    },

    /// Неправильные входные данные (ставка, исход, рука).
    InvalidInput(String),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Внутренняя ошибка (например, не удалось сериализовать ответ).
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InsufficientBalance { balance, bet } => ApiError::InsufficientBalance {
                balance,
                bet,
                message: err.status_text(),
            },
            EngineError::InvalidInput(reason) => ApiError::InvalidInput(reason.to_string()),
            other @ (EngineError::RoundInProgress | EngineError::NoActiveRound) => {
                ApiError::InvalidCommand(other.to_string())
            }
        }
    }
}
