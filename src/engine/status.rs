use serde::{Deserialize, Serialize};

use crate::domain::RoundResult;
use crate::engine::errors::EngineError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Win,
    Loss,
    Error,
}

/// Строка статуса под игровым полем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(err: &EngineError) -> Self {
        Self {
            kind: StatusKind::Error,
            text: err.status_text(),
        }
    }

    /// Итоговый статус раунда: выигрыш или проигрыш ставки.
    pub fn for_result(result: &RoundResult) -> Self {
        if result.is_win {
            Self {
                kind: StatusKind::Win,
                text: format!(
                    "You won {}! ({})",
                    result.win_amount, result.outcome_description
                ),
            }
        } else {
            Self {
                kind: StatusKind::Loss,
                text: format!("You lost your bet. ({})", result.outcome_description),
            }
        }
    }
}
