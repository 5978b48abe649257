use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, GameKind, RoundId};
use crate::engine::{RandomSource, RoundController, TickOutcome};

use super::dto::{build_session_view, RoundResultDto, SessionViewDto};
use super::errors::ApiError;

/// Команды UI: всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Выбрать игру в сетке (по slug: "dice" / "card").
    SelectGame { game: String },

    /// Поставить точную ставку.
    SetBet { amount: Chips },

    IncreaseBet,
    DecreaseBet,

    /// Нажать Play.
    Play,

    /// Один кадр анимации.
    Tick,

    /// Сдвинуть часы игрового цикла.
    Advance { millis: u64 },

    /// Доиграть анимацию сразу.
    Finish,

    /// Отменить раунд с возвратом ставки.
    Cancel,
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    Session(SessionViewDto),
    RoundStarted {
        round_id: RoundId,
        session: SessionViewDto,
    },
    Animating {
        frames_left: u32,
        session: SessionViewDto,
    },
    Resolved {
        result: RoundResultDto,
        session: SessionViewDto,
    },
    Cancelled {
        refund: Chips,
        session: SessionViewDto,
    },
}

/// Применить команду к контроллеру.
pub fn apply_command<R: RandomSource>(
    controller: &mut RoundController<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::SelectGame { game } => {
            let kind = GameKind::from_slug(&game)
                .ok_or_else(|| ApiError::InvalidCommand(format!("unknown game: {game}")))?;
            controller.select_game(kind)?;
            Ok(CommandResponse::Session(build_session_view(controller)))
        }
        Command::SetBet { amount } => {
            controller.set_bet(amount)?;
            Ok(CommandResponse::Session(build_session_view(controller)))
        }
        Command::IncreaseBet => {
            controller.increase_bet()?;
            Ok(CommandResponse::Session(build_session_view(controller)))
        }
        Command::DecreaseBet => {
            controller.decrease_bet()?;
            Ok(CommandResponse::Session(build_session_view(controller)))
        }
        Command::Play => {
            let round_id = controller.play()?;
            Ok(CommandResponse::RoundStarted {
                round_id,
                session: build_session_view(controller),
            })
        }
        Command::Tick => match controller.tick()? {
            TickOutcome::Continue { frames_left } => Ok(CommandResponse::Animating {
                frames_left,
                session: build_session_view(controller),
            }),
            TickOutcome::Resolved(result) => Ok(CommandResponse::Resolved {
                result: RoundResultDto::from(&result),
                session: build_session_view(controller),
            }),
        },
        Command::Advance { millis } => {
            match controller.advance(Duration::from_millis(millis))? {
                Some(result) => Ok(CommandResponse::Resolved {
                    result: RoundResultDto::from(&result),
                    session: build_session_view(controller),
                }),
                None => {
                    let frames_left = controller
                        .active_round()
                        .map(|r| r.frames_total().saturating_sub(r.frames_done()))
                        .unwrap_or(0);
                    Ok(CommandResponse::Animating {
                        frames_left,
                        session: build_session_view(controller),
                    })
                }
            }
        }
        Command::Finish => {
            let result = controller.finish()?;
            Ok(CommandResponse::Resolved {
                result: RoundResultDto::from(&result),
                session: build_session_view(controller),
            })
        }
        Command::Cancel => {
            let refund = controller.cancel()?;
            Ok(CommandResponse::Cancelled {
                refund,
                session: build_session_view(controller),
            })
        }
    }
}

/// То же, что `apply_command`, но на JSON: так команды приходят из UI.
pub fn apply_command_json<R: RandomSource>(
    controller: &mut RoundController<R>,
    json: &str,
) -> Result<String, ApiError> {
    let command: Command =
        serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let response = apply_command(controller, command)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Internal(e.to_string()))
}
