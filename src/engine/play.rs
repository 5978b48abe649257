use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::domain::{Chips, GameKind, RoundResult};
use crate::engine::errors::{EngineError, InvalidInput};
use crate::engine::round::ActiveRound;
use crate::engine::status::StatusMessage;
use crate::engine::RandomSource;

/// Итог `play_round`: новый баланс, результат и строка статуса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSettlement {
    pub new_balance: Chips,
    pub result: RoundResult,
    pub status: StatusMessage,
}

/// Проверка ставки перед списанием. Ничего не мутирует.
pub fn check_stake(bet: Chips, balance: Chips) -> Result<(), EngineError> {
    if bet.is_zero() {
        return Err(InvalidInput::ZeroBet.into());
    }
    if balance < bet {
        return Err(EngineError::InsufficientBalance { balance, bet });
    }
    Ok(())
}

/// Полный раунд без анимации с таймингами по умолчанию.
pub fn play_round<R: RandomSource + ?Sized>(
    game: GameKind,
    bet: Chips,
    balance: Chips,
    rng: &mut R,
) -> Result<RoundSettlement, EngineError> {
    play_round_with(game, bet, balance, rng, &AnimationConfig::default())
}

/// Полный раунд: списание, все кадры подряд, резолв, зачисление.
///
/// Случайность расходуется так же, как в `RoundController`, поэтому при
/// одинаковом seed исходы совпадают.
pub fn play_round_with<R: RandomSource + ?Sized>(
    game: GameKind,
    bet: Chips,
    balance: Chips,
    rng: &mut R,
    animation: &AnimationConfig,
) -> Result<RoundSettlement, EngineError> {
    check_stake(bet, balance)?;

    let mut round = ActiveRound::start(0, game, bet, animation, rng);
    while round.step(rng).is_some() {}
    let result = round.settle()?;

    let new_balance = balance - bet + result.win_amount;
    let status = StatusMessage::for_result(&result);

    log::debug!(
        "play_round: game={game} bet={bet} balance {balance} -> {new_balance} ({})",
        result.outcome_description
    );

    Ok(RoundSettlement {
        new_balance,
        result,
        status,
    })
}
