use crate::domain::{Chips, GameKind, Outcome, RoundResult};
use crate::engine::errors::{EngineError, InvalidInput};
use crate::eval::lookup_tables::dice_multiplier;

/// Резолв раунда в кубик: чистая функция от грани и ставки.
pub fn resolve_dice(face: u8, bet: Chips) -> Result<RoundResult, EngineError> {
    if bet.is_zero() {
        return Err(InvalidInput::ZeroBet.into());
    }
    let multiplier = dice_multiplier(face).ok_or(InvalidInput::DieFaceOutOfRange(face))?;

    Ok(RoundResult::new(
        GameKind::Dice,
        Outcome::Dice(face),
        format!("rolled {face}"),
        multiplier,
        bet,
    ))
}
