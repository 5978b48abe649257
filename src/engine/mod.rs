//! Движок раундов: тасовка, анимация, резолв, баланс.
//!
//! Высокоуровневый объект: `RoundController`
//! Основные операции:
//!   - `play` – списать ставку и запустить анимацию
//!   - `tick` / `advance` – прокрутить кадры, на последнем разрешить раунд
//!   - `cancel` – отменить раунд с возвратом ставки
//!
//! Без анимации: `play_round`.

pub mod controller;
pub mod errors;
pub mod history;
pub mod play;
pub mod round;
pub mod shuffle;
pub mod status;

pub use controller::{RoundController, SessionState, TickOutcome};
pub use errors::{EngineError, InvalidInput, INSUFFICIENT_BALANCE_STATUS};
pub use history::{RoundEvent, RoundEventKind, RoundHistory, RoundObserver};
pub use play::{check_stake, play_round, play_round_with, RoundSettlement};
pub use round::{ActiveRound, Frame, RoundPhase};
pub use shuffle::shuffle;
pub use status::{StatusKind, StatusMessage};

/// RNG интерфейс для engine. Реализации — в infra.
pub trait RandomSource {
    /// Равномерное число в `[0, upper)`. `upper` > 0.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Бросок кубика: 1..=6.
    fn roll_die(&mut self) -> u8 {
        (self.next_index(6) + 1) as u8
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }

    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}
