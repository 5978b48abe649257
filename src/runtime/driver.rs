use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};

use crate::domain::{Chips, RoundResult};
use crate::engine::{EngineError, RandomSource, RoundController, TickOutcome};

/// Чем закончился прогон раунда по таймеру.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriveOutcome {
    Resolved(RoundResult),
    Cancelled { refund: Chips },
}

/// Прогнать активный раунд по таймеру: один кадр на каждый интервал.
///
/// `cancel` — сигнал отмены: как только в канал придёт `true`,
/// раунд отменяется и ставка возвращается.
pub async fn drive_round<R: RandomSource>(
    controller: &mut RoundController<R>,
    mut cancel: watch::Receiver<bool>,
) -> Result<DriveOutcome, EngineError> {
    let period = controller
        .tick_interval()
        .ok_or(EngineError::NoActiveRound)?;

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // Первый тик interval срабатывает сразу — пропускаем его, как setInterval.
    ticker.tick().await;

    loop {
        if *cancel.borrow() {
            let refund = controller.cancel()?;
            return Ok(DriveOutcome::Cancelled { refund });
        }

        let wake = tokio::select! {
            _ = ticker.tick() => Wake::Tick,
            changed = cancel.changed() => {
                if changed.is_ok() { Wake::Signal } else { Wake::SenderGone }
            }
        };

        match wake {
            Wake::Tick => {
                if let TickOutcome::Resolved(result) = controller.tick()? {
                    return Ok(DriveOutcome::Resolved(result));
                }
            }
            // Значение проверяется в начале цикла.
            Wake::Signal => {}
            // Отправитель пропал — отмены уже не будет, дальше только таймер.
            Wake::SenderGone => return finish_by_timer(controller, &mut ticker).await,
        }
    }
}

enum Wake {
    Tick,
    Signal,
    SenderGone,
}

async fn finish_by_timer<R: RandomSource>(
    controller: &mut RoundController<R>,
    ticker: &mut tokio::time::Interval,
) -> Result<DriveOutcome, EngineError> {
    loop {
        ticker.tick().await;
        if let TickOutcome::Resolved(result) = controller.tick()? {
            return Ok(DriveOutcome::Resolved(result));
        }
    }
}
