use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, EngineConfig};
use crate::domain::{Chips, GameKind, RoundId, RoundResult};
use crate::engine::errors::{EngineError, InvalidInput};
use crate::engine::history::{RoundEventKind, RoundHistory, RoundObserver};
use crate::engine::play::check_stake;
use crate::engine::round::{ActiveRound, RoundPhase};
use crate::engine::status::StatusMessage;
use crate::engine::RandomSource;

/// Явное состояние сессии: баланс, ставка, текущая игра, статус.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub balance: Chips,
    pub bet: Chips,
    pub game: GameKind,
    pub status: Option<StatusMessage>,
    pub last_result: Option<RoundResult>,
}

/// Что произошло за один тик.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Анимация продолжается, осталось столько кадров.
    Continue { frames_left: u32 },
    Resolved(RoundResult),
}

/// Контроллер раунда: Idle → Rolling/Dealing → Resolved → Idle.
///
/// Инварианты баланса:
/// - списание ровно один раз в `play`;
/// - зачисление не больше одного раза: выигрыш при резолве или возврат при `cancel`.
pub struct RoundController<R: RandomSource> {
    config: EngineConfig,
    rng: R,
    session: SessionState,
    active: Option<ActiveRound>,
    /// Накопленное время с последнего кадра (для `advance`).
    elapsed: Duration,
    next_round_id: RoundId,
    history: RoundHistory,
    observers: Vec<Box<dyn RoundObserver>>,
}

impl<R: RandomSource> RoundController<R> {
    /// Создать контроллер. Конфигурация валидируется: нулевые интервалы
    /// или ставка по умолчанию вне лимитов отклоняются здесь, а не в `play`.
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let session = SessionState {
            balance: config.starting_balance,
            bet: config.bet.default_bet,
            game: GameKind::default(),
            status: None,
            last_result: None,
        };

        Ok(Self {
            config,
            rng,
            session,
            active: None,
            elapsed: Duration::ZERO,
            next_round_id: 1,
            history: RoundHistory::new(),
            observers: Vec::new(),
        })
    }

    /// Подписать UI на события.
    pub fn subscribe(&mut self, observer: impl RoundObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn balance(&self) -> Chips {
        self.session.balance
    }

    pub fn bet(&self) -> Chips {
        self.session.bet
    }

    pub fn game(&self) -> GameKind {
        self.session.game
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.session.status.as_ref()
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.session.last_result.as_ref()
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn active_round(&self) -> Option<&ActiveRound> {
        self.active.as_ref()
    }

    pub fn phase(&self) -> RoundPhase {
        self.active
            .as_ref()
            .map(ActiveRound::phase)
            .unwrap_or(RoundPhase::Idle)
    }

    /// Интервал кадров активного раунда.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.active.as_ref().map(|r| r.interval)
    }

    /// Сколько осталось до следующего кадра при движении через `advance`.
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|r| r.interval.saturating_sub(self.elapsed))
    }

    // ---------------------------------------------------------------------
    // Панель ставок / сетка игр
    // ---------------------------------------------------------------------

    pub fn select_game(&mut self, game: GameKind) -> Result<(), EngineError> {
        self.ensure_idle()?;
        if self.session.game != game {
            self.session.game = game;
            self.emit(RoundEventKind::GameSelected { game });
        }
        Ok(())
    }

    /// Установить ставку в пределах лимитов. Баланс проверяется только в `play`.
    pub fn set_bet(&mut self, bet: Chips) -> Result<(), EngineError> {
        self.ensure_idle()?;

        let limits = &self.config.bet;
        if bet.is_zero() {
            return Err(InvalidInput::ZeroBet.into());
        }
        if bet < limits.min_bet {
            return Err(InvalidInput::BetBelowMin {
                bet,
                min_bet: limits.min_bet,
            }
            .into());
        }
        if bet > limits.max_bet {
            return Err(InvalidInput::BetAboveMax {
                bet,
                max_bet: limits.max_bet,
            }
            .into());
        }

        if self.session.bet != bet {
            self.session.bet = bet;
            self.emit(RoundEventKind::BetChanged { bet });
        }
        Ok(())
    }

    /// Ставка + шаг, не выше max_bet.
    pub fn increase_bet(&mut self) -> Result<Chips, EngineError> {
        let limits = &self.config.bet;
        let bet = (self.session.bet + limits.step).min(limits.max_bet);
        self.set_bet(bet)?;
        Ok(bet)
    }

    /// Ставка - шаг, не ниже min_bet.
    pub fn decrease_bet(&mut self) -> Result<Chips, EngineError> {
        let limits = &self.config.bet;
        let bet = (self.session.bet - limits.step).max(limits.min_bet);
        self.set_bet(bet)?;
        Ok(bet)
    }

    // ---------------------------------------------------------------------
    // Раунд
    // ---------------------------------------------------------------------

    /// Начать раунд: проверка баланса, списание, подготовка анимации.
    ///
    /// При нехватке баланса выставляется статус "Not enough balance to play!",
    /// остальное состояние не меняется.
    pub fn play(&mut self) -> Result<RoundId, EngineError> {
        self.ensure_idle()?;

        // Каждое нажатие Play из Idle начинает новый журнал, даже отказанное.
        self.history.clear();

        let bet = self.session.bet;
        let game = self.session.game;
        if let Err(err) = check_stake(bet, self.session.balance) {
            log::warn!("round refused: {err}");
            self.set_status(StatusMessage::error(&err));
            return Err(err);
        }

        let round_id = self.next_round_id;
        self.next_round_id += 1;

        self.session.balance -= bet;
        let round = ActiveRound::start(round_id, game, bet, &self.config.animation, &mut self.rng);
        let phase = round.phase();
        self.active = Some(round);
        self.elapsed = Duration::ZERO;

        log::info!(
            "round {round_id} started: game={game} bet={bet} balance={}",
            self.session.balance
        );

        self.emit(RoundEventKind::RoundStarted {
            round_id,
            game,
            bet,
        });
        self.emit(RoundEventKind::BalanceChanged {
            balance: self.session.balance,
        });
        self.emit(RoundEventKind::PhaseChanged { phase });
        let text = match game {
            GameKind::Dice => "Rolling...",
            GameKind::Card => "Dealing...",
        };
        self.set_status(StatusMessage::info(text));

        Ok(round_id)
    }

    /// Один кадр анимации. На последнем кадре раунд разрешается.
    pub fn tick(&mut self) -> Result<TickOutcome, EngineError> {
        let round = self.active.as_mut().ok_or(EngineError::NoActiveRound)?;
        let round_id = round.id;
        let frame = round.step(&mut self.rng);
        let frames_left = round.frames_total().saturating_sub(round.frames_done());
        let complete = round.is_complete();

        if let Some(frame) = frame {
            self.emit(RoundEventKind::Animation { round_id, frame });
        }

        if complete {
            self.resolve().map(TickOutcome::Resolved)
        } else {
            Ok(TickOutcome::Continue { frames_left })
        }
    }

    /// Драйвер игрового цикла: копим время, на каждый полный интервал — один кадр.
    pub fn advance(&mut self, delta: Duration) -> Result<Option<RoundResult>, EngineError> {
        let interval = self
            .active
            .as_ref()
            .map(|r| r.interval)
            .ok_or(EngineError::NoActiveRound)?;

        self.elapsed += delta;
        while self.elapsed >= interval {
            self.elapsed -= interval;
            if let TickOutcome::Resolved(result) = self.tick()? {
                self.elapsed = Duration::ZERO;
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Проиграть оставшиеся кадры сразу.
    pub fn finish(&mut self) -> Result<RoundResult, EngineError> {
        loop {
            if let TickOutcome::Resolved(result) = self.tick()? {
                return Ok(result);
            }
        }
    }

    /// Отменить анимируемый раунд: резолвер не вызывается, ставка возвращается.
    pub fn cancel(&mut self) -> Result<Chips, EngineError> {
        let round = self.active.take().ok_or(EngineError::NoActiveRound)?;
        self.elapsed = Duration::ZERO;

        let refund = round.bet;
        self.session.balance += refund;

        log::info!("round {} cancelled, refunded {refund}", round.id);

        self.emit(RoundEventKind::RoundCancelled {
            round_id: round.id,
            refund,
        });
        self.emit(RoundEventKind::BalanceChanged {
            balance: self.session.balance,
        });
        self.emit(RoundEventKind::PhaseChanged {
            phase: RoundPhase::Idle,
        });
        self.set_status(StatusMessage::info("Round cancelled, bet refunded."));

        Ok(refund)
    }

    fn resolve(&mut self) -> Result<RoundResult, EngineError> {
        let round = self.active.take().ok_or(EngineError::NoActiveRound)?;
        let round_id = round.id;
        let result = round.settle()?;

        self.emit(RoundEventKind::PhaseChanged {
            phase: RoundPhase::Resolved,
        });

        if !result.win_amount.is_zero() {
            self.session.balance += result.win_amount;
            self.emit(RoundEventKind::BalanceChanged {
                balance: self.session.balance,
            });
        }

        log::info!(
            "round {round_id} resolved: {} x{} win={} balance={}",
            result.outcome_description,
            result.payout_multiplier,
            result.win_amount,
            self.session.balance
        );

        self.emit(RoundEventKind::RoundResolved {
            round_id,
            result: result.clone(),
        });
        self.set_status(StatusMessage::for_result(&result));
        self.session.last_result = Some(result.clone());
        self.emit(RoundEventKind::PhaseChanged {
            phase: RoundPhase::Idle,
        });

        Ok(result)
    }

    fn ensure_idle(&self) -> Result<(), EngineError> {
        if self.active.is_some() {
            Err(EngineError::RoundInProgress)
        } else {
            Ok(())
        }
    }

    fn set_status(&mut self, status: StatusMessage) {
        self.session.status = Some(status.clone());
        self.emit(RoundEventKind::Status(status));
    }

    fn emit(&mut self, kind: RoundEventKind) {
        let event = self.history.push(kind);
        for observer in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }
}
