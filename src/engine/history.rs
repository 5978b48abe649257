use serde::{Deserialize, Serialize};

use crate::domain::{Chips, GameKind, RoundId, RoundResult};
use crate::engine::round::{Frame, RoundPhase};
use crate::engine::status::StatusMessage;

/// Тип события сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Игрок выбрал игру в сетке.
    GameSelected { game: GameKind },

    /// Изменилась ставка.
    BetChanged { bet: Chips },

    /// Раунд начался (ставка списана).
    RoundStarted {
        round_id: RoundId,
        game: GameKind,
        bet: Chips,
    },

    /// Новый баланс после списания / зачисления.
    BalanceChanged { balance: Chips },

    /// Переход автомата.
    PhaseChanged { phase: RoundPhase },

    /// Кадр анимации.
    Animation { round_id: RoundId, frame: Frame },

    /// Раунд разрешён.
    RoundResolved {
        round_id: RoundId,
        result: RoundResult,
    },

    /// Раунд отменён, ставка возвращена.
    RoundCancelled { round_id: RoundId, refund: Chips },

    /// Новая строка статуса.
    Status(StatusMessage),
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u64,
    pub kind: RoundEventKind,
}

/// События текущего (или последнего) раунда.
///
/// Журнал ограничен `MAX_EVENTS`: при переполнении выбрасываются самые старые,
/// номера событий продолжают расти.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
    #[serde(default)]
    next_index: u64,
}

impl RoundHistory {
    /// С запасом покрывает раунд кубика с длинной анимацией.
    pub const MAX_EVENTS: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: RoundEventKind) -> RoundEvent {
        let event = RoundEvent {
            index: self.next_index,
            kind,
        };
        self.next_index = self.next_index.saturating_add(1);

        if self.events.len() >= Self::MAX_EVENTS {
            let overflow = self.events.len() + 1 - Self::MAX_EVENTS;
            self.events.drain(..overflow);
        }
        self.events.push(event.clone());
        event
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.next_index = 0;
    }
}

/// Подписчик UI на события контроллера.
pub trait RoundObserver {
    fn on_event(&mut self, event: &RoundEvent);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent),
{
    fn on_event(&mut self, event: &RoundEvent) {
        self(event)
    }
}
