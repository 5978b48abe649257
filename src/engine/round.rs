use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::domain::{Card, Chips, Deck, GameKind, Hand, RoundId, RoundResult};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::eval::{resolve_dice, resolve_hand};

/// Фаза конечного автомата раунда.
///
/// `Resolved` мгновенная: она приходит только событием `PhaseChanged` между
/// резолвом и возвратом в `Idle`. `RoundController::phase()` и снимок сессии
/// её никогда не показывают — после резолва там уже `Idle`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    Rolling,
    Dealing,
    Resolved,
}

/// Один кадр анимации. Промежуточные броски кубика — чистая косметика.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frame {
    DiceRolled { tick: u32, face: u8 },
    CardDealt { index: usize, card: Card },
}

#[derive(Clone, Debug)]
enum Animation {
    Dice {
        ticks_total: u32,
        ticks_done: u32,
        face: Option<u8>,
    },
    Card {
        deck: Deck,
        dealt: Vec<Card>,
    },
}

/// Раунд в процессе анимации: ставка уже списана, исход ещё не известен.
#[derive(Clone, Debug)]
pub struct ActiveRound {
    pub id: RoundId,
    pub game: GameKind,
    pub bet: Chips,
    /// Интервал между кадрами.
    pub interval: Duration,
    animation: Animation,
}

impl ActiveRound {
    /// Подготовить раунд. Для карт колода создаётся заново и тасуется один раз.
    pub fn start<R: RandomSource + ?Sized>(
        id: RoundId,
        game: GameKind,
        bet: Chips,
        config: &AnimationConfig,
        rng: &mut R,
    ) -> Self {
        let (interval, animation) = match game {
            GameKind::Dice => (
                config.dice_interval(),
                Animation::Dice {
                    ticks_total: config.dice_ticks.max(1),
                    ticks_done: 0,
                    face: None,
                },
            ),
            GameKind::Card => (
                config.card_interval(),
                Animation::Card {
                    deck: Deck::standard_52().shuffled(rng),
                    dealt: Vec::with_capacity(Hand::SIZE),
                },
            ),
        };

        Self {
            id,
            game,
            bet,
            interval,
            animation,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        match self.game {
            GameKind::Dice => RoundPhase::Rolling,
            GameKind::Card => RoundPhase::Dealing,
        }
    }

    pub fn frames_total(&self) -> u32 {
        match &self.animation {
            Animation::Dice { ticks_total, .. } => *ticks_total,
            Animation::Card { .. } => Hand::SIZE as u32,
        }
    }

    pub fn frames_done(&self) -> u32 {
        match &self.animation {
            Animation::Dice { ticks_done, .. } => *ticks_done,
            Animation::Card { dealt, .. } => dealt.len() as u32,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.frames_done() >= self.frames_total()
    }

    /// Сыграть следующий кадр. `None`, если анимация уже закончилась.
    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Frame> {
        if self.is_complete() {
            return None;
        }

        match &mut self.animation {
            Animation::Dice {
                ticks_done, face, ..
            } => {
                let rolled = rng.roll_die();
                *ticks_done += 1;
                *face = Some(rolled);
                Some(Frame::DiceRolled {
                    tick: *ticks_done,
                    face: rolled,
                })
            }
            Animation::Card { deck, dealt } => {
                let card = deck.draw_one()?;
                dealt.push(card);
                Some(Frame::CardDealt {
                    index: dealt.len() - 1,
                    card,
                })
            }
        }
    }

    /// Резолв законченного раунда. Значим только последний бросок / итоговые 5 карт.
    pub fn settle(self) -> Result<RoundResult, EngineError> {
        if !self.is_complete() {
            return Err(EngineError::RoundInProgress);
        }

        match self.animation {
            Animation::Dice { face, .. } => {
                let face = face.ok_or(EngineError::RoundInProgress)?;
                resolve_dice(face, self.bet)
            }
            Animation::Card { dealt, .. } => resolve_hand(Hand::new(dealt)?, self.bet),
        }
    }
}
