use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, GameInfo, GameKind, HandCategory, Outcome, RoundResult};
use crate::engine::{RandomSource, RoundController, RoundPhase, StatusMessage};

/// DTO итога раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResultDto {
    pub game: GameKind,
    pub outcome_description: String,
    pub payout_multiplier: u32,
    pub win_amount: Chips,
    pub is_win: bool,
    /// Грань кубика (только для Dice).
    pub die_face: Option<u8>,
    /// Карты руки в виде "A♥" (только для Card).
    pub cards: Option<Vec<String>>,
    pub category: Option<HandCategory>,
}

impl From<&RoundResult> for RoundResultDto {
    fn from(r: &RoundResult) -> Self {
        let (die_face, cards, category) = match &r.outcome {
            Outcome::Dice(face) => (Some(*face), None, None),
            Outcome::Card { hand, category } => (
                None,
                Some(hand.cards().iter().map(Card::to_string).collect()),
                Some(*category),
            ),
        };

        Self {
            game: r.game,
            outcome_description: r.outcome_description.clone(),
            payout_multiplier: r.payout_multiplier,
            win_amount: r.win_amount,
            is_win: r.is_win,
            die_face,
            cards,
            category,
        }
    }
}

/// DTO карточки игры для сетки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameInfoDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub selected: bool,
}

impl GameInfoDto {
    pub fn from_info(info: &GameInfo, current: GameKind) -> Self {
        Self {
            slug: info.kind.slug().to_string(),
            title: info.title.clone(),
            description: info.description.clone(),
            selected: info.kind == current,
        }
    }
}

/// Снимок сессии для UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub balance: Chips,
    pub bet: Chips,
    pub min_bet: Chips,
    pub max_bet: Chips,
    pub game: GameKind,
    /// Idle / Rolling / Dealing; `Resolved` сюда не попадает.
    pub phase: RoundPhase,
    pub status: Option<StatusMessage>,
    pub last_result: Option<RoundResultDto>,
    /// Можно ли нажать Play прямо сейчас.
    pub can_play: bool,
}

pub fn build_session_view<R: RandomSource>(controller: &RoundController<R>) -> SessionViewDto {
    let session = controller.session();
    let limits = &controller.config().bet;
    let phase = controller.phase();

    SessionViewDto {
        balance: session.balance,
        bet: session.bet,
        min_bet: limits.min_bet,
        max_bet: limits.max_bet,
        game: session.game,
        phase,
        status: session.status.clone(),
        last_result: session.last_result.as_ref().map(RoundResultDto::from),
        can_play: phase == RoundPhase::Idle && session.balance >= session.bet,
    }
}
