use serde::{Deserialize, Serialize};

use crate::domain::GameCatalog;
use crate::engine::{RandomSource, RoundController, RoundEvent};

use super::dto::{build_session_view, GameInfoDto, RoundResultDto, SessionViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Баланс, ставка, фаза, статус.
    Session,

    /// Сетка игр.
    Catalog,

    /// Итог последнего раунда.
    LastResult,

    /// События текущего/последнего раунда.
    History,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Session(SessionViewDto),
    Catalog(Vec<GameInfoDto>),
    LastResult(Option<RoundResultDto>),
    History(Vec<RoundEvent>),
}

pub fn run_query<R: RandomSource>(
    controller: &RoundController<R>,
    catalog: &GameCatalog,
    query: Query,
) -> QueryResponse {
    match query {
        Query::Session => QueryResponse::Session(build_session_view(controller)),
        Query::Catalog => QueryResponse::Catalog(
            catalog
                .games
                .iter()
                .map(|g| GameInfoDto::from_info(g, controller.game()))
                .collect(),
        ),
        Query::LastResult => {
            QueryResponse::LastResult(controller.last_result().map(RoundResultDto::from))
        }
        Query::History => QueryResponse::History(controller.history().events.clone()),
    }
}
