//! Движок раундов для казино-прототипа: кубик и пять карт.
//!
//! Слои:
//! - `domain` — карты, колода, фишки, итог раунда;
//! - `eval` — чистые резолверы (исход, ставка) → RoundResult;
//! - `engine` — тасовка, автомат раунда, баланс, события для UI;
//! - `runtime` — таймерный драйвер на tokio;
//! - `api` — команды/запросы/DTO для UI;
//! - `infra` — реализации RNG.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod runtime;

pub use config::EngineConfig;
pub use domain::{Card, Chips, GameKind, Hand, HandCategory, RoundResult};
pub use engine::{play_round, shuffle, EngineError, RandomSource, RoundController};
pub use eval::{resolve_card, resolve_dice};
