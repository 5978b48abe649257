//! Конфигурация движка: стартовый баланс, лимиты ставок, тайминги анимации.
//!
//! Все поля имеют значения по умолчанию, так что TOML может быть частичным.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Chips;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Некорректная конфигурация: {0}")]
    Invalid(String),
}

/// Полная конфигурация движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub starting_balance: Chips,
    pub bet: BetLimits,
    pub animation: AnimationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_balance: Chips(1_000),
            bet: BetLimits::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Прочитать конфигурацию из TOML и сразу провалидировать.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bet.validate()?;
        self.animation.validate()
    }
}

/// Лимиты ставок для панели ставок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BetLimits {
    pub min_bet: Chips,
    pub max_bet: Chips,
    /// Шаг кнопок +/-.
    pub step: Chips,
    pub default_bet: Chips,
}

impl Default for BetLimits {
    fn default() -> Self {
        Self {
            min_bet: Chips(1),
            max_bet: Chips(100),
            step: Chips(5),
            default_bet: Chips(10),
        }
    }
}

impl BetLimits {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_bet.is_zero() {
            return Err(ConfigError::Invalid("min_bet must be positive".into()));
        }
        if self.min_bet > self.max_bet {
            return Err(ConfigError::Invalid(format!(
                "min_bet {} exceeds max_bet {}",
                self.min_bet, self.max_bet
            )));
        }
        if self.step.is_zero() {
            return Err(ConfigError::Invalid("step must be positive".into()));
        }
        if self.default_bet < self.min_bet || self.default_bet > self.max_bet {
            return Err(ConfigError::Invalid(format!(
                "default_bet {} is outside [{}, {}]",
                self.default_bet, self.min_bet, self.max_bet
            )));
        }
        Ok(())
    }
}

/// Тайминги анимации раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Сколько раз "прокручивается" кубик; значим только последний бросок.
    pub dice_ticks: u32,
    pub dice_tick_ms: u64,
    /// Пауза между картами при раздаче.
    pub card_deal_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            dice_ticks: 10,
            dice_tick_ms: 100,
            card_deal_ms: 300,
        }
    }
}

impl AnimationConfig {
    pub fn dice_interval(&self) -> Duration {
        Duration::from_millis(self.dice_tick_ms)
    }

    pub fn card_interval(&self) -> Duration {
        Duration::from_millis(self.card_deal_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dice_ticks == 0 {
            return Err(ConfigError::Invalid("dice_ticks must be at least 1".into()));
        }
        if self.dice_tick_ms == 0 || self.card_deal_ms == 0 {
            return Err(ConfigError::Invalid("tick intervals must be positive".into()));
        }
        Ok(())
    }
}
