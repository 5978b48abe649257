//! Таймерный драйвер раунда поверх tokio (аналог setInterval в UI).

pub mod driver;

pub use driver::{drive_round, DriveOutcome};
