//! Инфраструктура вокруг движка: реализации RandomSource и seed для реплея.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
