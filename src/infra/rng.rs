use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// RNG на основе thread_rng — для реальной игры.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn next_index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раунды при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Источник, который отдаёт заранее заданные значения по кругу.
///
/// Значение берётся по модулю `upper`, так что сценарий всегда валиден.
/// Удобно, чтобы в тестах и демо получить нужную грань кубика.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<usize>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }

    /// Все броски кубика дают `face` (1..=6).
    pub fn always_face(face: u8) -> Self {
        Self::new(vec![usize::from(face.saturating_sub(1))])
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper == 0 || self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_rng_tolerates_empty_range() {
        let mut rng = ScriptedRng::new(vec![3, 4]);
        assert_eq!(rng.next_index(0), 0);
        assert_eq!(rng.next_index(5), 3);

        let mut empty = ScriptedRng::new(Vec::new());
        assert_eq!(empty.next_index(0), 0);
    }
}
