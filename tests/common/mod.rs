//! Общие хелперы для интеграционных тестов.

#![allow(dead_code)]

use casino_engine::engine::RandomSource;

/// RNG, который сначала отдаёт заданные индексы, а потом всегда `upper - 1`.
///
/// `upper - 1` в Fisher–Yates означает "не менять местами", поэтому после
/// сценария колода остаётся в исходном порядке.
pub struct StackedRng {
    picks: Vec<usize>,
    pos: usize,
}

impl StackedRng {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, pos: 0 }
    }

    /// Тасовка поднимает наверх четыре туза и K♥:
    /// раздача даёт A♥ A♦ A♠ A♣ K♥.
    pub fn four_aces() -> Self {
        Self::new(vec![0, 13, 26, 39, 12])
    }

    /// Тасовка без перестановок: раздача даёт K♣ Q♣ J♣ 10♣ 9♣.
    pub fn identity() -> Self {
        Self::new(Vec::new())
    }
}

impl RandomSource for StackedRng {
    fn next_index(&mut self, upper: usize) -> usize {
        let v = self.picks.get(self.pos).copied().unwrap_or(upper - 1);
        self.pos += 1;
        v.min(upper - 1)
    }
}
