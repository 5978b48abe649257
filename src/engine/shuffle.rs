use crate::domain::Deck;
use crate::engine::RandomSource;

/// Fisher–Yates: от последнего индекса к 1, обмен с равновероятным j ∈ [0, i].
///
/// Вход не трогаем — возвращаем новую перестановку.
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.next_index(i + 1);
        out.swap(i, j);
    }
    out
}

impl Deck {
    /// Перемешанная копия колоды.
    pub fn shuffled<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Deck {
        Deck {
            cards: shuffle(&self.cards, rng),
        }
    }
}
