use std::collections::HashMap;

use crate::domain::{Card, Chips, GameKind, Hand, HandCategory, Outcome, Rank, RoundResult};
use crate::engine::errors::{EngineError, InvalidInput};
use crate::eval::lookup_tables::card_multiplier;

/// Классификация руки по частотам рангов.
///
/// Порядок проверок важен: первая совпавшая категория побеждает.
pub fn classify_hand(hand: &Hand) -> HandCategory {
    let mut counts: HashMap<Rank, u8> = HashMap::with_capacity(Hand::SIZE);
    for card in hand.cards() {
        *counts.entry(card.rank).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    let pair_count = counts.values().filter(|&&c| c == 2).count();

    match (max_count, pair_count) {
        (4, _) => HandCategory::FourOfAKind,
        (3, 1) => HandCategory::FullHouse,
        (3, _) => HandCategory::ThreeOfAKind,
        (_, 2) => HandCategory::TwoPair,
        (_, 1) => HandCategory::OnePair,
        _ => HandCategory::Nothing,
    }
}

/// Резолв карточного раунда. Рука проверяется (ровно 5 уникальных карт).
pub fn resolve_card(cards: &[Card], bet: Chips) -> Result<RoundResult, EngineError> {
    let hand = Hand::new(cards.to_vec())?;
    resolve_hand(hand, bet)
}

/// То же, что `resolve_card`, но для уже собранной руки.
pub fn resolve_hand(hand: Hand, bet: Chips) -> Result<RoundResult, EngineError> {
    if bet.is_zero() {
        return Err(InvalidInput::ZeroBet.into());
    }

    let category = classify_hand(&hand);
    Ok(RoundResult::new(
        GameKind::Card,
        Outcome::Card { hand, category },
        category.label().to_string(),
        card_multiplier(category),
        bet,
    ))
}
