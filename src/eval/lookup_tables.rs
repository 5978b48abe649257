use crate::domain::hand::HandCategory;

/// Коэффициенты выплат для кубика, индекс = грань - 1.
///
///   1, 2, 3 → 0 (проигрыш)
///   4 → 2, 5 → 3, 6 → 5
pub const DICE_PAYOUTS: [u32; 6] = [0, 0, 0, 2, 3, 5];

/// Коэффициент для грани кубика. `None`, если грань вне 1..=6.
pub fn dice_multiplier(face: u8) -> Option<u32> {
    let idx = usize::from(face).checked_sub(1)?;
    DICE_PAYOUTS.get(idx).copied()
}

/// Коэффициент для категории карточной руки.
pub const fn card_multiplier(category: HandCategory) -> u32 {
    match category {
        HandCategory::FourOfAKind => 100,
        HandCategory::FullHouse => 50,
        HandCategory::ThreeOfAKind => 30,
        HandCategory::TwoPair => 20,
        HandCategory::OnePair => 10,
        HandCategory::Nothing => 0,
    }
}
