//! Резолверы раундов: (исход, ставка) → RoundResult.
//!
//! Основные функции:
//!   `resolve_dice(face, bet)`
//!   `resolve_card(cards, bet)`

pub mod card_hand;
pub mod dice;
pub mod lookup_tables;

pub use card_hand::{classify_hand, resolve_card, resolve_hand};
pub use dice::resolve_dice;
pub use lookup_tables::{card_multiplier, dice_multiplier};
