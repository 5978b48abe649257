//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use casino_engine::domain::*;

/// Card/Suit/Rank: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    for card in Deck::standard_52().cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    assert!("".parse::<Card>().is_err());
    assert!("XYZ".parse::<Card>().is_err());
    assert!("0c".parse::<Card>().is_err());
}

/// Deck: 52 уникальные карты, порядок ♥ ♦ ♠ ♣, A первым.
#[test]
fn deck_standard_52_basic_properties() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert!(!deck.is_empty());

    let set: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(set.len(), 52);

    assert_eq!(deck.cards[0], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(deck.cards[12], Card::new(Rank::King, Suit::Hearts));
    assert_eq!(deck.cards[13], Card::new(Rank::Ace, Suit::Diamonds));
    assert_eq!(deck.cards[51], Card::new(Rank::King, Suit::Clubs));

    for suit in Suit::ALL {
        assert_eq!(deck.cards.iter().filter(|c| c.suit == suit).count(), 13);
    }
}

#[test]
fn deck_draw_one_takes_from_top() {
    let mut deck = Deck::standard_52();
    let top = *deck.cards.last().unwrap();
    assert_eq!(deck.draw_one(), Some(top));
    assert_eq!(deck.len(), 51);

    let mut empty = Deck { cards: vec![] };
    assert_eq!(empty.draw_one(), None);
}

/// Chips: арифметика не уходит в минус и не переполняется.
#[test]
fn chips_arithmetic_and_saturating() {
    assert_eq!(Chips(100) + Chips(50), Chips(150));
    assert_eq!(Chips(200) - Chips(50), Chips(150));

    let mut x = Chips(10);
    x += Chips(5);
    assert_eq!(x, Chips(15));
    x -= Chips(20);
    assert_eq!(x, Chips::ZERO);

    assert_eq!(Chips(7).times(5), Chips(35));
    assert_eq!(Chips(u64::MAX).times(2), Chips(u64::MAX));
    assert_eq!(Chips(3).to_string(), "3");
}

#[test]
fn hand_requires_five_unique_cards() {
    let five: Vec<Card> = Deck::standard_52().cards.into_iter().take(5).collect();
    let hand = Hand::new(five.clone()).unwrap();
    assert_eq!(hand.cards(), five.as_slice());

    assert!(Hand::new(five[..3].to_vec()).is_err());

    let mut six = five.clone();
    six.push(Card::new(Rank::Nine, Suit::Clubs));
    assert!(Hand::new(six).is_err());

    let mut dup = five;
    dup[4] = dup[0];
    assert!(Hand::new(dup).is_err());
}

#[test]
fn game_kind_slugs_and_catalog() {
    assert_eq!(GameKind::from_slug("dice"), Some(GameKind::Dice));
    assert_eq!(GameKind::from_slug(" Cards "), Some(GameKind::Card));
    assert_eq!(GameKind::from_slug("slots"), None);
    assert_eq!(GameKind::default(), GameKind::Dice);

    let catalog = GameCatalog::default();
    assert_eq!(catalog.len(), 2);
    for kind in GameKind::ALL {
        assert!(catalog.get(kind).is_some(), "{kind} missing in catalog");
    }
}

#[test]
fn hand_category_labels() {
    assert_eq!(HandCategory::FourOfAKind.label(), "Four of a Kind");
    assert_eq!(HandCategory::Nothing.label(), "No winning combination");
}
