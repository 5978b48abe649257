//! play_round: списание, резолв, зачисление одним вызовом.

mod common;

use casino_engine::config::{AnimationConfig, EngineConfig};
use casino_engine::domain::{Chips, GameKind, Outcome};
use casino_engine::engine::{
    play_round, play_round_with, EngineError, InvalidInput, RoundController, StatusKind,
    INSUFFICIENT_BALANCE_STATUS,
};
use casino_engine::infra::{DeterministicRng, ScriptedRng};

use common::StackedRng;

#[test]
fn bet_above_balance_is_refused() {
    let mut rng = ScriptedRng::always_face(6);
    let err = play_round(GameKind::Dice, Chips(50), Chips(40), &mut rng).unwrap_err();

    assert_eq!(
        err,
        EngineError::InsufficientBalance {
            balance: Chips(40),
            bet: Chips(50)
        }
    );
    assert_eq!(err.status_text(), INSUFFICIENT_BALANCE_STATUS);
}

#[test]
fn zero_bet_is_invalid() {
    let mut rng = ScriptedRng::always_face(6);
    assert_eq!(
        play_round(GameKind::Card, Chips::ZERO, Chips(40), &mut rng),
        Err(EngineError::InvalidInput(InvalidInput::ZeroBet))
    );
}

#[test]
fn losing_dice_round_debits_bet() {
    let mut rng = ScriptedRng::always_face(2);
    let s = play_round(GameKind::Dice, Chips(10), Chips(100), &mut rng).unwrap();

    assert_eq!(s.new_balance, Chips(90));
    assert!(!s.result.is_win);
    assert_eq!(s.status.kind, StatusKind::Loss);
    assert_eq!(s.status.text, "You lost your bet. (rolled 2)");
}

#[test]
fn winning_dice_round_credits_win() {
    let mut rng = ScriptedRng::always_face(6);
    let s = play_round(GameKind::Dice, Chips(10), Chips(100), &mut rng).unwrap();

    assert_eq!(s.result.win_amount, Chips(50));
    assert_eq!(s.new_balance, Chips(100 - 10 + 50));
    assert_eq!(s.status.kind, StatusKind::Win);
    assert_eq!(s.status.text, "You won 50! (rolled 6)");
}

#[test]
fn whole_balance_can_be_bet() {
    let mut rng = ScriptedRng::always_face(1);
    let s = play_round(GameKind::Dice, Chips(30), Chips(30), &mut rng).unwrap();
    assert_eq!(s.new_balance, Chips::ZERO);
}

#[test]
fn only_last_dice_tick_counts() {
    // Девять шестёрок анимации, последний бросок — единица.
    let mut script = vec![5; 9];
    script.push(0);
    let mut rng = ScriptedRng::new(script);

    let s = play_round(GameKind::Dice, Chips(10), Chips(100), &mut rng).unwrap();
    assert_eq!(s.result.outcome, Outcome::Dice(1));
    assert_eq!(s.new_balance, Chips(90));
}

#[test]
fn custom_tick_count_changes_which_draw_counts() {
    let mut rng = ScriptedRng::new(vec![0, 0, 5]);
    let animation = AnimationConfig {
        dice_ticks: 3,
        ..AnimationConfig::default()
    };
    let s = play_round_with(GameKind::Dice, Chips(10), Chips(100), &mut rng, &animation).unwrap();
    assert_eq!(s.result.outcome, Outcome::Dice(6));
}

#[test]
fn card_round_with_four_aces() {
    let mut rng = StackedRng::four_aces();
    let s = play_round(GameKind::Card, Chips(3), Chips(100), &mut rng).unwrap();

    assert_eq!(s.result.outcome_description, "Four of a Kind");
    assert_eq!(s.result.win_amount, Chips(300));
    assert_eq!(s.new_balance, Chips(100 - 3 + 300));
    assert_eq!(s.status.text, "You won 300! (Four of a Kind)");
}

#[test]
fn card_round_without_combination() {
    let mut rng = StackedRng::identity();
    let s = play_round(GameKind::Card, Chips(5), Chips(100), &mut rng).unwrap();

    // K♣ Q♣ J♣ 10♣ 9♣: флеш не считается.
    assert_eq!(s.result.outcome_description, "No winning combination");
    assert_eq!(s.new_balance, Chips(95));
    assert_eq!(s.status.text, "You lost your bet. (No winning combination)");
}

#[test]
fn play_round_matches_controller_for_same_seed() {
    for game in [GameKind::Dice, GameKind::Card] {
        let mut rng = DeterministicRng::from_u64(31337);
        let headless = play_round(game, Chips(10), Chips(1_000), &mut rng).unwrap();

        let mut ctrl = RoundController::new(EngineConfig::default(), DeterministicRng::from_u64(31337)).unwrap();
        ctrl.select_game(game).unwrap();
        ctrl.play().unwrap();
        let result = ctrl.finish().unwrap();

        assert_eq!(result, headless.result);
        assert_eq!(ctrl.balance(), headless.new_balance);
    }
}
