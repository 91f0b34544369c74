//! Резолвер эффектов: чистые функции apply_effect / reconcile_after_advance.

use uno_engine::domain::{Card, Color, Rank};
use uno_engine::engine::effects::{
    apply_effect, fewest_cards, reconcile_after_advance, reconcile_on_landing, AllPlayKind, AllPlayWindow,
    EffectState, TurnCommand, TurnInfo, WindowPhase,
};
use uno_engine::engine::GameEventKind;

fn info(current: usize, num_players: usize, hand_sizes: &[usize]) -> TurnInfo<'_> {
    TurnInfo {
        current,
        next: (current + 1) % num_players,
        num_players,
        hand_sizes,
    }
}

fn super_card(rank: Rank) -> Card {
    Card::super_card(rank).expect("super rank")
}

// -----------------------------
// ОБЫЧНЫЕ КАРТЫ
// -----------------------------

#[test]
fn number_card_has_no_effect() {
    let sizes = [7, 7, 7, 7];
    let res = apply_effect(EffectState::default(), &Card::number(Color::Red, 5), &info(0, 4, &sizes));
    assert!(res.commands.is_empty());
    assert!(res.events.is_empty());
    assert_eq!(res.state, EffectState::default());
}

#[test]
fn skip_advances_once_more() {
    let sizes = [7, 7, 7, 7];
    let res = apply_effect(EffectState::default(), &Card::skip(Color::Red), &info(0, 4, &sizes));
    assert_eq!(res.commands, vec![TurnCommand::Advance]);
    assert_eq!(res.events, vec![GameEventKind::PlayerSkipped { player: 1 }]);
}

#[test]
fn reverse_only_reports_skip_for_two_players() {
    let sizes4 = [7, 7, 7, 7];
    let res = apply_effect(EffectState::default(), &Card::reverse(Color::Red), &info(0, 4, &sizes4));
    assert_eq!(res.commands, vec![TurnCommand::Reverse]);
    assert!(res.events.is_empty());

    let sizes2 = [7, 7];
    let res = apply_effect(EffectState::default(), &Card::reverse(Color::Red), &info(0, 2, &sizes2));
    assert_eq!(res.commands, vec![TurnCommand::Reverse]);
    assert_eq!(res.events, vec![GameEventKind::PlayerSkipped { player: 1 }]);
}

#[test]
fn draw_two_and_wild_draw_four() {
    let sizes = [7, 7, 7];
    let res = apply_effect(EffectState::default(), &Card::draw_two(Color::Blue), &info(2, 3, &sizes));
    assert_eq!(
        res.commands,
        vec![
            TurnCommand::ForceDraw { player: 0, count: 2 },
            TurnCommand::Advance,
        ]
    );

    let res = apply_effect(EffectState::default(), &Card::wild_draw_four(), &info(1, 3, &sizes));
    assert_eq!(
        res.commands,
        vec![
            TurnCommand::ForceDraw { player: 2, count: 4 },
            TurnCommand::Advance,
            TurnCommand::RequestColor,
        ]
    );

    let res = apply_effect(EffectState::default(), &Card::wild(), &info(1, 3, &sizes));
    assert_eq!(res.commands, vec![TurnCommand::RequestColor]);
}

// -----------------------------
// SUPER-КАРТЫ: ВЗВЕДЕНИЕ
// -----------------------------

#[test]
fn super_cards_only_arm_flags() {
    let sizes = [7, 3, 7, 7];

    let res = apply_effect(EffectState::default(), &super_card(Rank::DoublePlay), &info(2, 4, &sizes));
    assert!(res.commands.is_empty());
    assert_eq!(res.state.double_play, Some(2));

    let res = apply_effect(EffectState::default(), &super_card(Rank::ChiefSkip), &info(0, 4, &sizes));
    assert!(res.commands.is_empty());
    assert_eq!(res.state.skip_target, Some(1));
    assert_eq!(res.events, vec![GameEventKind::ChiefSkipArmed { target: 1 }]);

    let res = apply_effect(EffectState::default(), &super_card(Rank::ExtPlayAll), &info(3, 4, &sizes));
    assert_eq!(
        res.state.all_play,
        Some(AllPlayWindow::armed(3, AllPlayKind::External))
    );
    assert!(!res.state.all_play_active(), "окно взведено, но ещё не открыто");
}

#[test]
fn fewest_cards_breaks_ties_by_lowest_index() {
    assert_eq!(fewest_cards(&[7, 3, 7, 7]), Some(1));
    assert_eq!(fewest_cards(&[5, 2, 2, 9]), Some(1));
    assert_eq!(fewest_cards(&[4, 4]), Some(0));
    assert_eq!(fewest_cards(&[]), None);
}

#[test]
fn new_window_replaces_active_one() {
    let sizes = [7, 7, 7];
    let mut state = EffectState::default();
    state.all_play = Some(AllPlayWindow {
        opener: 0,
        kind: AllPlayKind::External,
        phase: WindowPhase::Active,
        away: true,
    });

    let res = apply_effect(state, &super_card(Rank::IntPlayAll), &info(1, 3, &sizes));
    assert_eq!(res.state.all_play, Some(AllPlayWindow::armed(1, AllPlayKind::Internal)));
    assert_eq!(
        res.events,
        vec![
            GameEventKind::AllPlayWindowClosed { opener: 0, kind: AllPlayKind::External },
            GameEventKind::AllPlayWindowArmed { opener: 1, kind: AllPlayKind::Internal },
        ]
    );
}

// -----------------------------
// SUPER-КАРТЫ: СРАБАТЫВАНИЕ
// -----------------------------

#[test]
fn double_play_undoes_the_advance_once() {
    let sizes = [5, 5, 5];
    let state = EffectState {
        double_play: Some(0),
        ..EffectState::default()
    };

    // Ход ушёл 0 -> 1: откатываем.
    let res = reconcile_after_advance(state, 0, &info(1, 3, &sizes));
    assert_eq!(res.commands, vec![TurnCommand::Back]);
    assert_eq!(res.state.double_play, None);
    assert_eq!(res.events, vec![GameEventKind::DoublePlayGranted { player: 0 }]);

    // Флаг другого игрока не трогаем.
    let state = EffectState {
        double_play: Some(2),
        ..EffectState::default()
    };
    let res = reconcile_after_advance(state, 0, &info(1, 3, &sizes));
    assert!(res.commands.is_empty());
    assert_eq!(res.state.double_play, Some(2));
}

#[test]
fn chief_skip_fires_only_on_target() {
    let sizes = [5, 5, 5, 5];
    let state = EffectState {
        skip_target: Some(2),
        ..EffectState::default()
    };

    let res = reconcile_after_advance(state, 0, &info(1, 4, &sizes));
    assert!(res.commands.is_empty());
    assert_eq!(res.state.skip_target, Some(2));

    let res = reconcile_after_advance(res.state, 1, &info(2, 4, &sizes));
    assert_eq!(res.commands, vec![TurnCommand::Advance]);
    assert_eq!(res.state.skip_target, None);
    assert_eq!(res.events, vec![GameEventKind::PlayerSkipped { player: 2 }]);
}

/// Внешнее окно: открылось на первом другом игроке,
/// закрылось, когда ход вернулся к открывшему.
#[test]
fn external_window_lifecycle() {
    let sizes = [5, 5, 5];
    let mut state = EffectState {
        all_play: Some(AllPlayWindow::armed(0, AllPlayKind::External)),
        ..EffectState::default()
    };

    let res = reconcile_after_advance(state, 0, &info(1, 3, &sizes));
    assert!(res.state.all_play_active());
    assert_eq!(
        res.events,
        vec![GameEventKind::AllPlayWindowOpened { opener: 0, kind: AllPlayKind::External }]
    );
    state = res.state;

    let res = reconcile_after_advance(state, 1, &info(2, 3, &sizes));
    assert!(res.state.all_play_active());
    state = res.state;

    let res = reconcile_after_advance(state, 2, &info(0, 3, &sizes));
    assert_eq!(res.state.all_play, None);
    assert_eq!(
        res.events,
        vec![GameEventKind::AllPlayWindowClosed { opener: 0, kind: AllPlayKind::External }]
    );
}

/// Внутреннее окно: открывается на следующем ходу открывшего,
/// закрывается на его ходу после этого.
#[test]
fn internal_window_lifecycle() {
    let sizes = [5, 5];
    let mut state = EffectState {
        all_play: Some(AllPlayWindow::armed(0, AllPlayKind::Internal)),
        ..EffectState::default()
    };

    // 0 -> 1: ещё взведено.
    let res = reconcile_after_advance(state, 0, &info(1, 2, &sizes));
    assert!(!res.state.all_play_active());
    state = res.state;

    // 1 -> 0: открылось.
    let res = reconcile_after_advance(state, 1, &info(0, 2, &sizes));
    assert!(res.state.all_play_active());
    state = res.state;

    // 0 -> 1: всё ещё открыто.
    let res = reconcile_after_advance(state, 0, &info(1, 2, &sizes));
    assert!(res.state.all_play_active());
    state = res.state;

    // 1 -> 0: закрылось.
    let res = reconcile_after_advance(state, 1, &info(0, 2, &sizes));
    assert_eq!(res.state.all_play, None);
}

// -----------------------------
// ВМЕШАТЕЛЬСТВО ВНЕ ОЧЕРЕДИ
// -----------------------------

/// Открывший вмешался в своё же открытое окно – окно закрывается.
#[test]
fn opener_landing_closes_active_window() {
    let state = EffectState {
        all_play: Some(AllPlayWindow {
            opener: 0,
            kind: AllPlayKind::External,
            phase: WindowPhase::Active,
            away: true,
        }),
        ..EffectState::default()
    };

    let res = reconcile_on_landing(state, 0);
    assert_eq!(res.state.all_play, None);
    assert!(res.commands.is_empty());
    assert_eq!(
        res.events,
        vec![GameEventKind::AllPlayWindowClosed { opener: 0, kind: AllPlayKind::External }]
    );

    // Другой игрок окно не закрывает.
    let res = reconcile_on_landing(state, 2);
    assert!(res.state.all_play_active());
    assert!(res.events.is_empty());
}

#[test]
fn landing_opens_armed_windows_like_an_advance() {
    let state = EffectState {
        all_play: Some(AllPlayWindow::armed(1, AllPlayKind::External)),
        ..EffectState::default()
    };
    assert!(reconcile_on_landing(state, 3).state.all_play_active());
    assert!(!reconcile_on_landing(state, 1).state.all_play_active());

    let state = EffectState {
        all_play: Some(AllPlayWindow {
            away: true,
            ..AllPlayWindow::armed(1, AllPlayKind::Internal)
        }),
        ..EffectState::default()
    };
    assert!(reconcile_on_landing(state, 1).state.all_play_active());
}

#[test]
fn skip_target_landing_spends_the_skip() {
    let state = EffectState {
        skip_target: Some(2),
        ..EffectState::default()
    };

    let res = reconcile_on_landing(state, 2);
    assert_eq!(res.state.skip_target, None);
    assert!(res.commands.is_empty(), "the pointer stays on the actor");
    assert_eq!(res.events, vec![GameEventKind::ChiefSkipSpent { target: 2 }]);

    let res = reconcile_on_landing(state, 1);
    assert_eq!(res.state.skip_target, Some(2));
}
