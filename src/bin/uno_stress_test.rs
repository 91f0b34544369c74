use uno_engine::domain::{Card, Color, GameConfig, PlayerIndex};
use uno_engine::engine::{GameEngine, GameStatus, PlayerAction, PlayerActionKind};
use uno_engine::infra::DeterministicRng;

fn main() {
    println!("uno_stress_test: стартуем стресс-тест движка…");

    // Параметры нагрузки — можно смело крутить.
    const NUM_GAMES: u64 = 500;
    const MAX_STEPS: u32 = 2_000;

    let mut finished: u64 = 0;
    let mut unfinished: u64 = 0;
    let mut total_steps: u64 = 0;
    let mut violations: u64 = 0;

    for seed in 0..NUM_GAMES {
        let config = GameConfig {
            num_players: 2 + (seed as usize % 9),
            hand_size: 7,
            super_copies_per_kind: 3,
        };

        let mut engine = match GameEngine::new(config.clone(), DeterministicRng::from_seed(seed)) {
            Ok(e) => e,
            Err(e) => {
                eprintln!("[STRESS][seed={seed}] ОШИБКА при создании партии: {e}");
                violations += 1;
                continue;
            }
        };

        let mut expected = GameEngine::<DeterministicRng>::initial_census(&config);
        expected.sort();

        let mut steps = 0;
        while steps < MAX_STEPS {
            if matches!(engine.status(), GameStatus::Finished { .. }) {
                break;
            }
            steps += 1;

            let action = pick_action(&engine, steps);
            if let Err(e) = engine.apply_action(action.clone()) {
                if e.is_user_facing() {
                    // Ничего не добрать – просто передаём ход.
                    if let Err(e) = engine.advance_turn() {
                        eprintln!("[STRESS][seed={seed}] BUG: не удалось передать ход после {action:?}: {e}");
                        violations += 1;
                        break;
                    }
                } else {
                    eprintln!("[STRESS][seed={seed}] BUG: {action:?} -> {e}");
                    violations += 1;
                    break;
                }
            }

            let mut census = engine.card_census();
            census.sort();
            if census != expected {
                eprintln!("[STRESS][seed={seed}] BUG: нарушено сохранение карт на шаге {steps}");
                violations += 1;
                break;
            }
            if engine.current_player() >= engine.num_players() {
                eprintln!("[STRESS][seed={seed}] BUG: current_player вне диапазона");
                violations += 1;
                break;
            }
        }

        total_steps += steps as u64;
        match engine.status() {
            GameStatus::Finished { .. } => finished += 1,
            _ => unfinished += 1,
        }
    }

    println!();
    println!("=========== STRESS TEST SUMMARY ===========");
    println!("Всего партий: {}", NUM_GAMES);
    println!("Завершено победой: {}", finished);
    println!("Упёрлись в лимит шагов: {}", unfinished);
    println!("Всего действий: {}", total_steps);
    println!("Нарушений инвариантов: {}", violations);
    println!("===========================================");
    println!("uno_stress_test: завершено.");

    if violations > 0 {
        std::process::exit(1);
    }
}

/// Простейшая стратегия для стресс-теста:
/// - ждём цвет → называем самый частый цвет в руке;
/// - есть подходящая обычная карта → играем первую;
/// - есть super-карта → играем её;
/// - каждый седьмой ход берём из super-пула, иначе добираем.
fn pick_action(engine: &GameEngine<DeterministicRng>, step: u32) -> PlayerAction {
    if let Some(owner) = engine.pending_color {
        return PlayerAction {
            player: owner,
            kind: PlayerActionKind::ChooseColor(favourite_color(engine, owner)),
        };
    }

    let player = engine.current_player();
    let cards: &[Card] = engine
        .hand(player)
        .map(|h| h.cards.as_slice())
        .unwrap_or(&[]);

    let playable = (0..cards.len())
        .find(|&idx| !cards[idx].is_super() && engine.is_legal_play(player, idx));
    if let Some(card_index) = playable {
        return PlayerAction::play(player, card_index);
    }
    if let Some(card_index) = cards.iter().position(Card::is_super) {
        return PlayerAction::play(player, card_index);
    }
    if step % 7 == 0 && engine.super_cards_left() > 0 {
        return PlayerAction {
            player,
            kind: PlayerActionKind::DrawSuper,
        };
    }
    PlayerAction::draw(player)
}

fn favourite_color(engine: &GameEngine<DeterministicRng>, player: PlayerIndex) -> Color {
    let cards = engine.hand(player).map(|h| h.cards.as_slice()).unwrap_or(&[]);
    Color::ALL
        .into_iter()
        .max_by_key(|c| cards.iter().filter(|card| card.color() == Some(*c)).count())
        .unwrap_or(Color::Red)
}

