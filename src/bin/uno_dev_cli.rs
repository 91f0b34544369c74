use uno_engine::api::{build_game_view, execute_command, Command, CommandResponse};
use uno_engine::domain::{Card, Color, GameConfig};
use uno_engine::engine::{GameEngine, GameEventKind, GameStatus};
use uno_engine::infra::DeterministicRng;

fn main() {
    println!("uno_dev_cli: стартуем dev-CLI…");

    // Аргументы: [seed] [num_players]
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let num_players: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);

    let config = GameConfig::new(num_players);
    let mut engine = match GameEngine::new(config, DeterministicRng::from_seed(seed)) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("[CLI] Не удалось создать партию: {e}");
            std::process::exit(1);
        }
    };

    const MAX_STEPS: u32 = 1_000;
    let mut printed = 0;
    print_new_events(&engine, &mut printed);

    for _ in 0..MAX_STEPS {
        if matches!(engine.status(), GameStatus::Finished { .. }) {
            break;
        }

        let command = pick_command(&engine);
        match execute_command(&mut engine, command.clone()) {
            Ok(CommandResponse::Played(out)) if out.needs_color_choice => {
                println!("[CLI] Игрок должен выбрать цвет.");
            }
            Ok(_) => {}
            Err(e) => {
                println!("[CLI] {command:?} отклонена: {e:?}, передаём ход.");
                if let Err(e) = execute_command(&mut engine, Command::AdvanceTurn) {
                    eprintln!("[CLI] BUG: не удалось передать ход: {e:?}");
                    break;
                }
            }
        }
        print_new_events(&engine, &mut printed);
    }

    println!();
    println!("================ FINAL STATE =================");
    match serde_json::to_string_pretty(&build_game_view(&engine)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[CLI] Не удалось сериализовать состояние: {e}"),
    }
    println!("Событий в истории: {}", engine.history().len());
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Напечатать события, появившиеся с прошлого вызова.
fn print_new_events(engine: &GameEngine<DeterministicRng>, printed: &mut usize) {
    for event in &engine.history().events[*printed..] {
        match &event.kind {
            GameEventKind::CardPlayed {
                player,
                card,
                jumped_in,
            } => {
                let suffix = if *jumped_in { " (вне очереди)" } else { "" };
                println!("#{:<4} Player {} кладёт {}{}", event.index, player + 1, card, suffix);
            }
            GameEventKind::GameWon { player } => {
                println!("#{:<4} Player {} побеждает!", event.index, player + 1);
            }
            other => println!("#{:<4} {:?}", event.index, other),
        }
    }
    *printed = engine.history().events.len();
}

/// Ход "на автомате": первая подходящая карта, иначе super-карта, иначе добор.
fn pick_command(engine: &GameEngine<DeterministicRng>) -> Command {
    if let Some(owner) = engine.pending_color {
        let cards = engine.hand(owner).map(|h| h.cards.as_slice()).unwrap_or(&[]);
        let color = Color::ALL
            .into_iter()
            .max_by_key(|c| cards.iter().filter(|card| card.color() == Some(*c)).count())
            .unwrap_or(Color::Red);
        return Command::ChooseColor { color };
    }

    let player = engine.current_player();
    let cards: &[Card] = engine.hand(player).map(|h| h.cards.as_slice()).unwrap_or(&[]);

    if let Some(card_index) =
        (0..cards.len()).find(|&idx| !cards[idx].is_super() && engine.is_legal_play(player, idx))
    {
        return Command::PlayCard { player, card_index };
    }
    if let Some(card_index) = cards.iter().position(Card::is_super) {
        return Command::PlayCard { player, card_index };
    }
    Command::DrawCard { player }
}
