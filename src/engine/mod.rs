//! Игровой движок: очередь ходов, колода и сброс, эффекты карт.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `play` – сыграть карту из руки
//!   - `draw` / `draw_super` – добрать карту и закончить ход
//!   - `choose_color` – назвать цвет после wild
//!   - `advance_turn` – передать ход

pub mod actions;
pub mod deck_manager;
pub mod effects;
pub mod errors;
pub mod game_loop;
pub mod history;
pub mod turn;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use deck_manager::{DeckManager, Drawn};
pub use effects::{AllPlayKind, AllPlayWindow, EffectState, TurnCommand, TurnInfo, WindowPhase};
pub use errors::EngineError;
pub use game_loop::{ActionOutcome, DrawOutcome, GameEngine, GameStatus, PlayOutcome};
pub use history::{GameEvent, GameEventKind, GameHistory};
pub use turn::{Direction, TurnTracker};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

impl<R: RandomSource> RandomSource for &mut R {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        (**self).shuffle(slice);
    }
}
