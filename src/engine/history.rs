use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color};
use crate::domain::PlayerIndex;
use crate::engine::effects::AllPlayKind;
use crate::engine::turn::Direction;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Новая партия началась.
    GameStarted {
        num_players: usize,
        deck_size: usize,
        super_pool_size: usize,
    },

    /// Игрок получил стартовые карты.
    CardsDealt { player: PlayerIndex, count: usize },

    /// Открыта стартовая карта сброса.
    StartingCardTurned { card: Card },

    /// Игрок сыграл карту. `jumped_in` – сыграл вне очереди.
    CardPlayed {
        player: PlayerIndex,
        card: Card,
        jumped_in: bool,
    },

    /// Игрок добрал карты (сам или по эффекту draw2/wild_draw4).
    CardsDrawn {
        player: PlayerIndex,
        count: usize,
        forced: bool,
    },

    /// Игрок взял карту из super-пула.
    SuperCardDrawn { player: PlayerIndex },

    /// Сброс (кроме верхней карты) ушёл обратно в колоду.
    DeckReplenished { recycled: usize },

    /// Игрок выбрал цвет после wild.
    ColorChosen { player: PlayerIndex, color: Color },

    /// Переход хода.
    TurnPassed { from: PlayerIndex, to: PlayerIndex },

    /// Смена направления.
    DirectionReversed { direction: Direction },

    /// Игрок пропускает ход.
    PlayerSkipped { player: PlayerIndex },

    /// Игрок ходит ещё раз (double_play).
    DoublePlayGranted { player: PlayerIndex },

    /// chief_skip выбрал цель.
    ChiefSkipArmed { target: PlayerIndex },

    /// Цель chief_skip сама вмешалась вне очереди, пропуск снят.
    ChiefSkipSpent { target: PlayerIndex },

    /// Окно "играют все" взведено, но ещё не открыто.
    AllPlayWindowArmed { opener: PlayerIndex, kind: AllPlayKind },

    AllPlayWindowOpened { opener: PlayerIndex, kind: AllPlayKind },

    AllPlayWindowClosed { opener: PlayerIndex, kind: AllPlayKind },

    /// Партия завершена.
    GameWon { player: PlayerIndex },
}

/// Событие в партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn extend(&mut self, kinds: impl IntoIterator<Item = GameEventKind>) {
        for kind in kinds {
            self.push(kind);
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
