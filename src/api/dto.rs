use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color};
use crate::domain::PlayerIndex;
use crate::engine::{Direction, PlayOutcome};

/// DTO состояния партии (всё, что нужно UI для отрисовки стола).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub num_players: usize,
    pub current_player: PlayerIndex,
    pub direction: Direction,
    pub top_card: Option<Card>,
    pub active_color: Color,
    /// Размеры рук по индексам (сами карты – только через `HandDto`).
    pub hand_sizes: Vec<usize>,
    pub deck_non_empty: bool,
    pub discard_non_empty: bool,
    pub super_cards_left: usize,
    /// Кто должен назвать цвет (если ждём).
    pub pending_color: Option<PlayerIndex>,
    pub all_play_active: bool,
    pub winner: Option<PlayerIndex>,
}

/// DTO руки одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDto {
    pub player: PlayerIndex,
    pub cards: Vec<Card>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Карта сыграна.
    Played(PlayOutcome),
    /// Карта добрана, ход перешёл к `next_player`.
    Drew { card: Card, next_player: PlayerIndex },
    /// Цвет выбран, ход перешёл.
    ColorChosen { next_player: PlayerIndex },
    /// Ход передан.
    TurnAdvanced { next_player: PlayerIndex },
}
