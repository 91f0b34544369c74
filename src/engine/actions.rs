use serde::{Deserialize, Serialize};

use crate::domain::card::Color;
use crate::domain::PlayerIndex;

/// Тип действия игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PlayerActionKind {
    /// Сыграть карту из руки по индексу.
    Play { card_index: usize },
    /// Добрать карту из колоды (ход заканчивается).
    Draw,
    /// Взять карту из super-пула (ход заканчивается).
    DrawSuper,
    /// Назвать цвет после wild / wild_draw4.
    ChooseColor(Color),
    /// Пропустить ход.
    Pass,
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerAction {
    /// Кто действует.
    pub player: PlayerIndex,
    /// Само действие.
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn play(player: PlayerIndex, card_index: usize) -> Self {
        Self {
            player,
            kind: PlayerActionKind::Play { card_index },
        }
    }

    pub fn draw(player: PlayerIndex) -> Self {
        Self {
            player,
            kind: PlayerActionKind::Draw,
        }
    }
}
