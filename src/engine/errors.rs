use crate::domain::PlayerIndex;

use thiserror::Error;

/// Ошибки игрового движка.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid move: this card cannot be played now")]
    InvalidMove,

    #[error("No cards to draw: deck and discard pile are exhausted")]
    EmptyPiles,

    #[error("No super cards left to draw")]
    SuperDeckEmpty,

    #[error("It is not player {0}'s turn")]
    NotPlayersTurn(PlayerIndex),

    #[error("A color must be chosen before the game can continue")]
    ColorChoicePending,

    #[error("No color choice is pending")]
    NoColorChoicePending,

    #[error("The game is already over")]
    GameOver,

    #[error("Player {0} does not exist")]
    NoSuchPlayer(PlayerIndex),

    #[error("Player {player} has no card at index {card_index}")]
    NoSuchCard {
        player: PlayerIndex,
        card_index: usize,
    },

    #[error("Invalid game config: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Восстановимая ошибка, которую надо показать игроку
    /// (состояние не изменилось, можно переспросить ход).
    ///
    /// Остальные варианты – нарушение контракта вызывающей стороны.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidMove
                | EngineError::EmptyPiles
                | EngineError::SuperDeckEmpty
                | EngineError::NotPlayersTurn(_)
                | EngineError::ColorChoicePending
                | EngineError::NoColorChoicePending
                | EngineError::GameOver
        )
    }
}
