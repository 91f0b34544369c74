use serde::{Deserialize, Serialize};

use crate::domain::card::Color;
use crate::domain::PlayerIndex;
use crate::engine::{GameEngine, RandomSource};

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команды, меняющие состояние партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Сыграть карту из руки.
    PlayCard {
        player: PlayerIndex,
        card_index: usize,
    },

    /// Добрать карту из колоды.
    DrawCard { player: PlayerIndex },

    /// Взять карту из super-пула.
    DrawSuperCard { player: PlayerIndex },

    /// Назвать цвет после wild / wild_draw4.
    ChooseColor { color: Color },

    /// Передать ход.
    AdvanceTurn,
}

impl Command {
    /// Разобрать команду из JSON (то, что присылает UI).
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        serde_json::from_str(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Internal(e.to_string()))
    }
}

/// Выполнить команду над партией.
pub fn execute_command<R: RandomSource>(
    engine: &mut GameEngine<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let response = match command {
        Command::PlayCard { player, card_index } => {
            CommandResponse::Played(engine.play(player, card_index)?)
        }
        Command::DrawCard { player } => {
            let out = engine.draw(player)?;
            CommandResponse::Drew {
                card: out.card,
                next_player: out.next_player,
            }
        }
        Command::DrawSuperCard { player } => {
            let out = engine.draw_super(player)?;
            CommandResponse::Drew {
                card: out.card,
                next_player: out.next_player,
            }
        }
        Command::ChooseColor { color } => CommandResponse::ColorChosen {
            next_player: engine.choose_color(color)?,
        },
        Command::AdvanceTurn => CommandResponse::TurnAdvanced {
            next_player: engine.advance_turn()?,
        },
    };
    Ok(response)
}
