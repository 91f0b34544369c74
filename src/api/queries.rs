use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;
use crate::engine::{GameEngine, GameHistory, RandomSource};

use super::dto::{GameViewDto, HandDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние стола.
    GetGame,

    /// Рука игрока.
    GetHand { player: PlayerIndex },

    /// Можно ли сыграть карту (без учёта очереди).
    IsLegalPlay {
        player: PlayerIndex,
        card_index: usize,
    },

    /// История партии.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Game(GameViewDto),
    Hand(HandDto),
    Legal(bool),
    History(GameHistory),
}

/// Сформировать DTO стола.
pub fn build_game_view<R: RandomSource>(engine: &GameEngine<R>) -> GameViewDto {
    GameViewDto {
        num_players: engine.num_players(),
        current_player: engine.current_player(),
        direction: engine.direction(),
        top_card: engine.top_card().copied(),
        active_color: engine.active_color(),
        hand_sizes: engine.hand_sizes(),
        deck_non_empty: !engine.is_deck_empty(),
        discard_non_empty: !engine.is_discard_empty(),
        super_cards_left: engine.super_cards_left(),
        pending_color: engine.pending_color,
        all_play_active: engine.all_play_active(),
        winner: engine.winner,
    }
}

/// Ответить на запрос.
pub fn answer_query<R: RandomSource>(
    engine: &GameEngine<R>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    let response = match query {
        Query::GetGame => QueryResponse::Game(build_game_view(engine)),
        Query::GetHand { player } => {
            let hand = engine
                .hand(player)
                .ok_or_else(|| ApiError::BadRequest(format!("no player {player}")))?;
            QueryResponse::Hand(HandDto {
                player,
                cards: hand.cards.clone(),
            })
        }
        Query::IsLegalPlay { player, card_index } => {
            QueryResponse::Legal(engine.is_legal_play(player, card_index))
        }
        Query::GetHistory => QueryResponse::History(engine.history().clone()),
    };
    Ok(response)
}
