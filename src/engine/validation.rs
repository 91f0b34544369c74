use crate::domain::card::{Card, Color};
use crate::domain::PlayerIndex;
use crate::engine::errors::EngineError;

/// Можно ли положить карту на сброс (только совпадение, без учёта очереди).
/// Пустой сброс принимает любую карту.
pub fn is_card_legal(
    card: &Card,
    top: Option<&Card>,
    active_color: Color,
    all_play_active: bool,
) -> bool {
    match top {
        Some(top) => card.is_playable(top, active_color, all_play_active),
        None => true,
    }
}

/// Проверка права хода.
///
/// Вне очереди можно сыграть super-карту в любой момент или любую карту,
/// пока открыто окно "играют все". Возвращает `true`, если игрок вмешивается
/// вне очереди (ход тогда переходит к нему).
pub fn validate_turn(
    actor: PlayerIndex,
    current: PlayerIndex,
    card: &Card,
    all_play_active: bool,
) -> Result<bool, EngineError> {
    if actor == current {
        return Ok(false);
    }
    if card.is_super() || all_play_active {
        Ok(true)
    } else {
        Err(EngineError::NotPlayersTurn(actor))
    }
}

/// Добирать и выбирать цвет может только тот, чей ход.
pub fn validate_owner(actor: PlayerIndex, current: PlayerIndex) -> Result<(), EngineError> {
    if actor == current {
        Ok(())
    } else {
        Err(EngineError::NotPlayersTurn(actor))
    }
}
