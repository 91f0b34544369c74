use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI / клиенту).
///
/// Ошибки – обычные значения: UI ветвится по варианту и показывает текст.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Карту нельзя сыграть – переспросить ход.
    InvalidMove(String),

    /// Добирать нечего.
    EmptyPiles(String),

    /// Команда не может быть выполнена в текущем состоянии
    /// (не твой ход, ждём цвет, партия окончена, ...).
    InvalidCommand(String),

    /// Нарушение контракта вызывающей стороны (неверные индексы и т.п.).
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let msg = err.to_string();
        match err {
            EngineError::InvalidMove => ApiError::InvalidMove(msg),
            EngineError::EmptyPiles | EngineError::SuperDeckEmpty => ApiError::EmptyPiles(msg),
            e if e.is_user_facing() => ApiError::InvalidCommand(msg),
            _ => ApiError::Internal(msg),
        }
    }
}
