//! Доменная модель игры: карты, колоды, руки, конфиг партии.

pub mod card;
pub mod config;
pub mod deck;
pub mod hand;

/// Индекс игрока за столом (0..num_players-1).
pub type PlayerIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use config::*;
pub use deck::*;
pub use hand::*;
