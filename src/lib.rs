//! Движок правил UNO с super-картами.
//!
//! Слои:
//! - `domain` – карты, колоды, руки, конфиг;
//! - `engine` – очередь ходов, колода/сброс, эффекты, партия;
//! - `infra` – RNG;
//! - `api` – команды/запросы для UI.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Card, CardClass, Color, GameConfig, PlayerIndex, Rank};
pub use engine::{EngineError, GameEngine};
