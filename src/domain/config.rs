use serde::{Deserialize, Serialize};

/// Минимум игроков за столом.
pub const MIN_PLAYERS: usize = 2;
/// Максимум игроков: 10 рук по 10 карт ещё оставляют колоду непустой.
pub const MAX_PLAYERS: usize = 10;
pub const MAX_HAND_SIZE: usize = 10;
pub const MAX_SUPER_COPIES: usize = 5;

/// Конфиг партии: сколько игроков, сколько карт раздаём,
/// сколько копий каждой super-карты в отдельном пуле.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub num_players: usize,
    /// Стартовый размер руки (обычно 7).
    pub hand_size: usize,
    /// Копий каждого из 4 видов super-карт.
    pub super_copies_per_kind: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 4,
            hand_size: 7,
            super_copies_per_kind: 3,
        }
    }
}

impl GameConfig {
    pub fn new(num_players: usize) -> Self {
        Self {
            num_players,
            ..Self::default()
        }
    }

    /// Размер super-пула.
    pub fn super_pool_size(&self) -> usize {
        self.super_copies_per_kind * 4
    }

    /// Проверка конфига. Ошибка – текст для `EngineError::InvalidConfig`.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(format!(
                "num_players must be in {MIN_PLAYERS}..={MAX_PLAYERS}, got {}",
                self.num_players
            ));
        }
        if !(1..=MAX_HAND_SIZE).contains(&self.hand_size) {
            return Err(format!(
                "hand_size must be in 1..={MAX_HAND_SIZE}, got {}",
                self.hand_size
            ));
        }
        if self.super_copies_per_kind > MAX_SUPER_COPIES {
            return Err(format!(
                "super_copies_per_kind must be at most {MAX_SUPER_COPIES}, got {}",
                self.super_copies_per_kind
            ));
        }
        Ok(())
    }
}
