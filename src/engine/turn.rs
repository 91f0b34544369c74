use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;

/// Направление хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    /// +1
    Forward,
    /// -1
    Backward,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Чей ход и в какую сторону идём.
///
/// Инвариант: `current < num_players` всегда (модульная арифметика).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnTracker {
    current: PlayerIndex,
    direction: Direction,
    num_players: usize,
}

impl TurnTracker {
    /// `num_players` должен быть >= 2 (проверяется в `GameConfig::validate`).
    pub fn new(num_players: usize) -> Self {
        Self {
            current: 0,
            direction: Direction::Forward,
            num_players: num_players.max(1),
        }
    }

    pub fn current(&self) -> PlayerIndex {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Сдвиг на `steps` мест в текущем направлении (по кругу).
    fn offset(&self, steps: isize) -> PlayerIndex {
        let n = self.num_players as isize;
        (self.current as isize + steps * self.direction.step()).rem_euclid(n) as PlayerIndex
    }

    /// Кто ходит следующим (без изменения состояния).
    pub fn peek_next(&self) -> PlayerIndex {
        self.offset(1)
    }

    /// Кто ходил перед текущим (без изменения состояния).
    pub fn peek_prev(&self) -> PlayerIndex {
        self.offset(-1)
    }

    /// Передать ход следующему.
    pub fn next(&mut self) {
        self.current = self.peek_next();
    }

    /// Откатить `next()`.
    pub fn back(&mut self) {
        self.current = self.peek_prev();
    }

    /// Развернуть направление. Вдвоём разворот = пропуск хода,
    /// поэтому сразу делаем ещё один `next()`.
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.flipped();
        if self.num_players == 2 {
            self.next();
        }
    }

    /// Передать ход конкретному игроку (вне очереди).
    /// Индекс вне диапазона игнорируется.
    pub fn jump_to(&mut self, player: PlayerIndex) {
        if player < self.num_players {
            self.current = player;
        }
    }
}

