use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Цвет карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];
}

/// Ранг (номинал / эффект) карты.
///
/// Таксономия закрыта: любой новый ранг – это новый вариант,
/// и компилятор заставит обработать его во всех `match`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    /// Цифровая карта 0..=9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
    /// Super: внешнее окно "играют все".
    ExtPlayAll,
    /// Super: внутреннее окно "играют все".
    IntPlayAll,
    /// Super: двойной ход.
    DoublePlay,
    /// Super: пропуск игрока с наименьшей рукой.
    ChiefSkip,
}

impl Rank {
    /// Ранги, которые бывают у цветных карт.
    pub fn is_colored_rank(self) -> bool {
        matches!(
            self,
            Rank::Number(0..=9) | Rank::Skip | Rank::Reverse | Rank::DrawTwo
        )
    }

    pub fn is_wild_rank(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    pub fn is_super_rank(self) -> bool {
        matches!(
            self,
            Rank::ExtPlayAll | Rank::IntPlayAll | Rank::DoublePlay | Rank::ChiefSkip
        )
    }

    /// Все четыре вида super-карт.
    pub const SUPER_KINDS: [Rank; 4] = [
        Rank::ExtPlayAll,
        Rank::IntPlayAll,
        Rank::DoublePlay,
        Rank::ChiefSkip,
    ];
}

/// Класс карты: цветная, wild или super.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum CardClass {
    Colored(Color),
    Wild,
    Super,
}

/// Ошибки построения карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("rank {rank} cannot belong to class {class:?}")]
    ClassRankMismatch { class: CardClass, rank: Rank },

    #[error("cannot parse card from {0:?}")]
    Unparsable(String),
}

/// Одна карта. Неизменяема после построения: класс и ранг проверяются
/// в конструкторе, поэтому поля закрыты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Card {
    class: CardClass,
    rank: Rank,
}

impl Card {
    /// Проверяющий конструктор.
    pub fn new(class: CardClass, rank: Rank) -> Result<Self, CardError> {
        let ok = match class {
            CardClass::Colored(_) => rank.is_colored_rank(),
            CardClass::Wild => rank.is_wild_rank(),
            CardClass::Super => rank.is_super_rank(),
        };
        if ok {
            Ok(Self { class, rank })
        } else {
            Err(CardError::ClassRankMismatch { class, rank })
        }
    }

    /// Цветная карта. Для готовых наборов (колода, тесты).
    pub fn colored(color: Color, rank: Rank) -> Result<Self, CardError> {
        Self::new(CardClass::Colored(color), rank)
    }

    pub const fn number(color: Color, value: u8) -> Self {
        assert!(value <= 9, "номинал цифровой карты должен быть в 0..=9");
        Self {
            class: CardClass::Colored(color),
            rank: Rank::Number(value),
        }
    }

    pub const fn skip(color: Color) -> Self {
        Self { class: CardClass::Colored(color), rank: Rank::Skip }
    }

    pub const fn reverse(color: Color) -> Self {
        Self { class: CardClass::Colored(color), rank: Rank::Reverse }
    }

    pub const fn draw_two(color: Color) -> Self {
        Self { class: CardClass::Colored(color), rank: Rank::DrawTwo }
    }

    pub const fn wild() -> Self {
        Self { class: CardClass::Wild, rank: Rank::Wild }
    }

    pub const fn wild_draw_four() -> Self {
        Self { class: CardClass::Wild, rank: Rank::WildDrawFour }
    }

    /// Super-карта заданного вида.
    pub fn super_card(rank: Rank) -> Result<Self, CardError> {
        Self::new(CardClass::Super, rank)
    }

    pub fn class(&self) -> CardClass {
        self.class
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Собственный цвет карты (у wild и super его нет).
    pub fn color(&self) -> Option<Color> {
        match self.class {
            CardClass::Colored(c) => Some(c),
            CardClass::Wild | CardClass::Super => None,
        }
    }

    pub fn is_super(&self) -> bool {
        matches!(self.class, CardClass::Super)
    }

    /// Годится ли карта стартовой на сброс (не wild и не super).
    pub fn is_starter(&self) -> bool {
        matches!(self.class, CardClass::Colored(_))
    }

    /// Можно ли сыграть карту поверх `top`.
    ///
    /// `active_color` – цвет, который сейчас "в силе" (после wild/super он
    /// не совпадает с собственным цветом верхней карты).
    pub fn is_playable(&self, top: &Card, active_color: Color, all_play_active: bool) -> bool {
        if all_play_active {
            return true;
        }
        match self.class {
            CardClass::Wild | CardClass::Super => true,
            CardClass::Colored(color) => color == active_color || self.rank == top.rank,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Color {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            _ => Err(CardError::Unparsable(s.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{n}"),
            Rank::Skip => write!(f, "skip"),
            Rank::Reverse => write!(f, "reverse"),
            Rank::DrawTwo => write!(f, "draw2"),
            Rank::Wild => write!(f, "wild"),
            Rank::WildDrawFour => write!(f, "wild_draw4"),
            Rank::ExtPlayAll => write!(f, "ext_play_all"),
            Rank::IntPlayAll => write!(f, "int_play_all"),
            Rank::DoublePlay => write!(f, "double_play"),
            Rank::ChiefSkip => write!(f, "chief_skip"),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let rank = match lower.as_str() {
            "skip" => Rank::Skip,
            "reverse" => Rank::Reverse,
            "draw2" => Rank::DrawTwo,
            "wild" => Rank::Wild,
            "wild_draw4" => Rank::WildDrawFour,
            "ext_play_all" => Rank::ExtPlayAll,
            "int_play_all" => Rank::IntPlayAll,
            "double_play" => Rank::DoublePlay,
            "chief_skip" => Rank::ChiefSkip,
            other => match other.parse::<u8>() {
                Ok(n) if n <= 9 => Rank::Number(n),
                _ => return Err(CardError::Unparsable(s.to_string())),
            },
        };
        Ok(rank)
    }
}

impl fmt::Display for Card {
    /// Формат вида `red 7`, `blue draw2`, `wild_draw4`, `chief_skip`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            CardClass::Colored(color) => write!(f, "{color} {}", self.rank),
            CardClass::Wild | CardClass::Super => write!(f, "{}", self.rank),
        }
    }
}

/// Парсинг строки в формате `Display`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let first = parts
            .next()
            .ok_or_else(|| CardError::Unparsable(s.to_string()))?;
        let second = parts.next();
        if parts.next().is_some() {
            return Err(CardError::Unparsable(s.to_string()));
        }

        match second {
            Some(rank_str) => {
                let color: Color = first.parse()?;
                let rank: Rank = rank_str.parse()?;
                Card::colored(color, rank)
            }
            None => {
                let rank: Rank = first.parse()?;
                if rank.is_wild_rank() {
                    Card::new(CardClass::Wild, rank)
                } else {
                    Card::super_card(rank)
                }
            }
        }
    }
}
