use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color, Rank};

/// Размер стандартной колоды.
pub const STANDARD_DECK_SIZE: usize = 108;

/// Колода карт. В домене — просто упорядоченный список карт,
/// верх колоды = конец вектора.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Стандартная 108-карточная колода (до перемешивания), по цветам:
    /// один "0", по два 1..9, по два skip / reverse / draw2;
    /// в конце 4 wild и 4 wild_draw4.
    pub fn standard_108() -> Self {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        for color in Color::ALL {
            cards.push(Card::number(color, 0));
            for _ in 0..2 {
                for value in 1..=9 {
                    cards.push(Card::number(color, value));
                }
                cards.push(Card::skip(color));
                cards.push(Card::reverse(color));
                cards.push(Card::draw_two(color));
            }
        }
        for _ in 0..4 {
            cards.push(Card::wild());
            cards.push(Card::wild_draw_four());
        }
        Deck { cards }
    }

    /// Пул super-карт: `copies_per_kind` экземпляров каждого из 4 видов.
    pub fn super_pool(copies_per_kind: usize) -> Self {
        let mut cards = Vec::with_capacity(copies_per_kind * Rank::SUPER_KINDS.len());
        for kind in Rank::SUPER_KINDS {
            for _ in 0..copies_per_kind {
                if let Ok(card) = Card::super_card(kind) {
                    cards.push(card);
                }
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять до n карт сверху (меньше, если колода кончилась).
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }

    /// Положить карту под низ колоды.
    pub fn put_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }
}
