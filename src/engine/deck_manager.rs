use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Результат добора одной карты.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drawn {
    pub card: Card,
    /// Сколько карт вернулось из сброса в колоду перед добором
    /// (None – пополнения не было).
    pub recycled: Option<usize>,
}

/// Колода добора, сброс и отдельный пул super-карт.
///
/// Карты только перекладываются между этими контейнерами и руками,
/// никогда не копируются и не теряются.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckManager {
    /// Колода добора (верх = конец вектора).
    pub deck: Deck,
    /// Сброс (верхняя карта = последняя).
    pub discard: Vec<Card>,
    /// Пул super-карт.
    pub super_deck: Deck,
}

impl DeckManager {
    /// Пустые стопки – для тестов и ручной раскладки.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Новая партия: стандартная колода и super-пул, обе перемешаны.
    pub fn new<R: RandomSource>(config: &GameConfig, rng: &mut R) -> Self {
        let mut deck = Self::build_standard_deck();
        rng.shuffle(&mut deck.cards);
        Self {
            deck,
            discard: Vec::new(),
            super_deck: Self::build_super_deck(config.super_copies_per_kind, rng),
        }
    }

    /// 108 стандартных карт, НЕ перемешанных.
    pub fn build_standard_deck() -> Deck {
        Deck::standard_108()
    }

    /// Пул super-карт, перемешанный.
    pub fn build_super_deck<R: RandomSource>(copies_per_kind: usize, rng: &mut R) -> Deck {
        let mut pool = Deck::super_pool(copies_per_kind);
        rng.shuffle(&mut pool.cards);
        pool
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn is_discard_empty(&self) -> bool {
        self.discard.is_empty()
    }

    /// Раздать по `hand_size` карт каждому, игрок за игроком.
    /// Если колода кончилась – раздаём сколько есть, без ошибки.
    /// Возвращает, сколько карт получил каждый.
    pub fn deal(&mut self, hands: &mut [Hand], hand_size: usize) -> Vec<usize> {
        hands
            .iter_mut()
            .map(|hand| {
                let cards = self.deck.draw_n(hand_size);
                let count = cards.len();
                hand.extend(cards);
                count
            })
            .collect()
    }

    /// Открыть стартовую карту: тянем сверху, пока не попадётся цветная.
    /// Wild (и super, если он вдруг в колоде) уходят под низ колоды.
    pub fn initialize_top_card<R: RandomSource>(
        &mut self,
        rng: &mut R,
    ) -> Result<Card, EngineError> {
        if self.deck.is_empty() {
            self.replenish(rng)?;
        }

        // Каждая карта колоды просматривается не больше одного раза.
        for _ in 0..self.deck.len() {
            let card = self.deck.draw_one().ok_or(EngineError::EmptyPiles)?;
            if card.is_starter() {
                self.discard.push(card);
                return Ok(card);
            }
            self.deck.put_bottom(card);
        }

        Err(EngineError::EmptyPiles)
    }

    /// Пополнение колоды: всё, кроме верхней карты сброса, уходит в колоду
    /// и перемешивается. Возвращает число переложенных карт.
    ///
    /// `EmptyPiles`, если в сбросе <= 1 карты (перекладывать нечего).
    pub fn replenish<R: RandomSource>(&mut self, rng: &mut R) -> Result<usize, EngineError> {
        if self.discard.len() <= 1 {
            return Err(EngineError::EmptyPiles);
        }
        let top = self.discard.pop().ok_or(EngineError::EmptyPiles)?;
        let recycled = self.discard.len();
        self.deck.cards.append(&mut self.discard);
        self.discard.push(top);
        rng.shuffle(&mut self.deck.cards);
        Ok(recycled)
    }

    /// Взять одну карту, при необходимости пополнив колоду из сброса.
    pub fn draw_one<R: RandomSource>(&mut self, rng: &mut R) -> Result<Drawn, EngineError> {
        let recycled = if self.deck.is_empty() {
            Some(self.replenish(rng)?)
        } else {
            None
        };
        let card = self.deck.draw_one().ok_or(EngineError::EmptyPiles)?;
        Ok(Drawn { card, recycled })
    }

    /// Взять до `n` карт (принудительный добор draw2 / wild_draw4).
    /// Никогда не падает: берём сколько удалось.
    pub fn draw_up_to<R: RandomSource>(&mut self, n: usize, rng: &mut R) -> Vec<Drawn> {
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            match self.draw_one(rng) {
                Ok(d) => drawn.push(d),
                Err(_) => break,
            }
        }
        drawn
    }

    /// Взять карту из super-пула.
    pub fn draw_super(&mut self) -> Result<Card, EngineError> {
        self.super_deck.draw_one().ok_or(EngineError::SuperDeckEmpty)
    }

    /// Положить сыгранную карту на сброс.
    pub fn push_discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Все карты во всех стопках (для проверки сохранения мультимножества).
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .cards
            .iter()
            .chain(self.discard.iter())
            .chain(self.super_deck.cards.iter())
    }
}
