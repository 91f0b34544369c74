use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color};
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::PlayerIndex;
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::deck_manager::{DeckManager, Drawn};
use crate::engine::effects::{
    apply_effect, reconcile_after_advance, reconcile_on_landing, EffectState, TurnCommand,
    TurnInfo,
};
use crate::engine::errors::EngineError;
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::turn::{Direction, TurnTracker};
use crate::engine::validation::{is_card_legal, validate_owner, validate_turn};
use crate::engine::RandomSource;

/// Статус партии для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Ждём выбора цвета от игрока.
    AwaitingColor(PlayerIndex),
    Finished { winner: PlayerIndex },
}

/// Итог розыгрыша карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayOutcome {
    pub card: Card,
    /// Ход уже передан.
    pub advanced: bool,
    /// Нужно вызвать `choose_color`; ход передастся после него.
    pub needs_color_choice: bool,
    /// Игрок сыграл вне очереди.
    pub jumped_in: bool,
    pub winner: Option<PlayerIndex>,
}

/// Итог добора.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawOutcome {
    pub card: Card,
    /// Чей ход после добора.
    pub next_player: PlayerIndex,
}

/// Итог `apply_action`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionOutcome {
    Played(PlayOutcome),
    Drew(DrawOutcome),
    DrewSuper(DrawOutcome),
    ColorChosen { next_player: PlayerIndex },
    Passed { next_player: PlayerIndex },
}

/// Состояние одной партии.
pub struct GameEngine<R: RandomSource> {
    pub config: GameConfig,
    /// Колода, сброс, super-пул.
    pub piles: DeckManager,
    /// Руки по индексам игроков.
    pub hands: Vec<Hand>,
    /// Чей ход и направление.
    pub turn: TurnTracker,
    /// Отложенные эффекты super-карт.
    pub effects: EffectState,
    /// Цвет "в силе" для проверки совпадения.
    pub active_color: Color,
    /// Кто должен назвать цвет после wild.
    pub pending_color: Option<PlayerIndex>,
    pub winner: Option<PlayerIndex>,
    /// История партии.
    pub history: GameHistory,
    rng: R,
}

impl<R: RandomSource> GameEngine<R> {
    /// Старт новой партии:
    /// - собирает и перемешивает колоду и super-пул;
    /// - раздаёт по `hand_size` карт;
    /// - открывает стартовую (цветную) карту.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;

        let mut piles = DeckManager::new(&config, &mut rng);
        let mut hands = vec![Hand::default(); config.num_players];
        let mut history = GameHistory::new();

        history.push(GameEventKind::GameStarted {
            num_players: config.num_players,
            deck_size: piles.deck.len(),
            super_pool_size: piles.super_deck.len(),
        });

        let dealt = piles.deal(&mut hands, config.hand_size);
        for (player, count) in dealt.into_iter().enumerate() {
            history.push(GameEventKind::CardsDealt { player, count });
        }

        let top = piles.initialize_top_card(&mut rng)?;
        history.push(GameEventKind::StartingCardTurned { card: top });
        let active_color = top
            .color()
            .ok_or(EngineError::Internal("starting card must be colored"))?;

        Ok(Self {
            turn: TurnTracker::new(config.num_players),
            config,
            piles,
            hands,
            effects: EffectState::default(),
            active_color,
            pending_color: None,
            winner: None,
            history,
            rng,
        })
    }

    /// Партия с заранее заданной раскладкой (для тестов и реплея).
    pub fn from_layout(
        config: GameConfig,
        rng: R,
        piles: DeckManager,
        hands: Vec<Hand>,
        active_color: Color,
    ) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        if hands.len() != config.num_players {
            return Err(EngineError::InvalidConfig(format!(
                "expected {} hands, got {}",
                config.num_players,
                hands.len()
            )));
        }

        let mut history = GameHistory::new();
        history.push(GameEventKind::GameStarted {
            num_players: config.num_players,
            deck_size: piles.deck.len(),
            super_pool_size: piles.super_deck.len(),
        });

        Ok(Self {
            turn: TurnTracker::new(config.num_players),
            config,
            piles,
            hands,
            effects: EffectState::default(),
            active_color,
            pending_color: None,
            winner: None,
            history,
            rng,
        })
    }

    // -----------------------------
    // ЧТЕНИЕ СОСТОЯНИЯ
    // -----------------------------

    pub fn current_player(&self) -> PlayerIndex {
        self.turn.current()
    }

    pub fn direction(&self) -> Direction {
        self.turn.direction()
    }

    pub fn num_players(&self) -> usize {
        self.turn.num_players()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.piles.top_card()
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn hand(&self, player: PlayerIndex) -> Option<&Hand> {
        self.hands.get(player)
    }

    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.iter().map(Hand::len).collect()
    }

    pub fn is_deck_empty(&self) -> bool {
        self.piles.is_deck_empty()
    }

    pub fn is_discard_empty(&self) -> bool {
        self.piles.is_discard_empty()
    }

    pub fn super_cards_left(&self) -> usize {
        self.piles.super_deck.len()
    }

    pub fn all_play_active(&self) -> bool {
        self.effects.all_play_active()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner {
            GameStatus::Finished { winner }
        } else if let Some(player) = self.pending_color {
            GameStatus::AwaitingColor(player)
        } else {
            GameStatus::Ongoing
        }
    }

    /// Первый по индексу игрок с пустой рукой.
    pub fn check_winner(&self) -> Option<PlayerIndex> {
        self.hands.iter().position(Hand::is_empty)
    }

    /// Можно ли сыграть эту карту поверх текущего сброса.
    /// Очередь хода НЕ проверяется; неверные индексы дают `false`.
    pub fn is_legal_play(&self, player: PlayerIndex, card_index: usize) -> bool {
        let Some(card) = self.hands.get(player).and_then(|h| h.get(card_index)) else {
            return false;
        };
        card.is_super()
            || is_card_legal(
                card,
                self.piles.top_card(),
                self.active_color,
                self.effects.all_play_active(),
            )
    }

    /// Все карты партии: колода, сброс, super-пул и руки.
    pub fn card_census(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.piles.all_cards().copied().collect();
        for hand in &self.hands {
            cards.extend(hand.cards.iter().copied());
        }
        cards
    }

    /// Фиксированный стартовый набор для этого конфига.
    pub fn initial_census(config: &GameConfig) -> Vec<Card> {
        let mut cards = Deck::standard_108().cards;
        cards.extend(Deck::super_pool(config.super_copies_per_kind).cards);
        cards
    }

    // -----------------------------
    // ХОДЫ
    // -----------------------------

    /// Сыграть карту `card_index` из руки игрока `player`.
    pub fn play(
        &mut self,
        player: PlayerIndex,
        card_index: usize,
    ) -> Result<PlayOutcome, EngineError> {
        self.ensure_running()?;

        let card = *self
            .hands
            .get(player)
            .ok_or(EngineError::NoSuchPlayer(player))?
            .get(card_index)
            .ok_or(EngineError::NoSuchCard { player, card_index })?;

        let all_play = self.effects.all_play_active();
        let jumped_in = validate_turn(player, self.turn.current(), &card, all_play)?;

        // Super-карты играются всегда, мимо проверки совпадения.
        if !card.is_super()
            && !is_card_legal(&card, self.piles.top_card(), self.active_color, all_play)
        {
            return Err(EngineError::InvalidMove);
        }

        // Дальше состояние только меняется.
        if jumped_in {
            self.turn.jump_to(player);
            let res = reconcile_on_landing(self.effects, player);
            self.effects = res.state;
            self.history.extend(res.events);
        }
        let card = self.hands[player]
            .take(card_index)
            .ok_or(EngineError::NoSuchCard { player, card_index })?;
        self.piles.push_discard(card);
        if let Some(color) = card.color() {
            self.active_color = color;
        }
        self.history.push(GameEventKind::CardPlayed {
            player,
            card,
            jumped_in,
        });

        let hand_sizes = self.hand_sizes();
        let info = TurnInfo {
            current: self.turn.current(),
            next: self.turn.peek_next(),
            num_players: self.turn.num_players(),
            hand_sizes: &hand_sizes,
        };
        let res = apply_effect(self.effects, &card, &info);
        self.effects = res.state;
        self.history.extend(res.events);
        let needs_color = self.run_commands(&res.commands);

        if let Some(winner) = self.check_winner() {
            self.winner = Some(winner);
            self.history.push(GameEventKind::GameWon { player: winner });
            return Ok(PlayOutcome {
                card,
                advanced: false,
                needs_color_choice: false,
                jumped_in,
                winner: Some(winner),
            });
        }

        if needs_color {
            self.pending_color = Some(player);
            return Ok(PlayOutcome {
                card,
                advanced: false,
                needs_color_choice: true,
                jumped_in,
                winner: None,
            });
        }

        self.advance();
        Ok(PlayOutcome {
            card,
            advanced: true,
            needs_color_choice: false,
            jumped_in,
            winner: None,
        })
    }

    /// Добрать одну карту и закончить ход.
    ///
    /// `EmptyPiles`, если добирать нечего даже после пополнения;
    /// состояние при этом не меняется.
    pub fn draw(&mut self, player: PlayerIndex) -> Result<DrawOutcome, EngineError> {
        self.ensure_running()?;
        self.ensure_player(player)?;
        validate_owner(player, self.turn.current())?;

        let drawn = self.piles.draw_one(&mut self.rng)?;
        self.take_drawn(player, &[drawn], false);

        let next_player = self.advance();
        Ok(DrawOutcome {
            card: drawn.card,
            next_player,
        })
    }

    /// Взять карту из super-пула и закончить ход.
    pub fn draw_super(&mut self, player: PlayerIndex) -> Result<DrawOutcome, EngineError> {
        self.ensure_running()?;
        self.ensure_player(player)?;
        validate_owner(player, self.turn.current())?;

        let card = self.piles.draw_super()?;
        self.hands[player].push(card);
        self.history.push(GameEventKind::SuperCardDrawn { player });

        let next_player = self.advance();
        Ok(DrawOutcome { card, next_player })
    }

    /// Назвать цвет после wild / wild_draw4; затем ход передаётся.
    pub fn choose_color(&mut self, color: Color) -> Result<PlayerIndex, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameOver);
        }
        let player = self
            .pending_color
            .ok_or(EngineError::NoColorChoicePending)?;

        self.active_color = color;
        self.pending_color = None;
        self.history
            .push(GameEventKind::ColorChosen { player, color });

        Ok(self.advance())
    }

    /// Явная передача хода (например, когда добрать нечего).
    pub fn advance_turn(&mut self) -> Result<PlayerIndex, EngineError> {
        self.ensure_running()?;
        Ok(self.advance())
    }

    /// Применить действие игрока.
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<ActionOutcome, EngineError> {
        let player = action.player;
        match action.kind {
            PlayerActionKind::Play { card_index } => {
                self.play(player, card_index).map(ActionOutcome::Played)
            }
            PlayerActionKind::Draw => self.draw(player).map(ActionOutcome::Drew),
            PlayerActionKind::DrawSuper => self.draw_super(player).map(ActionOutcome::DrewSuper),
            PlayerActionKind::ChooseColor(color) => {
                if self.winner.is_none() {
                    if let Some(owner) = self.pending_color {
                        validate_owner(player, owner)?;
                    }
                }
                self.choose_color(color)
                    .map(|next_player| ActionOutcome::ColorChosen { next_player })
            }
            PlayerActionKind::Pass => {
                self.ensure_running()?;
                self.ensure_player(player)?;
                validate_owner(player, self.turn.current())?;
                Ok(ActionOutcome::Passed {
                    next_player: self.advance(),
                })
            }
        }
    }

    // -----------------------------
    // ВНУТРЕННЕЕ
    // -----------------------------

    fn ensure_running(&self) -> Result<(), EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameOver);
        }
        if self.pending_color.is_some() {
            return Err(EngineError::ColorChoicePending);
        }
        Ok(())
    }

    fn ensure_player(&self, player: PlayerIndex) -> Result<(), EngineError> {
        if player < self.hands.len() {
            Ok(())
        } else {
            Err(EngineError::NoSuchPlayer(player))
        }
    }

    /// Передача хода + проверка отложенных эффектов.
    /// Возвращает, чей ход теперь.
    fn advance(&mut self) -> PlayerIndex {
        let from = self.turn.current();
        self.turn.next();

        let hand_sizes = self.hand_sizes();
        let info = TurnInfo {
            current: self.turn.current(),
            next: self.turn.peek_next(),
            num_players: self.turn.num_players(),
            hand_sizes: &hand_sizes,
        };
        let res = reconcile_after_advance(self.effects, from, &info);
        self.effects = res.state;
        self.history.extend(res.events);
        self.run_commands(&res.commands);

        let to = self.turn.current();
        self.history.push(GameEventKind::TurnPassed { from, to });
        to
    }

    /// Выполнить команды резолвера. Возвращает `true`, если нужен выбор цвета.
    fn run_commands(&mut self, commands: &[TurnCommand]) -> bool {
        let mut needs_color = false;
        for command in commands {
            match *command {
                TurnCommand::Advance => self.turn.next(),
                TurnCommand::Back => self.turn.back(),
                TurnCommand::Reverse => {
                    self.turn.reverse_direction();
                    self.history.push(GameEventKind::DirectionReversed {
                        direction: self.turn.direction(),
                    });
                }
                TurnCommand::ForceDraw { player, count } => {
                    let drawn = self.piles.draw_up_to(count, &mut self.rng);
                    self.take_drawn(player, &drawn, true);
                }
                TurnCommand::RequestColor => needs_color = true,
            }
        }
        needs_color
    }

    /// Положить добранные карты в руку и записать события.
    fn take_drawn(&mut self, player: PlayerIndex, drawn: &[Drawn], forced: bool) {
        for d in drawn {
            if let Some(recycled) = d.recycled {
                self.history
                    .push(GameEventKind::DeckReplenished { recycled });
            }
        }
        if let Some(hand) = self.hands.get_mut(player) {
            hand.extend(drawn.iter().map(|d| d.card));
        }
        self.history.push(GameEventKind::CardsDrawn {
            player,
            count: drawn.len(),
            forced,
        });
    }
}
