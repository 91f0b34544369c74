//! Разрешение эффектов карт.
//!
//! Обычные action-карты (skip / reverse / draw2 / wild / wild_draw4)
//! срабатывают сразу. Super-карты только взводят флаги в `EffectState`,
//! а срабатывают позже – при очередной передаче хода, когда выполнится
//! их условие (кто окажется текущим игроком).
//!
//! Обе функции здесь чистые: получают состояние + снимок очереди ходов и
//! возвращают новое состояние и список команд, которые движок должен
//! выполнить над `TurnTracker` / `DeckManager`.

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::PlayerIndex;
use crate::engine::history::GameEventKind;

/// Вид окна "играют все".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AllPlayKind {
    /// ext_play_all: открывается, как только ход ушёл от открывшего,
    /// закрывается, когда ход к нему вернулся.
    External,
    /// int_play_all: открывается на следующем ходу открывшего,
    /// закрывается на его же следующем ходу.
    Internal,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum WindowPhase {
    Armed,
    Active,
}

/// Окно "играют все".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllPlayWindow {
    pub opener: PlayerIndex,
    pub kind: AllPlayKind,
    pub phase: WindowPhase,
    /// Уходил ли ход от `opener` с момента последней смены фазы.
    pub away: bool,
}

impl AllPlayWindow {
    pub fn armed(opener: PlayerIndex, kind: AllPlayKind) -> Self {
        Self {
            opener,
            kind,
            phase: WindowPhase::Armed,
            away: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == WindowPhase::Active
    }
}

/// Отложенные эффекты, переживающие один ход.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectState {
    pub all_play: Option<AllPlayWindow>,
    /// Кому положен повторный ход.
    pub double_play: Option<PlayerIndex>,
    /// Кого пропустить, когда до него дойдёт ход.
    pub skip_target: Option<PlayerIndex>,
}

impl EffectState {
    pub fn all_play_active(&self) -> bool {
        self.all_play.map(|w| w.is_active()).unwrap_or(false)
    }
}

/// Снимок очереди ходов для резолвера.
#[derive(Clone, Copy, Debug)]
pub struct TurnInfo<'a> {
    pub current: PlayerIndex,
    pub next: PlayerIndex,
    pub num_players: usize,
    /// Размеры рук по индексам игроков.
    pub hand_sizes: &'a [usize],
}

/// Что движок должен сделать после разрешения эффекта.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnCommand {
    /// `TurnTracker::next()`.
    Advance,
    /// `TurnTracker::back()`.
    Back,
    /// `TurnTracker::reverse_direction()`.
    Reverse,
    /// Игрок добирает `count` карт.
    ForceDraw { player: PlayerIndex, count: usize },
    /// Нужен выбор цвета, ход не передаётся.
    RequestColor,
}

/// Итог разрешения.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub state: EffectState,
    pub commands: Vec<TurnCommand>,
    pub events: Vec<GameEventKind>,
}

impl Resolution {
    fn unchanged(state: EffectState) -> Self {
        Self {
            state,
            commands: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// Игрок с наименьшей рукой; при равенстве – первый по индексу.
pub fn fewest_cards(hand_sizes: &[usize]) -> Option<PlayerIndex> {
    hand_sizes
        .iter()
        .enumerate()
        .min_by_key(|(_, size)| **size)
        .map(|(idx, _)| idx)
}

/// Эффект только что сыгранной карты. `info.current` – сыгравший игрок.
pub fn apply_effect(state: EffectState, card: &Card, info: &TurnInfo<'_>) -> Resolution {
    let mut res = Resolution::unchanged(state);
    let next = info.next;

    match card.rank() {
        Rank::Number(_) => {}
        Rank::Skip => {
            res.commands.push(TurnCommand::Advance);
            res.events.push(GameEventKind::PlayerSkipped { player: next });
        }
        Rank::Reverse => {
            res.commands.push(TurnCommand::Reverse);
            if info.num_players == 2 {
                res.events.push(GameEventKind::PlayerSkipped { player: next });
            }
        }
        Rank::DrawTwo => {
            res.commands.push(TurnCommand::ForceDraw {
                player: next,
                count: 2,
            });
            res.commands.push(TurnCommand::Advance);
            res.events.push(GameEventKind::PlayerSkipped { player: next });
        }
        Rank::Wild => {
            res.commands.push(TurnCommand::RequestColor);
        }
        Rank::WildDrawFour => {
            res.commands.push(TurnCommand::ForceDraw {
                player: next,
                count: 4,
            });
            res.commands.push(TurnCommand::Advance);
            res.commands.push(TurnCommand::RequestColor);
            res.events.push(GameEventKind::PlayerSkipped { player: next });
        }
        Rank::ExtPlayAll => open_window(&mut res, info.current, AllPlayKind::External),
        Rank::IntPlayAll => open_window(&mut res, info.current, AllPlayKind::Internal),
        Rank::DoublePlay => {
            res.state.double_play = Some(info.current);
        }
        Rank::ChiefSkip => {
            if let Some(target) = fewest_cards(info.hand_sizes) {
                res.state.skip_target = Some(target);
                res.events.push(GameEventKind::ChiefSkipArmed { target });
            }
        }
    }

    res
}

/// Новое окно заменяет прежнее.
fn open_window(res: &mut Resolution, opener: PlayerIndex, kind: AllPlayKind) {
    if let Some(old) = res.state.all_play {
        if old.is_active() {
            res.events.push(GameEventKind::AllPlayWindowClosed {
                opener: old.opener,
                kind: old.kind,
            });
        }
    }
    res.state.all_play = Some(AllPlayWindow::armed(opener, kind));
    res.events
        .push(GameEventKind::AllPlayWindowArmed { opener, kind });
}

/// Проверка отложенных эффектов после `TurnTracker::next()`.
///
/// `from` – чей ход только что закончился, `info.current` – на ком
/// остановился указатель, `info.next` – следующий за ним.
pub fn reconcile_after_advance(
    state: EffectState,
    from: PlayerIndex,
    info: &TurnInfo<'_>,
) -> Resolution {
    let mut res = Resolution::unchanged(state);
    let mut landed = info.current;

    if res.state.double_play == Some(from) && info.current != from {
        res.state.double_play = None;
        res.commands.push(TurnCommand::Back);
        res.events
            .push(GameEventKind::DoublePlayGranted { player: from });
        landed = from;
    } else if res.state.skip_target == Some(info.current) {
        res.state.skip_target = None;
        res.commands.push(TurnCommand::Advance);
        res.events.push(GameEventKind::PlayerSkipped {
            player: info.current,
        });
        landed = info.next;
    }

    update_window(&mut res, landed);
    res
}

/// Игрок вмешался вне очереди: указатель встал на него без `next()`.
///
/// Окно "играют все" обновляется так же, как при обычной передаче хода.
/// Если вмешался игрок, которого ждал chief_skip, пропуск сгорает:
/// этот выход и есть его ход.
pub fn reconcile_on_landing(state: EffectState, player: PlayerIndex) -> Resolution {
    let mut res = Resolution::unchanged(state);

    if res.state.skip_target == Some(player) {
        res.state.skip_target = None;
        res.events
            .push(GameEventKind::ChiefSkipSpent { target: player });
    }

    update_window(&mut res, player);
    res
}

fn update_window(res: &mut Resolution, landed: PlayerIndex) {
    let Some(mut window) = res.state.all_play else {
        return;
    };

    let at_opener = landed == window.opener;
    if !at_opener {
        window.away = true;
    }

    let opener = window.opener;
    let kind = window.kind;

    match (window.kind, window.phase) {
        (AllPlayKind::External, WindowPhase::Armed) if !at_opener => {
            window.phase = WindowPhase::Active;
            res.events
                .push(GameEventKind::AllPlayWindowOpened { opener, kind });
        }
        (AllPlayKind::Internal, WindowPhase::Armed) if at_opener && window.away => {
            window.phase = WindowPhase::Active;
            window.away = false;
            res.events
                .push(GameEventKind::AllPlayWindowOpened { opener, kind });
        }
        (_, WindowPhase::Active) if at_opener && window.away => {
            res.state.all_play = None;
            res.events
                .push(GameEventKind::AllPlayWindowClosed { opener, kind });
            return;
        }
        _ => {}
    }

    res.state.all_play = Some(window);
}
