//! State-change subscriptions.

use std::cell::RefCell;
use std::rc::Rc;

use crate::game_state::GameState;

/// Receives engine notifications.
///
/// `on_state_change` runs after every accepted mutation with the new state.
/// `on_game_over` runs once, right after the state change that set
/// `game_over`.
pub trait EngineObserver {
    fn on_state_change(&mut self, state: &GameState);

    fn on_game_over(&mut self, _state: &GameState) {}
}

/// Shared observers, so the subscriber can keep reading what it collected.
impl<T: EngineObserver> EngineObserver for Rc<RefCell<T>> {
    fn on_state_change(&mut self, state: &GameState) {
        self.borrow_mut().on_state_change(state);
    }

    fn on_game_over(&mut self, state: &GameState) {
        self.borrow_mut().on_game_over(state);
    }
}

/// Handle returned by `Engine::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Registered observers in subscription order.
#[derive(Default)]
pub(crate) struct ObserverList {
    entries: Vec<(SubscriptionId, Box<dyn EngineObserver>)>,
    next_id: u64,
}

impl ObserverList {
    pub(crate) fn add(&mut self, observer: Box<dyn EngineObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn state_changed(&mut self, state: &GameState) {
        for (_, observer) in &mut self.entries {
            observer.on_state_change(state);
        }
    }

    pub(crate) fn game_over(&mut self, state: &GameState) {
        for (_, observer) in &mut self.entries {
            observer.on_game_over(state);
        }
    }
}
