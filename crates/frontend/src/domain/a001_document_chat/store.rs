//! Where [`ChatState`] lives.
//!
//! In the browser the state is a Leptos `RwSignal`, so every dispatch re-renders the
//! views subscribed to it. [`LocalStore`] keeps the same state without a reactive
//! runtime.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::state::{reduce, Action, ChatState};

pub trait StateStore: Clone + 'static {
    /// Apply `action` synchronously.
    fn dispatch(&self, action: Action);

    fn with_state<R>(&self, f: impl FnOnce(&ChatState) -> R) -> R;
}

impl StateStore for RwSignal<ChatState> {
    fn dispatch(&self, action: Action) {
        self.update(|state| reduce(state, action));
    }

    fn with_state<R>(&self, f: impl FnOnce(&ChatState) -> R) -> R {
        self.with_untracked(f)
    }
}

#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    state: Rc<RefCell<ChatState>>,
}

impl LocalStore {
    pub fn new(state: ChatState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn snapshot(&self) -> ChatState {
        self.state.borrow().clone()
    }
}

impl StateStore for LocalStore {
    fn dispatch(&self, action: Action) {
        reduce(&mut self.state.borrow_mut(), action);
    }

    fn with_state<R>(&self, f: impl FnOnce(&ChatState) -> R) -> R {
        f(&self.state.borrow())
    }
}
