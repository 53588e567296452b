//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch follow-up actions (a key event
//! translated into a game move, a freshly loaded high score), it queues them
//! here. The store drains the queue after every dispatch, so queued actions
//! re-enter the full middleware chain from the beginning.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::actions::Action;

/// Queue-backed dispatcher handed to every middleware
#[derive(Default)]
pub struct Dispatcher {
    queue: RefCell<VecDeque<Action>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        self.queue.borrow_mut().push_back(action);
    }

    /// Take all currently queued actions
    pub fn drain(&self) -> Vec<Action> {
        self.queue.borrow_mut().drain(..).collect()
    }
}
