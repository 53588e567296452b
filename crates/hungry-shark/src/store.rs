use rand::RngCore;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;
use shark_game::GameState;

/// Store - holds application state and manages the Redux loop
///
/// The store also owns the random source: the game reducer is pure given an
/// rng, and holding it here keeps every spawn decision on the dispatch path.
pub struct Store {
    state: AppState,
    rng: Box<dyn RngCore>,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(mut rng: Box<dyn RngCore>) -> Self {
        let state = AppState::new(GameState::initial(rng.as_mut()));
        Self {
            state,
            rng,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action, self.rng.as_mut());
        }

        // Process any actions dispatched by middleware
        let pending_actions = self.dispatcher.drain();
        for action in pending_actions {
            self.dispatch(action);
        }
    }
}
