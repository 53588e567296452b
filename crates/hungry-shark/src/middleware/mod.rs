use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod high_score_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware may perform side effects (file I/O for the high score,
/// logging); the reducer never does.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
