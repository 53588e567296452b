use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Raw key events are logged once translated; splash frames are noise
        if !matches!(
            action,
            Action::Global(GlobalAction::KeyPressed(_)) | Action::Global(GlobalAction::SplashTick)
        ) {
            log::debug!("Action: {:?}", action);
        }

        true // Always pass action through
    }
}
