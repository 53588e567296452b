use crate::actions::{Action, GlobalAction};
use crate::state::SplashState;

/// Reducer for splash screen state
pub fn reduce(mut state: SplashState, action: &Action) -> SplashState {
    match action {
        Action::Global(GlobalAction::SplashTick) if state.visible => {
            state.animation_frame += 1;
        }
        Action::Global(GlobalAction::SplashDone) => {
            state.visible = false;
        }
        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_advance_frames_only_while_visible() {
        let state = SplashState::default();
        let state = reduce(state, &Action::Global(GlobalAction::SplashTick));
        assert_eq!(state.animation_frame, 1);

        let mut state = reduce(state, &Action::Global(GlobalAction::SplashDone));
        assert!(!state.visible);

        state = reduce(state, &Action::Global(GlobalAction::SplashTick));
        assert_eq!(state.animation_frame, 1);
    }
}
