use crate::actions::{Action, SessionAction};
use crate::state::SessionState;
use shark_game::GameAction;

/// Reducer for high-score session bookkeeping
pub fn reduce(mut state: SessionState, action: &Action) -> SessionState {
    match action {
        Action::Session(SessionAction::GameEnded(_)) => {
            state.result_recorded = true;
        }
        Action::Session(SessionAction::HighScoreLoaded { best, new_record }) => {
            state.best = Some(*best);
            state.new_record = *new_record;
        }
        // A new game gets a fresh session slate
        Action::Game(GameAction::Reset) => {
            state = SessionState::default();
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_end_records_once_and_reset_clears() {
        let state = SessionState::default();

        let state = reduce(state, &Action::Session(SessionAction::GameEnded(5)));
        assert!(state.result_recorded);

        let state = reduce(
            state,
            &Action::Session(SessionAction::HighScoreLoaded {
                best: 9,
                new_record: false,
            }),
        );
        assert_eq!(state.best, Some(9));
        assert!(!state.new_record);

        let state = reduce(state, &Action::Game(GameAction::Reset));
        assert!(!state.result_recorded);
        assert_eq!(state.best, None);
    }
}
