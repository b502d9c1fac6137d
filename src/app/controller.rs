use super::actions::Action;
use super::state::AppState;

use super::controllers::{export_controller, fetch_controller, source_controller, view_controller};

impl AppState {
    pub fn apply_action(&mut self, action: Action) {
        // Keep ordering stable (data -> view -> export)
        if fetch_controller::handle(self, &action) {
            return;
        }
        if source_controller::handle(self, &action) {
            return;
        }
        if view_controller::handle(self, &action) {
            return;
        }
        if export_controller::handle(self, &action) {
            return;
        }
    }

    /// Returns true while a fetch is still in flight (caller keeps repainting).
    pub fn finalize_frame(&mut self) -> bool {
        self.poll_fetch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::Tab;
    use crate::app::controllers::test_support::test_state;

    #[test]
    fn actions_reach_their_controller() {
        let mut state = test_state();
        state.apply_action(Action::SetTab(Tab::Languages));
        assert_eq!(state.ui.tab, Tab::Languages);

        state.apply_action(Action::ExportReport);
        assert!(state.ui.status.is_some());
    }

    #[test]
    fn idle_frame_is_not_pending() {
        let mut state = test_state();
        assert!(!state.finalize_frame());
    }
}
