//! Pure state transitions.

use crate::action::Action;
use crate::state::AppState;

impl AppState {
    /// Evolve state in place from a single action.
    ///
    /// Deterministic and side-effect free; the store is the only caller
    /// outside tests.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::SetAuth(patch) => patch.merge_into(&mut self.auth),
            Action::SetAuthLoading(loading) => self.auth.loading = *loading,
            Action::SetAuthError(error) => {
                self.auth.error = error.clone();
                self.auth.loading = false;
            }
            Action::Logout => {
                let theme = core::mem::take(&mut self.theme);
                *self = AppState {
                    theme,
                    ..AppState::default()
                };
            }
            Action::SetUserRole(info) => self.user_role = info.clone(),
            Action::SetTheme(patch) => patch.merge_into(&mut self.theme),
            Action::ToggleDarkMode => self.theme.toggle_dark_mode(),
            Action::SetActiveTab(tab) => self.navigation.active_tab = tab.clone(),
            Action::SetDrawerOpen(open) => self.navigation.drawer_open = *open,
            Action::SetCurrentScreen(screen) => {
                self.navigation.previous_screen = self.navigation.current_screen.take();
                self.navigation.current_screen = screen.clone();
            }
            Action::SetSelectedClass(v) => self.selection.selected_class = v.clone(),
            Action::SetSelectedStudent(v) => self.selection.selected_student = v.clone(),
            Action::SetSelectedStaff(v) => self.selection.selected_staff = v.clone(),
            Action::SetStudents(list) => self.students.replace_list(list.clone()),
            Action::SetStaff(list) => self.staff.replace_list(list.clone()),
            Action::SetDashboardStats(stats) => self.reports.dashboard_stats = stats.clone(),
            Action::SetLoading(loading) => self.ui.loading = *loading,
            Action::SetError(error) => self.ui.error = error.clone(),
            Action::SetSuccessMessage(msg) => self.ui.success_message = msg.clone(),
            Action::ClearMessages => {
                self.ui.error = None;
                self.ui.success_message = None;
            }
        }
    }
}

/// Produce the next snapshot without touching `state`.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    next.apply(action);
    next
}
