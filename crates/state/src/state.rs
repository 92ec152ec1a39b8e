//! Application state snapshot and its slices.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use spellstudy_auth::{RoleInfo, User};

/// Tab selected at boot and after logout.
pub const DEFAULT_TAB: &str = "Dashboard";

/// Authentication slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Partial update merged into [`Session`] by `SET_AUTH`.
///
/// `None` leaves a field untouched; `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_authenticated: Option<bool>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub user: Option<Option<User>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub token: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<bool>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub error: Option<Option<String>>,
}

/// A key that is present (even as `null`) deserializes to `Some(..)`.
fn present<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

impl SessionPatch {
    /// The full patch written after a successful login or restore.
    pub fn authenticated(user: User, token: impl Into<String>) -> Self {
        Self {
            is_authenticated: Some(true),
            user: Some(Some(user)),
            token: Some(Some(token.into())),
            loading: Some(false),
            error: Some(None),
        }
    }

    pub(crate) fn merge_into(&self, session: &mut Session) {
        if let Some(v) = self.is_authenticated {
            session.is_authenticated = v;
        }
        if let Some(v) = &self.user {
            session.user = v.clone();
        }
        if let Some(v) = &self.token {
            session.token = v.clone();
        }
        if let Some(v) = self.loading {
            session.loading = v;
        }
        if let Some(v) = &self.error {
            session.error = v.clone();
        }
    }
}

/// Theme slice. Survives logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub is_dark_mode: bool,
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_size: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            is_dark_mode: false,
            primary_color: "#2196F3".to_string(),
            accent_color: "#FF5722".to_string(),
            background_color: "#FFFFFF".to_string(),
            text_color: "#000000".to_string(),
            font_size: "medium".to_string(),
        }
    }
}

impl Theme {
    pub(crate) fn toggle_dark_mode(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
        let (background, text) = if self.is_dark_mode {
            ("#121212", "#FFFFFF")
        } else {
            ("#FFFFFF", "#000000")
        };
        self.background_color = background.to_string();
        self.text_color = text.to_string();
    }
}

/// Partial update merged into [`Theme`] by `SET_THEME`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
}

impl ThemePatch {
    pub(crate) fn merge_into(&self, theme: &mut Theme) {
        if let Some(v) = self.is_dark_mode {
            theme.is_dark_mode = v;
        }
        let fields = [
            (&self.primary_color, &mut theme.primary_color),
            (&self.accent_color, &mut theme.accent_color),
            (&self.background_color, &mut theme.background_color),
            (&self.text_color, &mut theme.text_color),
            (&self.font_size, &mut theme.font_size),
        ];
        for (patch, slot) in fields {
            if let Some(v) = patch {
                slot.clone_from(v);
            }
        }
    }
}

/// Navigation bookkeeping. History is two slots, not a stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub active_tab: String,
    pub drawer_open: bool,
    pub current_screen: Option<String>,
    pub previous_screen: Option<String>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            active_tab: DEFAULT_TAB.to_string(),
            drawer_open: false,
            current_screen: None,
            previous_screen: None,
        }
    }
}

/// Items picked on list screens; opaque API records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub selected_class: Option<Value>,
    pub selected_section: Option<Value>,
    pub selected_subject: Option<Value>,
    pub selected_student: Option<Value>,
    pub selected_staff: Option<Value>,
    pub selected_academic_session: Option<Value>,
}

/// Cached list screen data (students, staff).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCache {
    pub list: Vec<Value>,
    pub filtered: Vec<Value>,
    pub selected: Option<Value>,
    pub search_query: String,
    pub filter_by: String,
    pub sort_by: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ListCache {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            filtered: Vec::new(),
            selected: None,
            search_query: String::new(),
            filter_by: "all".to_string(),
            sort_by: "name".to_string(),
            loading: false,
            error: None,
        }
    }
}

impl ListCache {
    pub(crate) fn replace_list(&mut self, list: Vec<Value>) {
        self.list = list;
        self.loading = false;
        self.error = None;
    }
}

/// Counters shown on the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_students: u64,
    pub total_staff: u64,
    pub total_classes: u64,
    pub pending_fees: f64,
    pub attendance_today: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reports {
    pub dashboard_stats: DashboardStats,
    pub loading: bool,
    pub error: Option<String>,
}

/// Transient UI flags. Cleared only by `CLEAR_MESSAGES`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub loading: bool,
    pub error: Option<String>,
    pub success_message: Option<String>,
}

/// Whole-application snapshot. `Default` is the boot state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub auth: Session,
    pub user_role: RoleInfo,
    pub theme: Theme,
    pub navigation: Navigation,
    pub selection: Selection,
    pub students: ListCache,
    pub staff: ListCache,
    pub reports: Reports,
    pub ui: UiState,
}
