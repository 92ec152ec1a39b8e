//! Actions accepted by the store.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use spellstudy_auth::RoleInfo;

use crate::state::{DashboardStats, SessionPatch, ThemePatch};

/// Every state transition the store knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetAuth(SessionPatch),
    SetAuthLoading(bool),
    SetAuthError(Option<String>),
    Logout,
    SetUserRole(RoleInfo),
    SetTheme(ThemePatch),
    ToggleDarkMode,
    SetActiveTab(String),
    SetDrawerOpen(bool),
    SetCurrentScreen(Option<String>),
    SetSelectedClass(Option<Value>),
    SetSelectedStudent(Option<Value>),
    SetSelectedStaff(Option<Value>),
    SetStudents(Vec<Value>),
    SetStaff(Vec<Value>),
    SetDashboardStats(DashboardStats),
    SetLoading(bool),
    SetError(Option<String>),
    SetSuccessMessage(Option<String>),
    ClearMessages,
}

/// Discriminant of [`Action`], with the wire names hosts send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    SetAuth,
    SetAuthLoading,
    SetAuthError,
    Logout,
    SetUserRole,
    SetTheme,
    ToggleDarkMode,
    SetActiveTab,
    SetDrawerOpen,
    SetCurrentScreen,
    SetSelectedClass,
    SetSelectedStudent,
    SetSelectedStaff,
    SetStudents,
    SetStaff,
    SetDashboardStats,
    SetLoading,
    SetError,
    SetSuccessMessage,
    ClearMessages,
}

impl ActionKind {
    pub const ALL: [ActionKind; 20] = [
        ActionKind::SetAuth,
        ActionKind::SetAuthLoading,
        ActionKind::SetAuthError,
        ActionKind::Logout,
        ActionKind::SetUserRole,
        ActionKind::SetTheme,
        ActionKind::ToggleDarkMode,
        ActionKind::SetActiveTab,
        ActionKind::SetDrawerOpen,
        ActionKind::SetCurrentScreen,
        ActionKind::SetSelectedClass,
        ActionKind::SetSelectedStudent,
        ActionKind::SetSelectedStaff,
        ActionKind::SetStudents,
        ActionKind::SetStaff,
        ActionKind::SetDashboardStats,
        ActionKind::SetLoading,
        ActionKind::SetError,
        ActionKind::SetSuccessMessage,
        ActionKind::ClearMessages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::SetAuth => "SET_AUTH",
            ActionKind::SetAuthLoading => "SET_AUTH_LOADING",
            ActionKind::SetAuthError => "SET_AUTH_ERROR",
            ActionKind::Logout => "LOGOUT",
            ActionKind::SetUserRole => "SET_USER_ROLE",
            ActionKind::SetTheme => "SET_THEME",
            ActionKind::ToggleDarkMode => "TOGGLE_DARK_MODE",
            ActionKind::SetActiveTab => "SET_ACTIVE_TAB",
            ActionKind::SetDrawerOpen => "SET_DRAWER_OPEN",
            ActionKind::SetCurrentScreen => "SET_CURRENT_SCREEN",
            ActionKind::SetSelectedClass => "SET_SELECTED_CLASS",
            ActionKind::SetSelectedStudent => "SET_SELECTED_STUDENT",
            ActionKind::SetSelectedStaff => "SET_SELECTED_STAFF",
            ActionKind::SetStudents => "SET_STUDENTS",
            ActionKind::SetStaff => "SET_STAFF",
            ActionKind::SetDashboardStats => "SET_DASHBOARD_STATS",
            ActionKind::SetLoading => "SET_LOADING",
            ActionKind::SetError => "SET_ERROR",
            ActionKind::SetSuccessMessage => "SET_SUCCESS_MESSAGE",
            ActionKind::ClearMessages => "CLEAR_MESSAGES",
        }
    }

    pub fn parse(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == kind)
    }
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("invalid payload for {kind}: {source}")]
pub struct ActionDecodeError {
    pub kind: ActionKind,
    #[source]
    pub source: serde_json::Error,
}

fn payload<T: DeserializeOwned>(kind: ActionKind, value: Value) -> Result<T, ActionDecodeError> {
    serde_json::from_value(value).map_err(|source| ActionDecodeError { kind, source })
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SetAuth(_) => ActionKind::SetAuth,
            Action::SetAuthLoading(_) => ActionKind::SetAuthLoading,
            Action::SetAuthError(_) => ActionKind::SetAuthError,
            Action::Logout => ActionKind::Logout,
            Action::SetUserRole(_) => ActionKind::SetUserRole,
            Action::SetTheme(_) => ActionKind::SetTheme,
            Action::ToggleDarkMode => ActionKind::ToggleDarkMode,
            Action::SetActiveTab(_) => ActionKind::SetActiveTab,
            Action::SetDrawerOpen(_) => ActionKind::SetDrawerOpen,
            Action::SetCurrentScreen(_) => ActionKind::SetCurrentScreen,
            Action::SetSelectedClass(_) => ActionKind::SetSelectedClass,
            Action::SetSelectedStudent(_) => ActionKind::SetSelectedStudent,
            Action::SetSelectedStaff(_) => ActionKind::SetSelectedStaff,
            Action::SetStudents(_) => ActionKind::SetStudents,
            Action::SetStaff(_) => ActionKind::SetStaff,
            Action::SetDashboardStats(_) => ActionKind::SetDashboardStats,
            Action::SetLoading(_) => ActionKind::SetLoading,
            Action::SetError(_) => ActionKind::SetError,
            Action::SetSuccessMessage(_) => ActionKind::SetSuccessMessage,
            Action::ClearMessages => ActionKind::ClearMessages,
        }
    }

    /// Decode an untyped `(kind, payload)` message.
    ///
    /// Unknown kinds are `Ok(None)`: the store ignores them. Payload-less
    /// kinds ignore whatever payload was sent.
    pub fn decode(kind: &str, value: Value) -> Result<Option<Self>, ActionDecodeError> {
        let Some(k) = ActionKind::parse(kind) else {
            return Ok(None);
        };

        let action = match k {
            ActionKind::SetAuth => Action::SetAuth(payload(k, value)?),
            ActionKind::SetAuthLoading => Action::SetAuthLoading(payload(k, value)?),
            ActionKind::SetAuthError => Action::SetAuthError(payload(k, value)?),
            ActionKind::Logout => Action::Logout,
            ActionKind::SetUserRole => Action::SetUserRole(payload(k, value)?),
            ActionKind::SetTheme => Action::SetTheme(payload(k, value)?),
            ActionKind::ToggleDarkMode => Action::ToggleDarkMode,
            ActionKind::SetActiveTab => Action::SetActiveTab(payload(k, value)?),
            ActionKind::SetDrawerOpen => Action::SetDrawerOpen(payload(k, value)?),
            ActionKind::SetCurrentScreen => Action::SetCurrentScreen(payload(k, value)?),
            ActionKind::SetSelectedClass => Action::SetSelectedClass(payload(k, value)?),
            ActionKind::SetSelectedStudent => Action::SetSelectedStudent(payload(k, value)?),
            ActionKind::SetSelectedStaff => Action::SetSelectedStaff(payload(k, value)?),
            ActionKind::SetStudents => Action::SetStudents(payload(k, value)?),
            ActionKind::SetStaff => Action::SetStaff(payload(k, value)?),
            ActionKind::SetDashboardStats => Action::SetDashboardStats(payload(k, value)?),
            ActionKind::SetLoading => Action::SetLoading(payload(k, value)?),
            ActionKind::SetError => Action::SetError(payload(k, value)?),
            ActionKind::SetSuccessMessage => Action::SetSuccessMessage(payload(k, value)?),
            ActionKind::ClearMessages => Action::ClearMessages,
        };
        Ok(Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_round_trip_through_wire_names() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ActionKind::parse("set_auth"), None);
    }

    #[test]
    fn decode_unknown_kind_is_none() {
        assert!(Action::decode("FETCH_EVERYTHING", json!({})).unwrap().is_none());
    }

    #[test]
    fn decode_typed_payloads() {
        let action = Action::decode("SET_CURRENT_SCREEN", json!("Attendance")).unwrap();
        assert_eq!(action, Some(Action::SetCurrentScreen(Some("Attendance".into()))));

        let action = Action::decode("SET_AUTH_ERROR", Value::Null).unwrap();
        assert_eq!(action, Some(Action::SetAuthError(None)));

        let action = Action::decode("LOGOUT", json!({"ignored": true})).unwrap();
        assert_eq!(action, Some(Action::Logout));
    }

    #[test]
    fn decode_set_auth_keeps_null_distinct_from_absent() {
        let Some(Action::SetAuth(patch)) =
            Action::decode("SET_AUTH", json!({ "token": null, "loading": true })).unwrap()
        else {
            panic!("expected SET_AUTH");
        };
        assert_eq!(patch.token, Some(None));
        assert_eq!(patch.user, None);
        assert_eq!(patch.loading, Some(true));
    }

    #[test]
    fn decode_set_user_role_uses_camel_case_fields() {
        let payload = json!({
            "primaryRole": "admin",
            "allRoles": ["admin", "teacher"],
            "highestPriorityRole": "admin",
            "highestPriorityLevel": 10,
            "permissions": ["all"],
        });
        let Some(Action::SetUserRole(info)) = Action::decode("SET_USER_ROLE", payload).unwrap()
        else {
            panic!("expected SET_USER_ROLE");
        };
        assert_eq!(info.primary_role(), Some("admin"));
        assert_eq!(info.all_roles.len(), 2);
        assert_eq!(info.highest_priority_level, 10);

        let Some(Action::SetUserRole(partial)) =
            Action::decode("SET_USER_ROLE", json!({ "primaryRole": "teacher" })).unwrap()
        else {
            panic!("expected SET_USER_ROLE");
        };
        assert_eq!(partial.primary_role(), Some("teacher"));
        assert!(partial.all_roles.is_empty());
    }

    #[test]
    fn decode_rejects_mismatched_payload() {
        let err = Action::decode("SET_DRAWER_OPEN", json!("yes")).unwrap_err();
        assert_eq!(err.kind, ActionKind::SetDrawerOpen);
        assert!(err.to_string().contains("SET_DRAWER_OPEN"));
    }
}
