//! Session flows: restore on launch, login, logout.
//!
//! These are the only places that both touch storage and dispatch auth
//! actions. Storage failures never abort a flow; they are logged by the
//! storage layer and the flow carries on with the in-memory session.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use spellstudy_auth::{User, resolve};
use spellstudy_state::{Action, SessionPatch, Store};

use crate::api::ApiError;
use crate::storage::{KeyValueBackend, StorageService};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Exchanges credentials for a raw login response.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError>;
}

/// Login failure. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter your username and password")]
    MissingCredentials,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Network connection error")]
    Network,
    #[error("Unexpected server response format")]
    UnexpectedResponse,
    #[error("Server response missing required data")]
    MissingData,
    #[error("{0}")]
    Server(String),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(_) => AuthError::Network,
            ApiError::Api { status: 401, .. } => AuthError::InvalidCredentials,
            ApiError::Api { message, .. } | ApiError::Parse(message) => {
                if message.contains("401") || message.contains("Unauthorized") {
                    AuthError::InvalidCredentials
                } else if message.contains("Network") || message.contains("fetch") {
                    AuthError::Network
                } else {
                    AuthError::Server(message)
                }
            }
        }
    }
}

/// Loose truthiness for server payload fields.
fn truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Pull `(user, token)` out of one of the accepted login response shapes:
///
/// - `{ "success": true, "data": { "user", "token" } }`
/// - `{ "user", "token" }`
/// - `{ "message": "Login successful", "user", "token"? }`
fn extract_session(response: &Value) -> Result<(User, String), AuthError> {
    let (user, token) = if truthy(response.get("success")) && truthy(response.get("data")) {
        let data = &response["data"];
        (data.get("user"), data.get("token"))
    } else if truthy(response.get("user")) && truthy(response.get("token")) {
        (response.get("user"), response.get("token"))
    } else if response.get("message").and_then(Value::as_str) == Some("Login successful")
        && truthy(response.get("user"))
    {
        (response.get("user"), response.get("token"))
    } else {
        return Err(AuthError::UnexpectedResponse);
    };

    if !truthy(user) || !truthy(token) {
        return Err(AuthError::MissingData);
    }

    let mut user = user.cloned().unwrap_or_default();
    // A null role means "no role"; let the default apply.
    if let Some(obj) = user.as_object_mut() {
        if obj.get("role").is_some_and(Value::is_null) {
            obj.remove("role");
        }
    }
    let user: User = serde_json::from_value(user).map_err(|e| {
        tracing::warn!("login response user did not parse: {e}");
        AuthError::MissingData
    })?;

    let token = match token {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => return Err(AuthError::MissingData),
    };

    Ok((user.normalized(), token))
}

pub struct SessionService<A, B> {
    auth: A,
    storage: Arc<StorageService<B>>,
}

impl<A: AuthBackend, B: KeyValueBackend> SessionService<A, B> {
    pub fn new(auth: A, storage: Arc<StorageService<B>>) -> Self {
        Self { auth, storage }
    }

    pub fn storage(&self) -> &Arc<StorageService<B>> {
        &self.storage
    }

    /// Populate `store` from persisted data. Returns whether a session was
    /// restored; missing or corrupt data leaves the store unauthenticated.
    pub async fn restore(&self, store: &Store) -> bool {
        let token = self.storage.token().await;
        let user = self.storage.user().await;

        match (token, user) {
            (Some(token), Some(user)) => {
                tracing::info!(username = %user.username, role = %user.role, "session restored");
                Self::authenticate(store, user, token);
                true
            }
            (None, None) => false,
            (token, user) => {
                tracing::warn!(
                    has_token = token.is_some(),
                    has_user = user.is_some(),
                    "incomplete persisted session; starting signed out"
                );
                false
            }
        }
    }

    pub async fn login(
        &self,
        store: &Store,
        credentials: Credentials,
        remember_me: bool,
    ) -> Result<User, AuthError> {
        let username = credentials.username.trim();
        if username.is_empty() || credentials.password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        store.dispatch(Action::SetAuthError(None));
        store.dispatch(Action::SetAuthLoading(true));

        let attempt = Credentials::new(username, credentials.password.as_str());
        let result = match self.auth.login(&attempt).await {
            Ok(response) => extract_session(&response),
            Err(err) => Err(AuthError::from(err)),
        };

        match result {
            Ok((user, token)) => {
                self.storage
                    .remember_username(remember_me.then_some(credentials.username.as_str()))
                    .await;
                self.establish(store, user.clone(), token).await;
                tracing::info!(username = %user.username, role = %user.role, "logged in");
                Ok(user)
            }
            Err(err) => {
                tracing::warn!(username, "login failed: {err}");
                store.dispatch(Action::SetAuthError(Some(err.to_string())));
                Err(err)
            }
        }
    }

    /// Sign in as the built-in offline demo administrator.
    pub async fn demo_login(&self, store: &Store) -> User {
        let user: User = serde_json::from_value(json!({
            "_id": "demo123",
            "username": "demo.admin",
            "personname": "Demo Administrator",
            "email": "demo@spellstudy.com",
            "role": "Admin",
            "roles": ["Admin"],
            "permissions": ["all"],
            "school": "demo-school-id",
            "schoolName": "Demo School",
        }))
        .unwrap_or_else(|_| User::new("demo.admin", "Admin"));

        self.establish(store, user.clone(), "demo-token-123".to_string())
            .await;
        tracing::info!("demo session started");
        user
    }

    pub async fn logout(&self, store: &Store) {
        if !self.storage.clear_app_data().await {
            tracing::warn!("some session data could not be cleared");
        }
        store.dispatch(Action::Logout);
        tracing::info!("logged out");
    }

    pub async fn remembered_username(&self) -> Option<String> {
        self.storage.remembered_username().await
    }

    async fn establish(&self, store: &Store, user: User, token: String) {
        let saved = self.storage.set_token(&token).await && self.storage.set_user(&user).await;
        if !saved {
            tracing::warn!("failed to save session data; continuing with in-memory session");
        }
        Self::authenticate(store, user, token);
    }

    fn authenticate(store: &Store, user: User, token: String) {
        let role = resolve(&user);
        store.dispatch(Action::SetAuth(SessionPatch::authenticated(user, token)));
        store.dispatch(Action::SetUserRole(role));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryBackend, keys};
    use spellstudy_auth::Permission;
    use std::sync::Mutex;

    /// Replays a canned response and counts calls.
    struct StubAuth {
        response: Result<Value, ApiError>,
        calls: Mutex<Vec<Credentials>>,
    }

    impl StubAuth {
        fn new(response: Result<Value, ApiError>) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AuthBackend for StubAuth {
        async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
            self.calls.lock().unwrap().push(credentials.clone());
            self.response.clone()
        }
    }

    fn service(response: Result<Value, ApiError>) -> SessionService<StubAuth, MemoryBackend> {
        let storage = Arc::new(StorageService::new(MemoryBackend::new()));
        SessionService::new(StubAuth::new(response), storage)
    }

    fn ok_shapes() -> Vec<Value> {
        let user = json!({ "_id": "u1", "username": "t.one", "role": "Teacher" });
        vec![
            json!({ "success": true, "data": { "user": user, "token": "tok" } }),
            json!({ "user": user, "token": "tok" }),
            json!({ "message": "Login successful", "user": user, "token": "tok" }),
        ]
    }

    #[tokio::test]
    async fn login_accepts_every_response_shape() {
        for shape in ok_shapes() {
            let sessions = service(Ok(shape));
            let store = Store::new();

            let user = sessions
                .login(&store, Credentials::new("t.one", "pw"), false)
                .await
                .unwrap();

            let state = store.state();
            assert!(state.auth.is_authenticated);
            assert_eq!(state.auth.token.as_deref(), Some("tok"));
            assert!(!state.auth.loading);
            assert_eq!(state.user_role.primary_role(), Some("Teacher"));
            assert_eq!(state.user_role.highest_priority_level, 60);
            assert_eq!(user.roles.as_ref().map(Vec::len), Some(1));
            assert_eq!(sessions.storage().token().await.as_deref(), Some("tok"));
            assert_eq!(sessions.storage().user().await, Some(user));
        }
    }

    #[tokio::test]
    async fn missing_role_defaults_to_staff() {
        let sessions = service(Ok(json!({ "user": { "username": "x", "role": null }, "token": "t" })));
        let store = Store::new();

        let user = sessions
            .login(&store, Credentials::new("x", "pw"), false)
            .await
            .unwrap();
        assert_eq!(user.role, "Staff");
        assert_eq!(store.state().user_role.highest_priority_level, 50);
    }

    #[tokio::test]
    async fn login_accepts_user_with_both_id_keys() {
        let sessions = service(Ok(json!({
            "user": { "_id": "u1", "id": "u1", "username": "t", "role": "teacher" },
            "token": "tok",
        })));
        let store = Store::new();

        let user = sessions
            .login(&store, Credentials::new("t", "pw"), false)
            .await
            .unwrap();
        assert_eq!(user.id.as_ref().map(|id| id.as_str()), Some("u1"));
        assert!(store.state().auth.is_authenticated);
        assert_eq!(sessions.storage().user().await, Some(user));
    }

    #[tokio::test]
    async fn unrecognized_shape_and_missing_data() {
        let cases = [
            (json!({ "ok": true }), AuthError::UnexpectedResponse),
            (json!({ "success": true, "data": { "user": { "username": "x" } } }), AuthError::MissingData),
            (json!({ "message": "Login successful", "user": { "username": "x" } }), AuthError::MissingData),
        ];

        for (response, expected) in cases {
            let sessions = service(Ok(response));
            let store = Store::new();
            let err = sessions
                .login(&store, Credentials::new("x", "pw"), false)
                .await
                .unwrap_err();

            assert_eq!(err, expected);
            let state = store.state();
            assert!(!state.auth.is_authenticated);
            assert_eq!(state.auth.error, Some(expected.to_string()));
            assert!(!state.auth.loading);
        }
    }

    #[tokio::test]
    async fn api_failures_map_to_user_messages() {
        let cases = [
            (
                ApiError::Api { status: 401, message: "nope".into() },
                "Invalid username or password",
            ),
            (
                ApiError::Api { status: 400, message: "Unauthorized access".into() },
                "Invalid username or password",
            ),
            (ApiError::Network("connection refused".into()), "Network connection error"),
            (
                ApiError::Api { status: 403, message: "School is not approved".into() },
                "School is not approved",
            ),
        ];

        for (err, message) in cases {
            let sessions = service(Err(err));
            let store = Store::new();
            let got = sessions
                .login(&store, Credentials::new("x", "pw"), false)
                .await
                .unwrap_err();
            assert_eq!(got.to_string(), message);
            assert_eq!(store.state().auth.error.as_deref(), Some(message));
        }
    }

    #[tokio::test]
    async fn blank_credentials_never_reach_the_backend() {
        let sessions = service(Ok(ok_shapes().remove(0)));
        let store = Store::new();

        let err = sessions
            .login(&store, Credentials::new("   ", "pw"), false)
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::MissingCredentials);

        let err = sessions
            .login(&store, Credentials::new("a", " "), false)
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::MissingCredentials);
        assert!(sessions.auth.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn username_is_trimmed_before_sending() {
        let sessions = service(Ok(ok_shapes().remove(1)));
        let store = Store::new();
        sessions
            .login(&store, Credentials::new("  t.one ", "pw"), false)
            .await
            .unwrap();

        let calls = sessions.auth.calls.lock().unwrap();
        assert_eq!(calls[0].username, "t.one");
    }

    #[tokio::test]
    async fn remember_me_persists_and_clears_username() {
        let sessions = service(Ok(ok_shapes().remove(1)));
        let store = Store::new();

        sessions
            .login(&store, Credentials::new("t.one", "pw"), true)
            .await
            .unwrap();
        assert_eq!(sessions.remembered_username().await.as_deref(), Some("t.one"));

        sessions
            .login(&store, Credentials::new("t.one", "pw"), false)
            .await
            .unwrap();
        assert_eq!(sessions.remembered_username().await, None);
    }

    #[tokio::test]
    async fn restore_round_trips_a_login() {
        let sessions = service(Ok(ok_shapes().remove(0)));
        let first = Store::new();
        sessions
            .login(&first, Credentials::new("t.one", "pw"), false)
            .await
            .unwrap();

        let second = Store::new();
        assert!(sessions.restore(&second).await);
        assert_eq!(second.state().auth, first.state().auth);
        assert_eq!(second.state().user_role, first.state().user_role);
    }

    #[tokio::test]
    async fn restore_with_partial_or_corrupt_data_stays_signed_out() {
        let sessions = service(Ok(Value::Null));
        let store = Store::new();
        assert!(!sessions.restore(&store).await);

        sessions.storage().set_token("tok").await;
        assert!(!sessions.restore(&store).await);

        sessions
            .storage()
            .backend()
            .set(keys::USER_DATA, "{broken")
            .await
            .unwrap();
        assert!(!sessions.restore(&store).await);
        assert!(!store.state().auth.is_authenticated);
    }

    #[tokio::test]
    async fn logout_clears_credentials_and_state() {
        let sessions = service(Ok(ok_shapes().remove(1)));
        let store = Store::new();
        sessions
            .login(&store, Credentials::new("t.one", "pw"), true)
            .await
            .unwrap();
        store.dispatch(Action::ToggleDarkMode);

        sessions.logout(&store).await;

        let state = store.state();
        assert!(!state.auth.is_authenticated);
        assert_eq!(state.user_role.primary_role(), None);
        assert!(state.theme.is_dark_mode);
        assert_eq!(sessions.storage().token().await, None);
        assert_eq!(sessions.storage().user().await, None);
        assert_eq!(sessions.remembered_username().await.as_deref(), Some("t.one"));
        assert!(!sessions.restore(&Store::new()).await);
    }

    #[tokio::test]
    async fn demo_login_is_an_admin_session() {
        let sessions = service(Ok(Value::Null));
        let store = Store::new();

        let user = sessions.demo_login(&store).await;
        assert_eq!(user.display_name(), "Demo Administrator");

        let state = store.state();
        assert!(state.auth.is_authenticated);
        assert_eq!(state.auth.token.as_deref(), Some("demo-token-123"));
        assert_eq!(state.user_role.highest_priority_level, 90);
        assert!(state.user_role.has_permission(&Permission::from("fee.collect")));
        assert!(sessions.auth.calls.lock().unwrap().is_empty());
    }
}
