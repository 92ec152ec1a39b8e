//! Persisted session storage.
//!
//! A flat string key-value store underneath, JSON values on top. Every
//! failure at this layer is logged and reported as a sentinel (`false` /
//! `None`); callers never see a storage error.

mod memory;
mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use spellstudy_auth::User;

/// Storage keys. Values are JSON strings.
pub mod keys {
    pub const TOKEN: &str = "schoolToken";
    pub const USER_DATA: &str = "schoolUserData";
    pub const SCHOOL_ID: &str = "schoolId";
    pub const PUSH_TOKEN: &str = "expoPushToken";
    pub const BIOMETRIC_ENABLED: &str = "biometricEnabled";
    pub const THEME: &str = "theme";
    pub const LANGUAGE: &str = "language";
    pub const NOTIFICATION_SETTINGS: &str = "notificationSettings";
    pub const SAVED_USERNAME: &str = "savedUsername";
    pub const REMEMBER_ME: &str = "rememberMe";
}

/// Raw string storage. A missing key is `Ok(None)`.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct StorageService<B> {
    backend: B,
}

impl<B: KeyValueBackend> StorageService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(key, "failed to serialize storage value: {err}");
                return false;
            }
        };

        match self.backend.set(key, &json).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(key, "error setting item in storage: {err:?}");
                false
            }
        }
    }

    /// `None` when the key is absent, unreadable, or does not parse as `T`.
    pub async fn get_item<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::error!(key, "error getting item from storage: {err:?}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(key, "discarding unparseable storage value: {err}");
                None
            }
        }
    }

    pub async fn remove_item(&self, key: &str) -> bool {
        match self.backend.remove(key).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(key, "error removing item from storage: {err:?}");
                false
            }
        }
    }

    pub async fn clear(&self) -> bool {
        match self.backend.clear().await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("error clearing storage: {err:?}");
                false
            }
        }
    }

    pub async fn set_token(&self, token: &str) -> bool {
        self.set_item(keys::TOKEN, token).await
    }

    pub async fn token(&self) -> Option<String> {
        self.get_item(keys::TOKEN).await
    }

    pub async fn remove_token(&self) -> bool {
        self.remove_item(keys::TOKEN).await
    }

    pub async fn set_user(&self, user: &User) -> bool {
        self.set_item(keys::USER_DATA, user).await
    }

    pub async fn user(&self) -> Option<User> {
        self.get_item(keys::USER_DATA).await
    }

    pub async fn remove_user(&self) -> bool {
        self.remove_item(keys::USER_DATA).await
    }

    pub async fn set_school_id(&self, school_id: &str) -> bool {
        self.set_item(keys::SCHOOL_ID, school_id).await
    }

    pub async fn school_id(&self) -> Option<String> {
        self.get_item(keys::SCHOOL_ID).await
    }

    pub async fn set_push_token(&self, token: &str) -> bool {
        self.set_item(keys::PUSH_TOKEN, token).await
    }

    pub async fn push_token(&self) -> Option<String> {
        self.get_item(keys::PUSH_TOKEN).await
    }

    pub async fn set_theme(&self, theme: &Value) -> bool {
        self.set_item(keys::THEME, theme).await
    }

    pub async fn theme(&self) -> Option<Value> {
        self.get_item(keys::THEME).await
    }

    pub async fn set_notification_settings(&self, settings: &Value) -> bool {
        self.set_item(keys::NOTIFICATION_SETTINGS, settings).await
    }

    pub async fn notification_settings(&self) -> Option<Value> {
        self.get_item(keys::NOTIFICATION_SETTINGS).await
    }

    /// Persist or forget the login username.
    pub async fn remember_username(&self, username: Option<&str>) -> bool {
        match username {
            Some(username) => {
                self.set_item(keys::SAVED_USERNAME, username).await
                    && self.set_item(keys::REMEMBER_ME, "true").await
            }
            None => {
                // Both removals run even if the first fails.
                let a = self.remove_item(keys::SAVED_USERNAME).await;
                let b = self.remove_item(keys::REMEMBER_ME).await;
                a && b
            }
        }
    }

    /// The saved username, only while remember-me is `"true"`.
    pub async fn remembered_username(&self) -> Option<String> {
        let remember: String = self.get_item(keys::REMEMBER_ME).await?;
        if remember != "true" {
            return None;
        }
        self.get_item(keys::SAVED_USERNAME).await
    }

    /// Drop credentials and identity. Preferences (theme, language,
    /// notification settings, remember-me) stay.
    pub async fn clear_app_data(&self) -> bool {
        let mut ok = true;
        for key in [keys::TOKEN, keys::USER_DATA, keys::SCHOOL_ID, keys::PUSH_TOKEN] {
            ok &= self.remove_item(key).await;
        }
        ok
    }
}
