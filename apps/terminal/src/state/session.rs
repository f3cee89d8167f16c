//! # Session & Settings State
//!
//! Who is logged in, and the preference toggles. Both live for the
//! process only.

use std::sync::{Arc, Mutex, PoisonError};

use medipos_core::access::User;
use medipos_core::settings::SystemSettings;

/// The logged-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Arc<Mutex<Option<User>>>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Returns a copy of the current user.
    pub fn current(&self) -> Option<User> {
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces whoever was logged in.
    pub fn sign_in(&self, user: User) {
        *self.user.lock().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    /// Returns the user that was logged in.
    pub fn sign_out(&self) -> Option<User> {
        self.user.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

/// System settings for the session.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    settings: Arc<Mutex<SystemSettings>>,
}

impl SettingsState {
    pub fn new() -> Self {
        SettingsState::default()
    }

    pub fn with_settings<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SystemSettings) -> R,
    {
        let settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        f(&settings)
    }

    pub fn with_settings_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SystemSettings) -> R,
    {
        let mut settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut settings)
    }
}
