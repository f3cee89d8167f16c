//! # Settings Commands
//!
//! The admin settings page. Toggles last for the session only.

use medipos_core::settings::{SettingKey, SystemSettings};
use medipos_core::NotificationSink;
use tracing::{debug, info};

use crate::state::SettingsState;

pub fn get_settings(settings: &SettingsState) -> SystemSettings {
    debug!("get_settings command");
    settings.with_settings(|s| *s)
}

/// Flips one toggle and returns all settings.
pub fn toggle_setting(
    settings: &SettingsState,
    sink: &mut dyn NotificationSink,
    key: SettingKey,
) -> SystemSettings {
    debug!(%key, "toggle_setting command");

    settings.with_settings_mut(|s| {
        let value = s.toggle(key, sink);
        info!(%key, value, "setting updated");
        *s
    })
}
