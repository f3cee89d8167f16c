//! # System Settings
//!
//! The admin-only preference toggles. They are kept for the session only
//! and have no effect on billing.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::notification::{Notification, NotificationKind, NotificationSink};

/// One toggle on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SettingKey {
    EnableAlerts,
    ShowExpiredMeds,
    AutoBackup,
    DarkMode,
    SoundNotifications,
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingKey::EnableAlerts => "enableAlerts",
            SettingKey::ShowExpiredMeds => "showExpiredMeds",
            SettingKey::AutoBackup => "autoBackup",
            SettingKey::DarkMode => "darkMode",
            SettingKey::SoundNotifications => "soundNotifications",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SystemSettings {
    pub enable_alerts: bool,
    pub show_expired_meds: bool,
    pub auto_backup: bool,
    pub dark_mode: bool,
    pub sound_notifications: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        SystemSettings {
            enable_alerts: true,
            show_expired_meds: false,
            auto_backup: true,
            dark_mode: false,
            sound_notifications: true,
        }
    }
}

impl SystemSettings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::EnableAlerts => self.enable_alerts,
            SettingKey::ShowExpiredMeds => self.show_expired_meds,
            SettingKey::AutoBackup => self.auto_backup,
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::SoundNotifications => self.sound_notifications,
        }
    }

    fn slot(&mut self, key: SettingKey) -> &mut bool {
        match key {
            SettingKey::EnableAlerts => &mut self.enable_alerts,
            SettingKey::ShowExpiredMeds => &mut self.show_expired_meds,
            SettingKey::AutoBackup => &mut self.auto_backup,
            SettingKey::DarkMode => &mut self.dark_mode,
            SettingKey::SoundNotifications => &mut self.sound_notifications,
        }
    }

    /// Flips a toggle and returns its new value.
    pub fn toggle(&mut self, key: SettingKey, sink: &mut dyn NotificationSink) -> bool {
        let slot = self.slot(key);
        *slot = !*slot;
        let value = *slot;

        sink.notify(Notification::success(
            NotificationKind::SettingUpdated,
            format!("{} setting updated", key),
        ));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Discard;

    #[test]
    fn test_defaults() {
        let settings = SystemSettings::default();
        assert!(settings.get(SettingKey::EnableAlerts));
        assert!(!settings.get(SettingKey::ShowExpiredMeds));
        assert!(settings.get(SettingKey::AutoBackup));
        assert!(!settings.get(SettingKey::DarkMode));
        assert!(settings.get(SettingKey::SoundNotifications));
    }

    #[test]
    fn test_toggle_flips_and_notifies() {
        let mut settings = SystemSettings::default();
        let mut sink: Vec<Notification> = Vec::new();

        assert!(settings.toggle(SettingKey::DarkMode, &mut sink));
        assert!(settings.dark_mode);
        assert_eq!(sink[0].message, "darkMode setting updated");

        assert!(!settings.toggle(SettingKey::DarkMode, &mut Discard));
        assert_eq!(settings, SystemSettings::default());
    }

    #[test]
    fn test_key_deserializes_camel_case() {
        let key: SettingKey = serde_json::from_str("\"showExpiredMeds\"").unwrap();
        assert_eq!(key, SettingKey::ShowExpiredMeds);
    }
}
