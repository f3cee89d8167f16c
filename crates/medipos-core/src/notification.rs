//! # Notifications
//!
//! Human-readable messages the billing engine emits for the cashier
//! (the toasts in the UI). Wording is not a contract; the `kind` is.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NotificationKind {
    AddedToCart,
    StockExceeded,
    AmountTooLarge,
    DiscountRejected,
    CheckoutComplete,
    CheckoutRejected,
    CustomerCreated,
    SettingUpdated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub level: NotificationLevel,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(kind: NotificationKind, message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Success,
            kind,
            message: message.into(),
        }
    }

    pub fn error(kind: NotificationKind, message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Error,
            kind,
            message: message.into(),
        }
    }
}

/// Where notifications go.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order, e.g. to return them with a response.
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl NotificationSink for Discard {
    fn notify(&mut self, _notification: Notification) {}
}
