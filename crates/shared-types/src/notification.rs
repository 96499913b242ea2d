use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque notification identifier.
///
/// Ids are handed out by [`crate::NotificationStore`] in generation order and
/// are never reused for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }
}

/// Semantic origin of a notification, independent of its [`NotificationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Request,
    Approval,
    Rejection,
    Checkout,
    Return,
    #[default]
    System,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Request => "request",
            NotificationCategory::Approval => "approval",
            NotificationCategory::Rejection => "rejection",
            NotificationCategory::Checkout => "checkout",
            NotificationCategory::Return => "return",
            NotificationCategory::System => "system",
        }
    }
}

/// A live notification owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
    pub kind: NotificationKind,
    pub category: NotificationCategory,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    /// Auto-expiry in milliseconds. Zero means the notification persists
    /// until it is removed explicitly.
    #[serde(default)]
    pub duration_ms: u64,
}

impl Notification {
    pub fn is_transient(&self) -> bool {
        self.duration_ms > 0
    }
}

/// Everything needed to create a notification except the id and timestamp,
/// which the store assigns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationDraft {
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub category: NotificationCategory,
    #[serde(default)]
    pub duration_ms: u64,
}

impl NotificationDraft {
    /// An untitled info/system draft that never expires.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn category(mut self, category: NotificationCategory) -> Self {
        self.category = category;
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}
