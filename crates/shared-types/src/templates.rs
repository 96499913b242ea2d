//! Fixed notification templates for the lending workflow.
//!
//! Each producer composes a title, kind and category around the domain
//! values it is given. None of them expire on their own.

use crate::{NotificationCategory, NotificationDraft, NotificationKind};
use chrono::NaiveDate;

const DEFAULT_APPROVAL_NOTE: &str = "Please collect from the lab.";
const DEFAULT_REJECTION_REASON: &str = "Please contact admin for more details.";

/// Trim an optional free-text field, treating blank input as absent.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Format a due date as "Jan 20, 2026".
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn request_submitted(component: &str, quantity: u32) -> NotificationDraft {
    NotificationDraft::new(format!(
        "Your request for {quantity}x {component} has been submitted and is pending admin approval."
    ))
    .title("Request Submitted")
    .kind(NotificationKind::Info)
    .category(NotificationCategory::Request)
}

pub fn request_approved(
    component: &str,
    quantity: u32,
    admin_notes: Option<&str>,
) -> NotificationDraft {
    let notes = non_blank(admin_notes).unwrap_or(DEFAULT_APPROVAL_NOTE);
    NotificationDraft::new(format!(
        "Your request for {quantity}x {component} has been approved. {notes}"
    ))
    .title("Request Approved! 🎉")
    .kind(NotificationKind::Success)
    .category(NotificationCategory::Approval)
}

pub fn request_rejected(component: &str, quantity: u32, reason: Option<&str>) -> NotificationDraft {
    let reason = non_blank(reason).unwrap_or(DEFAULT_REJECTION_REASON);
    NotificationDraft::new(format!(
        "Your request for {quantity}x {component} has been rejected. {reason}"
    ))
    .title("Request Rejected")
    .kind(NotificationKind::Error)
    .category(NotificationCategory::Rejection)
}

pub fn component_checked_out(
    component: &str,
    quantity: u32,
    due_date: NaiveDate,
) -> NotificationDraft {
    NotificationDraft::new(format!(
        "You have successfully checked out {quantity}x {component}. Please return by {}.",
        format_due_date(due_date)
    ))
    .title("Component Checked Out")
    .kind(NotificationKind::Success)
    .category(NotificationCategory::Checkout)
}

pub fn component_returned(component: &str, quantity: u32) -> NotificationDraft {
    NotificationDraft::new(format!(
        "Thank you for returning {quantity}x {component}. Your borrowing record has been updated."
    ))
    .title("Component Returned")
    .kind(NotificationKind::Success)
    .category(NotificationCategory::Return)
}

pub fn due_date_reminder(component: &str, quantity: u32, days_left: u32) -> NotificationDraft {
    NotificationDraft::new(format!(
        "Your borrowed {quantity}x {component} is due in {days_left} day(s). Please return to avoid late fees."
    ))
    .title("Due Date Reminder")
    .kind(NotificationKind::Warning)
    .category(NotificationCategory::System)
}

pub fn overdue_notice(component: &str, quantity: u32, days_overdue: u32) -> NotificationDraft {
    NotificationDraft::new(format!(
        "Your {quantity}x {component} is {days_overdue} day(s) overdue. Please return immediately to avoid penalties."
    ))
    .title("Overdue Notice")
    .kind(NotificationKind::Error)
    .category(NotificationCategory::System)
}

/// Shown once a login succeeds.
pub fn welcome(name: &str, duration_ms: u64) -> NotificationDraft {
    NotificationDraft::new(format!("Successfully logged in as {name}"))
        .title("Welcome Back!")
        .kind(NotificationKind::Success)
        .category(NotificationCategory::System)
        .duration_ms(duration_ms)
}

/// Shown after logout.
pub fn logged_out(duration_ms: u64) -> NotificationDraft {
    NotificationDraft::new("You have been successfully logged out")
        .title("Logged Out")
        .kind(NotificationKind::Info)
        .category(NotificationCategory::System)
        .duration_ms(duration_ms)
}
