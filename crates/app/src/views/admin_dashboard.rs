use super::{parse_request, DashboardHeader};
use crate::notifications::use_notifications;
use chrono::{Days, NaiveDate, Utc};
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Default loan period offered in the checkout form.
const DEFAULT_LOAN_DAYS: u64 = 7;

/// Workflow actions an admin can take on a component request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Approve,
    Reject,
    CheckOut,
    Return,
    Remind,
    Overdue,
}

impl AdminAction {
    pub const ALL: [AdminAction; 6] = [
        AdminAction::Approve,
        AdminAction::Reject,
        AdminAction::CheckOut,
        AdminAction::Return,
        AdminAction::Remind,
        AdminAction::Overdue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminAction::Approve => "Approve",
            AdminAction::Reject => "Reject",
            AdminAction::CheckOut => "Check out",
            AdminAction::Return => "Mark returned",
            AdminAction::Remind => "Send reminder",
            AdminAction::Overdue => "Overdue notice",
        }
    }

    fn variant(&self) -> ButtonVariant {
        match self {
            AdminAction::Reject | AdminAction::Overdue => ButtonVariant::Destructive,
            AdminAction::Approve | AdminAction::CheckOut => ButtonVariant::Primary,
            AdminAction::Return | AdminAction::Remind => ButtonVariant::Secondary,
        }
    }
}

/// Parse the `<input type="date">` value, falling back to the default loan
/// period from `today`.
pub fn parse_due_date(value: &str, today: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| today.checked_add_days(Days::new(DEFAULT_LOAN_DAYS)))
        .unwrap_or(today)
}

/// Parse the day-count field used by reminders and overdue notices.
/// Anything unparseable counts as one day.
pub fn parse_days(value: &str) -> u32 {
    value.trim().parse().ok().filter(|d| *d > 0).unwrap_or(1)
}

/// Admin view: drive the lending workflow for a single request and notify
/// the borrower at each step.
#[component]
pub fn AdminDashboard(on_logout: EventHandler<()>) -> Element {
    let mut notes = use_notifications();
    let today = Utc::now().date_naive();
    let mut component = use_signal(String::new);
    let mut quantity = use_signal(|| "1".to_string());
    let mut note = use_signal(String::new);
    let mut due_date = use_signal(move || parse_due_date("", today).format("%Y-%m-%d").to_string());
    let mut days = use_signal(|| "1".to_string());
    let mut error_msg = use_signal(|| Option::<String>::None);

    let run = use_callback(move |action: AdminAction| {
        let request = match parse_request(&component(), &quantity()) {
            Ok(request) => request,
            Err(e) => {
                error_msg.set(Some(e.friendly_message()));
                return;
            }
        };
        error_msg.set(None);

        let name = request.component.as_str();
        let qty = request.quantity;
        let note_text = note();
        let note_text = Some(note_text.as_str());
        match action {
            AdminAction::Approve => notes.request_approved(name, qty, note_text),
            AdminAction::Reject => notes.request_rejected(name, qty, note_text),
            AdminAction::CheckOut => {
                notes.component_checked_out(name, qty, parse_due_date(&due_date(), today))
            }
            AdminAction::Return => notes.component_returned(name, qty),
            AdminAction::Remind => notes.due_date_reminder(name, qty, parse_days(&days())),
            AdminAction::Overdue => notes.overdue_notice(name, qty, parse_days(&days())),
        };
        tracing::info!(action = action.label(), component = name, quantity = qty, "admin action");
    });

    rsx! {
        div { class: "dashboard",
            DashboardHeader { title: "Admin Dashboard", on_logout }

            Card {
                CardHeader {
                    CardTitle { "Process a request" }
                    CardDescription { "Each action notifies the borrower." }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "form-error", "{err}" }
                    }
                    div { class: "dashboard-form",
                        input {
                            r#type: "text",
                            placeholder: "Component",
                            value: component(),
                            oninput: move |e: FormEvent| component.set(e.value()),
                        }
                        input {
                            r#type: "number",
                            min: "1",
                            value: quantity(),
                            oninput: move |e: FormEvent| quantity.set(e.value()),
                        }
                        input {
                            r#type: "text",
                            placeholder: "Notes or rejection reason (optional)",
                            value: note(),
                            oninput: move |e: FormEvent| note.set(e.value()),
                        }
                        input {
                            r#type: "date",
                            value: due_date(),
                            oninput: move |e: FormEvent| due_date.set(e.value()),
                        }
                        input {
                            r#type: "number",
                            min: "1",
                            title: "Days left / days overdue",
                            value: days(),
                            oninput: move |e: FormEvent| days.set(e.value()),
                        }
                    }
                    div { class: "dashboard-actions",
                        for action in AdminAction::ALL {
                            Button {
                                key: "{action.label()}",
                                variant: action.variant(),
                                onclick: move |_| run.call(action),
                                "{action.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
