use super::{parse_request, ComponentRequest, DashboardHeader};
use crate::notifications::use_notifications;
use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Student view: submit borrow requests and see what was asked for this
/// session. Approval happens on the admin side.
#[component]
pub fn StudentDashboard(on_logout: EventHandler<()>) -> Element {
    let mut notes = use_notifications();
    let mut component = use_signal(String::new);
    let mut quantity = use_signal(|| "1".to_string());
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut submitted = use_signal(Vec::<ComponentRequest>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match parse_request(&component(), &quantity()) {
            Ok(request) => {
                notes.request_submitted(&request.component, request.quantity);
                submitted.write().insert(0, request);
                component.set(String::new());
                quantity.set("1".to_string());
                error_msg.set(None);
            }
            Err(e) => error_msg.set(Some(e.friendly_message())),
        }
    };

    rsx! {
        div { class: "dashboard",
            DashboardHeader { title: "Student Dashboard", on_logout }

            Card {
                CardHeader {
                    CardTitle { "Request a component" }
                    CardDescription { "Requests stay pending until an admin reviews them." }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "form-error", "{err}" }
                    }
                    form { class: "dashboard-form", onsubmit: handle_submit,
                        input {
                            r#type: "text",
                            placeholder: "Component (e.g. Arduino Uno)",
                            value: component(),
                            oninput: move |e: FormEvent| component.set(e.value()),
                        }
                        input {
                            r#type: "number",
                            min: "1",
                            value: quantity(),
                            oninput: move |e: FormEvent| quantity.set(e.value()),
                        }
                        Button { button_type: "submit", "Submit request" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "My requests" }
                }
                CardContent {
                    if submitted.read().is_empty() {
                        p { class: "dashboard-empty", "No requests yet." }
                    } else {
                        ul { class: "dashboard-list",
                            for request in submitted() {
                                li { "{request.quantity}x {request.component} · pending" }
                            }
                        }
                    }
                }
            }
        }
    }
}
