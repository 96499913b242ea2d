use crate::auth::use_auth;
use crate::notifications::use_notifications;
use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, NotificationDraft, NotificationKind, UserRole};
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// How long a failed-login toast stays up.
const LOGIN_ERROR_DURATION_MS: u64 = 4000;

/// Check the login form and build the session user.
pub fn validate_login(name: &str, role: UserRole) -> Result<AuthUser, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::field("name", "Please enter your name"));
    }
    Ok(AuthUser::new(name, role))
}

/// Sign-in card. Signs the user into [`AuthState`](crate::auth::AuthState)
/// and then reports success through `on_login`.
#[component]
pub fn LoginForm(on_login: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut notes = use_notifications();
    let mut name = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Student);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        match validate_login(&name(), role()) {
            Ok(user) => {
                error_msg.set(None);
                auth.sign_in(user);
                on_login.call(());
            }
            Err(e) => {
                let message = e.friendly_message();
                notes.add(
                    NotificationDraft::new(message.clone())
                        .title("Login Failed")
                        .kind(NotificationKind::Error)
                        .duration_ms(LOGIN_ERROR_DURATION_MS),
                );
                error_msg.set(Some(message));
            }
        }
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Lab Component Lending" }
                    CardDescription { "Sign in to borrow or manage lab components" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_login,
                        label { class: "auth-field",
                            span { "Name" }
                            input {
                                r#type: "text",
                                placeholder: "Your name",
                                value: name(),
                                oninput: move |e: FormEvent| name.set(e.value()),
                            }
                        }
                        label { class: "auth-field",
                            span { "Role" }
                            select {
                                value: role().as_str(),
                                onchange: move |e: FormEvent| {
                                    if let Some(r) = UserRole::parse(&e.value()) {
                                        role.set(r);
                                    }
                                },
                                option { value: "student", "Student" }
                                option { value: "admin", "Administrator" }
                            }
                        }
                        Button { button_type: "submit", "Sign In" }
                    }
                }
            }
        }
    }
}
