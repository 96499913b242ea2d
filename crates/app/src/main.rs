use dioxus::prelude::*;
use shared_types::{AppConfig, AuthProvider};
use shared_ui::{NotificationPanel, ToastStack, ToastTiming};

mod auth;
mod config;
mod notifications;
mod shell;
mod views;

use auth::AuthState;
use notifications::use_notification_center;
use shell::{ShellEvent, ShellState, ShellView};
use views::{AdminDashboard, LoginForm, StudentDashboard};

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

/// Root shell: resolves the session, fans out to the role dashboard and
/// mounts the notification renderers.
#[component]
fn App() -> Element {
    let config = use_context_provider(config::load);
    let mut auth = use_context_provider(AuthState::new);
    let mut notes = use_notification_center();
    let mut shell = use_signal(ShellState::default);

    let session = config.session.clone();
    let dispatch = use_callback(move |event: ShellEvent| {
        let current = shell.peek().clone();
        let (next, note) = current.apply(event, &session);
        if next != current {
            tracing::info!(from = current.label(), to = next.label(), "shell transition");
            shell.set(next);
        }
        if let Some(note) = note {
            notes.add(note);
        }
    });

    // One-shot session check once the shell has mounted
    use_effect(move || {
        dispatch.call(ShellEvent::Checked(auth.current_user()));
    });

    let view = shell.read().view();

    if view == ShellView::Loading {
        return rsx! {
            document::Link { rel: "stylesheet", href: APP_CSS }
            div { class: "app-loading",
                div { class: "app-spinner" }
                span { "Loading..." }
            }
        };
    }

    if view == ShellView::Empty {
        tracing::warn!("signed in with an unrecognized role, rendering nothing");
        return rsx! {};
    }

    let on_login = move |_: ()| dispatch.call(ShellEvent::LoggedIn(auth.current_user()));
    let on_logout = move |_: ()| {
        auth.sign_out();
        dispatch.call(ShellEvent::LoggedOut);
    };

    let items = notes.snapshot();
    let toasts: Vec<_> = items.iter().filter(|n| n.is_transient()).cloned().collect();
    let AppConfig { toast, panel, .. } = config;

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        div { class: "app-shell",
            match view {
                ShellView::Student => rsx! { StudentDashboard { on_logout } },
                ShellView::Admin => rsx! { AdminDashboard { on_logout } },
                _ => rsx! { LoginForm { on_login } },
            }

            div { class: "app-notifications",
                NotificationPanel {
                    notifications: items,
                    badge_cap: panel.badge_cap,
                    on_remove: move |id| notes.remove(id),
                    on_mark_as_read: move |id| notes.mark_as_read(id),
                    on_clear_all: move |_| notes.clear_all(),
                }
            }

            if toast.enabled {
                ToastStack {
                    notifications: toasts,
                    timing: ToastTiming::from(&toast),
                    on_remove: move |id| notes.remove(id),
                }
            }
        }
    }
}
