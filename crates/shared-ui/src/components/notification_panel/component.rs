use crate::components::NotificationIcon;
use crate::format::format_relative;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdInfo, LdX};
use dioxus_free_icons::Icon;
use shared_types::{unread_count, Notification, NotificationId};

/// Open/closed state of the bell panel plus the "new since last open" pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub open: bool,
    pub has_new: bool,
    last_unread: usize,
}

impl PanelState {
    pub fn new(open: bool) -> Self {
        Self {
            open,
            ..Self::default()
        }
    }

    /// Record the latest unread count. A rise while closed raises `has_new`.
    pub fn observe_unread(&mut self, unread: usize) {
        if unread > self.last_unread && !self.open {
            self.has_new = true;
        }
        self.last_unread = unread;
    }

    /// Opening clears `has_new`; it never marks anything read.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.has_new = false;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Badge text for an unread count, `None` when there is nothing unread.
pub fn badge_label(unread: usize, cap: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > cap => Some(format!("{cap}+")),
        n => Some(n.to_string()),
    }
}

/// Bell button with unread badge and a dropdown list of notifications.
///
/// Clicking an item marks it read; its close button removes it. "Clear All"
/// empties the list but leaves the panel open.
#[component]
pub fn NotificationPanel(
    notifications: Vec<Notification>,
    on_remove: EventHandler<NotificationId>,
    on_mark_as_read: EventHandler<NotificationId>,
    on_clear_all: EventHandler<()>,
    #[props(default = 99)] badge_cap: usize,
    #[props(default)] default_open: bool,
) -> Element {
    let mut state = use_signal(move || PanelState::new(default_open));
    let unread = unread_count(&notifications);

    use_effect(use_reactive!(|unread| {
        state.write().observe_unread(unread);
    }));

    let PanelState { open, has_new, .. } = state();
    let badge = badge_label(unread, badge_cap);
    let now = Utc::now();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "notification-panel",
            button {
                class: "notification-bell",
                r#type: "button",
                "aria-label": "Notifications",
                "aria-expanded": open,
                onclick: move |_| state.write().toggle(),
                Icon::<LdBell> { icon: LdBell, width: 24, height: 24 }
                if let Some(label) = badge {
                    span { class: "notification-badge", "{label}" }
                    if has_new {
                        span { class: "notification-ping" }
                    }
                }
            }

            if open {
                div {
                    class: "notification-backdrop",
                    onclick: move |_| state.write().close(),
                }
                div { class: "notification-dropdown", role: "dialog",
                    div { class: "notification-header",
                        div {
                            h3 { class: "notification-heading", "Notifications" }
                            p { class: "notification-summary",
                                if unread > 0 {
                                    "{unread} unread"
                                } else {
                                    "All caught up!"
                                }
                            }
                        }
                        div { class: "notification-actions",
                            if !notifications.is_empty() {
                                button {
                                    class: "notification-clear",
                                    r#type: "button",
                                    onclick: move |_| on_clear_all.call(()),
                                    "Clear All"
                                }
                            }
                            button {
                                class: "notification-close",
                                r#type: "button",
                                "aria-label": "Close notifications",
                                onclick: move |_| state.write().close(),
                                Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                            }
                        }
                    }

                    div { class: "notification-list",
                        if notifications.is_empty() {
                            div { class: "notification-empty",
                                div { class: "notification-empty-icon",
                                    Icon::<LdInfo> { icon: LdInfo, width: 32, height: 32 }
                                }
                                p { class: "notification-empty-title", "No notifications yet" }
                                p { class: "notification-empty-hint",
                                    "You'll see updates about your requests here"
                                }
                            }
                        } else {
                            for (key , notification) in notifications.iter().map(|n| (n.id.to_string(), n.clone())) {
                                NotificationItem {
                                    key: "{key}",
                                    notification,
                                    now,
                                    on_remove,
                                    on_mark_as_read,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationItem(
    notification: Notification,
    now: DateTime<Utc>,
    on_remove: EventHandler<NotificationId>,
    on_mark_as_read: EventHandler<NotificationId>,
) -> Element {
    let id = notification.id;
    let kind = notification.kind;
    let category = notification.category;
    let when = format_relative(notification.timestamp, now);

    rsx! {
        div {
            class: "notification-item",
            "data-read": notification.read,
            onclick: move |_| on_mark_as_read.call(id),
            if !notification.read {
                span { class: "notification-unread-dot" }
            }
            div { class: "notification-item-icon", "data-kind": kind.as_str(),
                NotificationIcon { kind, category: Some(category) }
            }
            div { class: "notification-item-body",
                div { class: "notification-item-head",
                    h4 { class: "notification-item-title",
                        {notification.title.clone().unwrap_or_default()}
                    }
                    button {
                        class: "notification-item-remove",
                        r#type: "button",
                        "aria-label": "Remove notification",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_remove.call(id);
                        },
                        Icon::<LdX> { icon: LdX, width: 12, height: 12 }
                    }
                }
                p { class: "notification-item-message", "{notification.message}" }
                div { class: "notification-item-meta",
                    span { class: "notification-item-time", "{when}" }
                    span { class: "notification-item-category", "data-kind": kind.as_str(),
                        "{category.as_str()}"
                    }
                }
            }
        }
    }
}
