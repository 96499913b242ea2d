pub mod admin_dashboard;
pub mod login;
pub mod student_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use login::LoginForm;
pub use student_dashboard::StudentDashboard;

use crate::auth::{use_display_name, use_user_role};
use crate::notifications::use_notifications;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_types::AppError;
use shared_ui::{Button, ButtonVariant};

/// A component name and quantity entered in one of the dashboard forms.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRequest {
    pub component: String,
    pub quantity: u32,
}

/// Validate the component/quantity pair shared by both dashboards.
pub fn parse_request(component: &str, quantity: &str) -> Result<ComponentRequest, AppError> {
    let component = component.trim();
    if component.is_empty() {
        return Err(AppError::field("component", "Component name is required"));
    }
    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| AppError::field("quantity", "Quantity must be a whole number"))?;
    if quantity == 0 {
        return Err(AppError::field("quantity", "Quantity must be at least 1"));
    }
    Ok(ComponentRequest {
        component: component.to_string(),
        quantity,
    })
}

/// Title bar with the signed-in user and a logout button.
#[component]
fn DashboardHeader(title: String, on_logout: EventHandler<()>) -> Element {
    let name = use_display_name();
    let role = use_user_role().map(|r| r.display_name()).unwrap_or_default();
    let unread = use_notifications().unread_count();

    rsx! {
        header { class: "dashboard-header",
            div {
                h1 { class: "dashboard-title", "{title}" }
                p { class: "dashboard-user", "{name} · {role}" }
                if unread > 0 {
                    p { class: "dashboard-unread", "{unread} unread notifications" }
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| on_logout.call(()),
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                "Log out"
            }
        }
    }
}
