use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCircleAlert, LdCircleCheck, LdClock, LdInfo, LdPackage, LdTriangleAlert, LdUserCheck,
    LdUserX,
};
use dioxus_free_icons::Icon;
use shared_types::{NotificationCategory, NotificationKind};

/// Severity or origin glyph for a notification.
///
/// When a `category` is given, workflow categories get their own glyph and
/// `System` falls through to the severity glyph.
#[component]
pub fn NotificationIcon(
    kind: NotificationKind,
    #[props(default)] category: Option<NotificationCategory>,
    #[props(default = 20)] size: u32,
) -> Element {
    match category {
        Some(NotificationCategory::Request) => rsx! {
            Icon::<LdClock> { icon: LdClock, width: size, height: size }
        },
        Some(NotificationCategory::Approval) => rsx! {
            Icon::<LdCircleCheck> { icon: LdCircleCheck, width: size, height: size }
        },
        Some(NotificationCategory::Rejection) => rsx! {
            Icon::<LdUserX> { icon: LdUserX, width: size, height: size }
        },
        Some(NotificationCategory::Checkout) => rsx! {
            Icon::<LdPackage> { icon: LdPackage, width: size, height: size }
        },
        Some(NotificationCategory::Return) => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: size, height: size }
        },
        Some(NotificationCategory::System) | None => match kind {
            NotificationKind::Success => rsx! {
                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: size, height: size }
            },
            NotificationKind::Error => rsx! {
                Icon::<LdCircleAlert> { icon: LdCircleAlert, width: size, height: size }
            },
            NotificationKind::Warning => rsx! {
                Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: size, height: size }
            },
            NotificationKind::Info => rsx! {
                Icon::<LdInfo> { icon: LdInfo, width: size, height: size }
            },
        },
    }
}
