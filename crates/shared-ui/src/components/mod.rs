pub mod button;
pub mod card;

// Notification renderers
pub mod notification_icon;
pub mod notification_panel;
pub mod toast;

pub use button::*;
pub use card::*;
pub use notification_icon::*;
pub use notification_panel::*;
pub use toast::*;
