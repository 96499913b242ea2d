pub mod components;
pub mod format;
pub mod timer;

pub use components::*;
