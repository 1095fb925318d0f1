pub mod config;
pub mod icon;
pub mod layout;
mod macros;
pub mod motion;
pub mod platform;
pub mod state;
pub mod theme;
pub mod widget;
