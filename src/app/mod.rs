//! 应用层：追踪器界面与主题

pub mod theme;
pub mod tracker;

pub use theme::UiTheme;
pub use tracker::Tracker;
