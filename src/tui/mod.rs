//! TUI 集成层（crossterm + ratatui）。
//!
//! 与 `kernel` 分离：追踪器状态不依赖任何终端 crate。

pub mod crossterm;
pub mod session;
pub mod view;
