//! tiletrack - 终端版 Scrabble 牌池与手牌追踪器
//!
//! 模块：
//! - core: 输入事件定义
//! - kernel: 无界面状态（牌池、手牌、手牌编辑、store、配置）
//! - app: 追踪器界面、布局、主题
//! - tui: crossterm/ratatui 集成

pub mod core;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
