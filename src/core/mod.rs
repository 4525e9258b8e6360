//! 核心抽象：界面层与终端适配层共用的输入事件

pub mod event;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent};
