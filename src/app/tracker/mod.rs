//! 追踪器主界面：持有 Store，把输入翻译成 Action。
//!
//! 渲染时缓存布局，鼠标点击按实际绘制的位置做命中测试。

mod dialog;
mod input;
pub mod layout;
mod render;

use crate::app::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::{Action, AppState, Settings, Store};
use crate::tui::view::{EventResult, View};
use layout::{DialogLayout, TrackerLayout};
use ratatui::layout::Rect;
use ratatui::Frame;

pub struct Tracker {
    store: Store,
    theme: UiTheme,
    last_layout: Option<TrackerLayout>,
    last_dialog: Option<DialogLayout>,
}

impl Tracker {
    pub fn new(settings: &Settings) -> Self {
        let mut theme = UiTheme::default();
        theme.apply_settings(&settings.theme);
        Self::with_theme(settings, theme)
    }

    pub fn with_theme(settings: &Settings, theme: UiTheme) -> Self {
        Self {
            store: Store::new(AppState::new(settings)),
            theme,
            last_layout: None,
            last_dialog: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    /// 最近一次渲染的布局
    pub fn layout(&self) -> Option<&TrackerLayout> {
        self.last_layout.as_ref()
    }

    pub fn dialog_layout(&self) -> Option<&DialogLayout> {
        self.last_dialog.as_ref()
    }

    pub fn dispatch(&mut self, action: Action) -> EventResult {
        EventResult::from_changed(self.store.dispatch(action).state_changed)
    }
}

impl View for Tracker {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(_, _) => EventResult::Consumed,
            InputEvent::FocusGained | InputEvent::FocusLost | InputEvent::Paste(_) => {
                EventResult::Ignored
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.render_screen(frame, area);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/tracker.rs"]
mod tests;
