use super::Tracker;
use crate::core::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::kernel::{Action, Letter};
use crate::tui::view::EventResult;

fn plain_letter(key: &KeyEvent) -> Option<Letter> {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Letter::from_char(ch),
        _ => None,
    }
}

impl Tracker {
    pub(super) fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            return EventResult::Quit;
        }

        if self.store.state().hand_editor.visible {
            self.handle_editor_key(key)
        } else {
            self.handle_pool_key(key)
        }
    }

    fn handle_pool_key(&mut self, key: &KeyEvent) -> EventResult {
        let action = match key.code {
            KeyCode::F(2) => Action::HandEditorOpen,
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::HandEditorOpen
            }
            KeyCode::Left => Action::PoolMoveCursor { dx: -1, dy: 0 },
            KeyCode::Right => Action::PoolMoveCursor { dx: 1, dy: 0 },
            KeyCode::Up => Action::PoolMoveCursor { dx: 0, dy: -1 },
            KeyCode::Down => Action::PoolMoveCursor { dx: 0, dy: 1 },
            KeyCode::Enter | KeyCode::Char(' ') => Action::PoolSelectCursor,
            _ => match plain_letter(key) {
                Some(letter) => Action::PoolSelect(letter),
                None => return EventResult::Ignored,
            },
        };
        self.dispatch(action)
    }

    fn handle_editor_key(&mut self, key: &KeyEvent) -> EventResult {
        let action = match key.code {
            // 没有取消路径：离开对话框即提交
            KeyCode::Enter | KeyCode::Esc => Action::HandEditorConfirm,
            KeyCode::Left | KeyCode::BackTab => Action::HandEditorFocusPrev,
            KeyCode::Right | KeyCode::Tab => Action::HandEditorFocusNext,
            KeyCode::Up => Action::HandEditorCycle { delta: -1 },
            KeyCode::Down => Action::HandEditorCycle { delta: 1 },
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Char(' ') => Action::HandEditorClear,
            _ => match plain_letter(key) {
                Some(letter) => Action::HandEditorSet(letter),
                None => return EventResult::Ignored,
            },
        };
        self.dispatch(action)
    }

    pub(super) fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        if self.store.state().hand_editor.visible {
            return self.handle_editor_mouse(mouse);
        }

        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Ignored;
        }
        let Some(layout) = self.last_layout.as_ref() else {
            return EventResult::Ignored;
        };

        let (x, y) = (mouse.column, mouse.row);
        let action = if let Some(letter) = layout.pool_tile_at(x, y) {
            Action::PoolSelect(letter)
        } else if super::layout::contains(layout.set_hand_button, x, y) {
            Action::HandEditorOpen
        } else {
            return EventResult::Ignored;
        };
        self.dispatch(action)
    }

    /// 对话框是模态的：框外点击一律吞掉。
    fn handle_editor_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        let Some(dialog) = self.last_dialog else {
            return EventResult::Ignored;
        };

        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = dialog.selector_at(x, y) {
                    return self.dispatch(Action::HandEditorFocus { index });
                }
                if super::layout::contains(dialog.confirm_button, x, y) {
                    return self.dispatch(Action::HandEditorConfirm);
                }
                EventResult::Ignored
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let Some(index) = dialog.selector_at(x, y) else {
                    return EventResult::Ignored;
                };
                let delta = if mouse.kind == MouseEventKind::ScrollUp { -1 } else { 1 };
                let focused = self.store.dispatch(Action::HandEditorFocus { index });
                let cycled = self.store.dispatch(Action::HandEditorCycle { delta });
                EventResult::from_changed(focused.state_changed || cycled.state_changed)
            }
            _ => EventResult::Ignored,
        }
    }
}
