//! crossterm 事件 -> `core::event`。
//!
//! 追踪器只关心按键、点击、滚轮和窗口大小；鼠标移动/拖拽在这里直接丢掉，
//! 开启 mouse capture 后它们会刷屏，却不会改变任何状态。

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::event as ct;

pub fn into_input_event(event: ct::Event) -> Option<InputEvent> {
    let event = match event {
        ct::Event::Key(key) => InputEvent::Key(into_key_event(key)),
        ct::Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)?),
        ct::Event::Resize(w, h) => InputEvent::Resize(w, h),
        ct::Event::FocusGained => InputEvent::FocusGained,
        ct::Event::FocusLost => InputEvent::FocusLost,
        ct::Event::Paste(s) => InputEvent::Paste(s),
    };
    Some(event)
}

/// 大写字母折叠为小写 + SHIFT，这样 Caps Lock 或 Ctrl+Shift+E 仍然命中 Ctrl+E。
/// 选字母本身大小写不敏感，不受影响。
pub fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = match event.code {
        ct::KeyCode::Char(ch) if ch.is_ascii_uppercase() => {
            modifiers |= KeyModifiers::SHIFT;
            KeyCode::Char(ch.to_ascii_lowercase())
        }
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        // 部分终端把 Ctrl+Space 报成 NUL
        ct::KeyCode::Null => {
            modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        other => into_key_code(other),
    };
    let kind = match event.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };
    KeyEvent {
        code,
        modifiers,
        kind,
    }
}

fn into_key_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    [
        (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (ct::KeyModifiers::ALT, KeyModifiers::ALT),
        (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(from, _)| mods.contains(*from))
    .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
}

fn into_key_code(code: ct::KeyCode) -> KeyCode {
    match code {
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::F(n) => KeyCode::F(n),
        _ => KeyCode::Unknown,
    }
}

/// 只保留点击和滚轮；`None` 表示追踪器不关心的鼠标事件。
pub fn into_mouse_event(event: ct::MouseEvent) -> Option<MouseEvent> {
    let kind = match event.kind {
        ct::MouseEventKind::Down(button) => MouseEventKind::Down(into_mouse_button(button)),
        ct::MouseEventKind::Up(button) => MouseEventKind::Up(into_mouse_button(button)),
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        ct::MouseEventKind::Moved
        | ct::MouseEventKind::Drag(_)
        | ct::MouseEventKind::ScrollLeft
        | ct::MouseEventKind::ScrollRight => return None,
    };
    Some(MouseEvent {
        kind,
        column: event.column,
        row: event.row,
        modifiers: into_key_modifiers(event.modifiers),
    })
}

fn into_mouse_button(button: ct::MouseButton) -> MouseButton {
    match button {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
