//! 手牌编辑对话框的状态
//!
//! 每个选择器的选项为 `{空, A..Z}`：下标 0 为空，`n` 对应字母 `n - 1`。
//! 编辑只改选择器，确认时整手替换。

use super::hand::{HandSlots, HAND_SIZE};
use super::letter::Letter;

pub const SELECTOR_OPTIONS: usize = Letter::COUNT + 1;

pub fn option_index(slot: Option<Letter>) -> usize {
    slot.map(|l| l.index() + 1).unwrap_or(0)
}

pub fn option_slot(index: usize) -> Option<Letter> {
    index.checked_sub(1).and_then(Letter::from_index)
}

#[derive(Debug, Clone, Default)]
pub struct HandEditorState {
    pub visible: bool,
    pub selections: HandSlots,
    pub focused: usize,
}

impl HandEditorState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open(&mut self, hand: &HandSlots) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        self.selections = *hand;
        self.focused = 0;
        true
    }

    pub fn focus(&mut self, index: usize) -> bool {
        if !self.visible || index >= HAND_SIZE || index == self.focused {
            return false;
        }
        self.focused = index;
        true
    }

    pub fn focus_next(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.focused = (self.focused + 1) % HAND_SIZE;
        true
    }

    pub fn focus_prev(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.focused = (self.focused + HAND_SIZE - 1) % HAND_SIZE;
        true
    }

    /// 循环切换当前选择器的选项，两端回绕。
    pub fn cycle(&mut self, delta: isize) -> bool {
        if !self.visible || delta == 0 {
            return false;
        }
        let slot = &mut self.selections[self.focused];
        let current = option_index(*slot) as isize;
        let next = (current + delta).rem_euclid(SELECTOR_OPTIONS as isize) as usize;
        let prev = *slot;
        *slot = option_slot(next);
        prev != *slot
    }

    /// 设置当前选择器并把焦点移到下一个（到最后一个为止）。
    pub fn set_focused(&mut self, letter: Letter) -> bool {
        if !self.visible {
            return false;
        }
        self.selections[self.focused] = Some(letter);
        if self.focused + 1 < HAND_SIZE {
            self.focused += 1;
        }
        true
    }

    pub fn clear_focused(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.selections[self.focused].take().is_some()
    }

    /// 关闭对话框，返回当前所有选择
    pub fn take_selections(&mut self) -> Option<HandSlots> {
        if !self.visible {
            return None;
        }
        let selections = self.selections;
        self.reset();
        Some(selections)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/hand_editor.rs"]
mod tests;
