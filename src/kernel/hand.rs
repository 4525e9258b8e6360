use super::letter::Letter;

pub const HAND_SIZE: usize = 7;
pub const MASK_SYMBOL: char = '?';
pub const BLANK_SYMBOL: char = ' ';

/// 七个有序槽位，`None` 为空；允许重复字母。
pub type HandSlots = [Option<Letter>; HAND_SIZE];

/// 文本标签 -> 槽位。合法选项只有 `""` 和单个字母，其余一律视为空槽。
/// 界面上的选择器只能产生合法值，这里仅供测试用标签构造手牌。
#[cfg(test)]
pub fn parse_slot(label: &str) -> Option<Letter> {
    let mut chars = label.trim().chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Letter::from_char(ch)
}

#[cfg(test)]
pub fn slots_from_labels(labels: [&str; HAND_SIZE]) -> HandSlots {
    labels.map(parse_slot)
}

pub fn slot_symbol(slot: Option<Letter>) -> char {
    slot.map(Letter::as_char).unwrap_or(BLANK_SYMBOL)
}

#[derive(Debug, Clone, Default)]
pub struct HandState {
    user: HandSlots,
}

impl HandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> &HandSlots {
        &self.user
    }

    /// 一次替换全部槽位，返回是否有变化。
    pub fn replace(&mut self, slots: HandSlots) -> bool {
        let changed = self.user != slots;
        self.user = slots;
        changed
    }

    pub fn user_display(&self) -> [char; HAND_SIZE] {
        self.user.map(slot_symbol)
    }

    /// 对手的牌从不记录
    pub fn opponent_display(&self) -> [char; HAND_SIZE] {
        [MASK_SYMBOL; HAND_SIZE]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/hand.rs"]
mod tests;
