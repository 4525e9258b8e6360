//! 牌池：每个字母的剩余数量

use super::letter::Letter;

pub const DEFAULT_START_COUNT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolChange {
    Decremented { remaining: u8 },
    /// 刚好减到 0
    Depleted,
    /// 已经是 0
    Unchanged,
}

impl PoolChange {
    pub fn changed(self) -> bool {
        !matches!(self, PoolChange::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct PoolState {
    counts: [u8; Letter::COUNT],
    start_count: u8,
}

impl PoolState {
    pub fn new(start_count: u8) -> Self {
        Self {
            counts: [start_count; Letter::COUNT],
            start_count,
        }
    }

    pub fn start_count(&self) -> u8 {
        self.start_count
    }

    pub fn remaining(&self, letter: Letter) -> u8 {
        self.counts[letter.index()]
    }

    /// 计数只减不增，用完即永久用完。
    pub fn is_depleted(&self, letter: Letter) -> bool {
        self.remaining(letter) == 0
    }

    pub fn select(&mut self, letter: Letter) -> PoolChange {
        let count = &mut self.counts[letter.index()];
        if *count == 0 {
            return PoolChange::Unchanged;
        }

        *count -= 1;
        if *count == 0 {
            PoolChange::Depleted
        } else {
            PoolChange::Decremented { remaining: *count }
        }
    }

    pub fn total_remaining(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Letter, u8)> + '_ {
        Letter::all().map(|letter| (letter, self.remaining(letter)))
    }
}

impl Default for PoolState {
    fn default() -> Self {
        Self::new(DEFAULT_START_COUNT)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/pool.rs"]
mod tests;
