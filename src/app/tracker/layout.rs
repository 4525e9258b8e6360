//! 屏幕布局：渲染与鼠标命中测试共用同一份几何数据。

use crate::kernel::{Letter, HAND_SIZE};
use ratatui::layout::Rect;

pub const POOL_TILE_WIDTH: u16 = 7;
pub const POOL_TILE_HEIGHT: u16 = 4;
pub const POOL_TILE_GAP: u16 = 1;
pub const HAND_TILE_WIDTH: u16 = 5;
pub const HAND_TILE_HEIGHT: u16 = 3;

pub const SET_HAND_LABEL: &str = "[ Set My Hand ]";
pub const UPDATE_HAND_LABEL: &str = "[ Update Hand ]";

pub const DIALOG_WIDTH: u16 = 49;
pub const DIALOG_HEIGHT: u16 = 9;
pub const SELECTOR_WIDTH: u16 = 5;
pub const SELECTOR_GAP: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerLayout {
    pub header: Rect,
    pub pool_tiles: Vec<(Letter, Rect)>,
    pub separator: Rect,
    pub user_label: Rect,
    pub user_tiles: [Rect; HAND_SIZE],
    pub set_hand_button: Rect,
    pub opponent_label: Rect,
    pub opponent_tiles: [Rect; HAND_SIZE],
    pub status: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub area: Rect,
    pub prompt: Rect,
    pub selectors: [Rect; HAND_SIZE],
    pub confirm_button: Rect,
    pub hint: Rect,
}

pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

fn centered_x(outer: Rect, width: u16) -> u16 {
    outer.x + outer.width.saturating_sub(width) / 2
}

fn tile_row(x: u16, y: u16, width: u16, height: u16, gap: u16) -> [Rect; HAND_SIZE] {
    std::array::from_fn(|i| {
        let offset = (i as u16) * (width + gap);
        Rect::new(x.saturating_add(offset), y, width, height)
    })
}

pub fn compute(area: Rect, columns: usize) -> TrackerLayout {
    let columns = columns.clamp(1, Letter::COUNT) as u16;
    let mut y = area.y;

    let header = Rect::new(area.x, y, area.width, 1);
    y = y.saturating_add(2);

    let grid_width = columns * POOL_TILE_WIDTH + (columns - 1) * POOL_TILE_GAP;
    let grid_x = centered_x(area, grid_width);
    let pool_tiles = Letter::all()
        .map(|letter| {
            let index = letter.index() as u16;
            let row = index / columns;
            let col = index % columns;
            let x = grid_x.saturating_add(col * (POOL_TILE_WIDTH + POOL_TILE_GAP));
            let tile_y = y.saturating_add(row * POOL_TILE_HEIGHT);
            (letter, Rect::new(x, tile_y, POOL_TILE_WIDTH, POOL_TILE_HEIGHT))
        })
        .collect();
    let rows = (Letter::COUNT as u16).div_ceil(columns);
    y = y.saturating_add(rows * POOL_TILE_HEIGHT);

    let separator = Rect::new(area.x, y, area.width, 1);
    y = y.saturating_add(1);

    let half = area.width / 2;
    let left = Rect::new(area.x, y, half, 1);
    let right = Rect::new(area.x + half, y, area.width - half, 1);
    let hand_width = HAND_SIZE as u16 * HAND_TILE_WIDTH;

    let user_label = left;
    let opponent_label = right;
    y = y.saturating_add(1);

    let user_tiles = tile_row(centered_x(left, hand_width), y, HAND_TILE_WIDTH, HAND_TILE_HEIGHT, 0);
    let opponent_tiles = tile_row(
        centered_x(right, hand_width),
        y,
        HAND_TILE_WIDTH,
        HAND_TILE_HEIGHT,
        0,
    );
    y = y.saturating_add(HAND_TILE_HEIGHT);

    let button_width = SET_HAND_LABEL.len() as u16;
    let set_hand_button = Rect::new(centered_x(left, button_width), y, button_width, 1);

    let status = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);

    TrackerLayout {
        header,
        pool_tiles,
        separator,
        user_label,
        user_tiles,
        set_hand_button,
        opponent_label,
        opponent_tiles,
        status,
    }
}

/// `None` when the area cannot fit the seven selectors.
pub fn compute_dialog(area: Rect) -> Option<DialogLayout> {
    let selectors_width = HAND_SIZE as u16 * (SELECTOR_WIDTH + SELECTOR_GAP) - SELECTOR_GAP;
    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    if width < selectors_width + 2 || height < DIALOG_HEIGHT {
        return None;
    }

    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let dialog = Rect::new(x, y, width, height);
    let inner = Rect::new(x + 1, y + 1, width - 2, height - 2);

    let prompt = Rect::new(inner.x, inner.y, inner.width, 1);
    let selectors = tile_row(
        centered_x(inner, selectors_width),
        inner.y + 2,
        SELECTOR_WIDTH,
        1,
        SELECTOR_GAP,
    );
    let button_width = UPDATE_HAND_LABEL.len() as u16;
    let confirm_button = Rect::new(centered_x(inner, button_width), inner.y + 4, button_width, 1);
    let hint = Rect::new(inner.x, inner.y + 6, inner.width, 1);

    Some(DialogLayout {
        area: dialog,
        prompt,
        selectors,
        confirm_button,
        hint,
    })
}

impl TrackerLayout {
    pub fn pool_tile_at(&self, x: u16, y: u16) -> Option<Letter> {
        self.pool_tiles
            .iter()
            .find(|(_, rect)| contains(*rect, x, y))
            .map(|(letter, _)| *letter)
    }

    pub fn pool_tile(&self, letter: Letter) -> Option<Rect> {
        self.pool_tiles
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, rect)| *rect)
    }
}

impl DialogLayout {
    pub fn selector_at(&self, x: u16, y: u16) -> Option<usize> {
        self.selectors
            .iter()
            .position(|rect| contains(*rect, x, y))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/tracker/layout.rs"]
mod tests;
