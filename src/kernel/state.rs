use super::hand::HandState;
use super::hand_editor::HandEditorState;
use super::letter::Letter;
use super::pool::PoolState;
use super::settings::Settings;

#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: PoolState,
    pub hand: HandState,
    pub hand_editor: HandEditorState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pool: PoolState::new(settings.start_count),
            hand: HandState::new(),
            hand_editor: HandEditorState::default(),
            ui: UiState {
                pool_cursor: Letter::A,
                pool_columns: settings.pool_columns.clamp(1, Letter::COUNT),
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    /// 牌池网格上的键盘光标
    pub pool_cursor: Letter,
    pub pool_columns: usize,
}

impl UiState {
    /// 按行优先的网格移动光标。越界的移动按轴单独丢弃，光标始终停在 26 个字母之一。
    pub fn move_pool_cursor(&mut self, dx: isize, dy: isize) -> bool {
        let columns = self.pool_columns.max(1) as isize;
        let current = self.pool_cursor.index() as isize;
        let row = current / columns;
        let col = current % columns;

        let mut target = current;
        let moved_col = col + dx;
        if dx != 0 && (0..columns).contains(&moved_col) {
            let candidate = row * columns + moved_col;
            if candidate < Letter::COUNT as isize {
                target = candidate;
            }
        }
        if dy != 0 {
            let candidate = target + dy * columns;
            if (0..Letter::COUNT as isize).contains(&candidate) {
                target = candidate;
            }
        }

        let Some(letter) = Letter::from_index(target as usize) else {
            return false;
        };
        let changed = letter != self.pool_cursor;
        self.pool_cursor = letter;
        changed
    }
}
