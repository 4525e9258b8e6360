//! 无界面的追踪器内核（state/action/store）

pub mod action;
pub mod hand;
pub mod hand_editor;
pub mod letter;
pub mod paths;
pub mod pool;
pub mod settings;
pub mod state;
pub mod store;

pub use action::Action;
pub use hand::{HandSlots, HandState, HAND_SIZE, MASK_SYMBOL};
pub use hand_editor::HandEditorState;
pub use letter::Letter;
pub use pool::{PoolChange, PoolState};
pub use settings::{load_settings, Settings, SettingsError, ThemeSettings};
pub use state::{AppState, UiState};
pub use store::{DispatchResult, Store};
