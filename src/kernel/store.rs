use super::hand::HandSlots;
use super::letter::Letter;
use super::pool::PoolChange;
use super::{Action, AppState};

pub struct DispatchResult {
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self { state_changed }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::PoolSelect(letter) => self.select_pool_tile(letter),
            Action::PoolMoveCursor { dx, dy } => {
                DispatchResult::changed(self.state.ui.move_pool_cursor(dx, dy))
            }
            Action::PoolSelectCursor => {
                let letter = self.state.ui.pool_cursor;
                self.select_pool_tile(letter)
            }
            Action::HandEditorOpen => {
                let hand = *self.state.hand.user();
                let opened = self.state.hand_editor.open(&hand);
                if opened {
                    tracing::info!(hand = %format_slots(&hand), "hand editor opened");
                }
                DispatchResult::changed(opened)
            }
            Action::HandEditorFocus { index } => {
                DispatchResult::changed(self.state.hand_editor.focus(index))
            }
            Action::HandEditorFocusNext => {
                DispatchResult::changed(self.state.hand_editor.focus_next())
            }
            Action::HandEditorFocusPrev => {
                DispatchResult::changed(self.state.hand_editor.focus_prev())
            }
            Action::HandEditorCycle { delta } => {
                DispatchResult::changed(self.state.hand_editor.cycle(delta))
            }
            Action::HandEditorSet(letter) => {
                DispatchResult::changed(self.state.hand_editor.set_focused(letter))
            }
            Action::HandEditorClear => {
                DispatchResult::changed(self.state.hand_editor.clear_focused())
            }
            // 确认只负责收集七个选择，整手替换统一走 HandReplace。
            Action::HandEditorConfirm => match self.state.hand_editor.take_selections() {
                Some(selections) => {
                    self.dispatch(Action::HandReplace(selections));
                    DispatchResult::changed(true)
                }
                None => DispatchResult::changed(false),
            },
            Action::HandReplace(slots) => {
                let was_open = self.state.hand_editor.visible;
                self.state.hand_editor.reset();
                let changed = self.replace_hand(slots);
                DispatchResult::changed(changed || was_open)
            }
        }
    }

    fn select_pool_tile(&mut self, letter: Letter) -> DispatchResult {
        let change = self.state.pool.select(letter);
        match change {
            PoolChange::Decremented { remaining } => {
                tracing::debug!(%letter, remaining, "pool tile selected");
            }
            PoolChange::Depleted => {
                tracing::info!(%letter, "pool letter depleted");
            }
            PoolChange::Unchanged => {
                tracing::debug!(%letter, "pool letter already depleted");
            }
        }
        DispatchResult::changed(change.changed())
    }

    fn replace_hand(&mut self, slots: HandSlots) -> bool {
        let changed = self.state.hand.replace(slots);
        tracing::info!(hand = %format_slots(&slots), changed, "hand replaced");
        changed
    }
}

fn format_slots(slots: &HandSlots) -> String {
    slots
        .iter()
        .map(|slot| slot.map(Letter::as_char).unwrap_or('_'))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
