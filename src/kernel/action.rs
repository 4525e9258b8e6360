use crate::kernel::hand::HandSlots;
use crate::kernel::letter::Letter;

#[derive(Debug, Clone)]
pub enum Action {
    PoolSelect(Letter),
    PoolMoveCursor {
        dx: isize,
        dy: isize,
    },
    PoolSelectCursor,
    HandEditorOpen,
    HandEditorFocus {
        index: usize,
    },
    HandEditorFocusNext,
    HandEditorFocusPrev,
    HandEditorCycle {
        delta: isize,
    },
    HandEditorSet(Letter),
    HandEditorClear,
    HandEditorConfirm,
    /// 整手替换（七个值）。编辑器确认也经由这里；若编辑器打开则一并关闭。
    HandReplace(HandSlots),
}
