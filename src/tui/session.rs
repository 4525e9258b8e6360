//! 终端会话：进入/退出追踪器的全屏模式，以及终止信号的轮询。

use std::io::{self, Stdout, Write};

use crossterm::cursor;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};

pub const WINDOW_TITLE: &str = "Scrabble Tile Tracker";

/// 追踪器占用终端期间的状态。drop 时自动恢复终端。
///
/// `raw_mode = false` 只写控制序列，不切换 raw mode（测试用 `Vec<u8>` 作为输出）。
pub struct TerminalSession<W: Write> {
    out: W,
    raw_mode: bool,
    active: bool,
}

impl TerminalSession<Stdout> {
    pub fn enter() -> io::Result<Self> {
        Self::enter_with(io::stdout(), true)
    }
}

impl<W: Write> TerminalSession<W> {
    pub fn enter_with(mut out: W, raw_mode: bool) -> io::Result<Self> {
        if raw_mode {
            enable_raw_mode()?;
        }
        let entered = execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            SetTitle(WINDOW_TITLE)
        );
        if let Err(err) = entered {
            if raw_mode {
                let _ = disable_raw_mode();
            }
            return Err(err);
        }
        Ok(Self {
            out,
            raw_mode,
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 幂等；所有步骤都会执行，返回第一个错误。
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let screen = execute!(
            self.out,
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        );
        let raw = if self.raw_mode {
            disable_raw_mode()
        } else {
            Ok(())
        };
        screen.and(raw)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    #[cfg(unix)]
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signal {
            SIGINT => Some(Self::SigInt),
            SIGTERM => Some(Self::SigTerm),
            _ => None,
        }
    }

    /// 与 shell 约定一致：128 + 信号编号。
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// raw mode 下 Ctrl+C 走按键事件；这里只接住外部发来的 SIGINT/SIGTERM。
/// 主循环每个 tick 调用 `poll`，不需要额外线程。
#[cfg(unix)]
pub struct TerminationWatch {
    signals: signal_hook::iterator::Signals,
}

#[cfg(unix)]
impl TerminationWatch {
    pub fn install() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        let signals = signal_hook::iterator::Signals::new([SIGINT, SIGTERM])?;
        Ok(Self { signals })
    }

    pub fn poll(&mut self) -> Option<TerminationSignal> {
        self.signals
            .pending()
            .find_map(TerminationSignal::from_raw)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/session.rs"]
mod tests;
