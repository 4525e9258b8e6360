use super::layout::{self, UPDATE_HAND_LABEL};
use super::render::clip;
use super::Tracker;
use crate::kernel::hand::slot_symbol;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const DIALOG_TITLE: &str = " Select Your Tiles ";
const PROMPT: &str = "Select the 7 tiles in your hand:";
const HINT: &str = "<-/-> move  up/down change  A-Z set  Enter save";
const TOO_SMALL: &str = "Enlarge the terminal to edit your hand (Enter saves)";

impl Tracker {
    pub(super) fn render_hand_editor(&mut self, frame: &mut Frame, area: Rect) {
        let editor = &self.store.state().hand_editor;
        if !editor.visible {
            self.last_dialog = None;
            return;
        }

        let Some(dialog) = layout::compute_dialog(area) else {
            self.last_dialog = None;
            render_too_small(self, frame, area);
            return;
        };

        frame.render_widget(Clear, dialog.area);
        let base_style = Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.dialog_fg);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    DIALOG_TITLE,
                    base_style.add_modifier(Modifier::BOLD),
                ))
                .style(base_style),
            dialog.area,
        );

        frame.render_widget(
            Paragraph::new(PROMPT)
                .alignment(Alignment::Center)
                .style(base_style),
            dialog.prompt,
        );

        for (index, rect) in dialog.selectors.iter().enumerate() {
            let symbol = slot_symbol(editor.selections[index]);
            let style = if index == editor.focused {
                Style::default()
                    .fg(self.theme.tile_fg)
                    .bg(self.theme.cursor)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.tile_fg).bg(self.theme.tile_bg)
            };
            frame.render_widget(Paragraph::new(format!("[ {symbol} ]")).style(style), *rect);
        }

        frame.render_widget(
            Paragraph::new(UPDATE_HAND_LABEL).style(
                Style::default()
                    .fg(self.theme.button_fg)
                    .bg(self.theme.confirm_bg),
            ),
            dialog.confirm_button,
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                HINT,
                Style::default().fg(self.theme.muted_fg),
            )))
            .alignment(Alignment::Center)
            .style(base_style),
            dialog.hint,
        );

        self.last_dialog = Some(dialog);
    }
}

fn render_too_small(tracker: &Tracker, frame: &mut Frame, area: Rect) {
    let width = (TOO_SMALL.width() as u16).min(area.width);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2,
        width,
        1,
    );
    let Some(rect) = clip(rect, area) else {
        return;
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(TOO_SMALL).style(
            Style::default()
                .fg(tracker.theme.dialog_fg)
                .bg(tracker.theme.dialog_bg),
        ),
        rect,
    );
}
