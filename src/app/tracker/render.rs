use super::layout::{self, TrackerLayout, SET_HAND_LABEL};
use super::Tracker;
use crate::kernel::{Letter, HAND_SIZE};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

pub(super) const TITLE: &str = "Scrabble Tile Tracker";

/// 超出画面的区域直接裁掉，避免越界 panic。
pub(super) fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = rect.intersection(bounds);
    (!clipped.is_empty()).then_some(clipped)
}

impl Tracker {
    pub(super) fn render_screen(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            self.last_layout = None;
            self.last_dialog = None;
            return;
        }

        let layout = layout::compute(area, self.store.state().ui.pool_columns);

        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.background)),
            area,
        );
        self.render_header(frame, &layout, area);
        self.render_pool(frame, &layout, area);
        self.render_hands(frame, &layout, area);
        self.render_status(frame, &layout, area);

        self.last_layout = Some(layout);
        self.render_hand_editor(frame, area);
    }

    fn render_header(&self, frame: &mut Frame, layout: &TrackerLayout, area: Rect) {
        let Some(rect) = clip(layout.header, area) else {
            return;
        };
        let header = Paragraph::new(Span::styled(
            TITLE,
            Style::default()
                .fg(self.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(header, rect);
    }

    fn render_pool(&self, frame: &mut Frame, layout: &TrackerLayout, area: Rect) {
        let state = self.store.state();
        for &(letter, rect) in &layout.pool_tiles {
            let Some(rect) = clip(rect, area) else {
                continue;
            };
            let count = state.pool.remaining(letter);
            let highlighted = state.ui.pool_cursor == letter;
            self.render_pool_tile(frame, rect, letter, count, highlighted);
        }

        if let Some(rect) = clip(layout.separator, area) {
            let line = "─".repeat(rect.width as usize);
            frame.render_widget(
                Paragraph::new(line).style(Style::default().fg(self.theme.muted_fg)),
                rect,
            );
        }
    }

    fn render_pool_tile(
        &self,
        frame: &mut Frame,
        rect: Rect,
        letter: Letter,
        count: u8,
        highlighted: bool,
    ) {
        let depleted = count == 0;
        let (bg, fg, count_fg) = if depleted {
            (
                self.theme.depleted_bg,
                self.theme.depleted_fg,
                self.theme.depleted_fg,
            )
        } else {
            (self.theme.tile_bg, self.theme.tile_fg, self.theme.count_fg)
        };

        let border_style = if highlighted {
            Style::default()
                .fg(self.theme.cursor)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(count_fg)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if depleted {
                BorderType::Plain
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);

        let letter_style = if depleted {
            Style::default().fg(fg)
        } else {
            Style::default().fg(fg).add_modifier(Modifier::BOLD)
        };
        let lines = vec![
            Line::from(Span::styled(letter.to_string(), letter_style)),
            Line::from(Span::styled(count.to_string(), Style::default().fg(count_fg))),
        ];
        let tile = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg))
            .block(block);
        frame.render_widget(tile, rect);
    }

    fn render_hands(&self, frame: &mut Frame, layout: &TrackerLayout, area: Rect) {
        let hand = &self.store.state().hand;
        let label_style = Style::default()
            .fg(self.theme.header_fg)
            .bg(self.theme.hands_bg)
            .add_modifier(Modifier::BOLD);

        for (label, rect) in [
            ("MY HAND", layout.user_label),
            ("OPPONENT", layout.opponent_label),
        ] {
            if let Some(rect) = clip(rect, area) {
                frame.render_widget(
                    Paragraph::new(label)
                        .alignment(Alignment::Center)
                        .style(label_style),
                    rect,
                );
            }
        }

        self.render_hand_row(frame, &layout.user_tiles, hand.user_display(), area);
        self.render_hand_row(frame, &layout.opponent_tiles, hand.opponent_display(), area);

        if let Some(rect) = clip(layout.set_hand_button, area) {
            frame.render_widget(
                Paragraph::new(SET_HAND_LABEL).style(
                    Style::default()
                        .fg(self.theme.button_fg)
                        .bg(self.theme.button_bg),
                ),
                rect,
            );
        }
    }

    fn render_hand_row(
        &self,
        frame: &mut Frame,
        rects: &[Rect; HAND_SIZE],
        symbols: [char; HAND_SIZE],
        area: Rect,
    ) {
        for (rect, symbol) in rects.iter().zip(symbols) {
            let Some(rect) = clip(*rect, area) else {
                continue;
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.theme.count_fg));
            let tile = Paragraph::new(Span::styled(
                symbol.to_string(),
                Style::default()
                    .fg(self.theme.tile_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .style(Style::default().bg(self.theme.tile_bg))
            .block(block);
            frame.render_widget(tile, rect);
        }
    }

    fn render_status(&self, frame: &mut Frame, layout: &TrackerLayout, area: Rect) {
        let Some(rect) = clip(layout.status, area) else {
            return;
        };
        let remaining = self.store.state().pool.total_remaining();
        let line = Line::from(vec![
            Span::styled(
                format!(" Tiles left: {remaining} "),
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " click/type a letter to draw  F2 set hand  Ctrl+Q quit",
                Style::default().fg(self.theme.muted_fg),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
    }
}
