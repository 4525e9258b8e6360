use super::*;
use crate::core::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::kernel::hand::slots_from_labels;
use crate::kernel::{Letter, HAND_SIZE};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

const W: u16 = 80;
const H: u16 = 24;

fn new_tracker() -> Tracker {
    Tracker::with_theme(&Settings::default(), UiTheme::default())
}

fn render_once(tracker: &mut Tracker) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(W, H)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            tracker.render(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::plain(code))
}

fn click(x: u16, y: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn letter(ch: char) -> Letter {
    Letter::from_char(ch).unwrap()
}

#[test]
fn first_render_shows_title_pool_and_hands() {
    let mut tracker = new_tracker();
    let text = buffer_text(&render_once(&mut tracker));

    assert!(text.contains("Scrabble Tile Tracker"));
    assert!(text.contains("MY HAND"));
    assert!(text.contains("OPPONENT"));
    assert!(text.contains("[ Set My Hand ]"));
    assert!(text.contains("Tiles left: 260"));
    assert!(!text.contains("Select Your Tiles"));
}

#[test]
fn every_pool_tile_shows_its_letter_and_count() {
    let mut tracker = new_tracker();
    let buffer = render_once(&mut tracker);
    let layout = tracker.layout().unwrap().clone();

    for (letter, rect) in &layout.pool_tiles {
        let letter_row = row_text(&buffer, rect.y + 1);
        let count_row = row_text(&buffer, rect.y + 2);
        let span = rect.x as usize..rect.right() as usize;
        let letter_cell: String = letter_row.chars().collect::<Vec<_>>()[span.clone()]
            .iter()
            .collect();
        let count_cell: String = count_row.chars().collect::<Vec<_>>()[span].iter().collect();
        assert!(letter_cell.contains(letter.as_char()), "{letter}: {letter_cell:?}");
        assert!(count_cell.contains("10"), "{letter}: {count_cell:?}");
    }
}

#[test]
fn opponent_row_is_masked() {
    let mut tracker = new_tracker();
    let buffer = render_once(&mut tracker);
    let layout = tracker.layout().unwrap().clone();

    for rect in &layout.opponent_tiles {
        let symbol = buffer[(rect.x + rect.width / 2, rect.y + 1)].symbol().to_string();
        assert_eq!(symbol, "?");
    }
}

#[test]
fn clicking_a_pool_tile_decrements_that_letter() {
    let mut tracker = new_tracker();
    render_once(&mut tracker);
    let rect = tracker.layout().unwrap().pool_tile(letter('q')).unwrap();

    let result = tracker.handle_input(&click(rect.x + 1, rect.y + 1));

    assert!(result.is_consumed());
    assert_eq!(tracker.store().state().pool.remaining(letter('q')), 9);
    assert_eq!(tracker.store().state().pool.total_remaining(), 259);
}

#[test]
fn clicking_a_depleted_tile_is_ignored() {
    let mut tracker = new_tracker();
    render_once(&mut tracker);
    let rect = tracker.layout().unwrap().pool_tile(letter('x')).unwrap();

    for _ in 0..10 {
        tracker.handle_input(&click(rect.x, rect.y));
    }
    let result = tracker.handle_input(&click(rect.x, rect.y));

    assert!(result.is_ignored());
    assert!(tracker.store().state().pool.is_depleted(letter('x')));
}

#[test]
fn depleted_tile_is_drawn_with_depleted_colours() {
    let mut tracker = new_tracker();
    render_once(&mut tracker);
    for _ in 0..10 {
        tracker.handle_input(&key(KeyCode::Char('k')));
    }
    let buffer = render_once(&mut tracker);
    let rect = tracker.layout().unwrap().pool_tile(letter('k')).unwrap();
    let other = tracker.layout().unwrap().pool_tile(letter('l')).unwrap();

    let depleted_cell = &buffer[(rect.x + 3, rect.y + 1)];
    let live_cell = &buffer[(other.x + 3, other.y + 1)];
    assert_eq!(depleted_cell.symbol(), "K");
    assert_eq!(depleted_cell.bg, tracker.theme().depleted_bg);
    assert_eq!(live_cell.bg, tracker.theme().tile_bg);
    assert_eq!(row_text(&buffer, rect.y + 2).chars().nth((rect.x + 3) as usize), Some('0'));
}

#[test]
fn typing_letters_selects_pool_tiles() {
    let mut tracker = new_tracker();
    for ch in "aaZ".chars() {
        assert!(tracker.handle_input(&key(KeyCode::Char(ch))).is_consumed());
    }
    let pool = &tracker.store().state().pool;
    assert_eq!(pool.remaining(Letter::A), 8);
    assert_eq!(pool.remaining(letter('z')), 9);
}

#[test]
fn key_release_events_are_ignored() {
    let mut tracker = new_tracker();
    let release = InputEvent::Key(KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
    });
    assert!(tracker.handle_input(&release).is_ignored());
    assert_eq!(tracker.store().state().pool.remaining(Letter::A), 10);
}

#[test]
fn arrow_keys_and_enter_select_highlighted_tile() {
    let mut tracker = new_tracker();
    tracker.handle_input(&key(KeyCode::Right));
    tracker.handle_input(&key(KeyCode::Down));
    tracker.handle_input(&key(KeyCode::Enter));

    assert_eq!(tracker.store().state().ui.pool_cursor, letter('k'));
    assert_eq!(tracker.store().state().pool.remaining(letter('k')), 9);
}

#[test]
fn ctrl_q_quits() {
    let mut tracker = new_tracker();
    let result = tracker.handle_input(&InputEvent::Key(KeyEvent::ctrl(KeyCode::Char('q'))));
    assert!(result.is_quit());
}

#[test]
fn shortcuts_work_with_shift_held() {
    let mut tracker = new_tracker();
    let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;

    let open = InputEvent::Key(KeyEvent::new(KeyCode::Char('e'), ctrl_shift));
    assert!(tracker.handle_input(&open).is_consumed());
    assert!(tracker.store().state().hand_editor.visible);

    let typed = InputEvent::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::SHIFT));
    tracker.handle_input(&typed);
    assert_eq!(tracker.store().state().hand_editor.selections[0], Some(letter('j')));

    let quit = InputEvent::Key(KeyEvent::new(KeyCode::Char('q'), ctrl_shift));
    assert!(tracker.handle_input(&quit).is_quit());
}

#[test]
fn set_hand_button_opens_prepopulated_dialog() {
    let mut tracker = new_tracker();
    tracker.dispatch(Action::HandReplace(slots_from_labels([
        "C", "A", "T", "", "", "", "",
    ])));
    render_once(&mut tracker);
    let button = tracker.layout().unwrap().set_hand_button;

    assert!(tracker.handle_input(&click(button.x, button.y)).is_consumed());
    let text = buffer_text(&render_once(&mut tracker));

    assert!(text.contains("Select Your Tiles"));
    assert!(text.contains("Select the 7 tiles in your hand:"));
    assert!(text.contains("[ C ] [ A ] [ T ] [   ]"));
    assert!(text.contains("[ Update Hand ]"));
}

#[test]
fn dialog_is_modal_for_pool_input() {
    let mut tracker = new_tracker();
    render_once(&mut tracker);
    let rect = tracker.layout().unwrap().pool_tile(Letter::A).unwrap();
    tracker.handle_input(&key(KeyCode::F(2)));
    render_once(&mut tracker);

    tracker.handle_input(&click(rect.x, rect.y));
    tracker.handle_input(&key(KeyCode::Char('a')));

    assert_eq!(tracker.store().state().pool.remaining(Letter::A), 10);
    assert_eq!(tracker.store().state().hand_editor.selections[0], Some(Letter::A));
}

#[test]
fn keyboard_edit_and_confirm_replaces_hand() {
    let mut tracker = new_tracker();
    tracker.dispatch(Action::HandReplace(slots_from_labels([
        "C", "A", "T", "", "", "", "",
    ])));
    tracker.handle_input(&InputEvent::Key(KeyEvent::ctrl(KeyCode::Char('e'))));
    assert!(tracker.store().state().hand_editor.visible);

    for ch in ['b', 'e', 'd'] {
        tracker.handle_input(&key(KeyCode::Char(ch)));
    }
    tracker.handle_input(&key(KeyCode::Enter));

    let state = tracker.store().state();
    assert!(!state.hand_editor.visible);
    assert_eq!(state.hand.user(), &slots_from_labels(["B", "E", "D", "", "", "", ""]));

    let buffer = render_once(&mut tracker);
    let layout = tracker.layout().unwrap().clone();
    let shown: String = layout
        .user_tiles
        .iter()
        .map(|r| buffer[(r.x + r.width / 2, r.y + 1)].symbol().to_string())
        .collect();
    assert_eq!(shown, "BED    ");
    for rect in &layout.opponent_tiles {
        assert_eq!(buffer[(rect.x + rect.width / 2, rect.y + 1)].symbol(), "?");
    }
}

#[test]
fn escape_commits_instead_of_cancelling() {
    let mut tracker = new_tracker();
    tracker.handle_input(&key(KeyCode::F(2)));
    tracker.handle_input(&key(KeyCode::Char('z')));
    tracker.handle_input(&key(KeyCode::Esc));

    let state = tracker.store().state();
    assert!(!state.hand_editor.visible);
    assert_eq!(state.hand.user()[0], Some(letter('z')));
}

#[test]
fn mouse_selects_scrolls_and_confirms_in_dialog() {
    let mut tracker = new_tracker();
    tracker.handle_input(&key(KeyCode::F(2)));
    render_once(&mut tracker);
    let dialog = *tracker.dialog_layout().unwrap();

    let third = dialog.selectors[2];
    assert!(tracker.handle_input(&click(third.x, third.y)).is_consumed());
    assert_eq!(tracker.store().state().hand_editor.focused, 2);

    let scroll = InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: dialog.selectors[4].x,
        row: dialog.selectors[4].y,
        modifiers: KeyModifiers::NONE,
    });
    tracker.handle_input(&scroll);
    tracker.handle_input(&scroll);
    assert_eq!(tracker.store().state().hand_editor.focused, 4);
    assert_eq!(
        tracker.store().state().hand_editor.selections[4],
        Some(letter('b'))
    );

    let button = dialog.confirm_button;
    assert!(tracker.handle_input(&click(button.x + 2, button.y)).is_consumed());
    let state = tracker.store().state();
    assert!(!state.hand_editor.visible);
    assert_eq!(state.hand.user()[4], Some(letter('b')));
    assert_eq!(
        state.hand.user().iter().filter(|s| s.is_none()).count(),
        HAND_SIZE - 1
    );

    let text = buffer_text(&render_once(&mut tracker));
    assert!(!text.contains("Select Your Tiles"));
    assert!(tracker.dialog_layout().is_none());
}

#[test]
fn small_terminal_does_not_panic() {
    let mut tracker = new_tracker();
    tracker.handle_input(&key(KeyCode::F(2)));
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            tracker.render(frame, area);
        })
        .unwrap();
    assert!(tracker.dialog_layout().is_none());
    assert!(tracker.store().state().hand_editor.visible);
}
