use super::*;
use crate::kernel::hand::slots_from_labels;

fn letter(ch: char) -> Letter {
    Letter::from_char(ch).unwrap()
}

fn open_with(labels: [&str; HAND_SIZE]) -> HandEditorState {
    let mut editor = HandEditorState::default();
    assert!(editor.open(&slots_from_labels(labels)));
    editor
}

#[test]
fn option_list_has_blank_first_then_alphabet() {
    assert_eq!(SELECTOR_OPTIONS, 27);
    assert_eq!(option_slot(0), None);
    assert_eq!(option_slot(1), Some(Letter::A));
    assert_eq!(option_slot(26), Some(letter('Z')));
    assert_eq!(option_slot(27), None);
    assert_eq!(option_index(Some(letter('C'))), 3);
    assert_eq!(option_index(None), 0);
}

#[test]
fn open_prepopulates_from_hand() {
    let editor = open_with(["C", "A", "T", "", "", "", ""]);

    assert!(editor.visible);
    assert_eq!(editor.focused, 0);
    assert_eq!(
        editor.selections,
        [Some(letter('C')), Some(letter('A')), Some(letter('T')), None, None, None, None]
    );
}

#[test]
fn open_twice_is_noop() {
    let mut editor = open_with(["", "", "", "", "", "", ""]);
    editor.set_focused(letter('Q'));
    assert!(!editor.open(&[None; HAND_SIZE]));
    assert_eq!(editor.selections[0], Some(letter('Q')));
}

#[test]
fn closed_editor_ignores_edits() {
    let mut editor = HandEditorState::default();
    assert!(!editor.focus_next());
    assert!(!editor.cycle(1));
    assert!(!editor.set_focused(Letter::A));
    assert!(!editor.clear_focused());
    assert_eq!(editor.take_selections(), None);
}

#[test]
fn cycle_wraps_in_both_directions() {
    let mut editor = open_with(["", "", "", "", "", "", ""]);

    assert!(editor.cycle(-1));
    assert_eq!(editor.selections[0], Some(letter('Z')));

    assert!(editor.cycle(1));
    assert_eq!(editor.selections[0], None);

    assert!(editor.cycle(2));
    assert_eq!(editor.selections[0], Some(letter('B')));

    assert!(!editor.cycle(27));
    assert_eq!(editor.selections[0], Some(letter('B')));
}

#[test]
fn set_focused_advances_and_stops_at_last() {
    let mut editor = open_with(["", "", "", "", "", "", ""]);
    for ch in "SCRABBLE".chars() {
        editor.set_focused(letter(ch));
    }

    assert_eq!(editor.focused, HAND_SIZE - 1);
    let word: String = editor
        .selections
        .iter()
        .map(|s| s.map(Letter::as_char).unwrap_or('_'))
        .collect();
    assert_eq!(word, "SCRABBE");
}

#[test]
fn focus_navigation_wraps() {
    let mut editor = open_with(["", "", "", "", "", "", ""]);
    assert!(editor.focus_prev());
    assert_eq!(editor.focused, HAND_SIZE - 1);
    assert!(editor.focus_next());
    assert_eq!(editor.focused, 0);

    assert!(editor.focus(4));
    assert!(!editor.focus(4));
    assert!(!editor.focus(HAND_SIZE));
    assert_eq!(editor.focused, 4);
}

#[test]
fn clear_focused_reverts_slot_to_blank() {
    let mut editor = open_with(["J", "", "", "", "", "", ""]);
    assert!(editor.clear_focused());
    assert_eq!(editor.selections[0], None);
    assert!(!editor.clear_focused());
}

#[test]
fn take_selections_closes_and_returns_everything() {
    let mut editor = open_with(["B", "E", "D", "", "", "", ""]);

    let taken = editor.take_selections();

    assert_eq!(taken, Some(slots_from_labels(["B", "E", "D", "", "", "", ""])));
    assert!(!editor.visible);
    assert_eq!(editor.selections, [None; HAND_SIZE]);
}
