use super::*;

fn key(code: ct::KeyCode, modifiers: ct::KeyModifiers) -> KeyEvent {
    into_key_event(ct::KeyEvent::new(code, modifiers))
}

fn mouse(kind: ct::MouseEventKind) -> ct::Event {
    ct::Event::Mouse(ct::MouseEvent {
        kind,
        column: 12,
        row: 5,
        modifiers: ct::KeyModifiers::NONE,
    })
}

#[test]
fn key_event_keeps_code_and_modifiers() {
    let event = ct::Event::Key(ct::KeyEvent::new(
        ct::KeyCode::Char('q'),
        ct::KeyModifiers::CONTROL,
    ));

    let Some(InputEvent::Key(key)) = into_input_event(event) else {
        panic!("expected key event");
    };
    assert_eq!(key.code, KeyCode::Char('q'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
    assert_eq!(key.kind, KeyEventKind::Press);
}

#[test]
fn uppercase_letters_fold_to_lowercase_with_shift() {
    let typed = key(ct::KeyCode::Char('Q'), ct::KeyModifiers::NONE);
    assert_eq!(typed.code, KeyCode::Char('q'));
    assert_eq!(typed.modifiers, KeyModifiers::SHIFT);

    let shortcut = key(ct::KeyCode::Char('E'), ct::KeyModifiers::CONTROL);
    assert_eq!(shortcut.code, KeyCode::Char('e'));
    assert!(shortcut.modifiers.contains(KeyModifiers::CONTROL));
    assert!(shortcut.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn non_ascii_characters_pass_through() {
    let typed = key(ct::KeyCode::Char('É'), ct::KeyModifiers::NONE);
    assert_eq!(typed.code, KeyCode::Char('É'));
    assert!(typed.modifiers.is_empty());
}

#[test]
fn null_key_becomes_ctrl_space() {
    let key = key(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    assert_eq!(key.code, KeyCode::Char(' '));
    assert!(key.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn unsupported_keys_map_to_unknown() {
    let key = key(ct::KeyCode::CapsLock, ct::KeyModifiers::NONE);
    assert_eq!(key.code, KeyCode::Unknown);
}

#[test]
fn clicks_and_scrolls_keep_position() {
    assert_eq!(
        into_input_event(mouse(ct::MouseEventKind::Down(ct::MouseButton::Left))),
        Some(InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }))
    );
    let Some(InputEvent::Mouse(scroll)) = into_input_event(mouse(ct::MouseEventKind::ScrollDown))
    else {
        panic!("expected mouse event");
    };
    assert_eq!(scroll.kind, MouseEventKind::ScrollDown);
}

#[test]
fn mouse_motion_is_dropped() {
    assert_eq!(into_input_event(mouse(ct::MouseEventKind::Moved)), None);
    assert_eq!(
        into_input_event(mouse(ct::MouseEventKind::Drag(ct::MouseButton::Left))),
        None
    );
    assert_eq!(into_input_event(mouse(ct::MouseEventKind::ScrollLeft)), None);
}

#[test]
fn resize_passes_through() {
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}
