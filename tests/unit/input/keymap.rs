use super::*;

#[test]
fn default_idle_bindings() {
    let map = KeyMap::default();
    assert_eq!(map.resolve(Key::Right, false), Some(Command::Advance));
    assert_eq!(map.resolve(Key::Space, false), Some(Command::Advance));
    assert_eq!(map.resolve(Key::Left, false), Some(Command::Retreat));
    assert_eq!(map.resolve(Key::Char('z'), false), Some(Command::JumpToStart));
    assert_eq!(map.resolve(Key::Char('g'), false), Some(Command::BeginJump));
    assert_eq!(
        map.resolve(Key::Char('b'), false),
        Some(Command::ReturnToPrevious)
    );
    assert_eq!(map.resolve(Key::Char('q'), false), None);
    assert_eq!(map.resolve(Key::Enter, false), None);
}

#[test]
fn capture_mode_types_characters() {
    let map = KeyMap::default();
    assert_eq!(map.resolve(Key::Char('g'), true), Some(Command::JumpChar('g')));
    assert_eq!(map.resolve(Key::Space, true), Some(Command::JumpChar(' ')));
    assert_eq!(map.resolve(Key::Enter, true), Some(Command::ConfirmJump));
    assert_eq!(map.resolve(Key::Escape, true), Some(Command::CancelJump));
    assert_eq!(map.resolve(Key::Right, true), None);
    assert_eq!(map.resolve(Key::Left, true), None);
}

#[test]
fn rebinding_replaces_defaults() {
    let map = KeyMap::default().bind(Key::Char('n'), Command::Advance);
    assert_eq!(map.resolve(Key::Char('n'), false), Some(Command::Advance));
    assert_eq!(KeyMap::empty().resolve(Key::Right, false), None);
}

#[test]
fn key_scripts_mix_names_and_characters() {
    assert_eq!(
        parse_keys("Right space g 12 ENTER esc"),
        vec![
            Key::Right,
            Key::Space,
            Key::Char('g'),
            Key::Char('1'),
            Key::Char('2'),
            Key::Enter,
            Key::Escape,
        ]
    );
    assert!(parse_keys("   ").is_empty());
}
