//! Keyboard input handling

use game_core::{InputEvent, Key};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to the game's key set
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Translate a winit key event; auto-repeat and unidentified keys are dropped
pub fn translate(event: &KeyEvent) -> Option<InputEvent> {
    if event.repeat {
        return None;
    }
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    Some(from_parts(code, event.state))
}

fn from_parts(code: KeyCode, state: ElementState) -> InputEvent {
    let key = map_key(code);
    match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyCode::KeyW), Key::W);
        assert_eq!(map_key(KeyCode::KeyS), Key::S);
        assert_eq!(map_key(KeyCode::ArrowUp), Key::Up);
        assert_eq!(map_key(KeyCode::ArrowDown), Key::Down);
    }

    #[test]
    fn test_serve_and_quit_keys() {
        assert_eq!(map_key(KeyCode::Enter), Key::Enter);
        assert_eq!(map_key(KeyCode::NumpadEnter), Key::Enter);
        assert_eq!(map_key(KeyCode::Escape), Key::Escape);
        assert_eq!(map_key(KeyCode::KeyQ), Key::Other);
    }

    #[test]
    fn test_press_and_release() {
        assert_eq!(
            from_parts(KeyCode::KeyW, ElementState::Pressed),
            InputEvent::KeyDown(Key::W)
        );
        assert_eq!(
            from_parts(KeyCode::ArrowDown, ElementState::Released),
            InputEvent::KeyUp(Key::Down)
        );
    }
}
