//! Keyboard controls
//!
//! Turns discrete key-down/key-up events into per-paddle direction factors,
//! a serve request and a quit flag. Platform layers translate their own key
//! codes into [`Key`].

use crate::{InputQueue, Opponent, Side};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Enter,
    Escape,
    Other,
}

/// Input events fed to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    CloseRequested,
}

/// Held-key state carried across frames
#[derive(Debug, Clone, Default)]
pub struct Controls {
    left_dir: i8,
    right_dir: i8,
    serve: bool,
    quit: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent, opponent: Opponent) {
        let arrows = opponent == Opponent::Human;
        match event {
            InputEvent::CloseRequested => self.quit = true,
            InputEvent::KeyDown(key) => match key {
                Key::W => self.left_dir = -1,
                Key::S => self.left_dir = 1,
                Key::Up if arrows => self.right_dir = -1,
                Key::Down if arrows => self.right_dir = 1,
                Key::Enter => self.serve = true,
                Key::Escape => self.quit = true,
                _ => {}
            },
            InputEvent::KeyUp(key) => match key {
                Key::W | Key::S => self.left_dir = 0,
                Key::Up | Key::Down if arrows => self.right_dir = 0,
                _ => {}
            },
        }
    }

    pub fn direction(&self, side: Side) -> i8 {
        match side {
            Side::Left => self.left_dir,
            Side::Right => self.right_dir,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Queue this frame's commands; the serve request is consumed
    pub fn drain_into(&mut self, queue: &mut InputQueue, opponent: Opponent) {
        queue.push_input(Side::Left, self.left_dir);
        if opponent == Opponent::Human {
            queue.push_input(Side::Right, self.right_dir);
        }
        if std::mem::take(&mut self.serve) {
            queue.request_serve();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_set_factors() {
        let mut controls = Controls::new();
        controls.handle(InputEvent::KeyDown(Key::W), Opponent::Human);
        controls.handle(InputEvent::KeyDown(Key::Down), Opponent::Human);
        assert_eq!(controls.direction(Side::Left), -1);
        assert_eq!(controls.direction(Side::Right), 1);

        controls.handle(InputEvent::KeyDown(Key::S), Opponent::Human);
        assert_eq!(controls.direction(Side::Left), 1, "Last press wins");
    }

    #[test]
    fn test_key_up_stops_paddle() {
        let mut controls = Controls::new();
        controls.handle(InputEvent::KeyDown(Key::S), Opponent::Human);
        controls.handle(InputEvent::KeyUp(Key::W), Opponent::Human);
        assert_eq!(
            controls.direction(Side::Left),
            0,
            "Releasing either movement key stops the paddle"
        );

        controls.handle(InputEvent::KeyDown(Key::Up), Opponent::Human);
        controls.handle(InputEvent::KeyUp(Key::Up), Opponent::Human);
        assert_eq!(controls.direction(Side::Right), 0);
    }

    #[test]
    fn test_arrows_ignored_against_ai() {
        let mut controls = Controls::new();
        controls.handle(InputEvent::KeyDown(Key::Up), Opponent::SimpleChaseAi);
        assert_eq!(controls.direction(Side::Right), 0);

        let mut queue = InputQueue::new();
        controls.drain_into(&mut queue, Opponent::SimpleChaseAi);
        assert_eq!(queue.inputs, vec![(Side::Left, 0)]);
    }

    #[test]
    fn test_escape_and_close_quit() {
        let mut controls = Controls::new();
        controls.handle(InputEvent::KeyDown(Key::Escape), Opponent::Human);
        assert!(controls.quit_requested());

        let mut controls = Controls::new();
        controls.handle(InputEvent::CloseRequested, Opponent::Human);
        assert!(controls.quit_requested());
    }

    #[test]
    fn test_serve_is_consumed_once() {
        let mut controls = Controls::new();
        controls.handle(InputEvent::KeyDown(Key::Enter), Opponent::Human);

        let mut queue = InputQueue::new();
        controls.drain_into(&mut queue, Opponent::Human);
        assert!(queue.serve);

        queue.clear();
        controls.drain_into(&mut queue, Opponent::Human);
        assert!(!queue.serve);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut controls = Controls::new();
        controls.handle(InputEvent::KeyDown(Key::Other), Opponent::Human);
        controls.handle(InputEvent::KeyUp(Key::Other), Opponent::Human);
        assert_eq!(controls.direction(Side::Left), 0);
        assert_eq!(controls.direction(Side::Right), 0);
        assert!(!controls.quit_requested());
    }
}
