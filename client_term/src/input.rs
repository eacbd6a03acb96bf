//! Keyboard input handling
//!
//! Terminals only report key presses (repeated while held), so a press keeps
//! the paddle moving for a few frames instead of waiting for a key-up.

use game_core::{InputQueue, PlayerId};
use termion::event::Key;

/// Frames a single key press keeps a paddle moving
pub const HOLD_FRAMES: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(PlayerId, i8),
    Quit,
}

/// Map a key to a game action
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Char('q') | Key::Ctrl('c') => Some(Action::Quit),
        Key::Char('w') | Key::Char('W') => Some(Action::Move(PlayerId::One, -1)),
        Key::Char('s') | Key::Char('S') => Some(Action::Move(PlayerId::One, 1)),
        Key::Up => Some(Action::Move(PlayerId::Two, -1)),
        Key::Down => Some(Action::Move(PlayerId::Two, 1)),
        _ => None,
    }
}

/// Last direction pressed per player and how many frames it still holds
#[derive(Debug, Default)]
pub struct HeldKeys {
    held: [(i8, u8); 2],
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, player: PlayerId, dir: i8) {
        self.held[slot(player)] = (dir, HOLD_FRAMES);
    }

    /// Queue this frame's paddle directions and age the held keys
    pub fn flush(&mut self, queue: &mut InputQueue) {
        for player in [PlayerId::One, PlayerId::Two] {
            let (dir, frames) = &mut self.held[slot(player)];
            if *frames == 0 {
                *dir = 0;
            } else {
                *frames -= 1;
            }
            queue.push_input(player, *dir);
        }
    }
}

fn slot(player: PlayerId) -> usize {
    match player {
        PlayerId::One => 0,
        PlayerId::Two => 1,
    }
}
