use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the player asked for during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub quit: bool,
    pub jump: bool,
    pub move_left: bool,
    pub move_right: bool,
}

impl Intent {
    /// Fold one key into the intent. Repeats of the same key are no-ops.
    pub fn absorb(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('k') => self.jump = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_left = true,
            KeyCode::Right | KeyCode::Char('l') => self.move_right = true,
            _ => {}
        }
    }
}

/// A queue of pending key presses that never blocks.
pub trait KeySource {
    /// Next queued key, or `None` right away when nothing is pending.
    fn try_next(&mut self) -> io::Result<Option<KeyEvent>>;
}

pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn try_next(&mut self) -> io::Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// Drain everything queued since the last frame into a single intent.
pub fn sample<S: KeySource>(source: &mut S) -> io::Result<Intent> {
    let mut intent = Intent::default();
    while let Some(key) = source.try_next()? {
        intent.absorb(key);
    }
    Ok(intent)
}
