//! Input events the game understands, and their translation from crossterm.
//!
//! Terminals differ in what they report.  Keyboard-enhancement capable ones
//! (kitty protocol) send real `Release` events.  Classic terminals only send
//! `Press` (OS key-repeat arrives as more presses), so a movement key that
//! has been silent for `HOLD_WINDOW` frames is treated as released.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::HOLD_WINDOW;
use crate::display::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Left,
    Right,
    Fire,
    Quit,
    Play,
}

impl Key {
    fn is_movement(self) -> bool {
        matches!(self, Key::Left | Key::Right)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / Ctrl-C.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Primary button press, in world coordinates.
    MouseDown { x: i32, y: i32 },
}

pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Play),
        _ => None,
    }
}

/// Turns raw terminal events into [`InputEvent`]s, tracking held movement
/// keys so a key-down is reported once per hold.
#[derive(Debug)]
pub struct KeyTracker {
    enhanced: bool,
    /// Movement key → frame it was last seen.
    held: HashMap<Key, u64>,
    frame: u64,
}

impl KeyTracker {
    /// `enhanced`: the terminal reports key releases.
    pub fn new(enhanced: bool) -> Self {
        Self {
            enhanced,
            held: HashMap::new(),
            frame: 0,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    pub fn translate(&mut self, event: &Event, viewport: &Viewport) -> Option<InputEvent> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) => {
                if *kind != KeyEventKind::Release
                    && modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(code, KeyCode::Char('c') | KeyCode::Char('C'))
                {
                    return Some(InputEvent::Quit);
                }
                let key = map_key(*code)?;
                self.key_event(key, *kind)
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let (x, y) = viewport.to_world(*column, *row);
                Some(InputEvent::MouseDown { x, y })
            }
            _ => None,
        }
    }

    fn key_event(&mut self, key: Key, kind: KeyEventKind) -> Option<InputEvent> {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat if key.is_movement() => {
                // Repeats of a held key only refresh its timestamp.
                if self.held.insert(key, self.frame).is_some() {
                    None
                } else {
                    Some(InputEvent::KeyDown(key))
                }
            }
            KeyEventKind::Press => Some(InputEvent::KeyDown(key)),
            KeyEventKind::Repeat => None,
            KeyEventKind::Release => {
                self.held.remove(&key);
                Some(InputEvent::KeyUp(key))
            }
        }
    }

    /// Forget every held key without reporting releases.  The next press or
    /// repeat of a key still down is reported as a fresh key-down.
    pub fn forget_held(&mut self) {
        self.held.clear();
    }

    /// Close the current frame.  On terminals without release events, any
    /// movement key silent for longer than `HOLD_WINDOW` frames is released.
    pub fn end_frame(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        if self.enhanced {
            return Vec::new();
        }
        let frame = self.frame;
        let mut expired: Vec<Key> = self
            .held
            .iter()
            .filter(|(_, &last)| frame.saturating_sub(last) > HOLD_WINDOW)
            .map(|(&k, _)| k)
            .collect();
        expired.sort();
        for key in &expired {
            self.held.remove(key);
        }
        expired.into_iter().map(InputEvent::KeyUp).collect()
    }
}
