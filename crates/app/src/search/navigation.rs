//! Arrow-key selection over the flat result list.
//!
//! The cursor is `None` until the user moves into the list and is otherwise
//! always a valid index. Movement clamps at both ends; there is no wraparound.

use dioxus::prelude::*;

/// Keys the result panel responds to. Anything else is left to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Commit,
    Dismiss,
}

impl NavKey {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowDown => Some(NavKey::Down),
            Key::ArrowUp => Some(NavKey::Up),
            Key::Enter => Some(NavKey::Commit),
            Key::Escape => Some(NavKey::Dismiss),
            _ => None,
        }
    }
}

/// What the widget should do after a navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The cursor moved (or stayed put at an edge).
    Moved(Option<usize>),
    /// Open the item at this index.
    Select(usize),
    /// Close the panel and blur the input.
    Dismiss,
    /// Commit with nothing highlighted.
    Ignored,
}

pub fn move_down(cursor: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match cursor {
        None => Some(0),
        Some(index) => Some((index + 1).min(len - 1)),
    }
}

pub fn move_up(cursor: Option<usize>) -> Option<usize> {
    cursor.map(|index| index.saturating_sub(1))
}

pub fn apply(key: NavKey, cursor: Option<usize>, len: usize) -> NavOutcome {
    match key {
        NavKey::Down => NavOutcome::Moved(move_down(cursor, len)),
        NavKey::Up => NavOutcome::Moved(move_up(cursor)),
        NavKey::Commit => match cursor {
            Some(index) if index < len => NavOutcome::Select(index),
            _ => NavOutcome::Ignored,
        },
        NavKey::Dismiss => NavOutcome::Dismiss,
    }
}
