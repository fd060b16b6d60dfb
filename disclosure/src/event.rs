use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key { key: Key, modifiers: Modifiers },
    /// Mouse click event, targeted at the deepest clickable element under the pointer
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// A left click on `target`, as produced by a pointer activation.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Convert raw terminal events into targeted events.
///
/// Mouse presses are resolved against `layout` to the deepest clickable
/// element; releases, drags and moves are dropped.
pub fn translate_events(
    raw: &[CrosstermEvent],
    root: &Element,
    layout: &LayoutResult,
) -> Vec<Event> {
    let mut events = Vec::new();

    for raw_event in raw {
        match raw_event {
            CrosstermEvent::Key(key_event) => {
                // Only process key press events (not release/repeat on some terminals)
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                events.push(Event::Key {
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                });
            }
            CrosstermEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(button) = mouse.kind {
                    events.push(Event::Click {
                        target: hit_test(layout, root, mouse.column, mouse.row),
                        x: mouse.column,
                        y: mouse.row,
                        button: button.into(),
                    });
                }
            }
            CrosstermEvent::Resize(width, height) => {
                events.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }
            _ => {}
        }
    }

    events
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
