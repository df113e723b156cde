use serde::{Deserialize, Serialize};

/// Pointer buttons the window layer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifiers held when a pointer button changed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }
}

/// A raw event from the window layer, in window coordinates (y grows down).
///
/// Scripts write one event per entry, tagged by `event`:
/// `{ event: key, key: p }`, `{ event: motion, x: 10, y: 4 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "EventRepr", into = "EventRepr")]
pub enum InputEvent {
    /// A key press, identified by the character it produces.
    Key(char),
    Button {
        button: PointerButton,
        pressed: bool,
        x: i32,
        y: i32,
        modifiers: Modifiers,
    },
    /// Pointer moved to an absolute position.
    Motion { x: i32, y: i32 },
    /// The window was resized.
    Resize { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
enum EventRepr {
    Key {
        key: char,
    },
    Button {
        button: PointerButton,
        pressed: bool,
        x: i32,
        y: i32,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Motion {
        x: i32,
        y: i32,
    },
    Resize {
        width: u32,
        height: u32,
    },
}

impl From<EventRepr> for InputEvent {
    fn from(r: EventRepr) -> Self {
        match r {
            EventRepr::Key { key } => Self::Key(key),
            EventRepr::Button {
                button,
                pressed,
                x,
                y,
                modifiers,
            } => Self::Button {
                button,
                pressed,
                x,
                y,
                modifiers,
            },
            EventRepr::Motion { x, y } => Self::Motion { x, y },
            EventRepr::Resize { width, height } => Self::Resize { width, height },
        }
    }
}

impl From<InputEvent> for EventRepr {
    fn from(e: InputEvent) -> Self {
        match e {
            InputEvent::Key(key) => Self::Key { key },
            InputEvent::Button {
                button,
                pressed,
                x,
                y,
                modifiers,
            } => Self::Button {
                button,
                pressed,
                x,
                y,
                modifiers,
            },
            InputEvent::Motion { x, y } => Self::Motion { x, y },
            InputEvent::Resize { width, height } => Self::Resize { width, height },
        }
    }
}
