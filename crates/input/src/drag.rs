use crate::event::{Modifiers, PointerButton};

/// One pointer-motion step while at least one tracked button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    pub dx: i32,
    pub dy: i32,
    pub primary: bool,
    pub secondary: bool,
    /// Modifiers as they were at the last button event.
    pub modifiers: Modifiers,
}

/// Two-latch drag state machine.
///
/// Idle until the primary or secondary button goes down; the press records
/// the pointer position, and each motion then yields the delta from the
/// previous position. Releasing the last held button returns to idle.
/// The middle button is not tracked.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    primary: bool,
    secondary: bool,
    last: (i32, i32),
    modifiers: Modifiers,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a button press or release.
    pub fn button(
        &mut self,
        button: PointerButton,
        pressed: bool,
        x: i32,
        y: i32,
        modifiers: Modifiers,
    ) {
        self.modifiers = modifiers;
        let latch = match button {
            PointerButton::Primary => &mut self.primary,
            PointerButton::Secondary => &mut self.secondary,
            PointerButton::Middle => return,
        };
        *latch = pressed;
        if pressed {
            self.last = (x, y);
        }
        tracing::trace!(?button, pressed, x, y, "drag latch");
    }

    pub fn press(&mut self, button: PointerButton, x: i32, y: i32, modifiers: Modifiers) {
        self.button(button, true, x, y, modifiers);
    }

    pub fn release(&mut self, button: PointerButton, x: i32, y: i32, modifiers: Modifiers) {
        self.button(button, false, x, y, modifiers);
    }

    /// Feed an absolute pointer position. Yields a drag only while dragging.
    pub fn motion(&mut self, x: i32, y: i32) -> Option<Drag> {
        if !self.is_dragging() {
            return None;
        }
        let drag = Drag {
            dx: x.saturating_sub(self.last.0),
            dy: y.saturating_sub(self.last.1),
            primary: self.primary,
            secondary: self.secondary,
            modifiers: self.modifiers,
        };
        self.last = (x, y);
        Some(drag)
    }

    pub fn is_dragging(&self) -> bool {
        self.primary || self.secondary
    }
}
