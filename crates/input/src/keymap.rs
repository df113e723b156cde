use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skyframe_common::Command;

use crate::action::Binding;

/// Key-to-binding table. Unbound keys resolve to `None` and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keymap {
    bindings: BTreeMap<char, Binding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key`, returning whatever it was bound to before.
    pub fn bind(&mut self, key: char, binding: Binding) -> Option<Binding> {
        self.bindings.insert(key, binding)
    }

    pub fn unbind(&mut self, key: char) -> Option<Binding> {
        self.bindings.remove(&key)
    }

    pub fn lookup(&self, key: char) -> Option<Binding> {
        self.bindings.get(&key).copied()
    }

    /// All bindings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Binding)> {
        self.bindings.iter().map(|(k, b)| (*k, b))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Overlay `other` on top of this map; keys in `other` win.
    pub fn merge(&mut self, other: &Keymap) {
        for (key, binding) in other.iter() {
            self.bindings.insert(key, *binding);
        }
    }

    /// Layout for the matrix exercise: one plane (body 0) and one free
    /// camera (camera 0).
    pub fn dual_view() -> Self {
        use Command::*;
        let mut map = Self::new();
        for (key, command) in [
            ('w', TranslateForward),
            ('s', TranslateBackward),
            ('g', RollPositive),
            ('f', RollNegative),
            ('a', TranslateLeft),
            ('d', TranslateRight),
            ('t', TranslateUp),
            ('r', TranslateDown),
            ('z', PitchPositive),
            ('x', PitchNegative),
            ('c', YawPositive),
            ('v', YawNegative),
        ] {
            map.bind(key, Binding::drive_body(0, command));
        }
        for (key, command) in [
            ('u', TranslateForward),
            ('j', TranslateBackward),
            ('k', TranslateLeft),
            ('h', TranslateRight),
            ('o', TranslateUp),
            ('l', TranslateDown),
            ('m', RollPositive),
            ('n', RollNegative),
            ('.', PitchPositive),
            (',', PitchNegative),
            (']', YawPositive),
            ('[', YawNegative),
        ] {
            map.bind(key, Binding::drive_camera(0, command));
        }
        map
    }

    /// Layout for the hierarchy exercise: plane 1 (body 0) with four parts
    /// (turret, gun, two stabilisers) and camera cycling.
    pub fn hierarchy() -> Self {
        use Command::*;
        let mut map = Self::new();
        for (key, command) in [
            ('p', TranslateForward),
            (';', TranslateBackward),
            ('e', RollPositive),
            ('q', RollNegative),
            ('w', PitchPositive),
            ('s', PitchNegative),
            ('a', YawPositive),
            ('d', YawNegative),
        ] {
            map.bind(key, Binding::drive_body(0, command));
        }
        map.bind('v', Binding::CycleViewCamera);
        map.bind('b', Binding::CycleControlCamera);
        for (key, part, direction) in [
            ('y', 0, 1),
            ('h', 0, -1),
            ('u', 1, 1),
            ('j', 1, -1),
            ('r', 2, 1),
            ('f', 2, -1),
            ('t', 3, 1),
            ('g', 3, -1),
        ] {
            map.bind(
                key,
                Binding::Articulate {
                    body: 0,
                    part,
                    direction,
                },
            );
        }
        map
    }
}
