use serde::{Deserialize, Serialize};

use crate::model::{ScreenPoint, Tool};

pub type PointerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
    Cancel,
}

/// Host mouse, pen and touch input, normalised before any gesture logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(default)]
    pub id: PointerId,
    #[serde(default)]
    pub kind: PointerKind,
    pub phase: PointerPhase,
    #[serde(default)]
    pub button: PointerButton,
    pub position: ScreenPoint,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, button: PointerButton, position: ScreenPoint) -> Self {
        Self {
            id: 0,
            kind: PointerKind::Mouse,
            phase,
            button,
            position,
        }
    }

    pub fn touch(id: PointerId, phase: PointerPhase, position: ScreenPoint) -> Self {
        Self {
            id,
            kind: PointerKind::Touch,
            phase,
            button: PointerButton::Primary,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub command: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn primary(self) -> bool {
        self.ctrl || self.command
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Space,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default = "default_pressed")]
    pub pressed: bool,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Set by the host while a text field inside the editor has focus.
    #[serde(default)]
    pub text_input_focused: bool,
}

fn default_pressed() -> bool {
    true
}

impl KeyEvent {
    pub fn press(key: Key) -> Self {
        Self {
            key,
            pressed: true,
            modifiers: Modifiers::default(),
            text_input_focused: false,
        }
    }

    pub fn release(key: Key) -> Self {
        Self {
            pressed: false,
            ..Self::press(key)
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn in_text_field(mut self) -> Self {
        self.text_input_focused = true;
        self
    }
}

/// Everything the editor reacts to. Toolbar buttons arrive as the same
/// messages the keyboard shortcuts produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Pointer(PointerEvent),
    Wheel { position: ScreenPoint, delta_y: f32 },
    Key(KeyEvent),
    ToolSelect { tool: Tool },
    SetBrushSize { size_px: u32 },
    Undo,
    Redo,
    ClearMask,
    Close,
}
