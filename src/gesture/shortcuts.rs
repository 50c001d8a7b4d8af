use crate::model::{Tool, tool_shortcut_tool};

use super::{Key, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Close,
    SelectTool(Tool),
    SpacePan(bool),
    Undo,
    Redo,
}

pub fn shortcut_for(event: &KeyEvent) -> Option<Shortcut> {
    // A space release must always end the transient pan, focus or not.
    if event.key == Key::Space && !event.pressed {
        return Some(Shortcut::SpacePan(false));
    }
    if event.text_input_focused || !event.pressed {
        return None;
    }

    match event.key {
        Key::Escape => Some(Shortcut::Close),
        Key::Space => Some(Shortcut::SpacePan(true)),
        Key::Char(ch) => {
            let lower = ch.to_ascii_lowercase();
            if event.modifiers.primary() {
                match lower {
                    'z' if event.modifiers.shift => Some(Shortcut::Redo),
                    'z' => Some(Shortcut::Undo),
                    'y' => Some(Shortcut::Redo),
                    _ => None,
                }
            } else {
                let mut buffer = [0_u8; 4];
                tool_shortcut_tool(lower.encode_utf8(&mut buffer)).map(Shortcut::SelectTool)
            }
        }
    }
}
