use serde::{Deserialize, Serialize};

/// Which of the two mask tools the session serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorVariant {
    /// Paint what should be removed.
    #[default]
    Removal,
    /// Paint what should be replaced; a text prompt rides along with the mask.
    Replacement,
}

/// Everything handed to the edit pipeline on apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPayload {
    /// PNG-encoded black/white mask at source resolution.
    pub mask_png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub prompt: Option<String>,
}

/// The editor's two exits. At most one of them fires per session.
pub trait EditorHost {
    fn on_apply(&mut self, payload: ApplyPayload);
    fn on_close(&mut self);
}
