use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gesture::InputEvent;
use crate::model::{ContainerSize, ModelError, Offset};
use crate::session::{ApplyPayload, EditorHost, EditorVariant, SessionError};

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("replay script I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("replay script JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("replay script YAML failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("source image failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("editor session failure: {0}")]
    Session(#[from] SessionError),

    #[error("image model failure: {0}")]
    Model(#[from] ModelError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    #[default]
    Apply,
    Cancel,
}

fn default_container() -> ContainerSize {
    ContainerSize::new(800.0, 600.0)
}

/// A recorded editor run: the events in delivery order and how it ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default = "default_container")]
    pub container: ContainerSize,
    #[serde(default)]
    pub variant: EditorVariant,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
    #[serde(default)]
    pub finish: Finish,
}

pub fn load_script(path: impl AsRef<Path>) -> Result<ReplayScript> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let script = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<ReplayScript>(&raw)?
    } else {
        serde_json::from_str::<ReplayScript>(&raw)?
    };
    Ok(script)
}

/// Keeps whatever the session hands back so the caller can persist it.
#[derive(Debug, Default)]
pub struct CollectingHost {
    pub applied: Option<ApplyPayload>,
    pub closed: bool,
}

impl EditorHost for CollectingHost {
    fn on_apply(&mut self, payload: ApplyPayload) {
        self.applied = Some(payload);
    }

    fn on_close(&mut self) {
        self.closed = true;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub status: String,
    pub width: u32,
    pub height: u32,
    pub history_len: usize,
    pub painted_pixels: usize,
    pub zoom: f32,
    pub pan: Offset,
}
