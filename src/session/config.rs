use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gesture::DEFAULT_WHEEL_SENSITIVITY;
use crate::model::{BrushSettings, MAX_BRUSH_SIZE_PX, MIN_BRUSH_SIZE_PX};
use crate::surface::PaintStyle;
use crate::viewport::{MAX_ZOOM, MIN_ZOOM, ZoomBounds};

use super::{Result, SessionError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub wheel_sensitivity: f32,
    pub brush_size_px: u32,
    pub paint_color: [u8; 3],
    pub paint_opacity: f32,
    pub max_initial_zoom: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let style = PaintStyle::default();
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            brush_size_px: BrushSettings::default().size_px(),
            paint_color: style.color,
            paint_opacity: style.opacity,
            max_initial_zoom: 1.0,
        }
    }
}

impl EditorConfig {
    /// Reads JSON, or YAML for `.yaml`/`.yml` files.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config = if matches!(extension.as_str(), "yaml" | "yml") {
            serde_yaml::from_str::<EditorConfig>(&raw)?
        } else {
            serde_json::from_str::<EditorConfig>(&raw)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return Err(SessionError::InvalidConfig(format!(
                "min_zoom must be positive, found {}",
                self.min_zoom
            )));
        }
        if !(self.max_zoom.is_finite() && self.max_zoom >= self.min_zoom) {
            return Err(SessionError::InvalidConfig(format!(
                "max_zoom {} is below min_zoom {}",
                self.max_zoom, self.min_zoom
            )));
        }
        if !(self.paint_opacity > 0.0 && self.paint_opacity <= 1.0) {
            return Err(SessionError::InvalidConfig(format!(
                "paint_opacity must be in (0, 1], found {}",
                self.paint_opacity
            )));
        }
        if !(self.max_initial_zoom.is_finite() && self.max_initial_zoom > 0.0) {
            return Err(SessionError::InvalidConfig(format!(
                "max_initial_zoom must be positive, found {}",
                self.max_initial_zoom
            )));
        }
        if !self.wheel_sensitivity.is_finite() {
            return Err(SessionError::InvalidConfig(
                "wheel_sensitivity must be finite".to_string(),
            ));
        }
        if !(MIN_BRUSH_SIZE_PX..=MAX_BRUSH_SIZE_PX).contains(&self.brush_size_px) {
            log::warn!(
                "brush_size_px {} outside {}..={}, clamping",
                self.brush_size_px,
                MIN_BRUSH_SIZE_PX,
                MAX_BRUSH_SIZE_PX
            );
        }
        Ok(())
    }

    pub fn zoom_bounds(&self) -> ZoomBounds {
        ZoomBounds {
            min: self.min_zoom,
            max: self.max_zoom,
        }
    }

    pub fn paint_style(&self) -> PaintStyle {
        PaintStyle {
            color: self.paint_color,
            opacity: self.paint_opacity,
        }
    }

    pub fn brush(&self) -> BrushSettings {
        BrushSettings::new(self.brush_size_px)
    }
}
