use serde::{Deserialize, Serialize};

pub const MIN_BRUSH_SIZE_PX: u32 = 5;
pub const MAX_BRUSH_SIZE_PX: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    Pan,
}

impl Tool {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Pan => "Pan",
        }
    }

    /// The stroke kind this tool paints with, if it paints at all.
    pub const fn stroke(self) -> Option<StrokeTool> {
        match self {
            Self::Brush => Some(StrokeTool::Brush),
            Self::Eraser => Some(StrokeTool::Eraser),
            Self::Pan => None,
        }
    }
}

/// The subset of tools that mutate the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeTool {
    Brush,
    Eraser,
}

/// Screen-space brush diameter in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushSettings {
    size_px: u32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self { size_px: 40 }
    }
}

impl BrushSettings {
    pub fn new(size_px: u32) -> Self {
        Self {
            size_px: size_px.clamp(MIN_BRUSH_SIZE_PX, MAX_BRUSH_SIZE_PX),
        }
    }

    pub fn size_px(self) -> u32 {
        self.size_px
    }

    pub fn set_size_px(&mut self, size_px: u32) {
        *self = Self::new(size_px);
    }

    /// Stroke width in image pixels at the given magnification.
    pub fn image_diameter(self, zoom: f32) -> f32 {
        self.size_px as f32 / zoom
    }

    pub fn image_radius(self, zoom: f32) -> f32 {
        self.image_diameter(zoom) / 2.0
    }
}

/// Selected tool plus any transient pan override (space held).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolState {
    pub selected: Tool,
    pub space_pan: bool,
}

impl ToolState {
    /// Tool that a primary press would use right now.
    pub fn effective(self) -> Tool {
        if self.space_pan { Tool::Pan } else { self.selected }
    }
}

pub fn tool_shortcut_tool(text: &str) -> Option<Tool> {
    match text {
        "b" | "B" => Some(Tool::Brush),
        "e" | "E" => Some(Tool::Eraser),
        "v" | "V" => Some(Tool::Pan),
        _ => None,
    }
}
