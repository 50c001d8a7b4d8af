mod error;
mod geometry;
mod tool;


pub use error::{ModelError, Result};
pub use geometry::{
    ContainerSize, ImagePoint, ImageSize, Offset, ScreenPoint, image_point, offset, screen,
};
pub use tool::{
    BrushSettings, MAX_BRUSH_SIZE_PX, MIN_BRUSH_SIZE_PX, StrokeTool, Tool, ToolState,
    tool_shortcut_tool,
};
