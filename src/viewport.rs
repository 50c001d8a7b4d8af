mod pinch;
mod transform;


pub use pinch::PinchGesture;
pub use transform::{MAX_ZOOM, MIN_ZOOM, Viewport, ZoomBounds};
