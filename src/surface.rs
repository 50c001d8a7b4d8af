mod error;
mod finalize;
mod mask;
mod raster;
mod stamp;


pub use error::{Result, SurfaceError};
pub use finalize::{MASK_SELECTED, MASK_UNSELECTED, encode_png, finalize};
pub use mask::{MaskBuffer, MaskSnapshot, PaintStyle};
pub use raster::RasterSurface;
