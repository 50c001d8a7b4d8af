use crate::model::{ImagePoint, ImageSize};

/// Smallest radius that always reaches at least one pixel centre.
pub(crate) const MIN_STAMP_RADIUS: f32 = 0.75;

/// Visits the row-major index of every pixel whose centre lies within
/// `radius` of the segment `from..=to`, clipped to `size`.
pub(crate) fn for_each_capsule_pixel(
    size: ImageSize,
    from: ImagePoint,
    to: ImagePoint,
    radius: f32,
    mut visit: impl FnMut(usize),
) {
    let radius = if radius.is_finite() {
        radius.max(MIN_STAMP_RADIUS)
    } else {
        return;
    };
    if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
        return;
    }

    let width = i64::from(size.width);
    let height = i64::from(size.height);
    let min_x = ((from.x.min(to.x) - radius).floor() as i64).max(0);
    let min_y = ((from.y.min(to.y) - radius).floor() as i64).max(0);
    let max_x = ((from.x.max(to.x) + radius).ceil() as i64).min(width - 1);
    let max_y = ((from.y.max(to.y) + radius).ceil() as i64).min(height - 1);
    if min_x > max_x || min_y > max_y {
        return;
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length_sq = dx * dx + dy * dy;
    let radius_sq = radius * radius;

    for y in min_y..=max_y {
        let cy = y as f32 + 0.5;
        for x in min_x..=max_x {
            let cx = x as f32 + 0.5;
            let t = if length_sq > 0.0 {
                (((cx - from.x) * dx + (cy - from.y) * dy) / length_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let nearest_x = from.x + t * dx;
            let nearest_y = from.y + t * dy;
            let ex = cx - nearest_x;
            let ey = cy - nearest_y;
            if ex * ex + ey * ey <= radius_sq {
                visit((y * width + x) as usize);
            }
        }
    }
}

/// Source-over of a single-channel alpha.
pub(crate) fn source_over(destination: u8, source: u8) -> u8 {
    let source = u16::from(source);
    let destination = u16::from(destination);
    (source + (destination * (255 - source) + 127) / 255) as u8
}
