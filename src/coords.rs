//! Mapping from the network's math space onto the fixed square canvas.
//!
//! Both axes span [-1, 1]. Image row 0 is the top, so y is flipped.
//! Every pixel position in the crate comes from [`to_pixel`].

/// Width and height of the canvas in pixels.
pub const CANVAS_SIZE: usize = 400;

/// Pixels per unit of math space, measured from the centre.
const HALF_EXTENT: f32 = 199.0;

/// Integer pixel position. May lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Position in the canvas pixel buffer, `None` when off-canvas.
    pub fn to_index(self) -> Option<(usize, usize)> {
        let range = 0..CANVAS_SIZE as i32;
        (range.contains(&self.x) && range.contains(&self.y)).then(|| (self.x as usize, self.y as usize))
    }
}

/// Maps `(x, y)` to its pixel. Out-of-range inputs land off-canvas without clamping.
///
/// Halfway values round to even.
pub fn to_pixel(x: f32, y: f32) -> PixelPoint {
    let column = x * HALF_EXTENT + HALF_EXTENT;
    let row = 2.0 * HALF_EXTENT - (y * HALF_EXTENT + HALF_EXTENT);
    PixelPoint::new(column.round_ties_even() as i32, row.round_ties_even() as i32)
}
