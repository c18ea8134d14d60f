// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and content-bounds cropping.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Grow by `pad` on every side, then clip to `0..w` x `0..h`.
    pub fn padded_within(&self, pad: i32, w: i32, h: i32) -> Self {
        Self {
            left: clamp(self.left - pad, 0, w),
            top: clamp(self.top - pad, 0, h),
            right: clamp(self.right + pad, 0, w),
            bottom: clamp(self.bottom + pad, 0, h),
        }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Bounding box of pixels that differ from `background` in a tightly packed
/// RGBA8 buffer. `None` when the whole buffer is background.
pub fn content_bounds(rgba: &[u8], width: i32, height: i32, background: [u8; 4]) -> Option<RectI32> {
    let (w, h) = (width.max(0) as usize, height.max(0) as usize);
    if rgba.len() < w * h * 4 { return None; }

    let mut left = usize::MAX;
    let mut top = usize::MAX;
    let mut right = 0usize;
    let mut bottom = 0usize;
    for (y, row) in rgba.chunks_exact(w * 4).take(h).enumerate() {
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px != background {
                left = left.min(x);
                right = right.max(x + 1);
                top = top.min(y);
                bottom = bottom.max(y + 1);
            }
        }
    }
    if left == usize::MAX { return None; }
    Some(RectI32::from_ltrb(left as i32, top as i32, right as i32, bottom as i32))
}
