// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-point transforms for the categorical X and value Y axes.

/// Maps a data interval onto a pixel/point interval. `r0` may exceed `r1`
/// (Y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f32, r1: f32) -> Self {
        let mut s = Self { d0, d1, r0, r1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.r0 + t as f32 * (self.r1 - self.r0)
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        v >= lo - 1e-9 && v <= hi + 1e-9
    }
}

/// Plot-area projection: category index on X, value on Y (bounds from the spec).
#[derive(Clone, Copy, Debug)]
pub struct PlotScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotScales {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: LinearScale::new(x_range.0, x_range.1, left, right),
            y: LinearScale::new(y_range.0, y_range.1, bottom, top),
        }
    }

    #[inline]
    pub fn point(&self, index: usize, value: f64) -> (f32, f32) {
        (self.x.to_px(index as f64), self.y.to_px(value))
    }
}
