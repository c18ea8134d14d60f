// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" value ticks and the padded category range.

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Round step size that yields about `target` intervals over `min..max`.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs().max(1e-12);
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = NICE_STEPS.iter().copied().find(|&s| s >= norm - 1e-9).unwrap_or(10.0);
    nice * mag
}

/// Multiples of a nice step that fall inside `[min, max]` (inclusive).
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || min >= max { return Vec::new(); }
    let step = nice_step(min, max, target);
    let eps = step * 1e-9;
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        .filter(|&v| v >= min - eps && v <= max + eps)
        .collect()
}

/// Logical x range for `count` categories placed at 0..count-1, padded by 5%
/// of the span (half a slot for a single category).
pub fn category_range(count: usize) -> (f64, f64) {
    if count <= 1 { return (-0.5, 0.5); }
    let span = (count - 1) as f64;
    let margin = span * 0.05;
    (-margin, span + margin)
}
