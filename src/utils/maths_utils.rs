/// Samples a uniform Catmull-Rom spline through `points`.
///
/// Every input point is kept exactly; `samples_per_segment - 1` extra points
/// are inserted between each neighbouring pair. The first and last control
/// points are duplicated so the curve starts and ends on the data.
/// Fewer than three points (or a sample count below 2) give back the input.
pub fn catmull_rom(points: &[[f64; 2]], samples_per_segment: usize) -> Vec<[f64; 2]> {
    if points.len() < 3 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let n = points.len();
    let mut out = Vec::with_capacity((n - 1) * samples_per_segment + 1);

    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];

        for step in 0..samples_per_segment {
            let t = step as f64 / samples_per_segment as f64;
            out.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }
    out.push(points[n - 1]);
    out
}

fn catmull_rom_point(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2], p3: [f64; 2], t: f64) -> [f64; 2] {
    let t2 = t * t;
    let t3 = t2 * t;
    let axis = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    [
        axis(p0[0], p1[0], p2[0], p3[0]),
        axis(p0[1], p1[1], p2[1], p3[1]),
    ]
}

/// Min and max of `values`, or `None` when empty.
pub fn get_min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Widens `(min, max)` by `pad_pct` of its span on both sides.
/// A zero-width range is widened by `min_pad` instead so a single point
/// still gets a visible window.
pub fn pad_range((min, max): (f64, f64), pad_pct: f64, min_pad: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 { span * pad_pct } else { min_pad };
    (min - pad, max + pad)
}
