/// Samples a cardinal spline through `points`.
///
/// `tension` of 0.0 yields a Catmull-Rom curve; 1.0 degenerates to straight
/// segments. The curve passes through every input point, the end points are
/// duplicated as phantom neighbours, and each span is split into
/// `samples_per_segment` pieces.
#[must_use]
pub fn cardinal_spline(
    points: &[(f64, f64)],
    tension: f64,
    samples_per_segment: usize,
) -> Vec<(f64, f64)> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.to_vec();
    }

    let scale = (1.0 - tension) * 0.5;
    let mut output = Vec::with_capacity((points.len() - 1) * samples_per_segment + 1);
    output.push(points[0]);

    for index in 0..points.len() - 1 {
        let p0 = points[index.saturating_sub(1)];
        let p1 = points[index];
        let p2 = points[index + 1];
        let p3 = points[(index + 2).min(points.len() - 1)];

        let m1 = ((p2.0 - p0.0) * scale, (p2.1 - p0.1) * scale);
        let m2 = ((p3.0 - p1.0) * scale, (p3.1 - p1.1) * scale);

        for step in 1..=samples_per_segment {
            let t = step as f64 / samples_per_segment as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            output.push((
                h00 * p1.0 + h10 * m1.0 + h01 * p2.0 + h11 * m2.0,
                h00 * p1.1 + h10 * m1.1 + h01 * p2.1 + h11 * m2.1,
            ));
        }
    }

    output
}
