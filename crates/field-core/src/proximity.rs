use crate::particles::Particle;
use glam::Vec2;

/// A connecting edge between two particles, already weighted for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Linear falloff: `base_alpha` at distance 0, exactly 0 at `max_distance`.
/// Pairs at or beyond the threshold are not linked.
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32, base_alpha: f32) -> Option<f32> {
    (distance < max_distance).then(|| base_alpha * (1.0 - distance / max_distance))
}

/// Collect links for pairs `i < j`, stepping both indices by `stride`.
/// `out` is cleared first so the buffer can be reused across frames.
pub fn collect_links(
    particles: &[Particle],
    stride: usize,
    max_distance: f32,
    base_alpha: f32,
    out: &mut Vec<Link>,
) {
    out.clear();
    let stride = stride.max(1);
    let n = particles.len();
    for i in (0..n).step_by(stride) {
        let a: Vec2 = particles[i].position;
        for j in ((i + 1)..n).step_by(stride) {
            let distance = a.distance(particles[j].position);
            if let Some(alpha) = link_alpha(distance, max_distance, base_alpha) {
                out.push(Link {
                    from: i,
                    to: j,
                    distance,
                    alpha,
                });
            }
        }
    }
}

/// Number of pairs examined per pass; the per-frame cost bound.
pub fn candidate_pairs(count: usize, stride: usize) -> usize {
    let stride = stride.max(1);
    (0..count)
        .step_by(stride)
        .map(|i| ((i + 1)..count).step_by(stride).count())
        .sum()
}
