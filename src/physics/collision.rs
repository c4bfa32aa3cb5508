use bevy::prelude::*;

use super::body::Body;

/// Resolve every overlapping pair once, in index order `(0,1), (0,2), .., (1,2), ..`.
///
/// Overlap is strict: `distance < r1 + r2`. A colliding pair swaps velocity
/// vectors outright (no mass weighting) and is pushed apart symmetrically
/// along the center line by half the overlap plus `margin`.
///
/// Pairs are handled sequentially on live state: a later pair sees the
/// positions and velocities written by earlier pairs in the same call.
pub fn resolve_all(bodies: &mut [Body], margin: f32) {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            resolve_pair(&mut head[i], &mut tail[0], margin);
        }
    }
}

/// Returns `true` if the pair was touching and got resolved.
pub fn resolve_pair(a: &mut Body, b: &mut Body, margin: f32) -> bool {
    let contact = a.radius() + b.radius();
    let delta = b.position - a.position;
    let dist = delta.length();
    if dist >= contact {
        return false;
    }

    std::mem::swap(&mut a.velocity, &mut b.velocity);

    // atan2(0, 0) == 0, so coincident centers separate along +x
    let overlap = 0.5 * (contact - dist + margin);
    let angle = delta.y.atan2(delta.x);
    let push = Vec2::new(angle.cos(), angle.sin()) * overlap;
    a.position -= push;
    b.position += push;
    true
}
