//! Pairwise ball contact: equal-mass impulse exchange along the contact normal.
//!
//! Pairs are swept in index order, (0,1), (0,2), ..., (1,2), ..., after every
//! ball has moved, and each overlapping pair is corrected on the spot. A ball touching two others
//! is therefore nudged by the first pair before the second is tested, which
//! makes tight clusters jitter slightly depending on ball order.

use glam::Vec2;

use crate::ball::Ball;

/// What happened at one resolved contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the second ball's center toward the first's.
    pub normal: Vec2,
    /// Relative velocity along `normal` before the exchange.
    pub closing_speed: f32,
    /// Penetration depth that was removed.
    pub overlap: f32,
}

/// A contact between balls `a` and `b` (indices into the ball slice).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub a: usize,
    pub b: usize,
    pub contact: Contact,
}

/// Resolve one pair if the balls overlap.
///
/// The normal component of the relative velocity is moved from one ball to
/// the other (all balls weigh the same), then both are pushed apart by half
/// the overlap each. Potted balls never collide. Balls with coincident
/// centers have no contact normal and are left alone.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, radius: f32) -> Option<Contact> {
    if a.potted || b.potted {
        return None;
    }

    let delta = a.pos - b.pos;
    let dist = delta.length();
    let min_dist = radius * 2.0;
    if dist >= min_dist {
        return None;
    }
    if dist <= f32::EPSILON {
        log::debug!("coincident balls at {:?}; skipping contact", a.pos);
        return None;
    }

    let normal = delta / dist;
    let closing_speed = (a.vel - b.vel).dot(normal);
    a.vel -= normal * closing_speed;
    b.vel += normal * closing_speed;

    let overlap = min_dist - dist;
    let push = normal * (overlap * 0.5);
    a.pos += push;
    b.pos -= push;

    Some(Contact { normal, closing_speed, overlap })
}

/// Sweep every unordered pair once, in index order.
pub fn resolve_all(balls: &mut [Ball], radius: f32) -> Vec<Collision> {
    let mut collisions = Vec::new();
    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let first = &mut head[i];
        for (offset, second) in tail.iter_mut().enumerate() {
            if let Some(contact) = resolve_pair(first, second, radius) {
                collisions.push(Collision { a: i, b: i + 1 + offset, contact });
            }
        }
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BallColor;

    const R: f32 = 10.0;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball { vel: Vec2::new(vx, vy), ..Ball::new(Vec2::new(x, y), BallColor::Red) }
    }

    #[test]
    fn head_on_hit_swaps_velocities() {
        let mut a = ball(100.0, 100.0, 3.0, 0.0);
        let mut b = ball(118.0, 100.0, 0.0, 0.0);
        let contact = resolve_pair(&mut a, &mut b, R).unwrap();

        assert_eq!(contact.normal, Vec2::new(-1.0, 0.0));
        assert_eq!(contact.closing_speed, -3.0);
        assert_eq!(a.vel, Vec2::ZERO);
        assert_eq!(b.vel, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn overlap_is_split_evenly() {
        let mut a = ball(100.0, 100.0, 0.0, 0.0);
        let mut b = ball(116.0, 100.0, 0.0, 0.0);
        let contact = resolve_pair(&mut a, &mut b, R).unwrap();
        assert_eq!(contact.overlap, 4.0);
        assert_eq!(a.pos, Vec2::new(98.0, 100.0));
        assert_eq!(b.pos, Vec2::new(118.0, 100.0));
        assert_eq!(a.pos.distance(b.pos), 2.0 * R);
    }

    #[test]
    fn tangential_velocity_is_kept() {
        let mut a = ball(100.0, 100.0, 2.0, 5.0);
        let mut b = ball(115.0, 100.0, 0.0, 0.0);
        resolve_pair(&mut a, &mut b, R).unwrap();
        assert_eq!(a.vel.y, 5.0);
        assert_eq!(b.vel.y, 0.0);
    }

    #[test]
    fn touching_exactly_is_not_a_collision() {
        let mut a = ball(100.0, 100.0, 1.0, 0.0);
        let mut b = ball(120.0, 100.0, 0.0, 0.0);
        assert!(resolve_pair(&mut a, &mut b, R).is_none());
        assert_eq!(a.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn coincident_centers_do_not_produce_nan() {
        let mut a = ball(200.0, 200.0, 1.0, 1.0);
        let mut b = ball(200.0, 200.0, -1.0, 0.0);
        assert!(resolve_pair(&mut a, &mut b, R).is_none());
        assert!(a.vel.is_finite() && b.vel.is_finite());
        assert_eq!(a.pos, b.pos);
    }

    #[test]
    fn potted_balls_are_ignored() {
        let mut a = ball(100.0, 100.0, 3.0, 0.0);
        let mut b = Ball { potted: true, ..ball(105.0, 100.0, 0.0, 0.0) };
        assert!(resolve_pair(&mut a, &mut b, R).is_none());
    }

    #[test]
    fn resolve_all_reports_pairs_in_sweep_order() {
        let mut balls = vec![
            ball(100.0, 100.0, 0.0, 0.0),
            ball(300.0, 300.0, 0.0, 0.0),
            ball(115.0, 100.0, 0.0, 0.0),
            ball(315.0, 300.0, 0.0, 0.0),
        ];
        let hits = resolve_all(&mut balls, R);
        let pairs: Vec<_> = hits.iter().map(|c| (c.a, c.b)).collect();
        assert_eq!(pairs, vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn cluster_resolution_depends_on_order() {
        // Middle ball overlaps both neighbours; fixing the first pair shoves it
        // deeper into the second.
        let mut balls = vec![
            ball(100.0, 100.0, 0.0, 0.0),
            ball(118.0, 100.0, 0.0, 0.0),
            ball(136.0, 100.0, 0.0, 0.0),
        ];
        let hits = resolve_all(&mut balls, R);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].contact.overlap, 2.0);
        assert_eq!(hits[1].contact.overlap, 3.0);
    }
}
