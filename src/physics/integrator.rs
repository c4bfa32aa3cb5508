use super::body::Body;
use crate::config::SandboxConfig;

/// Advance one body by one frame: gravity, explicit Euler move, then floor,
/// wall and ceiling response, in that order.
///
/// Floor and ceiling are checked independently, so a body that crosses both
/// in one frame gets both responses (floor first).
pub fn advance(body: &mut Body, config: &SandboxConfig) {
    let bounds = config.bounds_for(body.radius());
    let v = &mut body.velocity;

    // gravity before the move
    v.y -= config.gravity;

    let mut pos = body.position + *v;

    // Floor: clamp, bounce, ground friction, then snap tiny speeds to rest
    if pos.y < bounds.floor {
        pos.y = bounds.floor;
        v.y *= -config.bounce_loss;
        v.x *= config.friction;

        if v.y.abs() < config.rest_speed_y {
            v.y = 0.0;
        }
        if v.x.abs() < config.rest_speed_x {
            v.x = 0.0;
        }
    }

    // Walls
    if pos.x > bounds.right || pos.x < bounds.left {
        v.x *= -config.wall_bounce_loss;
        pos.x = pos.x.min(bounds.right).max(bounds.left);
    }

    // Ceiling (lighter bounce)
    if pos.y > bounds.ceiling {
        pos.y = bounds.ceiling;
        v.y *= -config.wall_bounce_loss;
    }

    body.position = pos;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;

    fn ball(position: Vec2, velocity: Vec2) -> Body {
        Body::new(position, velocity, 20.0, Color::WHITE)
    }

    #[test]
    fn free_flight_applies_gravity_then_moves() {
        let cfg = SandboxConfig::default();
        let mut b = ball(Vec2::new(10.0, 0.0), Vec2::new(1.5, 2.0));

        advance(&mut b, &cfg);

        let vy = 2.0 - cfg.gravity;
        assert_eq!(b.velocity, Vec2::new(1.5, vy));
        assert_eq!(b.position, Vec2::new(11.5, vy));
    }

    #[test]
    fn floor_clamps_exactly_and_bounces() {
        let cfg = SandboxConfig::default();
        let mut b = ball(Vec2::new(0.0, -279.0), Vec2::new(3.0, -10.0));

        advance(&mut b, &cfg);

        assert_eq!(b.position.y, -280.0);
        let vy = -(-10.0 - cfg.gravity) * cfg.bounce_loss;
        assert!((b.velocity.y - vy).abs() < 1e-5);
        assert!((b.velocity.x - 3.0 * cfg.friction).abs() < 1e-6);

        // one more frame never ends below the floor
        advance(&mut b, &cfg);
        assert!(b.position.y >= -280.0);
    }

    #[test]
    fn floor_contact_snaps_slow_speeds_to_rest() {
        let cfg = SandboxConfig::default();
        // lands at -0.5 (after gravity) -> bounces at 0.4 -> below 0.5, snapped
        let mut b = ball(Vec2::new(0.0, -280.0), Vec2::new(0.25, -0.2));

        advance(&mut b, &cfg);

        assert_eq!(b.position.y, -280.0);
        assert_eq!(b.velocity, Vec2::ZERO);
    }

    #[test]
    fn floor_contact_keeps_fast_horizontal_speed() {
        let cfg = SandboxConfig::default();
        let mut b = ball(Vec2::new(0.0, -280.0), Vec2::new(2.0, 0.0));

        advance(&mut b, &cfg);

        assert_eq!(b.velocity.y, 0.0);
        assert_eq!(b.velocity.x, 2.0 * cfg.friction);
    }

    #[test]
    fn right_wall_reflects_and_clamps() {
        let cfg = SandboxConfig::default();
        let mut b = ball(Vec2::new(378.0, 0.0), Vec2::new(5.0, 0.0));

        advance(&mut b, &cfg);

        assert_eq!(b.position.x, 380.0);
        assert_eq!(b.velocity.x, -5.0 * cfg.wall_bounce_loss);
    }

    #[test]
    fn left_wall_reflects_and_clamps() {
        let cfg = SandboxConfig::default();
        let mut b = ball(Vec2::new(-379.0, 0.0), Vec2::new(-4.0, 0.0));

        advance(&mut b, &cfg);

        assert_eq!(b.position.x, -380.0);
        assert_eq!(b.velocity.x, 4.0 * cfg.wall_bounce_loss);
    }

    #[test]
    fn ceiling_clamps_with_wall_loss() {
        let cfg = SandboxConfig::default();
        let mut b = ball(Vec2::new(0.0, 300.0), Vec2::new(0.0, 3.0));

        advance(&mut b, &cfg);

        assert_eq!(b.position.y, 280.0);
        let vy = -(3.0 - cfg.gravity) * cfg.wall_bounce_loss;
        assert!((b.velocity.y - vy).abs() < 1e-6);
    }

    #[test]
    fn tiny_world_floor_then_ceiling() {
        // floor = -1, ceiling = 1
        let cfg = SandboxConfig {
            width: 100.0,
            height: 42.0,
            ..default()
        };

        // overshoots the floor by a lot: floor clamp, ceiling check sees the clamped y
        let mut b = ball(Vec2::ZERO, Vec2::new(0.0, -10.0));
        advance(&mut b, &cfg);
        assert_eq!(b.position.y, -1.0);
        assert!(b.velocity.y > 0.0);

        // the rebound overshoots the ceiling in one frame
        advance(&mut b, &cfg);
        assert_eq!(b.position.y, 1.0);
        assert!(b.velocity.y < 0.0);
    }
}
