use super::entities::{Ball, Bullet};
use crate::config::tunables::*;
use crate::event::Intent;

/// Move a whole-cell coordinate by a fractional velocity, truncating the
/// sum toward zero.
fn advance(pos: i32, vel: f64) -> i32 {
    (pos as f64 + vel).trunc() as i32
}

/// One frame of ball motion: jump, strafe, gravity, move, friction.
pub fn integrate_ball(ball: &mut Ball, intent: &Intent) {
    // A jump overrides vertical speed rather than adding to it, and can be
    // re-triggered mid-air.
    if intent.jump && ball.vely > -MAX_VEL_Y {
        ball.vely = JUMP_VELOCITY;
    }
    if intent.move_left && ball.velx > -MAX_VEL_X {
        ball.velx -= STRAFE_IMPULSE;
    }
    if intent.move_right && ball.velx < MAX_VEL_X {
        ball.velx += STRAFE_IMPULSE;
    }

    ball.vely += GRAVITY;
    ball.x = advance(ball.x, ball.velx);
    ball.y = advance(ball.y, ball.vely);

    // Linear drag toward zero.
    if ball.velx > FRICTION {
        ball.velx -= FRICTION;
    } else if ball.velx < -FRICTION {
        ball.velx += FRICTION;
    } else {
        ball.velx = 0.0;
    }
}

/// Bullets fly in straight lines; no gravity, no drag.
pub fn integrate_bullet(bullet: &mut Bullet) {
    bullet.x = advance(bullet.x, bullet.velx);
    bullet.y = advance(bullet.y, bullet.vely);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> Intent {
        Intent::default()
    }

    #[test]
    fn gravity_only_frame() {
        let mut ball = Ball::new(40, 10, 5.0);
        integrate_ball(&mut ball, &idle());
        assert_eq!(ball.vely, 1.0);
        assert_eq!(ball.y, 11);
        assert_eq!(ball.x, 40);
    }

    #[test]
    fn friction_is_linear() {
        let mut ball = Ball::new(40, 10, 5.0);
        ball.velx = 4.0;
        integrate_ball(&mut ball, &idle());
        assert_eq!(ball.velx, 3.5);
        assert_eq!(ball.x, 44);

        ball.velx = -4.0;
        integrate_ball(&mut ball, &idle());
        assert_eq!(ball.velx, -3.5);
    }

    #[test]
    fn friction_snaps_small_speeds_to_rest() {
        let mut ball = Ball::new(40, 10, 5.0);
        for v in [0.5, 0.25, 0.0, -0.5] {
            ball.velx = v;
            integrate_ball(&mut ball, &idle());
            assert_eq!(ball.velx, 0.0, "from {v}");
        }
    }

    #[test]
    fn jump_sets_launch_velocity_every_frame() {
        let jump = Intent { jump: true, ..idle() };
        let mut ball = Ball::new(40, 20, 5.0);
        ball.vely = 3.0;
        integrate_ball(&mut ball, &jump);
        // launch then gravity
        assert_eq!(ball.vely, JUMP_VELOCITY + GRAVITY);
        assert_eq!(ball.y, 16);

        integrate_ball(&mut ball, &jump);
        assert_eq!(ball.vely, JUMP_VELOCITY + GRAVITY);
    }

    #[test]
    fn jump_ignored_past_vertical_cap() {
        let mut ball = Ball::new(40, 20, 5.0);
        ball.vely = -MAX_VEL_Y;
        integrate_ball(&mut ball, &Intent { jump: true, ..idle() });
        assert_eq!(ball.vely, -MAX_VEL_Y + GRAVITY);
    }

    #[test]
    fn strafe_respects_horizontal_cap() {
        let left = Intent { move_left: true, ..idle() };
        let mut ball = Ball::new(40, 10, 5.0);
        integrate_ball(&mut ball, &left);
        assert_eq!(ball.velx, -STRAFE_IMPULSE + FRICTION);
        assert_eq!(ball.x, 37);

        ball.velx = -MAX_VEL_X;
        integrate_ball(&mut ball, &left);
        assert_eq!(ball.velx, -MAX_VEL_X + FRICTION);
    }

    #[test]
    fn opposite_strafes_cancel() {
        let both = Intent { move_left: true, move_right: true, ..idle() };
        let mut ball = Ball::new(40, 10, 5.0);
        integrate_ball(&mut ball, &both);
        assert_eq!(ball.velx, 0.0);
        assert_eq!(ball.x, 40);
    }

    #[test]
    fn positions_truncate_toward_zero() {
        assert_eq!(advance(40, -0.5), 39);
        assert_eq!(advance(0, -0.5), 0);
        assert_eq!(advance(3, 2.9), 5);
    }

    #[test]
    fn bullets_fly_straight() {
        let mut b = Bullet { x: 0, y: 20, velx: 3.0, vely: 0.0 };
        integrate_bullet(&mut b);
        integrate_bullet(&mut b);
        assert_eq!((b.x, b.y), (6, 20));
        assert_eq!((b.velx, b.vely), (3.0, 0.0));
    }
}
