use rand::Rng;

use super::entities::{Ball, Bullet, Viewport};
use super::physics::integrate_bullet;
use crate::config::tunables::*;

/// Score plus everything that scales off it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    pub score: u32,
    /// Score that must be passed before the next bullet joins.
    pub bullet_threshold: u32,
    pub frame_delay_us: u64,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            bullet_threshold: FIRST_BULLET_THRESHOLD,
            frame_delay_us: START_FRAME_DELAY_US,
        }
    }
}

impl Scoreboard {
    /// Ramp difficulty off the current score. Returns whether a bullet
    /// should be added this frame.
    ///
    /// The speed-up fires on every frame the score sits on a multiple of
    /// `SPEEDUP_SCORE_MULTIPLE`, including the opening frame at zero, so a
    /// quiet stretch on such a score keeps shaving the delay.
    pub fn scale(&mut self) -> bool {
        let add_bullet = self.score > self.bullet_threshold;
        if add_bullet {
            self.bullet_threshold += self.score;
            log::info!(
                "score {} passed threshold, next bullet at {}",
                self.score,
                self.bullet_threshold
            );
        }
        if self.score % SPEEDUP_SCORE_MULTIPLE == 0 {
            self.frame_delay_us = self
                .frame_delay_us
                .saturating_sub(SPEEDUP_STEP_US)
                .max(MIN_FRAME_DELAY_US);
            log::debug!("frame delay now {}us", self.frame_delay_us);
        }
        add_bullet
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    Survived,
    Eliminated,
}

/// Generous box hitbox around the ball, padded one row above and below.
pub fn collides(ball: &Ball, bullet: &Bullet) -> bool {
    let (bx, by) = (bullet.x as f32, bullet.y as f32);
    let (cx, cy) = (ball.x as f32, ball.y as f32);
    bx >= cx - ball.rx()
        && bx <= cx + ball.rx()
        && by >= cy - ball.ry() - 1.0
        && by <= cy + ball.ry() + 1.0
}

/// Place a bullet back on screen, either dropping from the top row or
/// launching from the left column.
pub fn respawn<R: Rng>(bullet: &mut Bullet, view: Viewport, rng: &mut R) {
    if rng.gen_bool(0.5) {
        bullet.y = 0;
        bullet.x = rng.gen_range(0..view.cols.max(1) as i32);
        bullet.velx = rng.gen_range(-1..=0i32) as f64;
        bullet.vely = rng.gen_range(1..=2i32) as f64;
    } else {
        bullet.x = 0;
        bullet.y = rng.gen_range(PATTERN_B_ROW_OFFSET..view.rows.max(1) as i32 + PATTERN_B_ROW_OFFSET);
        bullet.velx = rng.gen_range(2..=4i32) as f64;
        bullet.vely = 0.0;
    }
}

/// Move every bullet, apply hits to the ball, and recycle anything that
/// left the screen. Stops at the first hit the ball cannot survive.
pub fn sweep_bullets<R: Rng>(
    ball: &mut Ball,
    bullets: &mut [Bullet],
    board: &mut Scoreboard,
    view: Viewport,
    rng: &mut R,
) -> Sweep {
    for bullet in bullets.iter_mut() {
        integrate_bullet(bullet);

        if collides(ball, bullet) {
            if !ball.absorb_hit() {
                return Sweep::Eliminated;
            }
            log::info!("ball hit at ({}, {}), radius now {}", bullet.x, bullet.y, ball.ry());
            bullet.retire();
        }

        // A retired bullet is off screen, so it respawns right here.
        if bullet.is_off_screen(view) {
            board.score += 1;
            respawn(bullet, view, rng);
        }
    }
    Sweep::Survived
}

/// Pin the ball inside the viewport, killing velocity on the clamped axis.
pub fn clamp_to_viewport(ball: &mut Ball, view: Viewport) {
    let (cols, rows) = (view.cols as f32, view.rows as f32);
    let (rx, ry) = (ball.rx(), ball.ry());

    if ball.y as f32 >= rows - ry - 1.0 {
        ball.y = (rows - ry - 1.0) as i32;
        ball.vely = 0.0;
    } else if (ball.y as f32) < ry {
        ball.y = ry as i32;
        ball.vely = 0.0;
    }

    if (ball.x as f32) < rx || ball.x as f32 >= cols - rx {
        ball.velx = 0.0;
        if (ball.x as f32) < rx {
            ball.x = rx as i32;
        }
        if ball.x as f32 >= cols - rx {
            ball.x = (cols - rx - 1.0) as i32;
        }
    }
}
