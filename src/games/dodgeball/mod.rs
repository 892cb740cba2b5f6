//! Dodge Ball: a squishy ball hops around while bullets rain down and
//! streak in from the left. Every bullet that leaves the screen scores a
//! point; every bullet that lands shrinks the ball until it pops.

pub mod entities;
pub mod physics;
pub mod render;
pub mod resolve;

use std::time::Duration;

use rand::rngs::StdRng;

use crate::config::tunables::BALL_START_Y;
use crate::config::Tier;
use crate::event::Intent;
use crate::games::Game;
use crate::ui::Surface;

use entities::{Ball, Bullet, Viewport};
use resolve::{Scoreboard, Sweep};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    Eliminated,
}

pub struct DodgeBall {
    ball: Ball,
    bullets: Vec<Bullet>,
    board: Scoreboard,
    view: Viewport,
    rng: StdRng,
    frame: u64,
    ended: Option<EndReason>,
}

impl DodgeBall {
    pub fn new(cols: u16, rows: u16, rng: StdRng) -> Self {
        let tier = Tier::for_viewport(cols, rows);
        log::info!("viewport {cols}x{rows}, tier {tier:?}");
        Self {
            ball: Ball::new(cols as i32 / 2, BALL_START_Y, tier.start_radius()),
            bullets: vec![Bullet::unplaced(); tier.bullet_count()],
            board: Scoreboard::default(),
            view: Viewport { cols, rows },
            rng,
            frame: 0,
            ended: None,
        }
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.ended
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }

    fn end(&mut self, reason: EndReason) {
        if self.ended.is_none() {
            log::info!(
                "game over ({reason:?}) after {} frames, score {}",
                self.frame,
                self.board.score
            );
            self.ended = Some(reason);
        }
    }
}

impl Game for DodgeBall {
    /// Advance one frame. A quit request still finishes the frame.
    fn update(&mut self, intent: Intent) {
        if self.ended.is_some() {
            return;
        }
        self.frame += 1;

        physics::integrate_ball(&mut self.ball, &intent);

        if self.board.scale() {
            self.bullets.push(Bullet::unplaced());
            log::info!("{} bullets in play", self.bullets.len());
        }

        let sweep = resolve::sweep_bullets(
            &mut self.ball,
            &mut self.bullets,
            &mut self.board,
            self.view,
            &mut self.rng,
        );
        resolve::clamp_to_viewport(&mut self.ball, self.view);

        log::trace!(
            "frame {}: ball ({}, {}) v=({}, {}) score {}",
            self.frame,
            self.ball.x,
            self.ball.y,
            self.ball.velx,
            self.ball.vely,
            self.board.score
        );

        if sweep == Sweep::Eliminated {
            self.end(EndReason::Eliminated);
        } else if intent.quit {
            self.end(EndReason::Quit);
        }
    }

    fn render(&self, surface: &mut Surface) {
        surface.clear();
        render::draw_ball(surface, &self.ball);
        render::draw_bullets(surface, &self.bullets);
        render::draw_score(surface, self.board.score);
    }

    fn get_score(&self) -> u32 {
        self.board.score
    }

    fn is_game_over(&self) -> bool {
        self.ended.is_some()
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_micros(self.board.frame_delay_us)
    }

    fn viewport(&self) -> (u16, u16) {
        (self.view.cols, self.view.rows)
    }
}
