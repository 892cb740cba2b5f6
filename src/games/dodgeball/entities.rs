use crate::config::tunables::BALL_ASPECT_RATIO;

/// The player. Position is in whole cells, velocity in cells per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub velx: f64,
    pub vely: f64,
    ry: f32,
    rx: f32,
}

impl Ball {
    pub fn new(x: i32, y: i32, radius: f32) -> Self {
        let mut ball = Self { x, y, velx: 0.0, vely: 0.0, ry: 0.0, rx: 0.0 };
        ball.set_radius(radius);
        ball
    }

    /// Vertical radius.
    pub fn ry(&self) -> f32 {
        self.ry
    }

    /// Horizontal radius, always `ry * BALL_ASPECT_RATIO`.
    pub fn rx(&self) -> f32 {
        self.rx
    }

    pub fn set_radius(&mut self, ry: f32) {
        self.ry = ry.max(0.0);
        self.rx = self.ry * BALL_ASPECT_RATIO;
    }

    /// Take one hit. Returns `false` when the ball is too small to shrink
    /// and is eliminated instead; the radius is then left untouched.
    pub fn absorb_hit(&mut self) -> bool {
        if self.ry > 1.0 {
            self.set_radius(self.ry - 1.0);
            true
        } else {
            false
        }
    }
}

/// A projectile. Never freed: leaving the screen respawns it elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub velx: f64,
    pub vely: f64,
}

impl Bullet {
    /// Placeholder parked just off-screen so the next recycle pass places it.
    pub fn unplaced() -> Self {
        Self { x: -1, y: -1, velx: 0.0, vely: 0.0 }
    }

    pub fn retire(&mut self) {
        self.x = -1;
        self.y = -1;
    }

    pub fn is_off_screen(&self, view: Viewport) -> bool {
        self.y >= view.rows as i32 - 1 || self.x >= view.cols as i32 - 1 || self.x < 0 || self.y < 0
    }
}

/// Terminal size captured at startup; the game never re-reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}
