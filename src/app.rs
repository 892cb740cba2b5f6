use rand::rngs::StdRng;

use crate::event::Intent;
use crate::games::dodgeball::DodgeBall;
use crate::games::Game;

pub struct App {
    pub should_quit: bool,
    pub game: DodgeBall,
}

impl App {
    pub fn new(cols: u16, rows: u16, rng: StdRng) -> Self {
        Self {
            should_quit: false,
            game: DodgeBall::new(cols, rows, rng),
        }
    }

    /// Run one simulation step. Quitting takes effect once the frame is done.
    pub fn on_frame(&mut self, intent: Intent) {
        self.game.update(intent);
        if intent.quit || self.game.is_game_over() {
            self.should_quit = true;
        }
    }
}
