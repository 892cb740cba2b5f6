pub mod dodgeball;

use std::time::Duration;

use crate::event::Intent;
use crate::ui::Surface;

pub trait Game {
    fn update(&mut self, intent: Intent);
    fn render(&self, surface: &mut Surface);
    fn get_score(&self) -> u32;
    fn is_game_over(&self) -> bool;
    /// How long the driver sleeps after drawing a frame.
    fn frame_delay(&self) -> Duration;
    /// Fixed (cols, rows) the game was laid out for.
    fn viewport(&self) -> (u16, u16);
}
