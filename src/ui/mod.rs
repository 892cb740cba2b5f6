pub mod surface;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::games::Game;

pub use surface::Surface;

pub fn render(frame: &mut Frame, app: &App) {
    let (cols, rows) = app.game.viewport();
    let mut surface = Surface::new(cols, rows);
    app.game.render(&mut surface);
    frame.render_widget(Paragraph::new(surface.into_lines()), frame.area());
}
