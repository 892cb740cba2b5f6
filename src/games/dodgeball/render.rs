use ratatui::prelude::*;

use super::entities::{Ball, Bullet};
use crate::ui::Surface;

const BALL_GLYPH: char = '#';
const BULLET_GLYPH: char = '@';

fn ball_style() -> Style {
    Style::default().fg(Color::Green)
}

fn bullet_style() -> Style {
    Style::default().fg(Color::Red)
}

fn score_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

/// Every (row, col) offset inside the filled ellipse with the given radii,
/// i.e. where `i²/ry² + j²/rx² <= 1`. Degenerate radii produce nothing.
pub fn ellipse_cells(ry: f32, rx: f32) -> Vec<(i32, i32)> {
    if ry <= 0.0 || rx <= 0.0 {
        return Vec::new();
    }
    let (ry2, rx2) = ((ry as f64).powi(2), (rx as f64).powi(2));
    let mut cells = Vec::new();
    let mut i = (-ry).trunc() as i32;
    while i as f32 <= ry {
        let mut j = (-rx).trunc() as i32;
        while j as f32 <= rx {
            if (i as f64).powi(2) / ry2 + (j as f64).powi(2) / rx2 <= 1.0 {
                cells.push((i, j));
            }
            j += 1;
        }
        i += 1;
    }
    cells
}

pub fn draw_ball(surface: &mut Surface, ball: &Ball) {
    for (i, j) in ellipse_cells(ball.ry(), ball.rx()) {
        surface.plot(ball.y + i, ball.x + j, BALL_GLYPH, ball_style());
    }
}

pub fn draw_bullets(surface: &mut Surface, bullets: &[Bullet]) {
    for bullet in bullets {
        surface.plot(bullet.y, bullet.x, BULLET_GLYPH, bullet_style());
    }
}

pub fn draw_score(surface: &mut Surface, score: u32) {
    let col = surface.cols() as i32 / 2 - 4;
    surface.print(0, col, &format!("Score: {score}"), score_style());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_ellipse() {
        let cells = ellipse_cells(5.0, 10.0);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(5, 0)));
        assert!(cells.contains(&(-5, 0)));
        assert!(cells.contains(&(0, 10)));
        assert!(cells.contains(&(0, -10)));
        assert!(!cells.contains(&(5, 1)));
        assert!(!cells.contains(&(4, 10)));
        for (i, j) in &cells {
            let (i, j) = (*i as f64, *j as f64);
            assert!(i * i / 25.0 + j * j / 100.0 <= 1.0);
        }
    }

    #[test]
    fn filled_not_outlined() {
        let cells = ellipse_cells(3.0, 6.0);
        for j in -6..=6 {
            assert!(cells.contains(&(0, j)));
        }
    }

    #[test]
    fn zero_radius_draws_nothing() {
        assert!(ellipse_cells(0.0, 0.0).is_empty());
        assert!(ellipse_cells(-1.0, -2.0).is_empty());
    }

    #[test]
    fn ball_bullets_and_score_use_distinct_styles() {
        let mut surface = Surface::new(40, 12);
        draw_ball(&mut surface, &Ball::new(20, 6, 2.0));
        draw_bullets(&mut surface, &[Bullet { x: 2, y: 10, velx: 0.0, vely: 0.0 }]);
        draw_score(&mut surface, 7);

        let (ball_glyph, ball) = surface.cell(6, 20).unwrap();
        let (bullet_glyph, bullet) = surface.cell(10, 2).unwrap();
        let (score_glyph, score) = surface.cell(0, 16).unwrap();
        assert_eq!((ball_glyph, bullet_glyph, score_glyph), ('#', '@', 'S'));
        assert_ne!(ball, bullet);
        assert_ne!(ball, score);
        assert_ne!(bullet, score);
    }

    #[test]
    fn ball_partly_off_screen_is_clipped() {
        let mut surface = Surface::new(10, 5);
        draw_ball(&mut surface, &Ball::new(0, 0, 2.0));
        assert_eq!(surface.cell(0, 0).map(|c| c.0), Some('#'));
        assert_eq!(surface.cell(2, 0).map(|c| c.0), Some('#'));
        assert_eq!(surface.cell(3, 0).map(|c| c.0), Some(' '));
    }

    proptest! {
        #[test]
        fn every_cell_satisfies_the_implicit_equation(ry in 1u8..15) {
            let ry = ry as f32;
            let rx = ry * 2.0;
            let cells = ellipse_cells(ry, rx);
            prop_assert!(cells.contains(&(0, 0)));
            for (i, j) in cells {
                let v = (i as f64).powi(2) / (ry as f64).powi(2)
                    + (j as f64).powi(2) / (rx as f64).powi(2);
                prop_assert!(v <= 1.0);
            }
        }
    }
}
