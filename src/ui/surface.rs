use ratatui::prelude::*;

/// Character grid the game draws into each frame before it is handed to
/// ratatui. Row 0 is the top of the terminal.
pub struct Surface {
    cols: u16,
    rows: u16,
    cells: Vec<Vec<(char, Style)>>,
}

impl Surface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![(' ', Style::default()); cols as usize]; rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill((' ', Style::default()));
        }
    }

    /// Put a glyph in one cell. Cells outside the grid are skipped.
    pub fn plot(&mut self, row: i32, col: i32, glyph: char, style: Style) {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return;
        }
        self.cells[row as usize][col as usize] = (glyph, style);
    }

    pub fn print(&mut self, row: i32, col: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.plot(row, col + i as i32, ch, style);
        }
    }

    #[cfg(test)]
    pub fn cell(&self, row: i32, col: i32) -> Option<(char, Style)> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells.get(row as usize)?.get(col as usize).copied()
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
