use grid_dijkstra::{Cell, Path, Scenario};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Moves the cursor home after wiping the terminal.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

pub const FREE_GLYPH: char = '.';
pub const WALL_GLYPH: char = '#';
pub const START_GLYPH: char = 'A';
pub const GOAL_GLYPH: char = 'B';
pub const PATH_GLYPH: char = 'o';

/// Draws the board with the cells of `trail` marked. Start and goal keep their own glyphs.
pub fn render_frame(scenario: &Scenario, trail: &[Cell]) -> String {
    let grid = &scenario.grid;
    let mut frame = String::with_capacity((grid.cols() + 1) * grid.rows());
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let cell = Cell::new(row, col);
            let glyph = if cell == scenario.start {
                START_GLYPH
            } else if cell == scenario.goal {
                GOAL_GLYPH
            } else if trail.contains(&cell) {
                PATH_GLYPH
            } else if grid.is_blocked(&cell) {
                WALL_GLYPH
            } else {
                FREE_GLYPH
            };
            frame.push(glyph);
        }
        frame.push('\n');
    }
    frame
}

/// Replays a path one cell per frame.
#[derive(Clone, Debug)]
pub struct Animation {
    pub delay: Duration,
    pub clear: bool,
}

impl Animation {
    pub fn play<W: Write>(&self, out: &mut W, scenario: &Scenario, path: &Path) -> io::Result<()> {
        let cells = path.cells();
        for shown in 1..=cells.len() {
            if self.clear {
                write!(out, "{}", CLEAR_SCREEN)?;
            }
            writeln!(out, "{}", render_frame(scenario, &cells[..shown]))?;
            out.flush()?;
            if shown < cells.len() && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        Ok(())
    }
}
