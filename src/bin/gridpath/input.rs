//! Reading a scenario from the user: `ROW,COL` arguments, interactive prompts and ASCII maps.
//! Everything the user types is 1-based; cells handed to the library are 0-based.

use anyhow::{bail, Context, Result};
use grid_dijkstra::{Cell, ScenarioBuilder};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

fn to_zero_based(value: i32) -> Option<i32> {
    value.checked_sub(1)
}

/// Parses a 1-based `ROW,COL` pair.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{}'", s))?;
    let parse = |part: &str| -> Result<i32, String> {
        part.trim()
            .parse::<i32>()
            .ok()
            .and_then(to_zero_based)
            .ok_or_else(|| format!("'{}' is not a valid coordinate", part.trim()))
    };
    Ok(Cell::new(parse(row)?, parse(col)?))
}

/// Asks for numbers one at a time, repeating the question until it gets one.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Prompter<R, W> {
        Prompter { reader, writer }
    }

    pub fn read_number(&mut self, prompt: &str) -> Result<i32> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                bail!("Input ended while waiting for: {}", prompt.trim_end());
            }
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.writer, "'{}' is not a number, try again.", line.trim())?,
            }
        }
    }

    /// `what` is the full noun of the prompt, e.g. "the start" or "wall 3".
    fn read_cell(&mut self, what: &str, rows: usize, cols: usize) -> Result<Cell> {
        let row = self.read_number(&format!("Enter {} row (1-{}): ", what, rows))?;
        let col = self.read_number(&format!("Enter {} column (1-{}): ", what, cols))?;
        match (to_zero_based(row), to_zero_based(col)) {
            (Some(row), Some(col)) => Ok(Cell::new(row, col)),
            _ => bail!("Coordinate out of range: {},{}", row, col),
        }
    }
}

/// Runs the interactive prompt sequence: start, end, number of walls, then every wall.
pub fn prompt_scenario<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    rows: usize,
    cols: usize,
) -> Result<ScenarioBuilder> {
    let mut prompter = Prompter::new(reader, writer);
    let start = prompter.read_cell("the start", rows, cols)?;
    let goal = prompter.read_cell("the end", rows, cols)?;
    let mut builder = ScenarioBuilder::new(rows, cols).start(start).goal(goal);
    let wall_count = prompter.read_number("Enter the number of walls: ")?;
    if wall_count < 0 {
        bail!("The number of walls cannot be negative");
    }
    for i in 1..=wall_count {
        let wall = prompter.read_cell(&format!("wall {}", i), rows, cols)?;
        builder = builder.wall(wall);
    }
    Ok(builder)
}

/// Parses an ASCII map. Every line is a row; all rows must have the same width. Blank lines are
/// only allowed before the first and after the last row.
pub fn parse_map(text: &str) -> Result<ScenarioBuilder> {
    let all_lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let first = all_lines.iter().position(|line| !line.is_empty());
    let last = all_lines.iter().rposition(|line| !line.is_empty());
    let lines = match (first, last) {
        (Some(first), Some(last)) => &all_lines[first..=last],
        _ => bail!("Map is empty"),
    };
    let rows = lines.len();
    let cols = lines[0].chars().count();
    let mut start = None;
    let mut goal = None;
    let mut walls = Vec::new();
    for (row, line) in lines.iter().enumerate() {
        if line.chars().count() != cols {
            bail!(
                "Map row {} has {} cells, expected {}",
                row + 1,
                line.chars().count(),
                cols
            );
        }
        for (col, glyph) in line.chars().enumerate() {
            let cell = Cell::new(row as i32, col as i32);
            let slot = match glyph {
                '.' => continue,
                '#' => {
                    walls.push(cell);
                    continue;
                }
                'A' => &mut start,
                'B' => &mut goal,
                other => bail!("Unknown map glyph '{}' at {},{}", other, row + 1, col + 1),
            };
            if slot.replace(cell).is_some() {
                bail!("Map contains more than one '{}'", glyph);
            }
        }
    }
    let (Some(start), Some(goal)) = (start, goal) else {
        bail!("Map needs exactly one 'A' (start) and one 'B' (goal)");
    };
    Ok(ScenarioBuilder::new(rows, cols)
        .start(start)
        .goal(goal)
        .walls(walls))
}

pub fn load_map(path: &Path) -> Result<ScenarioBuilder> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read map file {}", path.display()))?;
    parse_map(&text).with_context(|| format!("Could not parse map file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_dijkstra::{find_shortest_path, CellRole, PathError};
    use std::io::Cursor;

    #[test]
    fn cells_are_one_based() {
        assert_eq!(parse_cell("1,1"), Ok(Cell::new(0, 0)));
        assert_eq!(parse_cell(" 20, 40"), Ok(Cell::new(19, 39)));
        assert_eq!(parse_cell("0,3"), Ok(Cell::new(-1, 2)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,b").is_err());
    }

    #[test]
    fn prompts_follow_the_board_sequence() {
        let input = "1\n1\n3\nx\n3\n1\n2\n2\n";
        let mut output = Vec::new();
        let scenario = prompt_scenario(Cursor::new(input), &mut output, 3, 3)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(scenario.start, Cell::new(0, 0));
        assert_eq!(scenario.goal, Cell::new(2, 2));
        assert_eq!(scenario.grid.to_string(), "...\n.#.\n...\n");
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with("Enter the start row (1-3): "));
        assert!(transcript.contains("'x' is not a number, try again."));
        assert!(transcript.contains("Enter the end column (1-3): "));
        assert!(transcript.contains("Enter wall 1 row (1-3): "));
        assert!(transcript.contains("Enter wall 1 column (1-3): "));
        assert!(!transcript.contains("the wall"));
    }

    #[test]
    fn truncated_input_is_an_error() {
        let mut output = Vec::new();
        assert!(prompt_scenario(Cursor::new("1\n1\n"), &mut output, 3, 3).is_err());
    }

    #[test]
    fn wall_prompt_outside_grid_fails_on_build() {
        let input = "1\n1\n1\n3\n1\n21\n5\n";
        let builder = prompt_scenario(Cursor::new(input), Vec::new(), 20, 40).unwrap();
        assert!(matches!(
            builder.build(),
            Err(PathError::InvalidCoordinate {
                role: CellRole::Wall,
                ..
            })
        ));
    }

    #[test]
    fn parses_maps() {
        let scenario = parse_map("A.#.\n..#B\n....\n").unwrap().build().unwrap();
        assert_eq!(scenario.grid.rows(), 3);
        assert_eq!(scenario.grid.cols(), 4);
        assert_eq!(scenario.goal, Cell::new(1, 3));
        let path = find_shortest_path(&scenario.grid, scenario.start, scenario.goal).unwrap();
        assert_eq!(path.steps(), 6);
    }

    #[test]
    fn rejects_malformed_maps() {
        assert!(parse_map("").is_err());
        assert!(parse_map("A..\n.B\n").is_err());
        assert!(parse_map("A.x\n..B\n").is_err());
        assert!(parse_map("A.A\n..B\n").is_err());
        assert!(parse_map("A..\n...\n").is_err());
        assert!(parse_map("\n  \n").is_err());
    }

    #[test]
    fn blank_rows_only_allowed_around_the_map() {
        let err = parse_map("A.\n\n.B\n").unwrap_err();
        assert!(err.to_string().contains("Map row 2 has 0 cells"));
        let scenario = parse_map("\n\nA.\n.B\n\n").unwrap().build().unwrap();
        assert_eq!(scenario.grid.rows(), 2);
        assert_eq!(scenario.start, Cell::new(0, 0));
        assert_eq!(scenario.goal, Cell::new(1, 1));
    }
}
