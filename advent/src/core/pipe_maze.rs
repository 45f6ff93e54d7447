//! Day 10: tracing the closed pipe loop that runs through the origin `S`.

use std::fmt;

use tracing::debug;

use crate::core::error::{PuzzleError, PuzzleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(label)
    }
}

/// Row/column coordinates of a grid cell, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Adjacent position in `direction`. Only underflow is checked here; the
    /// grid rejects positions past its far edges.
    fn step(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::North => Some(Self::new(self.row.checked_sub(1)?, self.col)),
            Direction::East => Some(Self::new(self.row, self.col + 1)),
            Direction::South => Some(Self::new(self.row + 1, self.col)),
            Direction::West => Some(Self::new(self.row, self.col.checked_sub(1)?)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The six pipe shapes. Each one opens onto exactly two sides of its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipe {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
}

impl Pipe {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '|' => Some(Self::Vertical),
            '-' => Some(Self::Horizontal),
            'L' => Some(Self::NorthEast),
            'J' => Some(Self::NorthWest),
            '7' => Some(Self::SouthWest),
            'F' => Some(Self::SouthEast),
            _ => None,
        }
    }

    pub fn sides(self) -> [Direction; 2] {
        match self {
            Self::Vertical => [Direction::North, Direction::South],
            Self::Horizontal => [Direction::East, Direction::West],
            Self::NorthEast => [Direction::North, Direction::East],
            Self::NorthWest => [Direction::North, Direction::West],
            Self::SouthWest => [Direction::South, Direction::West],
            Self::SouthEast => [Direction::South, Direction::East],
        }
    }

    pub fn opens_to(self, side: Direction) -> bool {
        self.sides().contains(&side)
    }

    /// Side a walker leaves by after entering through `entry`.
    ///
    /// Returns `None` when the pipe has no opening on `entry`.
    pub fn exit(self, entry: Direction) -> Option<Direction> {
        let [a, b] = self.sides();
        if entry == a {
            Some(b)
        } else if entry == b {
            Some(a)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Ground,
    Origin,
    Pipe(Pipe),
}

impl Tile {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Ground),
            'S' => Some(Self::Origin),
            other => Pipe::from_char(other).map(Self::Pipe),
        }
    }
}

/// Rectangular, read-only tile grid with exactly one origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeGrid {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    origin: Position,
}

impl PipeGrid {
    /// Parse the grid from puzzle text. Blank lines are skipped and trailing
    /// whitespace is ignored.
    pub fn parse(input: &str) -> PuzzleResult<Self> {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut origin = None;

        let rows = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty());
        for (row, line) in rows.enumerate() {
            let row_width = line.chars().count();
            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(PuzzleError::malformed(format!(
                        "row {row} has width {row_width}, expected {expected}"
                    )));
                }
                Some(_) => {}
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or_else(|| {
                    PuzzleError::malformed(format!(
                        "unexpected character '{ch}' at row {row}, column {col}"
                    ))
                })?;
                if tile == Tile::Origin {
                    if let Some(first) = origin {
                        return Err(PuzzleError::malformed(format!(
                            "second origin at {} (first at {first})",
                            Position::new(row, col)
                        )));
                    }
                    origin = Some(Position::new(row, col));
                }
                tiles.push(tile);
            }
            height += 1;
        }

        let width = width.ok_or_else(|| PuzzleError::malformed("grid is empty"))?;
        let origin = origin.ok_or_else(|| PuzzleError::malformed("grid has no origin 'S'"))?;
        Ok(Self {
            tiles,
            width,
            height,
            origin,
        })
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        if position.row < self.height && position.col < self.width {
            Some(self.tiles[position.row * self.width + position.col])
        } else {
            None
        }
    }

    fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let next = position.step(direction)?;
        self.tile(next).map(|_| next)
    }

    /// The two sides through which the loop passes `position`.
    ///
    /// A pipe reports its own openings. For the origin the shape is unknown,
    /// so a side counts when the neighbor there opens back toward it.
    pub fn connections_at(&self, position: Position) -> PuzzleResult<[Direction; 2]> {
        match self.tile(position) {
            Some(Tile::Pipe(pipe)) => Ok(pipe.sides()),
            Some(Tile::Origin) => {
                let connected: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .filter(|&side| {
                        self.neighbor(position, side)
                            .and_then(|next| self.tile(next))
                            .is_some_and(|tile| {
                                matches!(tile, Tile::Pipe(pipe) if pipe.opens_to(side.opposite()))
                            })
                    })
                    .collect();
                match connected.as_slice() {
                    [a, b] => Ok([*a, *b]),
                    other => Err(PuzzleError::malformed(format!(
                        "origin {position} connects to {} neighbors, expected 2",
                        other.len()
                    ))),
                }
            }
            Some(Tile::Ground) => Err(PuzzleError::malformed(format!(
                "loop origin {position} is ground"
            ))),
            None => Err(PuzzleError::lookup(format!(
                "loop origin {position} is outside the grid"
            ))),
        }
    }
}

/// In-progress walk around the loop.
struct LoopWalk<'a> {
    grid: &'a PipeGrid,
    origin: Position,
    current: Position,
    entered_from: Direction,
}

impl<'a> LoopWalk<'a> {
    fn start(grid: &'a PipeGrid, origin: Position, direction: Direction) -> PuzzleResult<Self> {
        let current = grid.neighbor(origin, direction).ok_or_else(|| {
            PuzzleError::malformed(format!("origin {origin} has no neighbor to the {direction}"))
        })?;
        Ok(Self {
            grid,
            origin,
            current,
            entered_from: direction.opposite(),
        })
    }

    fn is_closed(&self) -> bool {
        self.current == self.origin
    }

    fn advance(&mut self) -> PuzzleResult<()> {
        let position = self.current;
        let exit = match self.grid.tile(position) {
            Some(Tile::Pipe(pipe)) => pipe.exit(self.entered_from).ok_or_else(|| {
                PuzzleError::malformed(format!(
                    "dead end at {position}: pipe has no opening to the {}",
                    self.entered_from
                ))
            })?,
            Some(Tile::Ground) => {
                return Err(PuzzleError::malformed(format!(
                    "loop runs onto ground at {position}"
                )));
            }
            Some(Tile::Origin) => {
                let [a, b] = self.grid.connections_at(position)?;
                if self.entered_from == a {
                    b
                } else if self.entered_from == b {
                    a
                } else {
                    return Err(PuzzleError::malformed(format!(
                        "loop enters origin {position} from the {}, which it does not connect to",
                        self.entered_from
                    )));
                }
            }
            None => {
                return Err(PuzzleError::lookup(format!(
                    "position {position} is outside the grid"
                )));
            }
        };
        self.current = self.grid.neighbor(position, exit).ok_or_else(|| {
            PuzzleError::malformed(format!("pipe at {position} leads off the grid"))
        })?;
        self.entered_from = exit.opposite();
        Ok(())
    }
}

/// Length, in edges, of the loop through `origin`.
pub fn trace_loop(grid: &PipeGrid, origin: Position) -> PuzzleResult<u64> {
    let [first, _] = grid.connections_at(origin)?;
    trace_loop_from(grid, origin, first)
}

/// Like [`trace_loop`], leaving `origin` through `direction`.
pub fn trace_loop_from(
    grid: &PipeGrid,
    origin: Position,
    direction: Direction,
) -> PuzzleResult<u64> {
    let connections = grid.connections_at(origin)?;
    if !connections.contains(&direction) {
        return Err(PuzzleError::malformed(format!(
            "origin {origin} does not connect to the {direction}"
        )));
    }

    // A simple loop cannot have more edges than the grid has cells.
    let limit = grid.cell_count() as u64;
    let mut walk = LoopWalk::start(grid, origin, direction)?;
    let mut steps: u64 = 1;
    while !walk.is_closed() {
        if steps > limit {
            return Err(PuzzleError::no_termination(
                steps,
                format!("loop from {origin} never returned"),
            ));
        }
        walk.advance()?;
        steps += 1;
    }

    if !connections.contains(&walk.entered_from) {
        return Err(PuzzleError::malformed(format!(
            "loop re-enters origin {origin} from the {}, which it does not connect to",
            walk.entered_from
        )));
    }
    debug!(%origin, %direction, steps, "loop closed");
    Ok(steps)
}

/// Steps from `S` to the farthest point along its loop.
pub fn farthest_distance(grid: &PipeGrid) -> PuzzleResult<u64> {
    Ok(trace_loop(grid, grid.origin())? / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{PIPE_MAZE_COMPLEX, PIPE_MAZE_SQUARE};

    fn grid(text: &str) -> PipeGrid {
        PipeGrid::parse(text).expect("parse grid")
    }

    #[test]
    fn square_loop_has_length_eight() {
        let grid = grid(PIPE_MAZE_SQUARE);
        assert_eq!(grid.origin(), Position::new(1, 1));
        assert_eq!(trace_loop(&grid, grid.origin()).expect("trace"), 8);
        assert_eq!(farthest_distance(&grid).expect("distance"), 4);
    }

    #[test]
    fn complex_loop_farthest_distance_is_eight() {
        let grid = grid(PIPE_MAZE_COMPLEX);
        assert_eq!(farthest_distance(&grid).expect("distance"), 8);
    }

    #[test]
    fn unrelated_pipes_around_the_loop_are_ignored() {
        let square = grid("-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF\n");
        assert_eq!(farthest_distance(&square).expect("distance"), 4);

        let complex = grid("7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ\n");
        assert_eq!(farthest_distance(&complex).expect("distance"), 8);
    }

    /// Both ways around the loop cover the same edges.
    #[test]
    fn both_initial_directions_agree_and_are_even() {
        for text in [PIPE_MAZE_SQUARE, PIPE_MAZE_COMPLEX] {
            let grid = grid(text);
            let origin = grid.origin();
            let [a, b] = grid.connections_at(origin).expect("connections");
            let forward = trace_loop_from(&grid, origin, a).expect("forward");
            let backward = trace_loop_from(&grid, origin, b).expect("backward");
            assert_eq!(forward, backward);
            assert_eq!(forward % 2, 0);
        }
    }

    #[test]
    fn origin_connections_follow_neighbor_openings() {
        let grid = grid(PIPE_MAZE_COMPLEX);
        assert_eq!(
            grid.connections_at(grid.origin()).expect("connections"),
            [Direction::East, Direction::South]
        );
    }

    #[test]
    fn tracing_from_any_loop_pipe_gives_same_length() {
        let grid = grid(PIPE_MAZE_SQUARE);
        assert_eq!(trace_loop(&grid, Position::new(3, 3)).expect("trace"), 8);
    }

    #[test]
    fn pipe_exit_is_other_opening() {
        assert_eq!(Pipe::NorthEast.exit(Direction::North), Some(Direction::East));
        assert_eq!(Pipe::SouthWest.exit(Direction::West), Some(Direction::South));
        assert_eq!(Pipe::Vertical.exit(Direction::South), Some(Direction::North));
        assert_eq!(Pipe::Horizontal.exit(Direction::North), None);
    }

    #[test]
    fn dead_end_is_malformed() {
        let grid = grid(".....\n.S-7.\n.|.|.\n.L-..\n.....\n");
        let err = trace_loop(&grid, grid.origin()).expect_err("dead end");
        assert!(matches!(err, PuzzleError::MalformedInput(msg) if msg.contains("ground")));
    }

    #[test]
    fn pipe_without_matching_opening_is_malformed() {
        let grid = grid("S7\n|J\n");
        let err = trace_loop_from(&grid, grid.origin(), Direction::East).expect_err("dead end");
        assert!(matches!(err, PuzzleError::MalformedInput(msg) if msg.contains("dead end")));
    }

    #[test]
    fn leaving_the_grid_is_malformed() {
        let grid = grid("S-\n|.\n");
        let err = trace_loop_from(&grid, grid.origin(), Direction::East).expect_err("off grid");
        assert!(matches!(err, PuzzleError::MalformedInput(msg) if msg.contains("off the grid")));
    }

    #[test]
    fn origin_with_more_than_two_connections_is_malformed() {
        let grid = grid(".|.\n-S-\n.|.\n");
        let err = grid.connections_at(grid.origin()).expect_err("ambiguous");
        assert_eq!(
            err,
            PuzzleError::malformed("origin (1, 1) connects to 4 neighbors, expected 2")
        );
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        assert_eq!(
            PipeGrid::parse("S-7\n|.\n").expect_err("ragged"),
            PuzzleError::malformed("row 1 has width 2, expected 3")
        );
        assert!(matches!(
            PipeGrid::parse("...\n.-.\n").expect_err("no origin"),
            PuzzleError::MalformedInput(_)
        ));
        assert!(matches!(
            PipeGrid::parse("S.S\n").expect_err("two origins"),
            PuzzleError::MalformedInput(_)
        ));
        assert!(matches!(
            PipeGrid::parse("S#.\n").expect_err("bad char"),
            PuzzleError::MalformedInput(_)
        ));
        assert!(matches!(
            PipeGrid::parse("\n\n").expect_err("empty"),
            PuzzleError::MalformedInput(_)
        ));
    }
}
