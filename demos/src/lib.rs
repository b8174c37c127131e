//! Shared code for the gridwalk demos: command-line arguments and the
//! viewport canvas that turns a search frame into displayable cells.

use std::time::Duration;

use clap::Parser;
use gridwalk_core::{Point, Range};
use gridwalk_search::{Algorithm, SearchConfig, SearchState, SnapshotCadence};

/// Default viewport size, in cells.
pub const WIDTH: i32 = 40;
pub const HEIGHT: i32 = 20;

// ---------------------------------------------------------------------------
// Args
// ---------------------------------------------------------------------------

/// Replay a breadth-first or A* grid search in the terminal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gridwalk-visualize", version, about, long_about = None)]
pub struct Args {
    /// Search strategy (bfs or astar)
    #[arg(short, long, default_value = "bfs")]
    pub algorithm: Algorithm,

    /// Start cell as "x,y"
    #[arg(short, long, default_value = "5,10", allow_hyphen_values = true)]
    pub start: Point,

    /// Target cell as "x,y"
    #[arg(short, long, default_value = "32,4", allow_hyphen_values = true)]
    pub finish: Point,

    /// Delay between frames, in milliseconds
    #[arg(short, long, default_value_t = 60)]
    pub tick_ms: u64,

    /// Viewport width, in cells
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Viewport height, in cells
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    /// Emit one frame per expanded cell instead of one per distance ring
    #[arg(long)]
    pub every_expansion: bool,
}

impl Args {
    /// The rendered window, anchored at the origin.
    pub fn viewport(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn config(&self) -> SearchConfig {
        if self.every_expansion {
            SearchConfig::with_cadence(SnapshotCadence::EveryExpansion)
        } else {
            SearchConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// How a viewport cell should be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellKind {
    #[default]
    Empty,
    Visited,
    Frontier,
    Path,
    Start,
    Finish,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => '·',
            CellKind::Visited => 'o',
            CellKind::Frontier => '+',
            CellKind::Path => '*',
            CellKind::Start => 'S',
            CellKind::Finish => 'F',
        }
    }
}

/// Cell classification for one frame over a fixed viewport.
///
/// Points outside the viewport are dropped; the search itself is unbounded.
#[derive(Debug, Clone)]
pub struct Canvas {
    viewport: Range,
    cells: Vec<CellKind>,
}

impl Canvas {
    pub fn new(viewport: Range) -> Self {
        Self {
            viewport,
            cells: vec![CellKind::Empty; viewport.len()],
        }
    }

    #[inline]
    pub fn viewport(&self) -> Range {
        self.viewport
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.viewport.contains(p) {
            return None;
        }
        let x = (p.x - self.viewport.min.x) as usize;
        let y = (p.y - self.viewport.min.y) as usize;
        Some(y * self.viewport.width() as usize + x)
    }

    fn set(&mut self, p: Point, kind: CellKind) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = kind;
        }
    }

    /// Cell at `p`, or `None` outside the viewport.
    pub fn get(&self, p: Point) -> Option<CellKind> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Repaint from scratch for `state`, marking `finish` as the target.
    pub fn paint(&mut self, state: SearchState<'_>, finish: Point) {
        self.cells.fill(CellKind::Empty);
        let snap = state.snapshot();
        for &p in &snap.visited {
            self.set(p, CellKind::Visited);
        }
        for &p in &snap.frontier {
            self.set(p, CellKind::Frontier);
        }
        if let Some(path) = state.path() {
            for &p in path {
                self.set(p, CellKind::Path);
            }
        }
        self.set(finish, CellKind::Finish);
        self.set(snap.start, CellKind::Start);
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.viewport.width().max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_search::{CompletedSearch, SearchSnapshot};

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("gridwalk-visualize").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_classic_grid() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.algorithm, Algorithm::BreadthFirst);
        assert_eq!(args.viewport(), Range::new(0, 0, 40, 20));
        assert!(args.viewport().contains(args.start));
        assert!(args.viewport().contains(args.finish));
        assert_eq!(args.tick(), Duration::from_millis(60));
        assert_eq!(args.config(), SearchConfig::default());
    }

    #[test]
    fn parse_full_command_line() {
        let args = parse(&[
            "--algorithm",
            "astar",
            "-s",
            "1,2",
            "--finish",
            "(9, 3)",
            "-t",
            "5",
            "--width",
            "12",
            "--height",
            "6",
            "--every-expansion",
        ])
        .unwrap();
        assert_eq!(args.algorithm, Algorithm::AStar);
        assert_eq!(args.start, Point::new(1, 2));
        assert_eq!(args.finish, Point::new(9, 3));
        assert_eq!(args.tick(), Duration::from_millis(5));
        assert_eq!(args.viewport(), Range::new(0, 0, 12, 6));
        assert_eq!(args.config().cadence, SnapshotCadence::EveryExpansion);
    }

    #[test]
    fn negative_coordinates_are_values_not_flags() {
        let args = parse(&["-s", "-2,3", "-f", "-7,-1"]).unwrap();
        assert_eq!(args.start, Point::new(-2, 3));
        assert_eq!(args.finish, Point::new(-7, -1));
    }

    #[test]
    fn parse_errors() {
        use clap::error::ErrorKind;

        fn kind(args: &[&str]) -> ErrorKind {
            parse(args).unwrap_err().kind()
        }
        assert_eq!(kind(&["--help"]), ErrorKind::DisplayHelp);
        assert_eq!(kind(&["--bogus"]), ErrorKind::UnknownArgument);
        assert!(parse(&["--start"]).is_err());
        assert_eq!(kind(&["-a", "dfs"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["--start", "1;2"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["--width", "0"]), ErrorKind::ValueValidation);
    }

    #[test]
    fn paint_layers_start_over_path_over_visited() {
        let start = Point::new(0, 0);
        let finish = Point::new(2, 0);
        let done = CompletedSearch {
            snapshot: SearchSnapshot {
                start,
                visited: vec![start, Point::new(1, 0), Point::new(0, 1)],
                frontier: vec![Point::new(1, 1), Point::new(-1, 0)],
            },
            path: vec![start, Point::new(1, 0), finish],
        };
        let mut canvas = Canvas::new(Range::new(0, 0, 3, 2));
        canvas.paint(SearchState::Complete(&done), finish);

        assert_eq!(canvas.get(start), Some(CellKind::Start));
        assert_eq!(canvas.get(Point::new(1, 0)), Some(CellKind::Path));
        assert_eq!(canvas.get(finish), Some(CellKind::Finish));
        assert_eq!(canvas.get(Point::new(0, 1)), Some(CellKind::Visited));
        assert_eq!(canvas.get(Point::new(1, 1)), Some(CellKind::Frontier));
        assert_eq!(canvas.get(Point::new(2, 1)), Some(CellKind::Empty));
        assert_eq!(canvas.get(Point::new(-1, 0)), None);

        let row0: String = canvas.rows().next().unwrap().iter().map(|c| c.glyph()).collect();
        assert_eq!(row0, "S*F");
    }

    #[test]
    fn repaint_clears_previous_frame() {
        let start = Point::new(1, 1);
        let busy = SearchSnapshot {
            start,
            visited: vec![Point::new(0, 0), Point::new(2, 2)],
            frontier: vec![],
        };
        let idle = SearchSnapshot::initial(start, vec![start]);
        let mut canvas = Canvas::new(Range::new(0, 0, 3, 3));
        canvas.paint(SearchState::InProgress(&busy), Point::new(2, 0));
        assert_eq!(canvas.get(Point::new(0, 0)), Some(CellKind::Visited));
        canvas.paint(SearchState::InProgress(&idle), Point::new(2, 0));
        assert_eq!(canvas.get(Point::new(0, 0)), Some(CellKind::Empty));
        assert_eq!(canvas.rows().count(), 3);
    }
}
