//! Terminal replay of a recorded grid search using crossterm.
//!
//! Run: cargo run --bin gridwalk-visualize -- --algorithm astar

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use clap::Parser;
use gridwalk_demos::{Args, Canvas, CellKind};
use gridwalk_search::Recording;

fn cell_color(kind: CellKind) -> Color {
    match kind {
        CellKind::Empty => Color::DarkGrey,
        CellKind::Visited => Color::Blue,
        CellKind::Frontier => Color::Cyan,
        CellKind::Path => Color::Yellow,
        CellKind::Start => Color::Green,
        CellKind::Finish => Color::Red,
    }
}

fn draw(out: &mut impl Write, canvas: &Canvas, status: &str) -> io::Result<()> {
    for (y, row) in canvas.rows().enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        for &kind in row {
            queue!(out, SetForegroundColor(cell_color(kind)), Print(kind.glyph()))?;
        }
    }
    let status_row = canvas.viewport().height() as u16 + 1;
    queue!(
        out,
        ResetColor,
        cursor::MoveTo(0, status_row),
        terminal::Clear(ClearType::CurrentLine),
        Print(status)
    )?;
    out.flush()
}

/// Wait up to `timeout` for a key press. Returns `true` for a quit key.
fn quit_requested(timeout: Duration) -> io::Result<bool> {
    if !event::poll(timeout)? {
        return Ok(false);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
        )),
        _ => Ok(false),
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn replay(out: &mut impl Write, recording: &Recording, args: &Args) -> io::Result<()> {
    let mut canvas = Canvas::new(args.viewport());
    let mut playback = recording.playback();
    let total = recording.len();

    loop {
        let state = playback.current();
        canvas.paint(state, recording.finish);
        let status = format!(
            "{}  frame {}/{}  visited {}  [q] quit",
            recording.algorithm,
            playback.position() + 1,
            total,
            state.snapshot().visited.len()
        );
        draw(out, &canvas, &status)?;

        if playback.is_finished() {
            break;
        }
        if quit_requested(args.tick())? {
            return Ok(());
        }
        playback.advance();
    }

    let result = &recording.result;
    let summary = match result.steps() {
        Some(steps) => format!(
            "{}: {} steps, {} cells visited. Press any key.",
            recording.algorithm,
            steps,
            result.visited.len()
        ),
        None => format!("{}: target unreachable. Press any key.", recording.algorithm),
    };
    draw(out, &canvas, &summary)?;
    wait_for_key()
}

fn run(args: Args) -> io::Result<()> {
    let viewport = args.viewport();
    for (name, p) in [("start", args.start), ("finish", args.finish)] {
        if !viewport.contains(p) {
            log::warn!("{} {} lies outside the {} viewport", name, p, viewport);
        }
    }

    let recording = Recording::capture(args.algorithm, args.config(), args.start, args.finish);
    log::info!(
        "{} {} -> {}: {} frames, path of {} cells",
        recording.algorithm,
        args.start,
        args.finish,
        recording.len(),
        recording.result.path.len()
    );

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )?;

    let result = replay(&mut stdout, &recording, &args);

    if let Err(e) = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen) {
        log::warn!("failed to restore the terminal screen: {}", e);
    }
    if let Err(e) = terminal::disable_raw_mode() {
        log::warn!("failed to leave raw mode: {}", e);
    }
    result
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
