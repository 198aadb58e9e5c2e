//! Conway's Game of Life in the terminal.
//!
//! Cells are drawn with braille characters, 2x4 dots per character. Controls:
//!
//! * Space: pause / resume
//! * Left click: flip a cell (paused only)
//! * n, Enter: advance one generation (paused only)
//! * r: kill every cell (paused only)
//! * +, -: larger / smaller cells (paused only)
//! * Up, Down: faster / slower
//! * q, Esc, Ctrl-C: quit
//!
//! Logs go to stderr, filtered by `RUST_LOG`. Redirect them, as in `gridlife 2> life.log`, to keep
//! them off the screen.

use std::io;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridlife::canvas::Canvas;
use gridlife::config::Config;
use gridlife::events::AppEvent;
use gridlife::events::Event;
use gridlife::io::DOTS_X;
use gridlife::io::convert_event;
use gridlife::io::display_area;
use gridlife::simulation::Simulation;

const FRAMERATE: u32 = 60;
const FRAMETIME: Duration = Duration::from_millis(1_000 / FRAMERATE as u64);

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::from_env().context("Invalid configuration")?;
    let (cols, rows) = terminal::size().context("Failed to read the terminal size")?;
    config.display = display_area(cols, rows);

    let sim = Simulation::new(config).context("Invalid configuration")?;

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )
    .context("Failed to set up the terminal")?;

    // Put the terminal back even if the loop failed
    let res = run(&mut stdout, sim);

    let restored = execute!(
        stdout,
        cursor::Show,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    );
    let raw_mode = terminal::disable_raw_mode();

    first_error(res, restored, raw_mode)
}

/// The loop's own error wins over any failure to put the terminal back.
fn first_error(
    res: anyhow::Result<()>,
    restored: io::Result<()>,
    raw_mode: io::Result<()>,
) -> anyhow::Result<()> {
    res?;
    restored.context("Failed to restore the terminal")?;
    raw_mode.context("Failed to disable raw mode")?;

    Ok(())
}

fn run(stdout: &mut io::Stdout, mut sim: Simulation) -> anyhow::Result<()> {
    let (width, height) = sim.display();
    let mut canvas = Canvas::new(width, height);
    let mut last_tick = Instant::now();

    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    loop {
        draw(stdout, &mut canvas, &sim)?;

        // Poll events until the next frame, or the next generation if that comes first
        let timeout = if sim.is_paused() {
            FRAMETIME
        } else {
            sim.tick_interval()
                .saturating_sub(last_tick.elapsed())
                .min(FRAMETIME)
        };

        if event::poll(timeout)? {
            match convert_event(event::read()?) {
                None => {}
                Some(Event::AppEvent(AppEvent::Exit)) => break,
                Some(Event::EngineEvent(event)) => sim.handle(event),
            }
        }

        let (width, height) = sim.display();
        if (width, height) != (canvas.width(), canvas.height()) {
            canvas.resize(width, height);
            execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        if sim.is_paused() {
            last_tick = Instant::now();
        } else if last_tick.elapsed() >= sim.tick_interval() {
            sim.tick();
            last_tick = Instant::now();
        }
    }

    info!(generation = sim.generation(), "Exiting");

    Ok(())
}

fn draw(stdout: &mut io::Stdout, canvas: &mut Canvas, sim: &Simulation) -> io::Result<()> {
    let cols = canvas.width() / DOTS_X;

    canvas.clear();
    canvas.draw_grid(sim.grid(), sim.cell_size(), sim.stroke());

    queue!(stdout, cursor::MoveTo(0, 0))?;

    for line in canvas.render().lines() {
        queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    let title: String = sim.title().chars().take(cols).collect();
    queue!(
        stdout,
        style::Print(title),
        terminal::Clear(terminal::ClearType::UntilNewLine)
    )?;

    stdout.flush()
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::first_error;

    fn broken(msg: &str) -> io::Result<()> {
        Err(io::Error::other(msg.to_string()))
    }

    #[test]
    fn test_loop_error_comes_first() {
        let res = first_error(
            Err(anyhow::anyhow!("loop failed")),
            broken("no tty"),
            broken("still no tty"),
        );

        assert_eq!(res.map_err(|e| e.to_string()), Err("loop failed".to_string()));
    }

    #[test]
    fn test_restore_errors_in_order() {
        let res = first_error(Ok(()), broken("no tty"), broken("still no tty"));
        assert_eq!(
            res.map_err(|e| e.to_string()),
            Err("Failed to restore the terminal".to_string())
        );

        let res = first_error(Ok(()), Ok(()), broken("still no tty"));
        assert_eq!(
            res.map_err(|e| e.to_string()),
            Err("Failed to disable raw mode".to_string())
        );

        assert!(first_error(Ok(()), Ok(()), Ok(())).is_ok());
    }
}
