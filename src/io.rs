use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Braille dots across one terminal character
pub const DOTS_X: usize = 2;

/// Braille dots down one terminal character
pub const DOTS_Y: usize = 4;

/// Size in dots of the drawing area of a `cols` x `rows` terminal. The bottom row is kept for the
/// title line.
pub fn display_area(cols: u16, rows: u16) -> (usize, usize) {
    let rows = rows.saturating_sub(1);

    (cols as usize * DOTS_X, rows as usize * DOTS_Y)
}

/// Converts a crossterm event into a simulation event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    let engine = |e| Some(Event::EngineEvent(e));

    match event {
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            } => Some(Event::AppEvent(AppEvent::Exit)),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => engine(EngineEvent::TogglePause),
            KeyEvent {
                code: KeyCode::Char('n') | KeyCode::Enter,
                ..
            } => engine(EngineEvent::Step),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => engine(EngineEvent::Reset),
            KeyEvent {
                code: KeyCode::Char('+' | '='),
                ..
            } => engine(EngineEvent::GrowCells),
            KeyEvent {
                code: KeyCode::Char('-'),
                ..
            } => engine(EngineEvent::ShrinkCells),
            KeyEvent {
                code: KeyCode::Up | KeyCode::Char('f'),
                ..
            } => engine(EngineEvent::Faster),
            KeyEvent {
                code: KeyCode::Down | KeyCode::Char('s'),
                ..
            } => engine(EngineEvent::Slower),
            _ => None,
        },
        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => engine(EngineEvent::Toggle {
            x: column as usize * DOTS_X,
            y: row as usize * DOTS_Y,
        }),
        CrossTermEvent::Resize(cols, rows) => {
            let (width, height) = display_area(cols, rows);

            engine(EngineEvent::Resize { width, height })
        }
        _ => None,
    }
}
