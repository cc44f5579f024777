//! Interactive pad demo - drive the eight buttons with the mouse.
//!
//! Runs in the alternate screen with mouse capture. Click and drag across
//! the buttons and watch the command stream at the bottom; sliding from
//! one button to another emits Cancel plus Hold, lifting emits Release.
//!
//! Run with: cargo run --example interactive

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use vpad::source::{disable_mouse, enable_mouse};
use vpad::{ButtonRegion, InputCommand, InputDelegate, InputKey, MouseAdapter, Rect, TouchController};

/// Command tail length shown at the bottom.
const LOG_LINES: usize = 8;

/// Row where the command tail starts.
const LOG_ROW: u16 = 15;

const BUTTON_W: f32 = 7.0;
const BUTTON_H: f32 = 3.0;

// =============================================================================
// Command log delegate
// =============================================================================

/// Keeps the delivered command tail for display.
#[derive(Default)]
struct CommandLog {
    entries: RefCell<Vec<InputCommand>>,
}

impl CommandLog {
    fn tail(&self) -> Vec<InputCommand> {
        self.entries.borrow().clone()
    }
}

impl InputDelegate for CommandLog {
    fn handle(&self, command: InputCommand) {
        let mut entries = self.entries.borrow_mut();
        entries.push(command);
        let excess = entries.len().saturating_sub(LOG_LINES);
        if excess > 0 {
            entries.drain(..excess);
        }
    }
}

// =============================================================================
// Terminal guard
// =============================================================================

/// Best-effort terminal restore on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        enable_mouse()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_mouse();
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// =============================================================================
// Layout and drawing
// =============================================================================

/// Button table in terminal cell space (y grows downward, so the Up
/// button takes the smaller row).
fn demo_regions() -> [ButtonRegion; 8] {
    let button = |key, col, row| ButtonRegion::new(key, Rect::centered_at(col, row, BUTTON_W, BUTTON_H));
    [
        button(InputKey::Up, 16.0, 5.0),
        button(InputKey::Down, 16.0, 11.0),
        button(InputKey::Left, 8.0, 8.0),
        button(InputKey::Right, 24.0, 8.0),
        button(InputKey::X, 54.0, 5.0),
        button(InputKey::Y, 46.0, 8.0),
        button(InputKey::A, 62.0, 8.0),
        button(InputKey::B, 54.0, 11.0),
    ]
}

fn draw_button(out: &mut impl Write, region: &ButtonRegion) -> io::Result<()> {
    // Pressed buttons draw bright, idle ones dim - the terminal stand-in
    // for the alpha contract.
    let (bg, fg) = if region.is_pressed() {
        (Color::White, Color::Black)
    } else {
        (Color::DarkGrey, Color::White)
    };

    let bounds = region.bounds();
    let left = bounds.min_x().ceil() as u16;
    let top = bounds.min_y().ceil() as u16;
    let width = bounds.width as usize;
    let rows = bounds.height as u16;
    let label_row = top + rows / 2;

    for row in top..top + rows {
        queue!(
            out,
            cursor::MoveTo(left, row),
            SetBackgroundColor(bg),
            SetForegroundColor(fg)
        )?;
        if row == label_row {
            queue!(out, Print(format!("{:^width$}", region.key().label())))?;
        } else {
            queue!(out, Print(" ".repeat(width)))?;
        }
        queue!(out, ResetColor)?;
    }
    Ok(())
}

fn draw(out: &mut impl Write, pad: &TouchController, log: &CommandLog) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(2, 1),
        Print("vpad demo - click and drag the buttons, q or Esc quits")
    )?;

    for region in pad.regions() {
        draw_button(out, region)?;
    }

    let held: Vec<&str> = pad.pressed().keys().map(InputKey::label).collect();
    queue!(
        out,
        cursor::MoveTo(2, LOG_ROW - 2),
        Print(format!("held: {}", held.join(" ")))
    )?;

    queue!(out, cursor::MoveTo(2, LOG_ROW - 1), Print("commands:"))?;
    for (line, command) in log.tail().iter().enumerate() {
        queue!(
            out,
            cursor::MoveTo(4, LOG_ROW + line as u16),
            Print(format!("{command:?}"))
        )?;
    }
    out.flush()
}

// =============================================================================
// Main
// =============================================================================

fn main() -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut out = io::stdout();

    let mut pad = TouchController::new(demo_regions());
    let log = Rc::new(CommandLog::default());
    pad.set_delegate(&log);
    let mut adapter = MouseAdapter::new();

    draw(&mut out, &pad, &log)?;
    loop {
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => break,
            Event::Mouse(mouse) => {
                adapter.feed(&mouse, &mut pad);
                draw(&mut out, &pad, &log)?;
            }
            Event::Resize(..) => draw(&mut out, &pad, &log)?,
            _ => {}
        }
    }

    pad.reset();
    Ok(())
}
