use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};

use crate::document::Document;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_lines;

/// Raw-mode terminal host: draws a document line by line and reports input.
pub struct Terminal {
    stdout: io::Stdout,
    previous_lines: Vec<String>,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            previous_lines: Vec::new(),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    pub fn render(&mut self, document: &Document) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if self.previous_lines.len() != height as usize {
            // Size changed, force a full redraw
            self.previous_lines = vec![String::from("\0"); height as usize];
        }

        let available = Rect::from_size(width, height);
        self.last_layout = layout(document, available);
        let lines = render_lines(document.root(), &self.last_layout, available);

        for (row, (line, previous)) in lines.iter().zip(&self.previous_lines).enumerate() {
            if line == previous {
                continue;
            }
            queue!(
                self.stdout,
                cursor::MoveTo(0, row as u16),
                terminal::Clear(ClearType::CurrentLine),
                Print(line)
            )?;
        }
        self.stdout.flush()?;
        self.previous_lines = lines;

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
