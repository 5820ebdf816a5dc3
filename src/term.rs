use std::collections::HashSet;
use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use log::error;

use crate::game::Scene;
use crate::grid::{Cell, Grid};
use crate::settings::{Palette, Rgb};

const CELL_GLYPH: &str = "[]";
const EMPTY_GLYPH: &str = "  ";
const CELL_COLUMNS: u16 = 2;
const WINDOW_TITLE: &str = "Snake";

/// The display surface. Terminal state is restored when this is dropped.
pub struct TermManager {
    stdout: Stdout,
    grid: Grid,
    palette: Palette,
    painted: HashSet<Cell>,
}

impl TermManager {
    pub fn open(grid: Grid, palette: Palette) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let (need_cols, need_rows) = Self::required_size(&grid);
        if cols < need_cols || rows < need_rows {
            return Err(io::Error::other(format!(
                "Terminal is {}x{}, the board needs at least {}x{}",
                cols, rows, need_cols, need_rows
            )));
        }

        let mut term = TermManager { stdout: stdout(), grid, palette, painted: HashSet::new() };
        term.setup()?;
        term.draw_borders()?;
        term.clear_board()?;
        Ok(term)
    }

    /// Terminal columns and rows taken by the board and its frame.
    pub fn required_size(grid: &Grid) -> (u16, u16) {
        let cols = grid.width() as u16 * CELL_COLUMNS + 2;
        let rows = grid.height() as u16 + 2;
        (cols, rows)
    }

    pub fn read_events_queue(&self) -> io::Result<Vec<Event>> {
        let mut events = vec![];

        while poll(Duration::ZERO)? {
            events.push(read()?);
        }

        Ok(events)
    }

    /// Paints the scene, blanking cells that were occupied last frame but
    /// are not anymore.
    pub fn draw(&mut self, scene: &Scene) -> io::Result<()> {
        let mut occupied: HashSet<Cell> = scene.body.iter().copied().collect();
        occupied.insert(scene.head);
        occupied.insert(scene.food);

        let stale: Vec<Cell> = self.painted.difference(&occupied).copied().collect();
        for cell in stale {
            self.paint_empty(cell)?;
        }

        self.paint_cell(scene.food, self.palette.food)?;
        for cell in &scene.body {
            self.paint_cell(*cell, self.palette.snake)?;
        }
        self.paint_cell(scene.head, self.palette.head)?;

        self.painted = occupied;
        self.flush()
    }

    pub fn clear_board(&mut self) -> io::Result<()> {
        let cells: Vec<Cell> = self.grid.cells().collect();
        for cell in cells {
            self.paint_empty(cell)?;
        }
        self.painted.clear();
        self.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(WINDOW_TITLE))?;
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            cursor::Hide,
            cursor::DisableBlinking,
            terminal::Clear(ClearType::All)
        )
    }

    fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
    }

    fn draw_borders(&mut self) -> io::Result<()> {
        let (width, height) = Self::required_size(&self.grid);
        let (end_x, end_y) = (width - 1, height - 1);

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    fn paint_cell(&mut self, cell: Cell, fill: Rgb) -> io::Result<()> {
        let (col, row) = Self::screen_pos(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            style::SetForegroundColor(rgb(self.palette.border)),
            style::SetBackgroundColor(rgb(fill)),
            style::Print(CELL_GLYPH),
            style::ResetColor
        )
    }

    fn paint_empty(&mut self, cell: Cell) -> io::Result<()> {
        let (col, row) = Self::screen_pos(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            style::SetBackgroundColor(rgb(self.palette.background)),
            style::Print(EMPTY_GLYPH),
            style::ResetColor
        )
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn screen_pos(cell: Cell) -> (u16, u16) {
        (1 + cell.0 as u16 * CELL_COLUMNS, 1 + cell.1 as u16)
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            error!("Failed to restore terminal: {}", err);
        }
    }
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
