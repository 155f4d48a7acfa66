//! Ratatui frontend adapter
//!
//! A thin terminal frontend over `TableView`: it draws the published
//! snapshot and translates key presses into engine intents. All table
//! behavior (filtering, sorting, pagination) lives in the engine; this
//! module owns only terminal plumbing and keybindings.
//!
//! Available behind the `tui` feature.

mod error;
mod widgets;

pub use error::{Result, TuiError};

use crate::pipeline::paginate::PAGE_SIZES;
use crate::view::TableView;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Interactive terminal session around a `TableView`
pub struct TableApp {
    view: TableView,
    query: String,
    selected_column: usize,
    should_exit: bool,
}

impl TableApp {
    /// Wrap a view in a terminal session
    #[must_use]
    pub const fn new(view: TableView) -> Self {
        Self {
            view,
            query: String::new(),
            selected_column: 0,
            should_exit: false,
        }
    }

    /// Run the session until the user quits
    ///
    /// # Errors
    /// Returns `TuiError` if the terminal cannot be set up, drawn to, or
    /// polled for events.
    pub fn run(mut self) -> Result<TableView> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::cleanup_terminal()?;
        result?;
        Ok(self.view)
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_exit {
            terminal.draw(|frame| self.render(frame))?;

            // Wake up for the pending filter commit, or at a steady cadence
            let timeout = self
                .view
                .next_deadline()
                .map_or(Duration::from_millis(250), |deadline| {
                    deadline.saturating_duration_since(Instant::now())
                });

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }

            self.view.tick(Instant::now());
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Left => self.view.go_previous(),
            KeyCode::Right => self.view.go_next(),
            KeyCode::Home => self.view.go_first(),
            KeyCode::End => self.view.go_last(),
            KeyCode::Tab => self.cycle_page_size(),
            KeyCode::Char('n') if ctrl => self.select_column(1),
            KeyCode::Char('p') if ctrl => self.select_column(-1),
            KeyCode::Char('s') if ctrl => self.toggle_sort_on_selected(),
            KeyCode::Char('u') if ctrl => self.update_query(String::new()),
            KeyCode::Char(c) if !ctrl => {
                let mut query = self.query.clone();
                query.push(c);
                self.update_query(query);
            }
            KeyCode::Backspace => {
                let mut query = self.query.clone();
                query.pop();
                self.update_query(query);
            }
            _ => {}
        }
    }

    fn update_query(&mut self, query: String) {
        self.query = query;
        self.view.set_pending_filter(self.query.clone(), Instant::now());
    }

    /// Step to the next enumerated page size
    fn cycle_page_size(&mut self) {
        let current = self.view.snapshot().page_size;
        let position = PAGE_SIZES.iter().position(|&s| s == current).unwrap_or(0);
        let next = PAGE_SIZES[(position + 1) % PAGE_SIZES.len()];
        self.view.set_page_size(next);
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn select_column(&mut self, step: isize) {
        let count = self.view.columns().len();
        if count == 0 {
            return;
        }
        let next = (self.selected_column as isize + step).rem_euclid(count as isize);
        self.selected_column = next as usize;
    }

    fn toggle_sort_on_selected(&mut self) {
        if let Some(column) = self.view.columns().specs().get(self.selected_column) {
            let key = column.key.clone();
            self.view.toggle_sort(&key);
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let snapshot = self.view.snapshot();

        frame.render_widget(
            widgets::FilterBar::new(&self.query, self.view.pending_query().is_some()),
            chunks[0],
        );
        frame.render_widget(
            widgets::build_table(&snapshot, self.view.columns(), self.selected_column),
            chunks[1],
        );
        frame.render_widget(widgets::StatusLine::new(&snapshot), chunks[2]);
        frame.render_widget(Paragraph::new(widgets::help_line()), chunks[3]);
    }
}
