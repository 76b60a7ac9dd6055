//! TUI application for the Housie number caller.
//!
//! This module provides the board renderer: a ratatui single-screen UI that
//! consumes read-only caller snapshots and emits the three user intents
//! (start-or-resume, pause, restart). All game logic stays in the caller.

use anyhow::Result;
use chrono::{DateTime, Utc};
use housie::{
    CallerHandle, CallerView, GameStatus,
    constants::{BOARD_COLUMNS, BOARD_ROWS, POOL_MAX},
};
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Cell, List, ListDirection, ListItem, Padding, Paragraph, Row, Table},
};
use std::time::Duration;

const MAX_LOG_RECORDS: usize = 256;
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Board color palettes, a terminal take on the original dark/light themes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Palette {
    Dark,
    Light,
}

impl Palette {
    fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Style for one board cell.
fn cell_style(palette: Palette, called: bool, current: bool) -> Style {
    if current {
        return Style::default().fg(Color::White).bg(Color::Blue).bold();
    }
    match (palette, called) {
        (Palette::Dark, true) => Style::default().fg(Color::Black).bg(Color::White),
        (Palette::Dark, false) => Style::default().fg(Color::Gray).bg(Color::Black),
        (Palette::Light, true) => Style::default().fg(Color::White).bg(Color::Black),
        (Palette::Light, false) => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

/// Label for the space-bar control in the current status.
fn toggle_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "start",
        GameStatus::Paused => "resume",
        GameStatus::Running => "pause",
        GameStatus::Over => "start",
    }
}

#[derive(Clone)]
enum RecordKind {
    Call,
    Game,
    You,
}

/// A timestamped log entry for the call history window.
#[derive(Clone)]
struct Record {
    datetime: DateTime<Utc>,
    kind: RecordKind,
    content: String,
}

impl Record {
    fn new(kind: RecordKind, content: String) -> Self {
        Self {
            datetime: Utc::now(),
            kind,
            content,
        }
    }
}

impl From<Record> for ListItem<'_> {
    fn from(val: Record) -> Self {
        let repr = match val.kind {
            RecordKind::Call => "CALL".light_yellow(),
            RecordKind::Game => "GAME".light_magenta(),
            RecordKind::You => "YOU".light_green(),
        };

        let msg = vec![
            format!("[{} ", val.datetime.format("%H:%M:%S")).into(),
            Span::styled(format!("{repr:4}"), repr.style),
            format!("]: {}", val.content).into(),
        ];

        let content = Line::from(msg);
        ListItem::new(content)
    }
}

/// TUI App state
pub struct TuiApp {
    /// Latest caller snapshot
    view: CallerView,
    /// History of recorded messages, oldest first
    records: Vec<Record>,
    /// How many entries of the snapshot history are already in the log
    logged_calls: usize,
    /// Whether the terminal announcement was already logged
    over_logged: bool,
    palette: Palette,
}

impl TuiApp {
    #[must_use]
    pub fn new(initial_view: CallerView) -> Self {
        let mut app = Self {
            view: initial_view,
            records: Vec::new(),
            logged_calls: 0,
            over_logged: false,
            palette: Palette::Dark,
        };
        let ready = app.view.announcement.clone();
        app.push_record(RecordKind::Game, ready);
        app
    }

    fn push_record(&mut self, kind: RecordKind, content: String) {
        if self.records.len() == MAX_LOG_RECORDS {
            self.records.remove(0);
        }
        self.records.push(Record::new(kind, content));
    }

    /// Fold a new snapshot into the app, journaling fresh calls.
    fn apply_view(&mut self, view: CallerView) {
        if view.history.len() < self.logged_calls {
            // the pool was rebuilt, start the journal over
            self.logged_calls = 0;
            self.over_logged = false;
            self.push_record(RecordKind::Game, view.announcement.clone());
        }

        let fresh: Vec<u8> = view.history[self.logged_calls..].to_vec();
        for number in fresh {
            self.push_record(RecordKind::Call, format!("Number {number}"));
        }
        self.logged_calls = view.history.len();

        if view.status == GameStatus::Over && !self.over_logged {
            self.over_logged = true;
            self.push_record(RecordKind::Game, view.announcement.clone());
        }

        self.view = view;
    }

    /// Render the current-number banner
    fn draw_banner(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let number_repr = match self.view.current {
            Some(number) => format!("  {number}  "),
            None => "  --  ".to_string(),
        };
        let lines = vec![
            Line::from(Span::styled(
                number_repr,
                Style::default().bold().reversed(),
            )),
            Line::from(self.view.announcement.as_str()),
        ];
        let banner = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .padding(Padding::horizontal(1))
                .title(" now calling  "),
        );
        frame.render_widget(banner, area);
    }

    /// Render the 90-cell board, called numbers highlighted
    fn draw_board(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let rows = (0..BOARD_ROWS).map(|row| {
            Row::new((0..BOARD_COLUMNS).map(|col| {
                let number = (row * BOARD_COLUMNS + col + 1) as u8;
                let called = self.view.called.contains(&number);
                let current = self.view.current == Some(number);
                Cell::new(Text::from(number.to_string()).alignment(Alignment::Center))
                    .style(cell_style(self.palette, called, current))
            }))
        });

        let widths = vec![Constraint::Fill(1); BOARD_COLUMNS as usize];
        let board = Table::new(rows, widths).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" board  ")
                .title_bottom(format!(
                    " called: {}/{}  remaining: {}  ",
                    self.view.called_count, POOL_MAX, self.view.remaining_count
                )),
        );
        frame.render_widget(board, area);
    }

    /// Render the call-history window
    fn draw_log(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let log_records = List::new(
            self.records
                .iter()
                .rev()
                .map(|record| ListItem::from(record.clone())),
        )
        .direction(ListDirection::BottomToTop)
        .block(Block::bordered().title(" history  "));
        frame.render_widget(log_records, area);
    }

    /// Render the help/status bar at the bottom
    fn draw_help_bar(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let status_indicator = match self.view.status {
            GameStatus::Idle => "● idle".into(),
            GameStatus::Running => "● running".green(),
            GameStatus::Paused => "● paused".yellow(),
            GameStatus::Over => "● over".red(),
        };

        let help_message = vec![
            status_indicator,
            " | press ".into(),
            "Space".bold().white(),
            format!(" to {}, ", toggle_label(self.view.status)).into(),
            "r".bold().white(),
            " to restart, ".into(),
            "t".bold().white(),
            " to switch theme, or ".into(),
            "Esc".bold().white(),
            " to exit".into(),
        ];
        let help_message = Paragraph::new(Line::from(help_message));
        frame.render_widget(help_message, area);
    }

    /// Main draw function - orchestrates rendering of all UI components
    fn draw(&self, frame: &mut Frame) {
        let window = Layout::vertical([
            Constraint::Length(4),  // Current number banner
            Constraint::Min(10),    // Board + history
            Constraint::Length(1),  // Help bar
        ]);
        let [banner_area, main_area, help_area] = window.areas(frame.area());

        let [board_area, log_area] =
            Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
                .areas(main_area);

        self.draw_banner(frame, banner_area);
        self.draw_board(frame, board_area);
        self.draw_log(frame, log_area);
        self.draw_help_bar(frame, help_area);
    }

    /// Run the TUI application
    pub async fn run(mut self, handle: CallerHandle, mut terminal: DefaultTerminal) -> Result<()> {
        let mut updates = handle.subscribe(MAX_LOG_RECORDS).await?;

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            // Check for keyboard input
            if event::poll(POLL_TIMEOUT)?
                && let Event::Key(KeyEvent { code, kind, .. }) = event::read()?
                && kind == KeyEventKind::Press
            {
                match code {
                    KeyCode::Char(' ') => {
                        let label = toggle_label(self.view.status);
                        let response = if self.view.status == GameStatus::Running {
                            handle.pause().await?
                        } else {
                            handle.start().await?
                        };
                        if response.is_accepted() {
                            self.push_record(RecordKind::You, label.to_string());
                        }
                    }
                    KeyCode::Char('r') => {
                        handle.restart().await?;
                        self.push_record(RecordKind::You, "restart".to_string());
                    }
                    KeyCode::Char('t') => self.palette = self.palette.toggled(),
                    KeyCode::Esc | KeyCode::Char('q') => {
                        let _ = handle.close().await;
                        return Ok(());
                    }
                    _ => {}
                }
            }

            // Check for new caller snapshots
            while let Ok(new_view) = updates.try_recv() {
                self.apply_view(new_view);
            }
        }
    }
}
