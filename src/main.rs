use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use vleague_terminal::config::ShuffleConfig;
use vleague_terminal::data_fetch::{load_dataset, resolve_source};
use vleague_terminal::dataset::{Book, fallback_dataset};
use vleague_terminal::shuffle::{date_key_for, shuffle_dataset};
use vleague_terminal::state::{AppState, ConfidenceFilter, Screen, SortMode};

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.set_tab(Book::Mozzartedge),
            KeyCode::Char('2') => self.state.set_tab(Book::Betika),
            KeyCode::Char('3') => self.state.set_tab(Book::Odibet),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.state.screen = Screen::Results;
                self.state.selected = 0;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.state.screen = Screen::TopPicks;
                self.state.selected = 0;
            }
            KeyCode::Char('b') | KeyCode::Esc => {
                self.state.screen = Screen::Predictions;
                self.state.selected = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('s') => {
                self.state.cycle_sort();
                let label = sort_label(self.state.sort);
                self.state.push_log(format!("[INFO] Sort: {label}"));
            }
            KeyCode::Char('f') => {
                self.state.cycle_filter();
                let label = filter_label(self.state.filter);
                self.state.push_log(format!("[INFO] Confidence filter: {label}"));
            }
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let source = resolve_source();
    let (dataset, used_fallback) = match load_dataset(&source) {
        Ok(dataset) => (dataset, false),
        Err(_) => (fallback_dataset(), true),
    };

    let today = chrono::Local::now().date_naive();
    let date_key = date_key_for(today);
    let cfg = ShuffleConfig::from_env();
    let shuffled = shuffle_dataset(&dataset, &date_key, &cfg)?;

    let mut state = AppState::new(shuffled, date_key);
    if used_fallback {
        state.push_log(format!(
            "[WARN] Dataset unavailable at {source}, using built-in board"
        ));
    } else {
        state.push_log(format!("[INFO] Loaded dataset from {source}"));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(state);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Predictions => render_predictions(frame, chunks[1], &app.state),
        Screen::Results => render_results(frame, chunks[1], &app.state),
        Screen::TopPicks => render_picks(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state)).block(
        Block::default()
            .title("Console")
            .borders(Borders::TOP),
    );
    frame.render_widget(console, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let screen = match state.screen {
        Screen::Predictions => format!(
            "{} | Sort: {} | Filter: {}",
            state.tab.label(),
            sort_label(state.sort),
            filter_label(state.filter)
        ),
        Screen::Results => "Yesterday's Results".to_string(),
        Screen::TopPicks => "Top Picks".to_string(),
    };
    let line1 = format!("VLEAGUE TERMINAL | {}", state.date_key);
    let line2 = format!("{screen} | {}", footer_hint(state.screen));
    format!("{line1}\n{line2}")
}

fn footer_hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Predictions => "1/2/3 Book | s Sort | f Filter | t Picks | r Results | ? Help | q Quit",
        Screen::Results | Screen::TopPicks => "b/Esc Back | ? Help | q Quit",
    }
}

fn render_predictions(frame: &mut Frame, area: Rect, state: &AppState) {
    let entries = state.visible_entries();
    if entries.is_empty() {
        let empty = Paragraph::new("No predictions match the current filter")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "   {:<38} {:>8}  {:<12} {:>6}  {:<16} {}",
            "MATCH", "KICKOFF", "PREDICTION", "ODDS", "CONFIDENCE", "STATUS"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (idx, entry) in entries.iter().enumerate() {
        let selected = idx == state.selected;
        let prefix = if selected { " > " } else { "   " };
        let row = format!(
            "{prefix}{:<38} {:>8}  {:<12} {:>6.2}  {:<16} {}",
            truncate(&entry.match_name, 38),
            entry.kickoff,
            truncate(&entry.prediction, 12),
            entry.odds,
            confidence_cell(entry.confidence),
            entry.status,
        );
        let style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default().fg(confidence_color(entry.confidence))
        };
        lines.push(Line::from(Span::styled(row, style)));
    }

    let board = Paragraph::new(lines);
    frame.render_widget(board, area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let s = state.summary;
    let summary = Paragraph::new(format!(
        "Played: {} | Won: {} | Lost: {} | Win rate: {:.1}% | Net: {} KSh",
        s.played, s.won, s.lost, s.win_rate_pct, s.net_profit_ksh
    ))
    .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(summary, chunks[0]);

    let mut lines = Vec::new();
    for book in [Book::Mozzartedge, Book::Betika, Book::Odibet] {
        let rows = state.dataset.results.for_book(book);
        if rows.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            book.label().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for row in rows {
            let color = match row.status.as_str() {
                "won" => Color::Green,
                "lost" => Color::Red,
                _ => Color::Gray,
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "  {:<38} {:<12} {:>6.2}  {:<6} {:<5} {}",
                    truncate(&row.match_name, 38),
                    truncate(&row.prediction, 12),
                    row.odds,
                    row.result,
                    row.status.to_uppercase(),
                    row.profit,
                ),
                Style::default().fg(color),
            )));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No results in the dataset",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

fn render_picks(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.picks.is_empty() {
        let empty = Paragraph::new("No picks above the confidence threshold")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    for (idx, pick) in state.picks.iter().enumerate() {
        let selected = idx == state.selected;
        let prefix = if selected { " > " } else { "   " };
        let style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default().fg(confidence_color(pick.entry.confidence))
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{prefix}{:<12} {:<38} {:<12} {:>6.2}  {}",
                pick.book.label(),
                truncate(&pick.entry.match_name, 38),
                truncate(&pick.entry.prediction, 12),
                pick.entry.odds,
                confidence_cell(pick.entry.confidence),
            ),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn confidence_cell(confidence: u8) -> String {
    let filled = (usize::from(confidence.min(100)) * 10).div_ceil(100);
    let bar: String = "#".repeat(filled) + &"-".repeat(10 - filled);
    format!("[{bar}] {confidence:>3}%")
}

fn confidence_color(confidence: u8) -> Color {
    if confidence >= 80 {
        Color::Green
    } else if confidence >= 60 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn truncate(raw: &str, max: usize) -> String {
    if raw.chars().count() <= max {
        return raw.to_string();
    }
    let cut: String = raw.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

fn sort_label(sort: SortMode) -> &'static str {
    match sort {
        SortMode::Kickoff => "KICKOFF",
        SortMode::Odds => "ODDS",
        SortMode::Confidence => "CONF",
    }
}

fn filter_label(filter: ConfidenceFilter) -> &'static str {
    match filter {
        ConfidenceFilter::All => "ALL",
        ConfidenceFilter::High => "HIGH 80+",
        ConfidenceFilter::Medium => "MED 60-79",
        ConfidenceFilter::Low => "LOW <60",
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "VLeague Terminal - Help",
        "",
        "Global:",
        "  1 / 2 / 3    Mozzartedge / Betika / Odibet",
        "  t            Top picks",
        "  r            Yesterday's results",
        "  b / Esc      Back to predictions",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Predictions:",
        "  j/k or ↑/↓   Move selection",
        "  s            Cycle sort (kickoff/odds/confidence)",
        "  f            Cycle confidence filter",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
