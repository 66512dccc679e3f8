use std::env;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, Paragraph, Sparkline, Wrap,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use slab_tracker::format::{
    delta_color, format_thousands, format_timestamp, news_type_color, news_type_label,
    status_label, time_ago,
};
use slab_tracker::metrics::{RosterSummary, metric_bars, season_series, star_rating, win_rate_pct};
use slab_tracker::players::{PlayerData, SlabStatus};
use slab_tracker::price::{self, PriceSummary};
use slab_tracker::registry::{PlayerRegistry, registry};
use slab_tracker::state::{ActivePlayer, AppState, MAX_SELECTED_CARDS, Screen, Theme};

struct App {
    state: AppState,
    registry: &'static PlayerRegistry,
    should_quit: bool,
}

impl App {
    fn new(registry: &'static PlayerRegistry) -> Self {
        let roster = registry
            .all_slugs()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut state = AppState::new(roster);
        state.push_log(format!("[INFO] Loaded {} players", registry.len()));
        Self {
            state,
            registry,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Char('t') => self.state.toggle_theme(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('b') | KeyCode::Esc => self.state.back(),
            KeyCode::Char(' ') if self.state.screen == Screen::CardSelect => self.toggle_card(),
            KeyCode::Enter => self.on_enter(),
            KeyCode::Char('a') if self.state.screen == Screen::Analytics => {
                self.state.set_active(ActivePlayer::All)
            }
            KeyCode::Char('m') => self.state.cycle_metric(),
            KeyCode::Char('r') => self.state.toggle_price_range(),
            _ => {}
        }
    }

    fn on_enter(&mut self) {
        match self.state.screen {
            Screen::ThemePicker => {
                self.state.confirm_theme();
                self.state
                    .push_log(format!("[INFO] Theme: {}", self.state.theme.name()));
            }
            Screen::CardSelect => {
                if !self.state.enter_analytics() {
                    self.state.push_log("[WARN] Select at least one card");
                }
            }
            Screen::Analytics => self.state.focus_cursor(),
        }
    }

    fn toggle_card(&mut self) {
        if self.state.toggle_card_at_cursor() && self.state.selection_complete() {
            self.state.enter_analytics();
            self.state.push_log("[INFO] Roster complete, opening analytics");
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let _log_guard = init_file_logging();

    let registry = registry()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(registry);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

// Logging goes to a file because the terminal belongs to the UI.
fn init_file_logging() -> Option<WorkerGuard> {
    let dir = env::var("SLAB_LOG_DIR").ok()?;
    if dir.trim().is_empty() {
        return None;
    }
    let appender = tracing_appender::rolling::never(PathBuf::from(dir), "slab_tracker.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,slab_tracker=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app)).context("draw failed")?;

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
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let accent = hex_color(app.state.theme.accent());
    let header = Paragraph::new(header_text(&app.state))
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::ThemePicker => render_theme_picker(frame, chunks[1], &app.state),
        Screen::CardSelect => render_card_select(frame, chunks[1], app),
        Screen::Analytics => render_analytics(frame, chunks[1], app),
    }

    render_console(frame, chunks[2], &app.state);

    let footer = Paragraph::new(footer_text(&app.state))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let step = match state.screen {
        Screen::ThemePicker => "CHOOSE THEME",
        Screen::CardSelect => "SELECT CARDS",
        Screen::Analytics => "ANALYTICS",
    };
    format!(
        "  SLAB TRACKER | {} | {} | {}/{} cards",
        step,
        state.theme.name(),
        state.selected.len(),
        MAX_SELECTED_CARDS
    )
}

fn footer_text(state: &AppState) -> &'static str {
    match state.screen {
        Screen::ThemePicker => "t Toggle theme | Enter Confirm | ? Help | q Quit",
        Screen::CardSelect => {
            "j/k Move | Space Select | Enter Analytics | b Back | ? Help | q Quit"
        }
        Screen::Analytics => {
            "j/k Move | Enter Focus | a All | m Metric | r Range | b Back | ? Help | q Quit"
        }
    }
}

fn render_theme_picker(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = [Theme::Arena, Theme::ClassicAmber]
        .into_iter()
        .map(|theme| {
            let marker = if theme == state.theme { "▶ " } else { "  " };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    theme.name(),
                    Style::default()
                        .fg(hex_color(theme.accent()))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Theme")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, centered_rect(40, 30, area));
}

fn render_card_select(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let state = &app.state;
    let items: Vec<ListItem> = app
        .registry
        .all_players()
        .iter()
        .enumerate()
        .map(|(idx, pd)| {
            let p = &pd.player;
            let check = if state.is_selected(&p.slug) { "[x]" } else { "[ ]" };
            let mut style = Style::default();
            if idx == state.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::raw(format!("{check} {:<18} ", p.name)),
                Span::styled(
                    format!("{:<12}", status_label(p.status)),
                    Style::default().fg(status_color(p.status)),
                ),
                Span::styled(
                    p.price_change.clone(),
                    Style::default().fg(hex_color(delta_color(p.status))),
                ),
            ]))
            .style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().title("Roster").borders(Borders::ALL));
    frame.render_widget(list, cols[0]);

    let preview = state
        .roster
        .get(state.cursor)
        .and_then(|slug| app.registry.get_player(slug));
    match preview {
        Some(pd) => render_profile(frame, cols[1], pd),
        None => render_not_found(frame, cols[1]),
    }
}

fn render_profile(frame: &mut Frame, area: Rect, pd: &PlayerData) {
    let p = &pd.player;
    let cs = &pd.career_summary;
    let stars = star_rating(p.overall_score) as usize;
    let win_rate = win_rate_pct(cs)
        .map(|pct| format!("{pct}%"))
        .unwrap_or_else(|| "-".to_string());
    let lines = vec![
        Line::from(Span::styled(
            format!("{} #{} · {} · {}", p.name, p.number, p.position, p.team),
            Style::default()
                .fg(hex_color(&p.team_color))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} · {}", p.featured_card, p.price_label)),
        Line::from(format!(
            "Grade {} · Score {} {}{}",
            p.card_grade,
            p.overall_score,
            "★".repeat(stars),
            "☆".repeat(5 - stars)
        )),
        Line::from(format!("Last game: {}", p.last_game)),
        Line::from(""),
        Line::from(format!(
            "Yards {} · TD {} · INT {} · Rating {:.1}",
            format_thousands(cs.passing_yards as u64),
            cs.passing_touchdowns,
            cs.interceptions,
            cs.passer_rating
        )),
        Line::from(format!(
            "Record {}-{} ({win_rate}) · Super Bowls {} · MVPs {}",
            cs.wins, cs.losses, cs.super_bowls_won, cs.mvps
        )),
        Line::from(format!(
            "Injury risk {} · Consistency {}",
            pd.analytics_flags.injury_risk, pd.analytics_flags.consistency_score
        )),
    ];
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Player").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_analytics(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(1)])
        .split(area);

    let state = &app.state;
    let mut items = Vec::with_capacity(state.selected.len() + 1);
    let all_style = if state.active == Some(ActivePlayer::All) {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    items.push(ListItem::new("ALL PLAYERS").style(all_style));
    for (idx, slug) in state.selected.iter().enumerate() {
        let name = app
            .registry
            .get_player(slug)
            .map(|pd| pd.player.name.clone())
            .unwrap_or_else(|| slug.clone());
        let mut style = Style::default();
        if idx == state.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if state.active == Some(ActivePlayer::Player(slug.clone())) {
            style = style.add_modifier(Modifier::BOLD);
        }
        items.push(ListItem::new(format!("  {name}")).style(style));
    }
    let list = List::new(items).block(Block::default().title("Selection").borders(Borders::ALL));
    frame.render_widget(list, cols[0]);

    match &state.active {
        Some(ActivePlayer::Player(slug)) => match app.registry.get_player(slug) {
            Some(pd) => render_player_detail(frame, cols[1], state, pd),
            None => render_not_found(frame, cols[1]),
        },
        Some(ActivePlayer::All) | None => render_roster_overview(frame, cols[1], app),
    }
}

fn render_roster_overview(frame: &mut Frame, area: Rect, app: &App) {
    let players: Vec<&PlayerData> = app
        .state
        .selected
        .iter()
        .filter_map(|slug| app.registry.get_player(slug))
        .collect();
    let summary = RosterSummary::from_players(&players);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    let top = summary
        .top_player
        .map(|pd| format!("{} ({})", pd.player.card_grade, pd.player.name))
        .unwrap_or_else(|| "-".to_string());
    let avg = summary
        .avg_score
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());
    let counts = &summary.status_counts;
    let kpis = vec![
        Line::from(format!("ROSTER SIZE  {}", summary.size)),
        Line::from(format!("AVG SCORE    {avg}")),
        Line::from(format!("TOP GRADE    {top}")),
        Line::from(format!("HOT CARDS    {}", summary.hot_count)),
        Line::from(format!(
            "ON FIRE {} · HEATING {} · COOLING {} · NEUTRAL {}",
            counts.fire, counts.heating, counts.cooling, counts.neutral
        )),
    ];
    frame.render_widget(
        Paragraph::new(kpis).block(Block::default().title("Roster").borders(Borders::ALL)),
        rows[0],
    );

    let lines: Vec<Line> = players
        .iter()
        .map(|pd| {
            let history = price::price_history_for(pd.slug());
            let window = app.state.price_range.window(&history);
            let text = match PriceSummary::from_history(window) {
                Some(s) => format!(
                    "{:<18} last ${:<8} high ${:<8} low ${:<8} vol {}",
                    pd.player.name,
                    format_thousands(s.last.max(0) as u64),
                    format_thousands(s.high.max(0) as u64),
                    format_thousands(s.low.max(0) as u64),
                    s.total_volume
                ),
                None => format!("{:<18} no price data", pd.player.name),
            };
            Line::from(text)
        })
        .collect();
    let title = format!("Prices {}", app.state.price_range.label());
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL)),
        rows[1],
    );
}

fn render_player_detail(frame: &mut Frame, area: Rect, state: &AppState, pd: &PlayerData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(4),
        ])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_profile(frame, top[0], pd);
    render_metric_bars(frame, top[1], state, pd);
    render_season_chart(frame, mid[0], state, pd);
    render_price_chart(frame, mid[1], state, pd);
    render_news(frame, rows[2], pd);
}

fn render_metric_bars(frame: &mut Frame, area: Rect, state: &AppState, pd: &PlayerData) {
    const BAR_WIDTH: usize = 20;
    let accent = hex_color(state.theme.accent_bright());
    let lines: Vec<Line> = metric_bars(pd)
        .into_iter()
        .map(|bar| {
            let filled = (bar.pct as usize * BAR_WIDTH) / 100;
            Line::from(vec![
                Span::raw(format!("{:<17}", bar.label)),
                Span::styled("█".repeat(filled), Style::default().fg(accent)),
                Span::styled(
                    "░".repeat(BAR_WIDTH - filled),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(" {}/{}", bar.value, bar.max)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title("Metrics").borders(Borders::ALL)),
        area,
    );
}

fn render_season_chart(frame: &mut Frame, area: Rect, state: &AppState, pd: &PlayerData) {
    let series = season_series(&pd.season_stats, state.metric);
    let bars: Vec<Bar> = series
        .iter()
        .map(|&(year, value)| {
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .label(Line::from(format!("'{:02}", year % 100)))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!("Seasons · {}", state.metric.label()))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(hex_color(state.theme.accent())));
    frame.render_widget(chart, area);
}

fn render_price_chart(frame: &mut Frame, area: Rect, state: &AppState, pd: &PlayerData) {
    let history = price::price_history_for(pd.slug());
    let window = state.price_range.window(&history);
    let data: Vec<u64> = window.iter().map(|p| p.price.max(0) as u64).collect();
    let title = match PriceSummary::from_history(window) {
        Some(s) => format!(
            "Price {} · last ${} · low ${} · {} sales",
            state.price_range.label(),
            format_thousands(s.last.max(0) as u64),
            format_thousands(s.low.max(0) as u64),
            s.total_volume
        ),
        None => format!("Price {}", state.price_range.label()),
    };
    let chart = Sparkline::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .data(&data)
        .style(Style::default().fg(hex_color(state.theme.accent_bright())));
    frame.render_widget(chart, area);
}

fn render_news(frame: &mut Frame, area: Rect, pd: &PlayerData) {
    let lines: Vec<Line> = pd
        .news_feed
        .iter()
        .flat_map(|item| {
            let mut head = vec![
                Span::styled(
                    format!("{:<8}", news_type_label(item.kind)),
                    Style::default().fg(hex_color(news_type_color(item.kind))),
                ),
                Span::styled(
                    item.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(tag) = &item.tag {
                head.push(Span::styled(
                    format!(" [{tag}]"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            head.push(Span::styled(
                format!("  {} · {}", time_ago(&item.ts), format_timestamp(&item.ts)),
                Style::default().fg(Color::DarkGray),
            ));
            [Line::from(head), Line::from(format!("        {}", item.body))]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("News").borders(Borders::ALL)),
        area,
    );
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let panel = Paragraph::new("PLAYER NOT FOUND")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_console(frame: &mut Frame, area: Rect, state: &AppState) {
    let last = state.logs.back().map(String::as_str).unwrap_or("");
    let console = Paragraph::new(last)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Slab Tracker - Help",
        "",
        "Global:",
        "  t            Toggle theme",
        "  j/k or ↑/↓   Move",
        "  b / Esc      Back",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Card select:",
        "  Space        Select / deselect card",
        "  Enter        Open analytics",
        "",
        "Analytics:",
        "  Enter        Focus player",
        "  a            All players",
        "  m            Cycle season metric",
        "  r            Toggle 7D / 30D prices",
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

fn status_color(status: SlabStatus) -> Color {
    match status {
        SlabStatus::Fire => Color::Red,
        SlabStatus::Heating => Color::Yellow,
        SlabStatus::Cooling => Color::Blue,
        SlabStatus::Neutral => Color::Gray,
    }
}

// "#rrggbb" -> Color::Rgb; anything else falls back to white.
fn hex_color(token: &str) -> Color {
    let hex = token.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::White;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}
