//! UI rendering helpers for the terminal user interface.
//!
//! `draw` renders the whole page with `ratatui`: header, the now-playing
//! card, the playlist panel, the controls footer and the metadata popup.

mod theme;

pub use theme::Theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Sparkline,
        Wrap,
    },
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, VISUALIZER_MAX};
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{PlayerState, RepeatMode};
use crate::playlist::{Playlist, Track, format_time};

const DIM: Color = Color::DarkGray;
const VOLUME_CELLS: u16 = 10;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next");
    // H/L and -/+ are filled from config.
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("enter", "play selected");
    map.insert("s", "shuffle");
    map.insert("r", "repeat");
    map.insert("f", "like");
    map.insert("K", "more");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating seek and volume steps.
fn controls_text(controls: &ControlsSettings) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "space/p", "h/l", "H/L", "-/+", "j/k", "gg/G", "enter", "s", "r", "f", "K", "q",
    ];
    order
        .iter()
        .filter_map(|k| match *k {
            "H/L" => Some(format!("[H/L] seek -/+{}s", controls.seek_seconds)),
            "-/+" => Some(format!("[-/+] volume -/+{}", controls.volume_step)),
            _ => CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

fn toggle_style(on: bool, accent: Color) -> Style {
    if on {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM)
    }
}

/// Shuffle, previous, play/pause, next and repeat.
fn control_row(state: &PlayerState, theme: Theme) -> Line<'static> {
    let play = if state.is_playing { " ⏸ " } else { " ▶ " };
    let mut spans = vec![
        Span::styled("⤮", toggle_style(state.shuffle, theme.from)),
        Span::raw("   "),
        Span::raw("⏮"),
        Span::raw("   "),
        Span::styled(
            play,
            Style::default()
                .fg(Color::Black)
                .bg(theme.from)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::raw("⏭"),
        Span::raw("   "),
        Span::styled("↻", toggle_style(state.repeat != RepeatMode::Off, theme.from)),
    ];
    if state.repeat == RepeatMode::One {
        spans.push(Span::styled("1", toggle_style(true, theme.to)));
    }
    Line::from(spans)
}

/// Like heart, volume bar and the "more" entry.
fn secondary_row(state: &PlayerState, theme: Theme) -> Line<'static> {
    let heart = if state.liked {
        Span::styled("♥", Style::default().fg(Color::Red))
    } else {
        Span::styled("♡", Style::default().fg(DIM))
    };
    let filled = (u16::from(state.volume_percent.min(100)) * VOLUME_CELLS).div_ceil(100);
    let bar_on = "█".repeat(filled as usize);
    let bar_off = "░".repeat((VOLUME_CELLS - filled) as usize);
    Line::from(vec![
        heart,
        Span::raw("   🔊 "),
        Span::styled(bar_on, Style::default().fg(theme.to)),
        Span::styled(bar_off, Style::default().fg(DIM)),
        Span::raw(format!(" {:>3}", state.volume_percent)),
        Span::raw("   "),
        Span::styled("⋯ more", Style::default().fg(DIM)),
    ])
}

fn progress_ratio(state: &PlayerState, track: &Track) -> f64 {
    let total = track.duration.as_secs_f64();
    if total <= 0.0 {
        return 0.0;
    }
    (state.elapsed.as_secs_f64() / total).clamp(0.0, 1.0)
}

fn draw_header(frame: &mut Frame, area: Rect, ui: &UiSettings, theme: Theme) {
    let header = Paragraph::new(vec![
        Line::from(ui.header_text.as_str().bold().fg(theme.from)),
        Line::from(ui.tagline.as_str().fg(DIM)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_card(frame: &mut Frame, area: Rect, state: &PlayerState, track: &Track, app: &App) {
    let theme = Theme::from_gradient(&track.gradient);
    let block = Block::bordered()
        .border_style(Style::default().fg(theme.from))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(track.title.as_str().bold().fg(theme.from)).alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(track.artist.as_str()).alignment(Alignment::Center),
        rows[1],
    );

    let visualizer = Sparkline::default()
        .data(app.levels.iter().copied())
        .max(VISUALIZER_MAX)
        .style(Style::default().fg(theme.to));
    frame.render_widget(visualizer, rows[3]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.from).bg(DIM))
        .ratio(progress_ratio(state, track))
        .label("");
    frame.render_widget(gauge, rows[4]);

    let times = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[5]);
    frame.render_widget(Paragraph::new(format_time(state.elapsed)), times[0]);
    frame.render_widget(
        Paragraph::new(format_time(track.duration)).alignment(Alignment::Right),
        times[1],
    );

    frame.render_widget(
        Paragraph::new(control_row(state, theme)).alignment(Alignment::Center),
        rows[7],
    );
    frame.render_widget(
        Paragraph::new(secondary_row(state, theme)).alignment(Alignment::Center),
        rows[8],
    );
}

fn draw_playlist(
    frame: &mut Frame,
    area: Rect,
    state: &PlayerState,
    playlist: &Playlist,
    app: &App,
) {
    let items: Vec<ListItem> = playlist
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let is_current = i == state.current_index;
            let marker = match (is_current, state.is_playing) {
                (true, true) => "♪ ",
                (true, false) => "‖ ",
                _ => "  ",
            };
            let title_style = if is_current {
                Style::default()
                    .fg(Theme::from_gradient(&t.gradient).from)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, title_style),
                    Span::styled(t.title.clone(), title_style),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(t.artist.clone(), Style::default().fg(DIM)),
                    Span::raw("  "),
                    Span::styled(format_time(t.duration), Style::default().fg(DIM)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Now Playing ")
                .title_top(Line::from(format!(" {} tracks ", playlist.len())).right_aligned()),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default();
    list_state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_metadata(frame: &mut Frame, area: Rect, playlist: &Playlist, app: &App) {
    let popup_area = centered_rect_sized(60, 9, area);
    frame.render_widget(Clear, popup_area);

    let meta = match playlist.get(app.cursor) {
        Some(track) => format!(
            "Title: {}\nArtist: {}\nDuration: {}\nCover: {}\nMedia: {}",
            track.title,
            track.artist,
            format_time(track.duration),
            track.cover,
            track.media_ref
        ),
        None => "No track selected".to_string(),
    };
    let meta_paragraph = Paragraph::new(meta)
        .block(
            Block::default()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .borders(Borders::ALL)
                .title(" more (K closes) "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(meta_paragraph, popup_area);
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    state: &PlayerState,
    playlist: &Playlist,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let track = playlist.track(state.current_index);
    let theme = Theme::from_gradient(&track.gradient);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(4),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], ui_settings, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(chunks[1]);
    draw_card(frame, body[0], state, track, app);
    draw_playlist(frame, body[1], state, playlist, app);

    // Overlay keeps header and footer visible.
    if app.metadata_window {
        draw_metadata(frame, chunks[1], playlist, app);
    }

    let footer = Paragraph::new(controls_text(controls_settings))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);
}
