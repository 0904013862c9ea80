//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. It only
//! reads from `App`; all state changes go through `App::apply`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding,
        Paragraph, Wrap,
    },
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::config::UiSettings;
use crate::library::display_from_fields;
use crate::visualizer::{AMPLITUDE_MAX, VisualizerSample};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next");
    map.insert("t", "playlist");
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("enter/1-9", "pick");
    map.insert("esc", "close");
    map.insert("q", "quit");
    map
});

/// Render the controls help text. List keys are only listed while the panel is open.
fn controls_text(panel_visible: bool) -> String {
    let order: &[&'static str] = if panel_visible {
        &["j/k", "gg/G", "enter/1-9", "esc", "space/p", "h/l", "q"]
    } else {
        &["space/p", "h/l", "t", "q"]
    };
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Map each amplitude to a whole-number bar height in `0..=AMPLITUDE_MAX`.
fn bar_values(sample: &VisualizerSample) -> Vec<u64> {
    sample
        .values()
        .iter()
        .map(|v| v.clamp(0.0, AMPLITUDE_MAX).round() as u64)
        .collect()
}

/// Widest bar that fits `bars` bars separated by one-column gaps in `width`.
fn bar_width(width: u16, bars: usize) -> u16 {
    if bars == 0 {
        return 1;
    }
    let bars = bars.min(u16::MAX as usize) as u16;
    let gaps = bars.saturating_sub(1);
    (width.saturating_sub(gaps) / bars).max(1)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10).min(r.width);
    height = height.min(r.height.saturating_sub(2)).max(3).min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// The cover box: two fifths of the stage width, half its height, centered.
fn cover_rect(area: Rect) -> Rect {
    centered_rect_sized(area.width / 5 * 2, area.height / 2, area)
}

/// A full-height strip of `width` columns on the right edge of `r`.
fn right_panel_rect(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + r.width - width,
        y: r.y,
        width,
        height: r.height,
    }
}

fn draw_stage(frame: &mut Frame, app: &App, area: Rect) {
    // Visualizer bars fill the stage; the artwork box sits on top of them.
    let values = bar_values(&app.visualizer_samples());
    let bars: Vec<Bar> = values
        .iter()
        .map(|&v| Bar::default().value(v).text_value(String::new()))
        .collect();
    let chart = BarChart::default()
        .bar_width(bar_width(area.width, bars.len()))
        .bar_gap(1)
        .max(AMPLITUDE_MAX as u64)
        .bar_style(Style::default().add_modifier(Modifier::DIM))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);

    let track = app.current_track();
    let art_area = cover_rect(area);
    frame.render_widget(Clear, art_area);
    let art = Paragraph::new(track.cover_ref())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" cover of {} ", track.title()))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(art, art_area);
}

fn draw_panel(frame: &mut Frame, app: &App, ui_settings: &UiSettings, area: Rect) {
    let panel_area = right_panel_rect(ui_settings.panel_width, area);
    frame.render_widget(Clear, panel_area);

    let current = app.current_index();
    let items: Vec<ListItem> = app
        .playlist()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = if i == current { "♪" } else { " " };
            let text = display_from_fields(
                track,
                &ui_settings.panel_fields,
                &ui_settings.panel_separator,
            );
            ListItem::new(format!("{marker} {}. {text}", i + 1))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" playlist (esc closes) "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.panel_cursor()));
    frame.render_stateful_widget(list, panel_area, &mut state);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" aria ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_stage(frame, app, chunks[1]);

    // Now playing
    let track = app.current_track();
    let now_playing = Paragraph::new(vec![
        Line::from(display_from_fields(
            track,
            &ui_settings.now_playing_fields,
            &ui_settings.now_playing_separator,
        ))
        .bold(),
        Line::from(track.artist()).dim(),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().title(if app.is_playing() {
        " now playing "
    } else {
        " paused "
    }));
    frame.render_widget(now_playing, chunks[2]);

    // Position bar; not connected to any playback clock.
    let position = Gauge::default()
        .block(Block::bordered().title(" position "))
        .percent(ui_settings.position_percent.min(100));
    frame.render_widget(position, chunks[3]);

    // Status
    let status = {
        let state = app.playback_state();
        let mut parts: Vec<String> = Vec::new();
        parts.push(if state.is_playing { "▶ Playing" } else { "⏸ Paused" }.to_string());
        parts.push(format!(
            "Track {}/{}",
            state.current_index + 1,
            app.playlist_len()
        ));
        if !app.visualizer().is_running() {
            parts.push("visualizer idle".to_string());
        }
        if let Some(notice) = notice {
            parts.push(format!("! {notice}"));
        }
        parts.join(" • ")
    };
    let status_par = Paragraph::new(status).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" status "),
    );
    frame.render_widget(status_par, chunks[4]);

    let footer = Paragraph::new(controls_text(app.panel_visible()))
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
    frame.render_widget(footer, chunks[5]);

    // Panel overlays everything below the header.
    if app.panel_visible() {
        let below_header = Rect {
            y: chunks[1].y,
            height: frame.area().height.saturating_sub(chunks[0].height),
            ..frame.area()
        };
        draw_panel(frame, app, ui_settings, below_header);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, VisualizerSettings};
    use crate::library::Playlist;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App, notice: Option<&str>) -> String {
        let settings = Settings::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| draw(f, app, &settings.ui, notice))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app() -> App {
        let settings = Settings::default();
        let playlist = Playlist::new(settings.playlist.tracks.clone()).unwrap();
        App::new(playlist, &VisualizerSettings::default())
    }

    #[test]
    fn bar_values_round_and_clamp() {
        let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(3);
        let sample = VisualizerSample::generate(&mut rng, 20);
        let values = bar_values(&sample);
        assert_eq!(values.len(), 20);
        assert!(values.iter().all(|&v| v <= AMPLITUDE_MAX as u64));
        assert_eq!(bar_values(&VisualizerSample::silent(4)), vec![0, 0, 0, 0]);
    }

    #[test]
    fn bar_width_fills_available_space() {
        assert_eq!(bar_width(79, 20), 3);
        assert_eq!(bar_width(10, 20), 1);
        assert_eq!(bar_width(10, 0), 1);
    }

    #[test]
    fn cover_rect_is_centered_and_handles_huge_widths() {
        assert_eq!(cover_rect(Rect::new(0, 0, 80, 20)), Rect::new(24, 5, 32, 10));

        let wide = Rect {
            x: 0,
            y: 0,
            width: u16::MAX,
            height: 20,
        };
        let cover = cover_rect(wide);
        assert_eq!(cover.width, 26214);
        assert_eq!(cover.height, 10);
        assert_eq!(cover.x, (u16::MAX - 26214) / 2);
    }

    #[test]
    fn right_panel_rect_hugs_right_edge() {
        let r = Rect::new(0, 3, 80, 20);
        assert_eq!(right_panel_rect(32, r), Rect::new(48, 3, 32, 20));
        assert_eq!(right_panel_rect(120, r), r);
    }

    #[test]
    fn controls_text_lists_panel_keys_only_when_open() {
        assert!(!controls_text(false).contains("[j/k]"));
        assert!(controls_text(true).contains("[j/k] up/down"));
        assert!(controls_text(false).contains("[t] playlist"));
    }

    #[test]
    fn draw_shows_current_track_and_status() {
        let mut app = app();
        app.toggle_play_pause();
        let screen = render(&app, None);
        assert!(screen.contains("Song 1"));
        assert!(screen.contains("Artist 1"));
        assert!(screen.contains("Playing"));
        assert!(screen.contains("Track 1/5"));
    }

    #[test]
    fn draw_shows_panel_rows_and_notice() {
        let mut app = app();
        app.toggle_panel();
        let screen = render(&app, Some("out of range"));
        assert!(screen.contains("playlist"));
        assert!(screen.contains("5. Song 5"));
        assert!(screen.contains("out of range"));
    }
}
