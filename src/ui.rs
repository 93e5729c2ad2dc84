//! Rendering layer for Repotrend's TUI.
//!
//! Stateless given the [`AppState`] snapshot for the frame: a heading with
//! the since-date, the filter controls, and exactly one of the loading
//! indicator, the error message, or the table (with its empty-view
//! placeholder).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::logic;
use crate::state::{ANY_LANGUAGE, AppState};
use crate::theme::theme;

/// Glyph for a favorited row.
pub const FAVORED: &str = "★";
/// Glyph for an unfavorited row.
pub const UNFAVORED: &str = "☆";

/// Placeholder shown when the pipeline yields no rows.
pub const EMPTY_MESSAGE: &str = "No rows to display";
/// Generic fetch-failure message; causes live in the log only.
pub const ERROR_MESSAGE: &str = "Something went wrong, check the log!";
/// Indicator shown while the fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Fixed column widths: index, stars, favorite glyph, name, link.
const IDX_W: usize = 4;
const STARS_W: usize = 8;
const FAV_W: usize = 10;
const NAME_W: usize = 24;
const LINK_W: usize = 34;

/// What: Render one frame of the application.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state snapshot for this frame
///
/// Output:
/// - Draws heading, filter bar, body (loading / error / table), and the
///   key-hint footer.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_filters(f, app, chunks[1]);
    render_body(f, app, chunks[2]);
    render_hints(f, chunks[3]);
}

/// Heading with the memoized since-date.
fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let title = Paragraph::new(Line::from(Span::styled(
        format!("Trending repositories on GitHub since {}", app.since),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(title, area);
}

/// Filter bar: favorites-only checkbox and the language selector.
fn render_filters(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let fav_mark = if app.filters.favorites_only { "x" } else { " " };
    let fav_color = if app.filters.favorites_only {
        th.green
    } else {
        th.overlay1
    };
    let language_label = if app.filters.language == ANY_LANGUAGE {
        "Any language".to_string()
    } else {
        app.filters.language.clone()
    };

    let line = Line::from(vec![
        Span::styled(format!("[{fav_mark}] "), Style::default().fg(fav_color)),
        Span::styled("Favorites only", Style::default().fg(th.text)),
        Span::styled("    Language: ", Style::default().fg(th.text)),
        Span::styled(
            format!("< {language_label} >"),
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ),
    ]);
    let bar = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled("Filters", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(bar, area);
}

/// Body pane: exactly one of loading, error, table, or empty placeholder.
fn render_body(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    if app.loading {
        render_message(f, area, LOADING_MESSAGE, th.yellow);
        return;
    }
    if app.error.is_some() {
        render_message(f, area, ERROR_MESSAGE, th.red);
        return;
    }
    let view = logic::visible_rows(&app.rows, &app.filters);
    if view.is_empty() {
        render_message(f, area, EMPTY_MESSAGE, th.overlay2);
        return;
    }

    let block = Block::default()
        .title(Span::styled(
            format!("Repositories ({})", view.len()),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    f.render_widget(block, area);
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let desc_w = (inner.width as usize)
        .saturating_sub(IDX_W + NAME_W + LINK_W + STARS_W + FAV_W)
        .max(10);

    let header = Line::from(Span::styled(
        format!(
            "{}{}{}{}{}{}",
            fit("#", IDX_W),
            fit("Name", NAME_W),
            fit("Description", desc_w),
            fit("Link", LINK_W),
            fit("Stars", STARS_W),
            fit("Favorite", FAV_W)
        ),
        Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(header), rows_area[0]);

    let items: Vec<ListItem> = view
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let glyph = if r.favorite { FAVORED } else { UNFAVORED };
            let glyph_color = if r.favorite { th.yellow } else { th.overlay1 };
            let segs = vec![
                Span::styled(fit(&(i + 1).to_string(), IDX_W), Style::default().fg(th.overlay1)),
                Span::styled(
                    fit(&r.name, NAME_W),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(fit(&r.description, desc_w), Style::default().fg(th.overlay2)),
                Span::styled(fit(&r.html_url, LINK_W), Style::default().fg(th.sapphire)),
                Span::styled(
                    fit(&r.stargazers_count.to_string(), STARS_W),
                    Style::default().fg(th.yellow),
                ),
                Span::styled(fit(glyph, FAV_W), Style::default().fg(glyph_color)),
            ];
            ListItem::new(Line::from(segs))
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("");
    f.render_stateful_widget(list, rows_area[1], &mut app.list_state);
}

/// Centered single-message body used for loading, error, and empty states.
fn render_message(f: &mut Frame, area: Rect, message: &str, color: ratatui::style::Color) {
    let th = theme();
    let p = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(p, area);
}

/// Key-hint footer.
fn render_hints(f: &mut Frame, area: Rect) {
    let th = theme();
    let hints = Paragraph::new(Line::from(Span::styled(
        " j/k move   f favorite   o favorites only   h/l language   q quit",
        Style::default().fg(th.subtext0),
    )));
    f.render_widget(hints, area);
}

/// What: Truncate `s` to `width` display columns and pad with spaces.
///
/// Uses display width rather than char count so wide glyphs keep the
/// columns aligned.
fn fit(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &mut AppState) -> String {
        let backend = TestBackend::new(120, 24);
        let mut term = Terminal::new(backend).expect("terminal for test");
        term.draw(|f| ui(f, app)).expect("render frame");
        let buf = term.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.cell((x, y)).map_or(" ", |c| c.symbol()));
            }
            out.push('\n');
        }
        out
    }

    /// What: Loading state shows the indicator and nothing else
    ///
    /// - Input: Default (loading) state
    /// - Output: "Loading..." visible; no table placeholder or error text
    #[test]
    fn loading_state_renders_indicator() {
        let mut app = AppState::default();
        app.since = "2024-02-27".to_string();
        let text = render(&mut app);
        assert!(text.contains(LOADING_MESSAGE));
        assert!(!text.contains(EMPTY_MESSAGE));
        assert!(!text.contains(ERROR_MESSAGE));
        assert!(text.contains("since 2024-02-27"));
    }

    /// What: Error state replaces the table with the generic message
    ///
    /// - Input: Fetch failure recorded
    /// - Output: Generic error text only; cause not rendered
    #[test]
    fn error_state_renders_generic_message() {
        let mut app = AppState {
            loading: false,
            error: Some("connection refused".to_string()),
            ..Default::default()
        };
        let text = render(&mut app);
        assert!(text.contains(ERROR_MESSAGE));
        assert!(!text.contains("connection refused"));
        assert!(!text.contains(LOADING_MESSAGE));
    }

    /// What: Empty store renders the placeholder, not a table
    ///
    /// - Input: Successful fetch with zero items
    /// - Output: "No rows to display"; no column header
    #[test]
    fn empty_store_renders_placeholder() {
        let mut app = AppState {
            loading: false,
            ..Default::default()
        };
        let text = render(&mut app);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(!text.contains("Description"));
    }

    /// What: Narrow-width truncation keeps columns within bounds
    ///
    /// - Input: Strings longer and shorter than the column width
    /// - Output: Truncated or padded to exactly the requested width
    #[test]
    fn fit_truncates_and_pads() {
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("", 3), "   ");
    }
}
