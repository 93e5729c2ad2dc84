//! Repotrend application runtime (terminal lifecycle, one-shot fetch, and
//! event loop).
//!
//! This module encapsulates the entire TUI runtime so that the binary
//! entrypoint stays minimal.

use std::time::Duration;

use chrono::Utc;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::logic;
use crate::sources;
use crate::state::{AppState, FetchOutcome};
use crate::ui::ui;
use crate::util::n_days_ago;

/// Boxed error result used by the runtime.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// What: Apply a resolved fetch to the application state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `outcome`: Items or a failure message from the fetch task
///
/// Output:
/// - Success replaces the row store wholesale and clears loading; failure
///   records the error, logs the cause, clears loading, and leaves the
///   store empty.
pub fn apply_fetch_outcome(app: &mut AppState, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Items(items) => {
            tracing::info!(count = items.len(), "search results ingested");
            app.rows = logic::ingest(items);
            app.loading = false;
            logic::clamp_selection(app);
        }
        FetchOutcome::Failed(msg) => {
            tracing::error!(error = %msg, "repository fetch failed");
            app.error = Some(msg);
            app.loading = false;
        }
    }
}

/// What: Start the Repotrend TUI runtime and run the main event loop.
///
/// Inputs:
/// - `days`: Size of the creation-date window
///
/// Output:
/// - `Ok(())` on normal shutdown or an error if terminal initialization
///   fails.
///
/// Details:
/// - Captures "now" once, so the query lower bound and the heading share
///   the same reference instant across midnight boundaries.
/// - Spawns the single fetch; if the loop exits first, the late result is
///   dropped with the channel.
/// - Input is forwarded from a polling thread; all state mutations happen
///   inside the `select!` loop.
pub async fn run(days: u32) -> Result<()> {
    setup_terminal()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let since = n_days_ago(days, Utc::now());
    let mut app = AppState {
        since: since.clone(),
        ..Default::default()
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchOutcome>();

    tokio::spawn(async move {
        let outcome = match sources::fetch_created_since(&since).await {
            Ok(items) => FetchOutcome::Items(items),
            Err(e) => FetchOutcome::Failed(e.to_string()),
        };
        let _ = fetch_tx.send(outcome);
    });

    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
                && event_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app) {
                    break;
                }
            }
            Some(outcome) = fetch_rx.recv() => {
                apply_fetch_outcome(&mut app, outcome);
            }
            else => { break; }
        }
    }

    restore_terminal()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RepoItem;

    fn item(id: u64, stars: u64) -> RepoItem {
        RepoItem {
            id,
            name: format!("repo{id}"),
            description: String::new(),
            html_url: format!("https://example.com/{id}"),
            stargazers_count: stars,
            language: "Rust".into(),
            favorite: false,
        }
    }

    /// What: Successful fetch replaces the store and clears loading
    ///
    /// - Input: Outcome with two items
    /// - Output: Two entries keyed by id, loading false, selection set
    #[test]
    fn fetch_success_replaces_store() {
        let mut app = AppState::default();
        apply_fetch_outcome(&mut app, FetchOutcome::Items(vec![item(1, 5), item(2, 9)]));
        assert!(!app.loading);
        assert!(app.error.is_none());
        assert_eq!(app.rows.len(), 2);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    /// What: Failed fetch records the error and leaves the store empty
    ///
    /// - Input: Failure outcome
    /// - Output: loading false, error set, no rows
    #[test]
    fn fetch_failure_records_error() {
        let mut app = AppState::default();
        apply_fetch_outcome(&mut app, FetchOutcome::Failed("boom".into()));
        assert!(!app.loading);
        assert_eq!(app.error.as_deref(), Some("boom"));
        assert!(app.rows.is_empty());
    }
}
