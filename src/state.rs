//! Core application state types for Repotrend's TUI.
//!
//! This module defines the data structures shared across the application:
//! the repository row record, the filter selection, and the central
//! [`AppState`] container mutated by the event loop and read by the UI
//! layer. All state is ephemeral per run; nothing here is persisted.
use ratatui::widgets::ListState;
use std::collections::HashMap;

/// Sentinel value for the language filter meaning "no language filter".
pub const ANY_LANGUAGE: &str = "any";

/// Category assigned at ingestion to rows whose API item carries no
/// `language` value.
pub const UNDEFINED_LANGUAGE: &str = "Undefined";

/// One repository row: the fields returned by the search API plus the
/// local-only `favorite` flag.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RepoItem {
    /// Stable unique identifier; also the row store key.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// One-line description; empty when the API reports null.
    pub description: String,
    /// Outbound link target.
    pub html_url: String,
    /// Star count, the sort key.
    pub stargazers_count: u64,
    /// Primary language, or [`UNDEFINED_LANGUAGE`] when the API omits it.
    pub language: String,
    /// Local favorite flag; always `false` at ingestion.
    #[serde(default)]
    pub favorite: bool,
}

/// Current filter selection driving the view pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filters {
    /// When `true`, only favorited rows pass the filter.
    pub favorites_only: bool,
    /// Selected language, or [`ANY_LANGUAGE`] for no language filter.
    pub language: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            favorites_only: false,
            language: ANY_LANGUAGE.to_string(),
        }
    }
}

/// Outcome of the one-shot fetch, delivered to the event loop over a
/// channel.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Parsed items ready for ingestion.
    Items(Vec<RepoItem>),
    /// Human-readable failure cause. Causes are logged but not
    /// distinguished in the UI.
    Failed(String),
}

/// Global application state owned by the event loop.
///
/// The row store and filters are owned exclusively here; the UI receives a
/// shared view each frame and the event layer requests mutations through
/// `logic` functions.
#[derive(Debug)]
pub struct AppState {
    /// Lower bound of the creation-date window, `YYYY-MM-DD`. Computed
    /// once per run so the query and the heading can never disagree.
    pub since: String,
    /// Authoritative row store keyed by repository id.
    ///
    /// Invariant: every key equals the `id` of its value. Replaced
    /// wholesale exactly once after a successful fetch; afterwards
    /// mutated only through [`crate::logic::patch_row`].
    pub rows: HashMap<u64, RepoItem>,
    /// Whether the fetch is still in flight.
    pub loading: bool,
    /// Recorded fetch failure, if any. Mutually exclusive with `loading`
    /// in the rendered output.
    pub error: Option<String>,
    /// Current filter selection.
    pub filters: Filters,
    /// Index into the visible (filtered + sorted) rows that is
    /// highlighted. Clamped whenever the visible set changes.
    pub selected: usize,
    /// List selection state for the results list widget.
    pub list_state: ListState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            since: String::new(),
            rows: HashMap::new(),
            loading: true,
            error: None,
            filters: Filters::default(),
            selected: 0,
            list_state: ListState::default(),
        }
    }
}
