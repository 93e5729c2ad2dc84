//! Pure data logic: ingestion, the single row-store mutation, and the
//! filter/sort pipeline that derives the visible row sequence.

use std::collections::HashMap;

use crate::state::{ANY_LANGUAGE, AppState, Filters, RepoItem};

/// Single-field patch applied to one row. `favorite` is the only field
/// ever mutated after ingestion.
#[derive(Clone, Copy, Debug)]
pub enum RowPatch {
    /// Set the row's favorite flag.
    Favorite(bool),
}

/// What: Build the row store from fetched items, keyed by id.
///
/// Inputs:
/// - `items`: Parsed API items, already normalized at parse time
///
/// Output:
/// - Map from id to row. Duplicate ids collapse to the last occurrence,
///   preserving the key == value.id invariant.
pub fn ingest(items: Vec<RepoItem>) -> HashMap<u64, RepoItem> {
    items.into_iter().map(|it| (it.id, it)).collect()
}

/// What: Set exactly one field of the row at `id`, leaving everything else
/// untouched.
///
/// Inputs:
/// - `rows`: Mutable row store
/// - `id`: Target row id
/// - `patch`: Field and value to apply
///
/// Output:
/// - `true` when the row existed and was patched; `false` for an unknown
///   id, which is an invariant violation handled as a logged no-op. A
///   partial record is never fabricated.
pub fn patch_row(rows: &mut HashMap<u64, RepoItem>, id: u64, patch: RowPatch) -> bool {
    let Some(row) = rows.get_mut(&id) else {
        tracing::warn!(id, "patch addressed to unknown row id; ignoring");
        return false;
    };
    match patch {
        RowPatch::Favorite(value) => row.favorite = value,
    }
    true
}

/// What: Invert the favorite flag of the row at `id`.
///
/// The only mutation path for `favorite`: reads the current value and
/// applies [`patch_row`] with its inverse.
pub fn toggle_favorite(rows: &mut HashMap<u64, RepoItem>, id: u64) -> bool {
    let Some(current) = rows.get(&id).map(|r| r.favorite) else {
        tracing::warn!(id, "favorite toggle for unknown row id; ignoring");
        return false;
    };
    patch_row(rows, id, RowPatch::Favorite(!current))
}

/// Whether `row` passes the current filter selection. Both dimensions are
/// AND-ed; there is no OR across them.
fn passes(row: &RepoItem, filters: &Filters) -> bool {
    (!filters.favorites_only || row.favorite)
        && (filters.language == ANY_LANGUAGE || filters.language == row.language)
}

/// What: Derive the ordered view of the row store for display.
///
/// Inputs:
/// - `rows`: The row store
/// - `filters`: Current filter selection
///
/// Output:
/// - Rows passing the filter predicate, descending by star count with
///   ascending id as the tiebreak. Recomputed fresh on every call; an
///   empty result is valid and renders the placeholder message.
pub fn visible_rows<'a>(rows: &'a HashMap<u64, RepoItem>, filters: &Filters) -> Vec<&'a RepoItem> {
    let mut view: Vec<&RepoItem> = rows.values().filter(|r| passes(r, filters)).collect();
    view.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then(a.id.cmp(&b.id))
    });
    view
}

/// What: Derive the sorted set of distinct languages across ALL rows.
///
/// Rows hidden by the current filters still contribute, so the selector
/// always offers every language present in the store.
pub fn languages(rows: &HashMap<u64, RepoItem>) -> Vec<String> {
    let mut langs: Vec<String> = rows.values().map(|r| r.language.clone()).collect();
    langs.sort();
    langs.dedup();
    langs
}

/// What: Step the language filter forward or backward through the option
/// list (`any` plus the derived language set).
///
/// Inputs:
/// - `app`: Mutable application state
/// - `delta`: `+1` for the next option, `-1` for the previous
///
/// Output:
/// - Updates `app.filters.language`, wrapping at either end. A selection
///   no longer present in the store falls back to `any`.
pub fn cycle_language(app: &mut AppState, delta: i64) {
    let mut options = vec![ANY_LANGUAGE.to_string()];
    options.extend(languages(&app.rows));
    let len = options.len() as i64;
    let current = options
        .iter()
        .position(|l| *l == app.filters.language)
        .unwrap_or(0) as i64;
    let next = (current + delta).rem_euclid(len) as usize;
    app.filters.language = options[next].clone();
    clamp_selection(app);
}

/// What: Clamp the highlighted index to the current visible row count.
///
/// Called after every store or filter change so the selection never
/// points past the end of the derived view.
pub fn clamp_selection(app: &mut AppState) {
    let len = visible_rows(&app.rows, &app.filters).len();
    if len == 0 {
        app.selected = 0;
        app.list_state.select(None);
    } else {
        app.selected = app.selected.min(len - 1);
        app.list_state.select(Some(app.selected));
    }
}

/// Move the highlight by `delta` within the visible rows.
pub fn move_selection(app: &mut AppState, delta: i64) {
    let len = visible_rows(&app.rows, &app.filters).len();
    if len == 0 {
        return;
    }
    let next = (app.selected as i64 + delta).clamp(0, len as i64 - 1) as usize;
    app.selected = next;
    app.list_state.select(Some(next));
}

/// Id of the currently highlighted visible row, if any.
pub fn selected_row_id(app: &AppState) -> Option<u64> {
    visible_rows(&app.rows, &app.filters)
        .get(app.selected)
        .map(|r| r.id)
}
