//! End-to-end scenarios: fetch outcome -> key events -> rendered frame.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use repotrend::app::apply_fetch_outcome;
use repotrend::events::handle_event;
use repotrend::sources::parse_items;
use repotrend::state::{AppState, FetchOutcome};
use repotrend::ui::{EMPTY_MESSAGE, ERROR_MESSAGE, FAVORED, LOADING_MESSAGE, UNFAVORED, ui};

fn single_response() -> serde_json::Value {
    serde_json::json!({
        "items": [{
            "id": 1,
            "name": "Some name",
            "description": "Some description",
            "html_url": "https://some-example.com",
            "stargazers_count": 1,
            "language": "Some language"
        }]
    })
}

fn multi_response() -> serde_json::Value {
    serde_json::json!({
        "items": [
            {
                "id": 1,
                "name": "Some name",
                "description": "Some description",
                "html_url": "https://some-example.com",
                "stargazers_count": 1,
                "language": "Some language"
            },
            {
                "id": 2,
                "name": "Other name",
                "description": "Other description",
                "html_url": "https://other-example.com",
                "stargazers_count": 2,
                "language": "Other language"
            }
        ]
    })
}

fn app_with(body: &serde_json::Value) -> AppState {
    let mut app = AppState {
        since: "2024-02-27".to_string(),
        ..Default::default()
    };
    apply_fetch_outcome(&mut app, FetchOutcome::Items(parse_items(body)));
    app
}

fn press(app: &mut AppState, code: KeyCode) {
    let quit = handle_event(
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)),
        app,
    );
    assert!(!quit, "unexpected quit request");
}

fn render(app: &mut AppState) -> String {
    let backend = TestBackend::new(130, 24);
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

/// What: Scenario A - one fetched item renders as an unfavored table row
///
/// - Input: Response with one item (id=1, 1 star, "Some language")
/// - Output: Table with headers, the row, and the unfavored glyph
#[test]
fn single_item_renders_unfavored_row() {
    let mut app = app_with(&single_response());
    let text = render(&mut app);
    assert!(text.contains("Name"));
    assert!(text.contains("Description"));
    assert!(text.contains("Stars"));
    assert!(text.contains("Favorite"));
    assert!(text.contains("Some name"));
    assert!(text.contains("Some description"));
    assert!(text.contains("https://some-example.com"));
    assert!(text.contains(UNFAVORED));
    assert!(!text.contains(FAVORED));
    assert!(!text.contains(LOADING_MESSAGE));
}

/// What: Scenario B - zero fetched items render the placeholder
///
/// - Input: Response with an empty items array
/// - Output: "No rows to display"; no table headers
#[test]
fn empty_fetch_renders_placeholder() {
    let mut app = app_with(&serde_json::json!({ "items": [] }));
    let text = render(&mut app);
    assert!(text.contains(EMPTY_MESSAGE));
    assert!(!text.contains("Description"));
}

/// What: Scenario C - favoriting the row flips the glyph, row stays visible
///
/// - Input: Single row; press the favorite key
/// - Output: Favored glyph rendered; row still present
#[test]
fn favorite_toggle_flips_glyph() {
    let mut app = app_with(&single_response());
    press(&mut app, KeyCode::Char('f'));
    let text = render(&mut app);
    assert!(text.contains(FAVORED));
    assert!(!text.contains(UNFAVORED));
    assert!(text.contains("Some name"));
}

/// What: Scenario D - favorited row survives the favorites-only filter
///
/// - Input: Favorite the row, then enable favorites-only
/// - Output: Row remains visible
#[test]
fn favorited_row_visible_under_favorites_filter() {
    let mut app = app_with(&single_response());
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Char('o'));
    let text = render(&mut app);
    assert!(text.contains("Some name"));
    assert!(!text.contains(EMPTY_MESSAGE));
}

/// What: Scenario E - favorites-only with no favorites shows the placeholder
///
/// - Input: Enable favorites-only without favoriting anything
/// - Output: "No rows to display"
#[test]
fn favorites_filter_without_favorites_is_empty() {
    let mut app = app_with(&single_response());
    press(&mut app, KeyCode::Char('o'));
    let text = render(&mut app);
    assert!(text.contains(EMPTY_MESSAGE));
    assert!(!text.contains("Some name"));
}

/// What: Scenario F - language filter shows matches and hides the rest
///
/// - Input: Two rows with distinct languages; cycle the language filter
/// - Output: Matching row visible, the other hidden; both back under "any"
#[test]
fn language_filter_narrows_view() {
    let mut app = app_with(&multi_response());

    // Options cycle any -> "Other language" -> "Some language"
    press(&mut app, KeyCode::Right);
    assert_eq!(app.filters.language, "Other language");
    let text = render(&mut app);
    assert!(text.contains("Other name"));
    assert!(!text.contains("Some name"));

    press(&mut app, KeyCode::Right);
    assert_eq!(app.filters.language, "Some language");
    let text = render(&mut app);
    assert!(text.contains("Some name"));
    assert!(!text.contains("Other name"));

    press(&mut app, KeyCode::Right);
    let text = render(&mut app);
    assert!(text.contains("Some name"));
    assert!(text.contains("Other name"));
}

/// What: Rows render in descending star order with 1-based indices
///
/// - Input: Two rows, 2 stars before 1 star
/// - Output: "Other name" (2 stars) listed above "Some name"
#[test]
fn rows_render_in_star_order() {
    let mut app = app_with(&multi_response());
    let text = render(&mut app);
    let other = text.find("Other name").expect("row with 2 stars rendered");
    let some = text.find("Some name").expect("row with 1 star rendered");
    assert!(other < some);
}

/// What: Fetch failure renders only the generic error message
///
/// - Input: Failed fetch outcome with a concrete cause
/// - Output: Generic message shown; cause kept out of the frame
#[test]
fn fetch_failure_renders_generic_error() {
    let mut app = AppState {
        since: "2024-02-27".to_string(),
        ..Default::default()
    };
    apply_fetch_outcome(&mut app, FetchOutcome::Failed("dns failure".to_string()));
    let text = render(&mut app);
    assert!(text.contains(ERROR_MESSAGE));
    assert!(!text.contains("dns failure"));
    assert!(!text.contains(EMPTY_MESSAGE));
    assert!(!text.contains(LOADING_MESSAGE));
}
