use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tokio::sync::mpsc;

use weeboo_core::Entry;

use super::*;
use crate::action::Action;
use crate::tui_event::BackendEvent;

/// Create a minimal App for testing (no backend).
fn test_app() -> App {
    App::new(Theme::hacker())
}

/// App wired to a command channel so dispatched requests can be inspected.
fn wired_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = test_app();
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<BackendCommand>) -> Vec<Ticket> {
    let mut tickets = Vec::new();
    while let Ok(BackendCommand::Fetch(t)) = rx.try_recv() {
        tickets.push(t);
    }
    tickets
}

fn entries(ids: &[(u64, &str)]) -> Vec<Entry> {
    ids.iter().map(|(id, t)| Entry::new(*id, *t)).collect()
}

fn deliver(app: &mut App, seq: u64, results: Vec<Entry>) {
    app.handle_backend_event(BackendEvent::Results { seq, results });
}

/// Render one frame and return the screen as text, one line per row.
fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.view(f)).unwrap();
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

// ── Startup ─────────────────────────────────────────────────────

#[test]
fn start_dispatches_default_listing() {
    let (mut app, mut rx) = wired_app();
    app.start();
    let tickets = drain(&mut rx);
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].query, None);
    assert_eq!(app.catalog.in_flight(), 1);
}

#[test]
fn initial_load_shows_count_and_first_entry() {
    let (mut app, mut rx) = wired_app();
    app.start();
    let t = drain(&mut rx).remove(0);
    let mut loaded = entries(&[(1, "Cowboy Bebop"), (2, "Trigun")]);
    loaded[0].synopsis = Some("Bounty hunters in space.".into());
    deliver(&mut app, t.seq, loaded);

    assert_eq!(app.catalog.result_count(), 2);
    assert_eq!(app.catalog.selected().map(|e| e.id), Some(1));

    let screen = render(&mut app, 120, 30);
    assert!(screen.contains("Found 2 results"));
    assert!(screen.contains("Bounty hunters in space."));
    assert!(screen.contains("Trigun"));
}

// ── Query editing ───────────────────────────────────────────────

#[test]
fn typing_dispatches_one_search_per_keystroke() {
    let (mut app, mut rx) = wired_app();
    for c in "naruto".chars() {
        app.update(Action::QueryInput(c));
    }
    let tickets = drain(&mut rx);
    let queries: Vec<_> = tickets.iter().map(|t| t.query.clone().unwrap()).collect();
    assert_eq!(queries, vec!["n", "na", "nar", "naru", "narut", "naruto"]);
    assert_eq!(app.catalog.query(), "naruto");

    let last = tickets.last().unwrap().seq;
    deliver(&mut app, last, entries(&[(5, "Naruto")]));
    assert_eq!(app.catalog.result_count(), 1);
    assert_eq!(app.catalog.selected().map(|e| e.id), Some(5));

    // Earlier, slower responses arriving afterwards are ignored
    deliver(&mut app, tickets[0].seq, entries(&[(1, "Nana"), (5, "Naruto")]));
    assert_eq!(app.catalog.result_count(), 1);
    assert_eq!(app.catalog.in_flight(), 4);
}

#[test]
fn backspace_on_empty_query_does_not_search() {
    let (mut app, mut rx) = wired_app();
    app.update(Action::QueryBackspace);
    assert!(drain(&mut rx).is_empty());

    app.update(Action::QueryInput('a'));
    app.update(Action::QueryBackspace);
    let tickets = drain(&mut rx);
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[1].query.as_deref(), Some(""));
}

#[test]
fn clearing_query_dispatches_empty_search_once() {
    let (mut app, mut rx) = wired_app();
    app.update(Action::QueryInput('x'));
    drain(&mut rx);

    app.update(Action::QueryClear);
    app.update(Action::QueryClear);
    let tickets = drain(&mut rx);
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].query.as_deref(), Some(""));
}

#[test]
fn zero_matches_render_placeholder() {
    let (mut app, mut rx) = wired_app();
    app.start();
    let t = drain(&mut rx).remove(0);
    deliver(&mut app, t.seq, entries(&[(1, "A")]));

    app.update(Action::QueryInput('q'));
    let t = drain(&mut rx).remove(0);
    deliver(&mut app, t.seq, Vec::new());

    assert_eq!(app.catalog.result_count(), 0);
    let screen = render(&mut app, 100, 24);
    assert!(screen.contains("Found 0 results"));
    assert!(screen.contains(crate::view::detail::PLACEHOLDER));
    assert!(screen.contains("No results"));
}

// ── Selection ───────────────────────────────────────────────────

#[test]
fn enter_selects_highlighted_row() {
    let mut app = test_app();
    deliver(&mut app, 1, entries(&[(1, "A"), (2, "B"), (3, "C")]));
    app.update(Action::FocusList);
    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    assert_eq!(app.catalog.selected_id(), Some(1));

    app.update(Action::SelectHighlighted);
    assert_eq!(app.catalog.selected_id(), Some(3));
    app.update(Action::SelectHighlighted);
    assert_eq!(app.catalog.selected_id(), Some(3));
}

#[test]
fn selecting_unknown_id_leaves_detail_empty() {
    let mut app = test_app();
    deliver(&mut app, 1, entries(&[(1, "Monster")]));
    app.select(404);
    assert!(app.catalog.selected().is_none());

    let screen = render(&mut app, 100, 24);
    assert!(screen.contains(crate::view::detail::PLACEHOLDER));
}

#[test]
fn new_results_reset_cursor_and_scroll() {
    let mut app = test_app();
    deliver(&mut app, 1, entries(&[(1, "A"), (2, "B")]));
    app.update(Action::MoveDown);
    app.update(Action::ScrollDetailDown);
    deliver(&mut app, 2, entries(&[(3, "C"), (4, "D")]));
    assert_eq!(app.list_cursor, 0);
    assert_eq!(app.detail_scroll, 0);
}

#[test]
fn cursor_is_clamped_to_results() {
    let mut app = test_app();
    app.update(Action::MoveDown);
    assert_eq!(app.list_cursor, 0);

    deliver(&mut app, 1, entries(&[(1, "A"), (2, "B")]));
    app.update(Action::GoBottom);
    app.update(Action::MoveDown);
    assert_eq!(app.list_cursor, 1);
    app.update(Action::PageUp);
    assert_eq!(app.list_cursor, 0);
}

#[test]
fn click_on_list_row_selects_entry() {
    let mut app = test_app();
    deliver(&mut app, 1, entries(&[(1, "A"), (2, "B"), (3, "C")]));
    render(&mut app, 100, 30);

    let list = app.last_layout.unwrap().pane_inner(crate::model::panes::Pane::List);
    app.update(Action::ClickAt(list.x + 1, list.y + crate::view::list::ROW_HEIGHT));

    assert_eq!(app.list_cursor, 1);
    assert_eq!(app.catalog.selected_id(), Some(2));
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn click_below_last_row_is_ignored() {
    let mut app = test_app();
    deliver(&mut app, 1, entries(&[(1, "A")]));
    render(&mut app, 100, 30);

    let list = app.last_layout.unwrap().pane_inner(crate::model::panes::Pane::List);
    app.update(Action::ClickAt(list.x + 1, list.y + 6));
    assert_eq!(app.catalog.selected_id(), Some(1));
    assert_eq!(app.list_cursor, 0);
}

#[test]
fn click_on_blank_trailing_line_is_ignored() {
    let mut app = test_app();
    let titles: Vec<String> = (1..=20).map(|i| format!("T{i}")).collect();
    let loaded: Vec<Entry> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| Entry::new(i as u64 + 1, t.as_str()))
        .collect();
    deliver(&mut app, 1, loaded);
    render(&mut app, 100, 29);

    let list = app.last_layout.unwrap().pane_inner(Pane::List);
    assert_eq!(list.height % 2, 1, "layout should leave an odd inner height");
    app.update(Action::ClickAt(list.x + 1, list.y + list.height - 1));

    assert_eq!(app.catalog.selected_id(), Some(1));
    assert_eq!(app.list_cursor, 0);
}

// ── Detail scrolling ────────────────────────────────────────────

#[test]
fn detail_scroll_stops_when_text_fits() {
    let mut app = test_app();
    deliver(&mut app, 1, entries(&[(1, "Short")]));
    render(&mut app, 100, 24);

    for _ in 0..5 {
        app.update(Action::ScrollDetailDown);
    }
    assert_eq!(app.detail_scroll, 0);
    assert!(render(&mut app, 100, 24).contains("Short"));
}

#[test]
fn detail_scroll_is_bounded_by_wrapped_text() {
    let mut app = test_app();
    let mut long = Entry::new(1, "Long");
    long.synopsis = Some((0..40).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n"));
    deliver(&mut app, 1, vec![long]);
    render(&mut app, 100, 24);

    let inner = app.last_layout.unwrap().pane_inner(Pane::Detail);
    // title, blank separator, 40 synopsis lines
    let expected_max = 42 - inner.height;
    assert_eq!(app.detail_max_scroll, expected_max);

    for _ in 0..200 {
        app.update(Action::ScrollDetailDown);
    }
    assert_eq!(app.detail_scroll, expected_max);
    let screen = render(&mut app, 100, 24);
    assert!(screen.contains("line 39"));

    app.update(Action::ScrollDetailUp);
    assert_eq!(app.detail_scroll, expected_max - 1);
}

// ── Panes ───────────────────────────────────────────────────────

#[test]
fn toggling_panes_does_not_touch_catalog_state() {
    let mut app = test_app();
    deliver(&mut app, 1, entries(&[(1, "Mushishi"), (2, "Haibane Renmei")]));
    app.select(2);

    app.update(Action::TogglePane(Pane::List));
    app.update(Action::TogglePane(Pane::Detail));

    assert!(!app.panes.list_open);
    assert!(!app.panes.detail_open);
    assert_eq!(app.catalog.result_count(), 2);
    assert_eq!(app.catalog.selected_id(), Some(2));
    assert_eq!(app.catalog.query(), "");

    let screen = render(&mut app, 100, 24);
    assert!(!screen.contains("Mushishi"));
    assert!(screen.contains("[+]"));
    assert!(screen.contains("Found 2 results"));
}

#[test]
fn click_on_toggle_collapses_pane() {
    let mut app = test_app();
    render(&mut app, 100, 24);
    let toggle = app.last_layout.unwrap().toggle_rect(Pane::Detail);

    app.update(Action::ClickAt(toggle.x + 1, toggle.y));
    assert!(!app.panes.detail_open);
    assert!(app.panes.list_open);
}

// ── Help / quit ─────────────────────────────────────────────────

#[test]
fn help_overlay_swallows_navigation() {
    let mut app = test_app();
    deliver(&mut app, 1, entries(&[(1, "A"), (2, "B")]));
    app.update(Action::FocusList);
    app.update(Action::ToggleHelp);
    app.update(Action::MoveDown);
    assert_eq!(app.list_cursor, 0);

    app.update(Action::FocusList);
    assert!(!app.show_help);
}

#[test]
fn quit_sets_flag() {
    let mut app = test_app();
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn spinner_shows_while_requests_are_in_flight() {
    let (mut app, _rx) = wired_app();
    app.start();
    let screen = render(&mut app, 100, 24);
    assert!(screen.contains(crate::view::spinner_char(0)));
    assert!(screen.contains("Loading..."));
}

#[test]
fn unsent_request_does_not_leave_loading_indicator() {
    let (mut app, rx) = wired_app();
    drop(rx);
    app.start();
    app.update(Action::QueryInput('a'));
    assert_eq!(app.catalog.in_flight(), 0);
    assert!(!render(&mut app, 100, 24).contains("Loading..."));

    let mut detached = test_app();
    detached.start();
    assert_eq!(detached.catalog.in_flight(), 0);
}
