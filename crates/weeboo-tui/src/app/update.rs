use super::{App, InputMode};
use crate::action::Action;
use crate::model::panes::Pane;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Help overlay swallows everything except quitting and closing it
        if self.show_help {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ToggleHelp | Action::FocusList => self.show_help = false,
                Action::Tick => self.tick = self.tick.wrapping_add(1),
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_, _) => {
                // visible_rows is recomputed on the next render
            }

            // Query editing
            Action::FocusSearch => self.input_mode = InputMode::Search,
            Action::FocusList => self.input_mode = InputMode::Normal,
            Action::QueryInput(c) => {
                let mut query = self.catalog.query().to_string();
                query.push(c);
                self.set_query(query);
            }
            Action::QueryBackspace => {
                let mut query = self.catalog.query().to_string();
                if query.pop().is_some() {
                    self.set_query(query);
                }
            }
            Action::QueryClear => {
                if !self.catalog.query().is_empty() {
                    self.set_query(String::new());
                }
            }

            // List navigation
            Action::MoveDown => {
                let max = self.catalog.result_count().saturating_sub(1);
                self.list_cursor = (self.list_cursor + 1).min(max);
            }
            Action::MoveUp => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            Action::PageDown => {
                let max = self.catalog.result_count().saturating_sub(1);
                self.list_cursor = (self.list_cursor + self.visible_rows.max(1)).min(max);
            }
            Action::PageUp => {
                self.list_cursor = self.list_cursor.saturating_sub(self.visible_rows.max(1));
            }
            Action::GoTop => self.list_cursor = 0,
            Action::GoBottom => {
                self.list_cursor = self.catalog.result_count().saturating_sub(1);
            }
            Action::SelectHighlighted => {
                if let Some(id) = self.catalog.results().get(self.list_cursor).map(|e| e.id) {
                    self.select(id);
                }
            }

            // Detail pane
            Action::ScrollDetailDown => {
                self.detail_scroll = self
                    .detail_scroll
                    .saturating_add(1)
                    .min(self.detail_max_scroll);
            }
            Action::ScrollDetailUp => self.detail_scroll = self.detail_scroll.saturating_sub(1),

            Action::TogglePane(pane) => self.panes.toggle(pane),
            Action::ToggleHelp => self.show_help = true,
            Action::ClickAt(x, y) => self.handle_click(x, y),
            Action::None => {}
        }
        false
    }

    /// Update the query text and dispatch a search for it.
    pub fn set_query(&mut self, text: String) {
        let ticket = self.catalog.set_query(text);
        self.send_fetch(ticket);
    }

    /// Select an entry by id. Unknown ids leave the detail pane empty.
    pub fn select(&mut self, id: weeboo_core::EntryId) {
        if !self.catalog.select(id) {
            tracing::debug!(id, "selected id not in current results");
        }
        self.detail_scroll = 0;
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        let Some(layout) = self.last_layout else {
            return;
        };

        for pane in [Pane::List, Pane::Detail] {
            if layout.toggle_rect(pane).contains((x, y).into()) {
                self.panes.toggle(pane);
                return;
            }
        }

        if layout.search.contains((x, y).into()) {
            self.input_mode = InputMode::Search;
            return;
        }

        let list = layout.pane_inner(Pane::List);
        if self.panes.is_open(Pane::List) && list.contains((x, y).into()) {
            let row = ((y - list.y) / crate::view::list::ROW_HEIGHT) as usize;
            // An odd inner height leaves a blank last line that belongs to no row
            if row >= crate::view::list::visible_items(list) {
                return;
            }
            let index = self.list_offset + row;
            if let Some(id) = self.catalog.results().get(index).map(|e| e.id) {
                self.list_cursor = index;
                self.input_mode = InputMode::Normal;
                self.select(id);
            }
        }
    }
}
