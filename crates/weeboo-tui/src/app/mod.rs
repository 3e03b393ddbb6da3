mod backend;
mod update;

use ratatui::Frame;
use tokio::sync::mpsc;

use weeboo_core::{CatalogState, Ticket};

use crate::model::panes::{Pane, PaneToggles};
use crate::theme::Theme;
use crate::tui_event::BackendCommand;
use crate::view::ScreenLayout;

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate the result list.
    Normal,
    /// Keys edit the query text.
    Search,
}

/// Main application state.
///
/// Owns every piece of mutable state; views borrow it read-only and user
/// intents come back through [`App::update`].
pub struct App {
    pub catalog: CatalogState,
    pub panes: PaneToggles,
    pub theme: Theme,
    pub input_mode: InputMode,
    /// Highlighted row in the result list. Independent of the selection.
    pub list_cursor: usize,
    /// First result shown in the list viewport.
    pub list_offset: usize,
    pub detail_scroll: u16,
    /// Largest useful `detail_scroll` for the last rendered detail pane.
    pub detail_max_scroll: u16,
    /// Number of results that fit in the list viewport (set on render).
    pub visible_rows: usize,
    pub tick: usize,
    pub show_help: bool,
    pub should_quit: bool,
    /// Channel to send commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    /// Layout of the last rendered frame (for mouse click mapping).
    pub last_layout: Option<ScreenLayout>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            catalog: CatalogState::new(),
            panes: PaneToggles::default(),
            theme,
            input_mode: InputMode::Search,
            list_cursor: 0,
            list_offset: 0,
            detail_scroll: 0,
            detail_max_scroll: 0,
            visible_rows: 10,
            tick: 0,
            show_help: false,
            should_quit: false,
            backend_cmd_tx: None,
            last_layout: None,
        }
    }

    /// Kick off the initial unfiltered listing.
    pub fn start(&mut self) {
        let ticket = self.catalog.begin_default_fetch();
        self.send_fetch(ticket);
    }

    /// Hand a ticket to the backend listener. A ticket that cannot be sent
    /// is abandoned so the loading indicator does not stick.
    fn send_fetch(&mut self, ticket: Ticket) {
        let Some(tx) = &self.backend_cmd_tx else {
            self.catalog.abandon(&ticket);
            return;
        };
        if let Err(mpsc::error::SendError(BackendCommand::Fetch(ticket))) =
            tx.send(BackendCommand::Fetch(ticket))
        {
            tracing::warn!(seq = ticket.seq, "backend listener is gone, request dropped");
            self.catalog.abandon(&ticket);
        }
    }

    // update() is in update.rs
    // handle_backend_event() is in backend.rs

    /// Keep the list cursor inside the viewport.
    fn scroll_list_into_view(&mut self) {
        let visible = self.visible_rows.max(1);
        if self.list_cursor < self.list_offset {
            self.list_offset = self.list_cursor;
        } else if self.list_cursor >= self.list_offset + visible {
            self.list_offset = self.list_cursor + 1 - visible;
        }
    }

    /// Render the whole screen.
    pub fn view(&mut self, f: &mut Frame) {
        let layout = crate::view::compute_layout(f.area());

        self.visible_rows = crate::view::list::visible_items(layout.pane_inner(Pane::List));
        self.scroll_list_into_view();
        self.detail_max_scroll = match self.catalog.selected() {
            Some(entry) if self.panes.is_open(Pane::Detail) => {
                let inner = layout.pane_inner(Pane::Detail);
                crate::view::detail::wrapped_height(entry, &self.theme, inner.width)
                    .saturating_sub(inner.height)
            }
            _ => 0,
        };
        self.detail_scroll = self.detail_scroll.min(self.detail_max_scroll);
        self.last_layout = Some(layout);

        crate::view::header::render(f, self, &layout);
        crate::view::pane::render(f, self, Pane::List, layout.list_pane);
        crate::view::pane::render(f, self, Pane::Detail, layout.detail_pane);
        crate::view::footer::render(f, self, layout.footer);

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
