use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::Results { seq, results } => {
                if self.catalog.apply(seq, results) {
                    self.list_cursor = 0;
                    self.list_offset = 0;
                    self.detail_scroll = 0;
                }
            }
        }
    }
}
