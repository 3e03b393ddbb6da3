/// One of the two collapsible panes in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    List,
    Detail,
}

impl Pane {
    pub fn title(self) -> &'static str {
        match self {
            Pane::List => " Results ",
            Pane::Detail => " Details ",
        }
    }
}

/// Open/closed flags for the panes. Purely presentational: toggling a pane
/// never touches the catalog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneToggles {
    pub list_open: bool,
    pub detail_open: bool,
}

impl Default for PaneToggles {
    fn default() -> Self {
        Self {
            list_open: true,
            detail_open: true,
        }
    }
}

impl PaneToggles {
    pub fn is_open(&self, pane: Pane) -> bool {
        match pane {
            Pane::List => self.list_open,
            Pane::Detail => self.detail_open,
        }
    }

    pub fn toggle(&mut self, pane: Pane) {
        match pane {
            Pane::List => self.list_open = !self.list_open,
            Pane::Detail => self.detail_open = !self.detail_open,
        }
    }
}
