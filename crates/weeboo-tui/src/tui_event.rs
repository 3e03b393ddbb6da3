use weeboo_core::{Entry, Ticket};

/// Commands sent from the TUI to the backend.
#[derive(Debug)]
pub enum BackendCommand {
    /// Run one catalog request. Requests already in flight keep running.
    Fetch(Ticket),
}

/// Events flowing from the backend request tasks to the TUI.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// A request finished. Failures arrive as an empty `results`.
    Results { seq: u64, results: Vec<Entry> },
}
