use crate::model::panes::Pane;

/// A user intent, decoded from terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    /// Select the entry under the list cursor.
    SelectHighlighted,
    /// Switch to typing into the search box.
    FocusSearch,
    /// Leave the search box and navigate the list.
    FocusList,
    QueryInput(char),
    QueryBackspace,
    QueryClear,
    TogglePane(Pane),
    ScrollDetailDown,
    ScrollDetailUp,
    ToggleHelp,
    ClickAt(u16, u16),
    Resize(u16, u16),
    Tick,
    None,
}
