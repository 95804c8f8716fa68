use crate::app::App;
use color_eyre::Result;

/// Represents actions that can be performed in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Application Control
    Quit,
    ToggleHelp,
    Cancel,

    // Input
    Submit,
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    HistoryRecallPrevious,
    HistoryRecallNext,
    FillLastSearch,
    FillRandomSuggestion,

    // History
    FocusHistory,
    FocusInput,
    SelectPrevious,
    SelectNext,
    SearchSelected,
    EditSelected,
    ClearHistory,

    // Help
    ScrollHelpUp,
    ScrollHelpDown,
}

impl Command {
    /// Short text shown next to the key in the help popup.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::ToggleHelp => "Toggle help",
            Command::Cancel => "Cancel/Clear input",

            Command::Submit => "Search",
            Command::InsertNewline => "Insert newline",
            Command::DeleteBackward => "Delete previous character",
            Command::DeleteForward => "Delete character",
            Command::CursorLeft => "Move cursor left",
            Command::CursorRight => "Move cursor right",
            Command::CursorHome => "Start of line",
            Command::CursorEnd => "End of line",
            Command::HistoryRecallPrevious => "Line up / previous search from history",
            Command::HistoryRecallNext => "Line down / next search from history",
            Command::FillLastSearch => "Fill in last search",
            Command::FillRandomSuggestion => "Fill in random suggestion",

            Command::FocusHistory => "Browse history",
            Command::FocusInput => "Back to input",
            Command::SelectPrevious => "Select previous term",
            Command::SelectNext => "Select next term",
            Command::SearchSelected => "Search selected term",
            Command::EditSelected => "Edit selected term",
            Command::ClearHistory => "Clear history",

            Command::ScrollHelpUp => "Scroll up",
            Command::ScrollHelpDown => "Scroll down",
        }
    }

    /// Executes this command on the given application.
    pub fn execute(&self, app: &mut App) -> Result<()> {
        match self {
            // Application Control
            Command::Quit => app.quit(),
            Command::ToggleHelp => app.help.toggle_visibility(),
            Command::Cancel => app.cancel(),

            // Input
            Command::Submit => app.submit(),
            Command::InsertNewline => app.edit_input(|input| input.insert_newline()),
            Command::DeleteBackward => app.edit_input(|input| input.backspace()),
            Command::DeleteForward => app.edit_input(|input| input.delete()),
            Command::CursorLeft => app.input.move_left(),
            Command::CursorRight => app.input.move_right(),
            Command::CursorHome => app.input.move_home(),
            Command::CursorEnd => app.input.move_end(),
            Command::HistoryRecallPrevious => app.recall_previous(),
            Command::HistoryRecallNext => app.recall_next(),
            Command::FillLastSearch => app.fill_last_search(),
            Command::FillRandomSuggestion => app.fill_random_suggestion(),

            // History
            Command::FocusHistory => app.focus_history(),
            Command::FocusInput => app.focus_input(),
            Command::SelectPrevious => app.selection.move_up(),
            Command::SelectNext => app.selection.move_down(),
            Command::SearchSelected => app.search_selected(),
            Command::EditSelected => app.edit_selected(),
            Command::ClearHistory => app.clear_history(),

            // Help
            Command::ScrollHelpUp => app.help.move_up(),
            Command::ScrollHelpDown => app.help.move_down(),
        }
        Ok(())
    }
}
