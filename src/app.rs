use crate::{
    clock::Clock,
    event::{Event, EventHandler},
    help::Help,
    history::SearchHistory,
    input::InputField,
    keybindings::KeybindingRegistry,
    list_view_state::ListViewState,
    search::{Dispatcher, random_suggestion},
    ui,
    utils::single_line,
};
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use tracing::debug;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Typing in the search input.
    Input,
    /// Moving between history labels.
    History,
}

/// Application.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub view_state: ViewState,
    pub help: Help,
    pub keybindings: KeybindingRegistry,
    pub input: InputField,
    pub history: SearchHistory,
    pub selection: ListViewState,
    pub dispatcher: Dispatcher,
    pub clock: Clock,
    /// Message about the last action, shown in the footer.
    pub status: Option<String>,
    /// Input typed before history recall started, restored when recall ends.
    draft: Option<String>,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(history: SearchHistory, dispatcher: Dispatcher, clock: Clock) -> Self {
        let keybindings = KeybindingRegistry::new();
        let mut selection = ListViewState::new();
        selection.set_item_count(history.len());

        Self {
            running: true,
            view_state: ViewState::Input,
            help: Help::new(&keybindings),
            keybindings,
            input: InputField::new(),
            history,
            selection,
            dispatcher,
            clock,
            status: None,
            draft: None,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let mut events = EventHandler::new();

        while self.running {
            terminal.draw(|frame| self.draw(frame))?;
            match events.next().await? {
                Event::Tick => self.tick(),
                Event::Crossterm(event) => match event {
                    CrosstermEvent::Key(key_event) => self.handle_key_events(key_event)?,
                    CrosstermEvent::Paste(text) => self.paste(&text),
                    _ => {}
                },
            }
        }
        Ok(())
    }

    /// Renders the application and places the terminal cursor in the input.
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(self, area);
        if let Some(position) = ui::cursor_position(self, area) {
            frame.set_cursor_position(position);
        }
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> color_eyre::Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        if let Some(command) = self
            .keybindings
            .lookup(self.view_state, self.help.is_visible(), key_event)
        {
            debug!("Executing {:?}", command);
            return command.execute(self);
        }

        if self.view_state == ViewState::Input
            && !self.help.is_visible()
            && let KeyCode::Char(c) = key_event.code
            && key_event.modifiers.difference(KeyModifiers::SHIFT).is_empty()
        {
            self.edit_input(|input| input.insert_char(c));
        }
        Ok(())
    }

    /// Inserts pasted text into the input.
    pub fn paste(&mut self, text: &str) {
        if self.view_state != ViewState::Input || self.help.is_visible() {
            return;
        }
        self.edit_input(|input| {
            for c in text.chars().filter(|c| *c != '\r') {
                input.insert_char(c);
            }
        });
    }

    /// Applies an edit to the input. Editing leaves history recall.
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut InputField)) {
        edit(&mut self.input);
        self.leave_recall();
    }

    fn leave_recall(&mut self) {
        self.history.reset();
        self.draft = None;
    }

    /// Searches for the current input. Blank input is ignored and left untouched.
    pub fn submit(&mut self) {
        let raw = self.input.value().to_string();
        if self.perform_search(&raw) {
            self.input.clear();
        }
    }

    /// Searches again for the selected history term.
    pub fn search_selected(&mut self) {
        let Some(term) = self.selected_term() else {
            return;
        };
        if self.perform_search(&term) {
            // The term is now the newest entry
            self.selection.reset();
        }
    }

    fn perform_search(&mut self, raw: &str) -> bool {
        match self.dispatcher.perform_search(raw, &mut self.history) {
            Some(term) => {
                self.selection.set_item_count(self.history.len());
                self.status = Some(format!("Searched for \"{}\"", single_line(term.as_str())));
                true
            }
            None => false,
        }
    }

    /// Full text of the selected history term.
    pub fn selected_term(&self) -> Option<String> {
        self.selection
            .selected()
            .and_then(|index| self.history.entries().get(index))
            .cloned()
    }

    /// Copies the selected history term into the input for editing.
    pub fn edit_selected(&mut self) {
        if let Some(term) = self.selected_term() {
            self.input.set_value(&term);
            self.focus_input();
        }
    }

    /// Moves the cursor up a line, or recalls the next older entry from the first line.
    ///
    /// The typed draft is kept aside when recall starts.
    pub fn recall_previous(&mut self) {
        if !self.input.on_first_line() {
            self.input.move_up();
            return;
        }
        let starting = !self.history.is_recalling();
        if let Some(entry) = self.history.previous_record() {
            let entry = entry.to_string();
            if starting {
                self.draft = Some(self.input.value().to_string());
            }
            self.input.set_value(&entry);
        }
    }

    /// Moves the cursor down a line, or recalls the next newer entry from the last line.
    ///
    /// Moving past the newest entry brings back the draft.
    pub fn recall_next(&mut self) {
        if !self.input.on_last_line() {
            self.input.move_down();
            return;
        }
        if !self.history.is_recalling() {
            return;
        }
        match self.history.next_record() {
            Some(entry) => {
                let entry = entry.to_string();
                self.input.set_value(&entry);
            }
            None => {
                let draft = self.draft.take().unwrap_or_default();
                self.input.set_value(&draft);
            }
        }
    }

    /// Pre-fills the input with the last searched term, without searching.
    pub fn fill_last_search(&mut self) {
        match self.history.last() {
            Some(term) => self.input.set_value(term.as_str()),
            None => self.status = Some("No previous search".to_string()),
        }
        self.leave_recall();
    }

    /// Pre-fills the input with a random suggestion, without searching.
    pub fn fill_random_suggestion(&mut self) {
        self.input.set_value(random_suggestion());
        self.leave_recall();
    }

    pub fn focus_history(&mut self) {
        if self.history.is_empty() {
            self.status = Some("No search history".to_string());
            return;
        }
        self.selection.set_item_count(self.history.len());
        self.selection.reset();
        self.view_state = ViewState::History;
    }

    pub fn focus_input(&mut self) {
        self.view_state = ViewState::Input;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.selection.set_item_count(0);
        self.view_state = ViewState::Input;
        self.status = Some("History cleared".to_string());
    }

    /// Clears the input and the status message and leaves history recall.
    pub fn cancel(&mut self) {
        self.input.clear();
        self.leave_recall();
        self.status = None;
    }

    /// Handles the tick event of the terminal.
    ///
    /// The clock is formatted at render time, so a tick only needs to trigger a redraw.
    pub fn tick(&self) {}

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
