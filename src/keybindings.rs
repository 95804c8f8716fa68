use crate::app::ViewState;
use crate::command::Command;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the context for a keybinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    View(ViewState),
    Help,
}

impl KeybindingContext {
    /// Heading used for this context in the help popup.
    pub fn title(&self) -> &'static str {
        match self {
            KeybindingContext::View(ViewState::Input) => "Input",
            KeybindingContext::View(ViewState::History) => "History",
            KeybindingContext::Help => "Help",
        }
    }
}

type KeyBindingKey = (KeybindingContext, KeyCode, KeyModifiers);

/// Registry of all keybindings mapped to commands.
#[derive(Debug, Default)]
pub struct KeybindingRegistry {
    bindings: Vec<(KeyBindingKey, Command)>,
}

impl KeybindingRegistry {
    /// Creates a new keybinding registry with all default bindings.
    pub fn new() -> Self {
        let mut registry = Self { bindings: Vec::new() };

        registry.register_input_bindings();
        registry.register_history_bindings();
        registry.register_help_bindings();

        registry.register_global_bindings(KeybindingContext::View(ViewState::Input));
        registry.register_global_bindings(KeybindingContext::View(ViewState::History));
        registry.register_global_bindings(KeybindingContext::Help);

        registry
    }

    /// Finds the command bound to `key_event`. The help popup takes precedence over the view.
    pub fn lookup(&self, view_state: ViewState, help_visible: bool, key_event: KeyEvent) -> Option<Command> {
        let context = if help_visible {
            KeybindingContext::Help
        } else {
            KeybindingContext::View(view_state)
        };

        self.bindings
            .iter()
            .find(|((ctx, code, modifiers), _)| {
                *ctx == context && *code == key_event.code && *modifiers == key_event.modifiers
            })
            .map(|(_, cmd)| *cmd)
    }

    /// Returns all keybindings for a specific context, in registration order.
    pub fn get_keybindings_for_context(&self, target_context: KeybindingContext) -> Vec<(String, Command)> {
        self.bindings
            .iter()
            .filter(|((context, _, _), _)| *context == target_context)
            .map(|((_, keycode, modifiers), cmd)| (Self::format_key(*keycode, *modifiers), *cmd))
            .collect()
    }

    fn format_key(keycode: KeyCode, modifiers: KeyModifiers) -> String {
        let key_str = match keycode {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", keycode),
        };

        if modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key_str)
        } else if modifiers.contains(KeyModifiers::ALT) {
            format!("Alt+{}", key_str)
        } else if modifiers.contains(KeyModifiers::SHIFT) {
            format!("Shift+{}", key_str)
        } else {
            key_str
        }
    }

    fn bind(&mut self, context: KeybindingContext, keycode: KeyCode, modifiers: KeyModifiers, command: Command) {
        self.bindings.push(((context, keycode, modifiers), command));
    }

    fn bind_simple(&mut self, context: KeybindingContext, keycode: KeyCode, command: Command) {
        self.bind(context, keycode, KeyModifiers::empty(), command);
    }

    fn bind_ctrl(&mut self, context: KeybindingContext, c: char, command: Command) {
        self.bind(context, KeyCode::Char(c), KeyModifiers::CONTROL, command);
    }

    /// Registers global keybindings that work in all states.
    fn register_global_bindings(&mut self, context: KeybindingContext) {
        self.bind_ctrl(context, 'c', Command::Quit);
        self.bind_simple(context, KeyCode::F(1), Command::ToggleHelp);
    }

    fn register_input_bindings(&mut self) {
        let context = KeybindingContext::View(ViewState::Input);

        self.bind_simple(context, KeyCode::Enter, Command::Submit);
        self.bind(context, KeyCode::Enter, KeyModifiers::ALT, Command::InsertNewline);
        self.bind(context, KeyCode::Enter, KeyModifiers::SHIFT, Command::InsertNewline);
        self.bind_ctrl(context, 'j', Command::InsertNewline);
        self.bind_simple(context, KeyCode::Esc, Command::Cancel);
        self.bind_simple(context, KeyCode::Backspace, Command::DeleteBackward);
        self.bind_simple(context, KeyCode::Delete, Command::DeleteForward);
        self.bind_simple(context, KeyCode::Left, Command::CursorLeft);
        self.bind_simple(context, KeyCode::Right, Command::CursorRight);
        self.bind_simple(context, KeyCode::Home, Command::CursorHome);
        self.bind_simple(context, KeyCode::End, Command::CursorEnd);
        self.bind_simple(context, KeyCode::Up, Command::HistoryRecallPrevious);
        self.bind_simple(context, KeyCode::Down, Command::HistoryRecallNext);
        self.bind_simple(context, KeyCode::Tab, Command::FocusHistory);
        self.bind_ctrl(context, 'l', Command::FillLastSearch);
        self.bind_ctrl(context, 'r', Command::FillRandomSuggestion);
        self.bind_ctrl(context, 'x', Command::ClearHistory);
    }

    fn register_history_bindings(&mut self) {
        let context = KeybindingContext::View(ViewState::History);

        self.bind_simple(context, KeyCode::Enter, Command::SearchSelected);
        self.bind_simple(context, KeyCode::Left, Command::SelectPrevious);
        self.bind_simple(context, KeyCode::Right, Command::SelectNext);
        self.bind_simple(context, KeyCode::Char('h'), Command::SelectPrevious);
        self.bind_simple(context, KeyCode::Char('l'), Command::SelectNext);
        self.bind_simple(context, KeyCode::Char('e'), Command::EditSelected);
        self.bind_simple(context, KeyCode::Char('c'), Command::ClearHistory);
        self.bind_simple(context, KeyCode::Delete, Command::ClearHistory);
        self.bind_simple(context, KeyCode::Tab, Command::FocusInput);
        self.bind_simple(context, KeyCode::Esc, Command::FocusInput);
        self.bind_simple(context, KeyCode::Char('q'), Command::Quit);
    }

    fn register_help_bindings(&mut self) {
        let context = KeybindingContext::Help;

        self.bind_simple(context, KeyCode::Esc, Command::ToggleHelp);
        self.bind_simple(context, KeyCode::Char('q'), Command::ToggleHelp);
        self.bind_simple(context, KeyCode::Up, Command::ScrollHelpUp);
        self.bind_simple(context, KeyCode::Down, Command::ScrollHelpDown);
    }
}
