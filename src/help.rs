use crate::app::ViewState;
use crate::keybindings::{KeybindingContext, KeybindingRegistry};
use crate::ui::colors::{HELP_BG, HELP_BORDER_FG, HELP_HEADER_FG, HELP_HIGHLIGHT_FG};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Width of the key column in the help popup.
const KEY_COLUMN_WIDTH: usize = 12;

/// Help popup listing the keybindings of every context.
#[derive(Debug)]
pub struct Help {
    visible: bool,
    scroll: u16,
    lines: Vec<Line<'static>>,
}

impl Help {
    pub fn new(registry: &KeybindingRegistry) -> Self {
        Self {
            visible: false,
            scroll: 0,
            lines: Self::build_lines(registry),
        }
    }

    fn build_lines(registry: &KeybindingRegistry) -> Vec<Line<'static>> {
        let contexts = [
            KeybindingContext::View(ViewState::Input),
            KeybindingContext::View(ViewState::History),
            KeybindingContext::Help,
        ];

        let mut lines = Vec::new();
        for context in contexts {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(
                Line::from(context.title())
                    .style(Style::default().fg(HELP_HEADER_FG).add_modifier(Modifier::BOLD)),
            );
            for (key, command) in registry.get_keybindings_for_context(context) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", key, width = KEY_COLUMN_WIDTH),
                        Style::default().fg(HELP_HIGHLIGHT_FG),
                    ),
                    Span::raw(command.description()),
                ]));
            }
        }
        lines
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
        self.scroll = 0;
    }

    pub fn move_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let max_scroll = self.lines.len().saturating_sub(1) as u16;
        self.scroll = (self.scroll + 1).min(max_scroll);
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(HELP_BORDER_FG))
            .style(Style::default().bg(HELP_BG));

        Paragraph::new(self.lines.clone())
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
