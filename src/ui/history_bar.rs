use crate::app::{App, ViewState};
use crate::ui::colors::{
    DIM_COLOR, HISTORY_BORDER, HISTORY_FOCUSED_BORDER, LABEL_BG, LABEL_FG, LABEL_SELECTED_BG, LABEL_SELECTED_FG,
};
use crate::utils::{HISTORY_LABEL_CHARS, single_line, truncate_label};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Shown instead of the labels when there is no history.
pub const NO_HISTORY_MESSAGE: &str = "No search history";

/// Short label for a history term.
pub fn history_label(term: &str) -> String {
    truncate_label(&single_line(term), HISTORY_LABEL_CHARS)
}

impl App {
    pub(super) fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.view_state == ViewState::History && !self.help.is_visible();
        let border_color = if focused { HISTORY_FOCUSED_BORDER } else { HISTORY_BORDER };

        let mut block = Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        if self.history.is_empty() {
            Paragraph::new(Line::from(NO_HISTORY_MESSAGE).style(Style::default().fg(DIM_COLOR)))
                .block(block)
                .render(area, buf);
            return;
        }

        // Full text of the focused label, the terminal's stand-in for a hover tooltip
        if focused && let Some(term) = self.selected_term() {
            block = block.title(Line::from(format!(" {} ", single_line(&term))).right_aligned());
        }
        let clear_hint = if focused { " c:Clear " } else { " Tab:Browse  Ctrl+x:Clear " };
        block = block.title_bottom(Line::from(clear_hint).right_aligned());

        let selected = if focused { self.selection.selected() } else { None };
        let mut spans = Vec::with_capacity(self.history.len() * 2);
        for (index, term) in self.history.entries().iter().enumerate() {
            let style = if selected == Some(index) {
                Style::default()
                    .fg(LABEL_SELECTED_FG)
                    .bg(LABEL_SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(LABEL_FG).bg(LABEL_BG)
            };
            spans.push(Span::styled(format!(" {} ", history_label(term)), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::SearchTerm;
    use crate::ui::tests::{render_rows, test_app};

    fn record(app: &mut App, term: &str) {
        app.history.record(&SearchTerm::parse(term).unwrap());
        app.selection.set_item_count(app.history.len());
    }

    #[test]
    fn test_history_label() {
        assert_eq!(history_label("rust"), "rust");
        assert_eq!(history_label("ratatui"), "ratat...");
        assert_eq!(history_label("a\nb"), "a⏎b");
    }

    #[test]
    fn test_empty_history_shows_placeholder_without_clear_hint() {
        let app = test_app();
        let rows = render_rows(&app, 60, 20);
        assert!(rows.iter().any(|row| row.contains(NO_HISTORY_MESSAGE)));
        assert!(!rows.iter().any(|row| row.contains("Clear")));
    }

    #[test]
    fn test_labels_are_truncated() {
        let mut app = test_app();
        record(&mut app, "crossterm");
        record(&mut app, "tokio");
        let rows = render_rows(&app, 60, 20);

        assert!(rows.iter().any(|row| row.contains(" tokio ") && row.contains(" cross... ")));
        assert!(rows.iter().any(|row| row.contains("Ctrl+x:Clear")));
        assert!(!rows.iter().any(|row| row.contains(NO_HISTORY_MESSAGE)));
    }

    #[test]
    fn test_focused_label_shows_full_term() {
        let mut app = test_app();
        record(&mut app, "crossterm");
        app.focus_history();
        let rows = render_rows(&app, 60, 20);

        assert!(rows.iter().any(|row| row.contains(" crossterm ")));
        assert!(rows.iter().any(|row| row.contains("c:Clear")));
    }
}
