use crate::app::{App, ViewState};
use crate::ui::colors::{INPUT_BORDER, INPUT_FOCUSED_BORDER, PLACEHOLDER_FG, WHITE_COLOR};
use crate::ui::{inner, input_scroll};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Shown in the empty input.
const PLACEHOLDER: &str = "Type a term and press Enter to search";

impl App {
    pub(super) fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.view_state == ViewState::Input && !self.help.is_visible();
        let border_color = if focused { INPUT_FOCUSED_BORDER } else { INPUT_BORDER };

        let mut block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        if focused {
            block = block.title_bottom(Line::from(" Alt+Enter:New line ").right_aligned());
        }

        let paragraph = if self.input.is_empty() {
            Paragraph::new(Line::from(PLACEHOLDER).style(Style::default().fg(PLACEHOLDER_FG)))
        } else {
            let (row, _) = self.input.cursor_line();
            let scroll = input_scroll(row, inner(area).height);
            Paragraph::new(self.input.value())
                .style(Style::default().fg(WHITE_COLOR))
                .scroll((scroll, 0))
        };

        paragraph.block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::tests::{render_rows, test_app};

    #[test]
    fn test_placeholder_when_empty() {
        let app = test_app();
        let rows = render_rows(&app, 60, 20);
        assert!(rows.iter().any(|row| row.contains("Type a term and press Enter")));
    }

    #[test]
    fn test_multiline_value_is_rendered() {
        let mut app = test_app();
        app.input.set_value("first\nsecond");
        let rows = render_rows(&app, 60, 20);

        let first = rows.iter().position(|row| row.contains("first")).unwrap();
        assert!(rows[first + 1].contains("second"));
    }
}
