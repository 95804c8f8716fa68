use crate::app::App;
use crate::history::MAX_HISTORY_LENGTH;
use crate::ui::colors::{FOOTER_BG, STATUS_FG};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

impl App {
    pub(super) fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let left = Line::from(self.status.clone().unwrap_or_default()).style(Style::default().fg(STATUS_FG));
        let middle = Line::from("F1:Help").centered();
        let right = Line::from(format!("{}/{} ", self.history.len(), MAX_HISTORY_LENGTH)).right_aligned();

        Block::default()
            .title_bottom(left)
            .title_bottom(middle)
            .title_bottom(right)
            .style(Style::default().bg(FOOTER_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::tests::{render_rows, test_app};

    #[test]
    fn test_footer_shows_status_and_count() {
        let mut app = test_app();
        app.input.set_value("rust");
        app.submit();

        let rows = render_rows(&app, 60, 20);
        let footer = &rows[19];
        assert!(footer.contains("Searched for \"rust\""));
        assert!(footer.contains("1/10"));
    }
}
