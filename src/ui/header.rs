use crate::app::App;
use crate::ui::colors::{CLOCK_DATE_FG, CLOCK_TIME_FG, TITLE_BG, WHITE_COLOR};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

impl App {
    pub(super) fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let title_middle = Line::from(" Searchbox ").centered();
        let title_right = Line::from(format!("v{} ", env!("CARGO_PKG_VERSION")))
            .right_aligned()
            .style(Style::default().fg(WHITE_COLOR));

        Block::default()
            .title_bottom(title_middle)
            .title_bottom(title_right)
            .style(Style::default().bg(TITLE_BG))
            .render(area, buf);
    }

    pub(super) fn render_clock(&self, area: Rect, buf: &mut Buffer) {
        let (time, date) = self.clock.now();

        let lines = vec![
            Line::from(""),
            Line::from(time).style(Style::default().fg(CLOCK_TIME_FG).add_modifier(Modifier::BOLD)),
            Line::from(date).style(Style::default().fg(CLOCK_DATE_FG)),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).render(area, buf);
    }
}
