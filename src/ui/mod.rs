pub mod colors;
mod footer;
mod header;
mod history_bar;
mod input_box;
mod popups;

use crate::app::{App, ViewState};
pub use history_bar::{NO_HISTORY_MESSAGE, history_label};
pub use popups::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    text::Span,
    widgets::Widget,
};

/// Height of the clock below the title bar.
const CLOCK_HEIGHT: u16 = 3;
/// Size of the help popup.
const HELP_POPUP_SIZE: (u16, u16) = (56, 32);

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub clock: Rect,
    pub input: Rect,
    pub history: Rect,
    pub footer: Rect,
}

/// Splits `area` into the screen regions. The input grows with its number of lines, up to half of
/// the screen.
pub fn layout(app: &App, area: Rect) -> AppLayout {
    let max_input_height = (area.height / 2).max(3);
    let input_height = (app.input.line_count() as u16).saturating_add(2).clamp(3, max_input_height);

    let [title, clock, input, history, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(CLOCK_HEIGHT),
        Constraint::Length(input_height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    AppLayout {
        title,
        clock,
        input,
        history,
        footer,
    }
}

/// First input row to show so that the cursor row stays visible.
fn input_scroll(cursor_row: usize, visible_rows: u16) -> u16 {
    (cursor_row as u16).saturating_sub(visible_rows.saturating_sub(1))
}

/// Inner area of a bordered block.
fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Terminal cursor position inside the input, when the input has focus.
pub fn cursor_position(app: &App, area: Rect) -> Option<Position> {
    if app.view_state != ViewState::Input || app.help.is_visible() {
        return None;
    }

    let input_area = inner(layout(app, area).input);
    if input_area.width == 0 || input_area.height == 0 {
        return None;
    }

    let (row, prefix) = app.input.cursor_line();
    let scroll = input_scroll(row, input_area.height);
    let column = (Span::raw(prefix).width() as u16).min(input_area.width - 1);
    let visible_row = (row as u16).saturating_sub(scroll);

    Some(Position::new(input_area.x + column, input_area.y + visible_row))
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let regions = layout(self, area);

        self.render_title(regions.title, buf);
        self.render_clock(regions.clock, buf);
        self.render_input(regions.input, buf);
        self.render_history(regions.history, buf);
        self.render_footer(regions.footer, buf);

        if self.help.is_visible() {
            let (w, h) = HELP_POPUP_SIZE;
            self.help.render(popup_area(area, w, h), buf);
        }
    }
}
