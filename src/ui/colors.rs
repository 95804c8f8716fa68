use ratatui::style::Color;

/// Common colors
pub const GRAY_COLOR: Color = Color::Indexed(237);
pub const BLACK_COLOR: Color = Color::Indexed(234);
pub const WHITE_COLOR: Color = Color::White;
pub const BRIGHT_WHITE_COLOR: Color = Color::Rgb(255, 255, 255);
pub const DIM_COLOR: Color = Color::DarkGray;

// Title bar and footer
pub const TITLE_BG: Color = GRAY_COLOR;
pub const FOOTER_BG: Color = GRAY_COLOR;
pub const STATUS_FG: Color = Color::Yellow;

// Clock
pub const CLOCK_TIME_FG: Color = BRIGHT_WHITE_COLOR;
pub const CLOCK_DATE_FG: Color = Color::Gray;

// Input
pub const INPUT_FOCUSED_BORDER: Color = Color::Yellow;
pub const INPUT_BORDER: Color = GRAY_COLOR;
pub const PLACEHOLDER_FG: Color = DIM_COLOR;

// History labels
pub const HISTORY_FOCUSED_BORDER: Color = Color::Cyan;
pub const HISTORY_BORDER: Color = GRAY_COLOR;
pub const LABEL_FG: Color = BLACK_COLOR;
pub const LABEL_BG: Color = Color::Indexed(108);
pub const LABEL_SELECTED_FG: Color = BLACK_COLOR;
pub const LABEL_SELECTED_BG: Color = Color::Cyan;

// Help
pub const HELP_BG: Color = Color::Blue;
pub const HELP_BORDER_FG: Color = Color::White;
pub const HELP_HEADER_FG: Color = Color::Yellow;
pub const HELP_HIGHLIGHT_FG: Color = Color::LightBlue;
