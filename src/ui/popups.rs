use ratatui::layout::Rect;

/// Calculates a centered popup area within the given rect.
///
/// The popup will be centered with at least 2 characters margin on all sides.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let min_margin = 2;

    let max_width = area.width.saturating_sub(2 * min_margin);
    let max_height = area.height.saturating_sub(2 * min_margin);

    let popup_width = width.min(max_width);
    let popup_height = height.min(max_height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x,
        y,
        width: popup_width,
        height: popup_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(popup_area(area, 40, 20), Rect::new(30, 15, 40, 20));
    }

    #[test]
    fn test_popup_keeps_margin_on_small_screens() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(popup_area(area, 56, 32), Rect::new(2, 2, 26, 6));
    }
}
