/// Selection state for the history labels.
#[derive(Debug, Default)]
pub struct ListViewState {
    /// Currently selected item index.
    selected_index: usize,
    /// Total number of items in the list.
    item_count: usize,
}

impl ListViewState {
    /// Creates a new list view state with selection at index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected index, or `None` for an empty list.
    pub fn selected(&self) -> Option<usize> {
        (self.item_count > 0).then_some(self.selected_index)
    }

    /// Sets the total item count, clamping the selection into range.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        if count > 0 && self.selected_index >= count {
            self.selected_index = count - 1;
        } else if count == 0 {
            self.selected_index = 0;
        }
    }

    /// Moves selection up by 1 without wrapping.
    pub fn move_up(&mut self) {
        if self.item_count > 0 && self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Moves selection down by 1 without wrapping.
    pub fn move_down(&mut self) {
        if self.item_count > 0 && self.selected_index < self.item_count - 1 {
            self.selected_index += 1;
        }
    }

    /// Resets to initial state (selection at 0).
    pub fn reset(&mut self) {
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_zero() {
        let mut state = ListViewState::new();
        assert_eq!(state.selected(), None);
        state.set_item_count(1);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_move_down_stops_at_end() {
        let mut state = ListViewState::new();
        state.set_item_count(3);

        state.move_down();
        state.move_down();
        assert_eq!(state.selected(), Some(2));

        state.move_down();
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_move_up_stops_at_start() {
        let mut state = ListViewState::new();
        state.set_item_count(3);
        state.move_down();

        state.move_up();
        assert_eq!(state.selected(), Some(0));

        state.move_up();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_shrinking_list_clamps_selection() {
        let mut state = ListViewState::new();
        state.set_item_count(5);
        state.move_down();
        state.move_down();
        state.move_down();

        state.set_item_count(2);
        assert_eq!(state.selected(), Some(1));

        state.set_item_count(0);
        assert_eq!(state.selected(), None);
        state.set_item_count(2);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_operations_on_empty_list_do_nothing() {
        let mut state = ListViewState::new();
        state.move_down();
        state.move_up();
        state.set_item_count(1);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_reset() {
        let mut state = ListViewState::new();
        state.set_item_count(4);
        state.move_down();
        state.reset();
        assert_eq!(state.selected(), Some(0));
    }
}
