/// Multi-line text input with a cursor.
///
/// The cursor is a character index into `value`, so multi-byte text is edited safely.
#[derive(Debug, Default, Clone)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the content and moves the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.value.insert(index, c);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index(self.cursor);
        self.value.remove(index);
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let index = self.byte_index(self.cursor);
            self.value.remove(index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    /// Moves to the start of the current line.
    pub fn move_home(&mut self) {
        let (_, prefix) = self.cursor_line();
        let offset = prefix.chars().count();
        self.cursor -= offset;
    }

    /// Moves to the end of the current line.
    pub fn move_end(&mut self) {
        let index = self.byte_index(self.cursor);
        let rest = &self.value[index..];
        let to_line_end = rest.find('\n').map(|end| &rest[..end]).unwrap_or(rest);
        let offset = to_line_end.chars().count();
        self.cursor += offset;
    }

    /// Moves to the same column on the previous line, or the end of it when shorter.
    pub fn move_up(&mut self) {
        let (row, prefix) = self.cursor_line();
        if row == 0 {
            return;
        }
        let column = prefix.chars().count();
        // Step over the newline onto the end of the previous line, then clamp to `column`
        self.cursor -= column + 1;
        let (_, previous) = self.cursor_line();
        let previous_len = previous.chars().count();
        self.cursor -= previous_len - previous_len.min(column);
    }

    /// Moves to the same column on the next line, or the end of it when shorter.
    pub fn move_down(&mut self) {
        if self.on_last_line() {
            return;
        }
        let column = self.cursor_line().1.chars().count();
        self.move_end();
        // Onto the start of the next line
        self.cursor += 1;
        let index = self.byte_index(self.cursor);
        let rest = &self.value[index..];
        let next_len = rest.split('\n').next().unwrap_or(rest).chars().count();
        self.cursor += column.min(next_len);
    }

    pub fn on_first_line(&self) -> bool {
        self.cursor_line().0 == 0
    }

    pub fn on_last_line(&self) -> bool {
        self.cursor_line().0 + 1 == self.line_count()
    }

    /// Number of lines in the value. An empty value still occupies one line.
    pub fn line_count(&self) -> usize {
        self.value.split('\n').count()
    }

    /// Row of the cursor and the text between the start of that row and the cursor.
    pub fn cursor_line(&self) -> (usize, &str) {
        let before = &self.value[..self.byte_index(self.cursor)];
        let row = before.matches('\n').count();
        let prefix = before.rsplit('\n').next().unwrap_or(before);
        (row, prefix)
    }
}
