use log::debug;

/// Focus-controller capability implemented by the hosting UI layer.
/// The widget never touches input fields directly; it only requests
/// that a given cell receive input focus.
pub trait FocusController {
    fn focus_cell(&mut self, index: usize);
}

/// Segmented single-digit code entry widget.
///
/// Holds a fixed number of cells, each either empty or exactly one
/// decimal digit. Focus auto-advances after a digit is accepted and
/// auto-retreats when backspace is pressed on an empty cell. Invalid
/// input of any kind is rejected silently with no state change.
pub struct CodeEntry {
    cells: Vec<Option<char>>,
    focus: usize,
}

impl CodeEntry {
    /// Create an empty entry with `len` cells and focus on the first cell
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![None; len],
            focus: 0,
        }
    }

    /// Number of cells; fixed for the lifetime of the widget
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cell holds a digit
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Index of the cell targeted by the next keystroke
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// Read-only view of the cells for rendering
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Handle a typed character at `index`.
    ///
    /// Accepted only when `index` is in range and `ch` is a decimal
    /// digit; an existing digit in the cell is overwritten. On
    /// acceptance focus moves to the next cell, or stays on the last
    /// cell. Returns whether the character was accepted.
    pub fn on_digit(&mut self, index: usize, ch: char, focus: &mut dyn FocusController) -> bool {
        if index >= self.cells.len() || !ch.is_ascii_digit() {
            debug!("rejected input {:?} at cell {}", ch, index);
            return false;
        }

        self.cells[index] = Some(ch);

        let next = if index + 1 < self.cells.len() {
            index + 1
        } else {
            index
        };
        self.focus = next;
        focus.focus_cell(next);
        true
    }

    /// Handle a backspace keypress at `index`.
    ///
    /// A filled cell is cleared in place (delete-before-move); an empty
    /// cell moves focus back one cell without mutating it, so the next
    /// keystroke overwrites the previous cell. Out-of-range indexes are
    /// ignored.
    pub fn on_backspace(&mut self, index: usize, focus: &mut dyn FocusController) {
        if index >= self.cells.len() {
            return;
        }

        if self.cells[index].is_some() {
            self.cells[index] = None;
            self.focus = index;
            focus.focus_cell(index);
        } else if index > 0 {
            self.focus = index - 1;
            focus.focus_cell(index - 1);
        }
    }

    /// Concatenation of the filled cells in order
    pub fn value(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// True iff every cell holds a digit. Submission policy belongs to
    /// the parent screen; the widget only reports completeness.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Clear all cells and move focus back to the first cell
    pub fn reset(&mut self, focus: &mut dyn FocusController) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.focus = 0;
        focus.focus_cell(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double that records every focus request
    struct RecordingFocus {
        requests: Vec<usize>,
    }

    impl RecordingFocus {
        fn new() -> Self {
            Self {
                requests: Vec::new(),
            }
        }
    }

    impl FocusController for RecordingFocus {
        fn focus_cell(&mut self, index: usize) {
            self.requests.push(index);
        }
    }

    #[test]
    fn test_digit_sets_cell_and_advances_focus() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        assert!(entry.on_digit(0, '7', &mut focus));
        assert_eq!(entry.cells()[0], Some('7'));
        assert_eq!(entry.focus_index(), 1);
        assert_eq!(focus.requests, vec![1]);
    }

    #[test]
    fn test_focus_stays_on_last_cell() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        assert!(entry.on_digit(5, '9', &mut focus));
        assert_eq!(entry.focus_index(), 5);
        assert_eq!(focus.requests, vec![5]);
    }

    #[test]
    fn test_digit_overwrites_filled_cell() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        entry.on_digit(2, '1', &mut focus);
        entry.on_digit(2, '8', &mut focus);
        assert_eq!(entry.cells()[2], Some('8'));
    }

    #[test]
    fn test_non_digit_input_is_rejected_silently() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        // Letters, symbols, whitespace and control characters all leave
        // the widget untouched
        for ch in ['a', 'Z', '!', ' ', '\n', '\u{0}', '.'] {
            assert!(!entry.on_digit(0, ch, &mut focus));
        }
        assert!(entry.is_empty());
        assert_eq!(entry.focus_index(), 0);
        assert!(focus.requests.is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        assert!(!entry.on_digit(6, '1', &mut focus));
        assert!(!entry.on_digit(usize::MAX, '1', &mut focus));
        assert!(entry.is_empty());
    }

    #[test]
    fn test_backspace_clears_filled_cell_in_place() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        entry.on_digit(0, '4', &mut focus);
        entry.on_backspace(0, &mut focus);

        assert_eq!(entry.cells()[0], None);
        assert_eq!(entry.focus_index(), 0);
    }

    #[test]
    fn test_backspace_on_empty_cell_moves_focus_back() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        entry.on_digit(0, '4', &mut focus);
        // Focus is now on the empty cell 1; backspace retreats without
        // mutating cell 0
        entry.on_backspace(1, &mut focus);

        assert_eq!(entry.cells()[0], Some('4'));
        assert_eq!(entry.focus_index(), 0);
        assert_eq!(focus.requests, vec![1, 0]);
    }

    #[test]
    fn test_backspace_on_first_empty_cell_is_noop() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        entry.on_backspace(0, &mut focus);
        entry.on_backspace(6, &mut focus);

        assert!(entry.is_empty());
        assert_eq!(entry.focus_index(), 0);
        assert!(focus.requests.is_empty());
    }

    #[test]
    fn test_partial_entry_scenario() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        entry.on_digit(0, '4', &mut focus);
        entry.on_digit(1, '2', &mut focus);

        assert_eq!(entry.value(), "42");
        assert_eq!(entry.focus_index(), 2);
        assert!(!entry.is_complete());
    }

    #[test]
    fn test_complete_entry_scenario() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        for (index, ch) in "123456".chars().enumerate() {
            entry.on_digit(index, ch, &mut focus);
        }

        assert_eq!(entry.value(), "123456");
        assert!(entry.is_complete());
    }

    #[test]
    fn test_reset_clears_cells_and_refocuses_first() {
        let mut entry = CodeEntry::new(6);
        let mut focus = RecordingFocus::new();

        for (index, ch) in "123456".chars().enumerate() {
            entry.on_digit(index, ch, &mut focus);
        }
        entry.reset(&mut focus);

        assert!(entry.is_empty());
        assert_eq!(entry.value(), "");
        assert_eq!(entry.focus_index(), 0);
        assert_eq!(focus.requests.last(), Some(&0));
    }
}
