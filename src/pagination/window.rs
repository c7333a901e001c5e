//! The sliding 3-slot page-number window.
//!
//! The window owns its slot values as plain integers; rendering is a
//! one-way projection of this state and never a source of truth. Slot
//! values can transiently fall outside `[1, total_pages]` (for example
//! after `reset_to_last` with fewer than three pages); such slots are
//! never selectable and the pagination bar renders them inert.

/// One of the three visible page-number slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Left,
    Middle,
    Right,
}

impl Slot {
    pub fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Middle => 1,
            Slot::Right => 2,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Slot::Left),
            1 => Some(Slot::Middle),
            2 => Some(Slot::Right),
            _ => None,
        }
    }
}

/// Sliding window over page numbers plus the highlighted slot.
#[derive(Debug, Clone)]
pub struct PageWindow {
    slots: [i64; 3],
    active: Option<Slot>,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWindow {
    /// Start at pages 1..3 with the first page highlighted.
    pub fn new() -> Self {
        Self {
            slots: [1, 2, 3],
            active: Some(Slot::Left),
        }
    }

    /// Current slot values, left to right.
    pub fn slots(&self) -> [i64; 3] {
        self.slots
    }

    /// Value shown in one slot.
    pub fn slot_value(&self, slot: Slot) -> i64 {
        self.slots[slot.index()]
    }

    /// The currently highlighted slot, if the reference is inside the window.
    pub fn active_slot(&self) -> Option<Slot> {
        self.active
    }

    /// True when a slot's value is a real, selectable page number.
    pub fn slot_selectable(&self, slot: Slot, total_pages: u64) -> bool {
        let value = self.slots[slot.index()];
        value >= 1 && value <= total_pages as i64
    }

    /// Whether the "previous" control is disabled. The left slot can sit
    /// below page 1 after `reset_to_last` with fewer than three pages, so
    /// the guard is a floor, not an equality check.
    pub fn prev_disabled(&self) -> bool {
        self.slots[0] <= 1
    }

    /// Whether the "next" control is disabled.
    pub fn next_disabled(&self, total_pages: u64) -> bool {
        self.slots[2] >= total_pages as i64
    }

    fn shift(&mut self, delta: i64) {
        for slot in &mut self.slots {
            *slot += delta;
        }
    }

    /// Re-derive the highlighted slot from the current reference.
    pub fn highlight(&mut self, reference: u64) {
        self.active = self
            .slots
            .iter()
            .position(|&value| value == reference as i64)
            .and_then(Slot::from_index);
    }

    /// Step the window back one page. Returns false (and leaves the window
    /// untouched) when the window is already anchored at page 1.
    pub fn go_prev(&mut self) -> bool {
        if self.prev_disabled() {
            return false;
        }
        self.shift(-1);
        true
    }

    /// Step the window forward one page. Returns false when the window
    /// already contains the last page.
    pub fn go_next(&mut self, total_pages: u64) -> bool {
        if self.next_disabled(total_pages) {
            return false;
        }
        self.shift(1);
        true
    }

    /// Jump to the first page: slots become 1..3, left slot highlighted.
    pub fn reset_to_first(&mut self) -> u64 {
        self.slots = [1, 2, 3];
        self.active = Some(Slot::Left);
        1
    }

    /// Jump to the last page: slots become total-2..total, right slot
    /// highlighted. With fewer than three pages the left slots go out of
    /// range; they render inert and stay unselectable.
    pub fn reset_to_last(&mut self, total_pages: u64) -> u64 {
        let total = total_pages as i64;
        self.slots = [total - 2, total - 1, total];
        self.active = Some(Slot::Right);
        total_pages
    }

    /// Select the page currently shown in `slot`, sliding the window to
    /// "catch up" past the clicked slot where the original behavior calls
    /// for it. Returns the new reference page, or None when the slot does
    /// not hold a selectable page number.
    ///
    /// The catch-up rules are asymmetric on purpose; they reproduce the
    /// shipped behavior exactly rather than a symmetric ideal:
    /// - clicking a slot that shows the last page: no shift, that slot is
    ///   highlighted (the last page is already anchored at the right);
    /// - clicking the slot showing total-1 while the right slot also shows
    ///   total-1: shift by one, the middle slot is highlighted;
    /// - otherwise clicking the right slot: shift by two, the left slot
    ///   ends up showing the clicked value and is highlighted;
    /// - otherwise clicking the middle slot: shift by one, the left slot
    ///   ends up showing the clicked value and is highlighted;
    /// - otherwise (left slot, or the right slot already shows the last
    ///   page): no shift, the clicked slot is highlighted.
    pub fn select_slot(&mut self, slot: Slot, total_pages: u64) -> Option<u64> {
        let total = total_pages as i64;
        let candidate = self.slots[slot.index()];
        if candidate < 1 || candidate > total {
            return None;
        }

        if candidate == total {
            self.active = Some(slot);
        } else if candidate == total - 1 && self.slots[2] == total - 1 {
            self.shift(1);
            self.active = Some(Slot::Middle);
        } else if slot == Slot::Right && self.slots[2] != total {
            self.shift(2);
            self.active = Some(Slot::Left);
        } else if slot == Slot::Middle && self.slots[2] != total {
            self.shift(1);
            self.active = Some(Slot::Left);
        } else {
            self.active = Some(slot);
        }

        Some(candidate as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consecutive(window: &PageWindow) {
        let slots = window.slots();
        assert_eq!(slots[1], slots[0] + 1, "window not consecutive: {:?}", slots);
        assert_eq!(slots[2], slots[1] + 1, "window not consecutive: {:?}", slots);
    }

    #[test]
    fn test_initial_window() {
        let window = PageWindow::new();
        assert_eq!(window.slots(), [1, 2, 3]);
        assert_eq!(window.active_slot(), Some(Slot::Left));
        assert!(window.prev_disabled());
    }

    #[test]
    fn test_window_stays_consecutive_through_every_operation() {
        let total = 20;
        let mut window = PageWindow::new();

        for _ in 0..25 {
            window.go_next(total);
            assert_consecutive(&window);
        }
        for _ in 0..5 {
            window.go_prev();
            assert_consecutive(&window);
        }
        window.reset_to_last(total);
        assert_consecutive(&window);
        window.reset_to_first();
        assert_consecutive(&window);
        window.select_slot(Slot::Right, total);
        assert_consecutive(&window);
        window.select_slot(Slot::Middle, total);
        assert_consecutive(&window);
    }

    #[test]
    fn test_prev_next_guards() {
        let total = 5;
        let mut window = PageWindow::new();

        // Already anchored at page 1
        assert!(!window.go_prev());
        assert_eq!(window.slots(), [1, 2, 3]);

        assert!(window.go_next(total));
        assert!(window.go_next(total));
        assert_eq!(window.slots(), [3, 4, 5]);

        // Right slot holds the last page: next must be a silent no-op
        assert!(!window.go_next(total));
        assert_eq!(window.slots(), [3, 4, 5]);
        assert!(window.next_disabled(total));
    }

    #[test]
    fn test_reset_round_trip_is_idempotent() {
        let total = 42;
        let mut window = PageWindow::new();

        assert_eq!(window.reset_to_first(), 1);
        assert_eq!(window.reset_to_last(total), 42);
        assert_eq!(window.slots(), [40, 41, 42]);
        assert_eq!(window.active_slot(), Some(Slot::Right));

        assert_eq!(window.reset_to_first(), 1);
        assert_eq!(window.slots(), [1, 2, 3]);
        assert_eq!(window.active_slot(), Some(Slot::Left));
    }

    #[test]
    fn test_select_last_page_does_not_shift() {
        let total = 10;
        let mut window = PageWindow::new();
        window.reset_to_last(total);

        let reference = window.select_slot(Slot::Right, total);
        assert_eq!(reference, Some(10));
        assert_eq!(window.slots(), [8, 9, 10]);
        assert_eq!(window.active_slot(), Some(Slot::Right));
    }

    // Regression: clicking the right slot while it shows total-1 shifts by
    // one and highlights the middle slot.
    #[test]
    fn test_select_one_before_last_at_right_edge() {
        let total = 10;
        let mut window = PageWindow::new();
        for _ in 0..6 {
            window.go_next(total);
        }
        assert_eq!(window.slots(), [7, 8, 9]);

        let reference = window.select_slot(Slot::Right, total);
        assert_eq!(reference, Some(9));
        assert_eq!(window.slots(), [8, 9, 10]);
        assert_eq!(window.active_slot(), Some(Slot::Middle));
    }

    // Regression: clicking the right slot away from the edge shifts by two;
    // the clicked value lands in the left slot.
    #[test]
    fn test_select_right_slot_shifts_by_two() {
        let total = 10;
        let mut window = PageWindow::new();

        let reference = window.select_slot(Slot::Right, total);
        assert_eq!(reference, Some(3));
        assert_eq!(window.slots(), [3, 4, 5]);
        assert_eq!(window.active_slot(), Some(Slot::Left));
        assert_eq!(window.slot_value(Slot::Left), 3);
    }

    // Regression: clicking the middle slot away from the edge shifts by
    // one, not two.
    #[test]
    fn test_select_middle_slot_shifts_by_one() {
        let total = 10;
        let mut window = PageWindow::new();

        let reference = window.select_slot(Slot::Middle, total);
        assert_eq!(reference, Some(2));
        assert_eq!(window.slots(), [2, 3, 4]);
        assert_eq!(window.active_slot(), Some(Slot::Left));
    }

    #[test]
    fn test_select_left_slot_never_shifts() {
        let total = 10;
        let mut window = PageWindow::new();
        window.go_next(total);
        assert_eq!(window.slots(), [2, 3, 4]);

        let reference = window.select_slot(Slot::Left, total);
        assert_eq!(reference, Some(2));
        assert_eq!(window.slots(), [2, 3, 4]);
        assert_eq!(window.active_slot(), Some(Slot::Left));
    }

    #[test]
    fn test_select_when_window_anchored_at_end_does_not_shift() {
        let total = 5;
        let mut window = PageWindow::new();
        window.reset_to_last(total);
        assert_eq!(window.slots(), [3, 4, 5]);

        // Middle slot shows 4 = total-1 but the right slot shows total, so
        // the one-before-last rule does not apply and nothing shifts.
        let reference = window.select_slot(Slot::Middle, total);
        assert_eq!(reference, Some(4));
        assert_eq!(window.slots(), [3, 4, 5]);
        assert_eq!(window.active_slot(), Some(Slot::Middle));
    }

    #[test]
    fn test_out_of_range_slot_is_not_selectable() {
        let total = 2;
        let mut window = PageWindow::new();
        window.reset_to_last(total);
        assert_eq!(window.slots(), [0, 1, 2]);

        assert!(!window.slot_selectable(Slot::Left, total));
        assert_eq!(window.select_slot(Slot::Left, total), None);
        assert_eq!(window.slots(), [0, 1, 2]);

        assert!(window.slot_selectable(Slot::Middle, total));
        assert_eq!(window.select_slot(Slot::Middle, total), Some(1));
    }

    #[test]
    fn test_prev_disabled_after_reset_to_last_with_few_pages() {
        let mut window = PageWindow::new();

        window.reset_to_last(1);
        assert_eq!(window.slots(), [-1, 0, 1]);
        assert!(window.prev_disabled());
        assert!(!window.go_prev());
        assert_eq!(window.slots(), [-1, 0, 1]);

        window.reset_to_last(2);
        assert_eq!(window.slots(), [0, 1, 2]);
        assert!(window.prev_disabled());
        assert!(!window.go_prev());
        assert_eq!(window.slots(), [0, 1, 2]);
    }

    #[test]
    fn test_next_disabled_with_fewer_than_three_pages() {
        let total = 2;
        let window = PageWindow::new();
        // Slot 3 shows a page past the end; next must still be disabled.
        assert!(window.next_disabled(total));
    }

    #[test]
    fn test_highlight_matches_reference_value() {
        let total = 10;
        let mut window = PageWindow::new();
        window.go_next(total);
        window.go_next(total);
        assert_eq!(window.slots(), [3, 4, 5]);

        window.highlight(4);
        assert_eq!(window.active_slot(), Some(Slot::Middle));

        // Reference outside the window: nothing highlighted
        window.highlight(9);
        assert_eq!(window.active_slot(), None);
    }

    #[test]
    fn test_prev_disabled_only_on_first_window() {
        let total = 10;
        let mut window = PageWindow::new();
        assert!(window.prev_disabled());
        window.go_next(total);
        assert!(!window.prev_disabled());
        window.go_prev();
        assert!(window.prev_disabled());
    }
}
