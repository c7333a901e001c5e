use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pagination::Slot;

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit application
    pub quit: KeyBinding,
    /// Show help
    pub help: KeyBinding,
    /// Previous page
    pub prev_page: KeyBinding,
    /// Next page
    pub next_page: KeyBinding,
    /// Jump to first page
    pub first_page: KeyBinding,
    /// Jump to last page
    pub last_page: KeyBinding,
    /// Select window slots 1-3
    pub slot_1: KeyBinding,
    pub slot_2: KeyBinding,
    pub slot_3: KeyBinding,
    /// Move row selection
    pub row_up: KeyBinding,
    pub row_down: KeyBinding,
    /// Open detail for the selected row
    pub open_detail: KeyBinding,
    /// Toggle the detail panel
    pub toggle_detail: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        let plain = KeyModifiers::NONE;
        Self {
            quit: KeyBinding::new(KeyCode::Char('q'), plain, "Quit"),
            help: KeyBinding::new(KeyCode::Char('?'), plain, "Show/hide help"),
            prev_page: KeyBinding::new(KeyCode::Left, plain, "Previous page"),
            next_page: KeyBinding::new(KeyCode::Right, plain, "Next page"),
            first_page: KeyBinding::new(KeyCode::Home, plain, "First page"),
            last_page: KeyBinding::new(KeyCode::End, plain, "Last page"),
            slot_1: KeyBinding::new(KeyCode::Char('1'), plain, "Select left page button"),
            slot_2: KeyBinding::new(KeyCode::Char('2'), plain, "Select middle page button"),
            slot_3: KeyBinding::new(KeyCode::Char('3'), plain, "Select right page button"),
            row_up: KeyBinding::new(KeyCode::Up, plain, "Select previous row"),
            row_down: KeyBinding::new(KeyCode::Down, plain, "Select next row"),
            open_detail: KeyBinding::new(KeyCode::Enter, plain, "Open detail for row"),
            toggle_detail: KeyBinding::new(KeyCode::Tab, plain, "Toggle detail panel"),
        }
    }
}

impl KeyMap {
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event)
            || (event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL)
    }

    pub fn should_show_help(&self, event: &KeyEvent) -> bool {
        self.help.matches(event)
    }

    /// Which window slot a number key selects, if any
    pub fn slot_for(&self, event: &KeyEvent) -> Option<Slot> {
        if self.slot_1.matches(event) {
            Some(Slot::Left)
        } else if self.slot_2.matches(event) {
            Some(Slot::Middle)
        } else if self.slot_3.matches(event) {
            Some(Slot::Right)
        } else {
            None
        }
    }

    /// One-line hint for the status bar, derived from the bindings so it
    /// cannot drift when a binding changes
    pub fn status_hint(&self) -> String {
        format!(
            "{}/{} page | {}/{} first/last | {}-{} page buttons | {} details | {} panel | {} help | {} quit",
            key_label(&self.prev_page.key),
            key_label(&self.next_page.key),
            key_label(&self.first_page.key),
            key_label(&self.last_page.key),
            key_label(&self.slot_1.key),
            key_label(&self.slot_3.key),
            key_label(&self.open_detail.key),
            key_label(&self.toggle_detail.key),
            key_label(&self.help.key),
            key_label(&self.quit.key),
        )
    }

    /// Get help text for all key bindings
    pub fn help_text(&self) -> String {
        let bindings = [
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
            &self.slot_1,
            &self.slot_2,
            &self.slot_3,
            &self.row_up,
            &self.row_down,
            &self.open_detail,
            &self.toggle_detail,
            &self.help,
            &self.quit,
        ];
        bindings
            .iter()
            .map(|b| format!("{:<8} {}", key_label(&b.key), b.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_map_to_slots() {
        let keys = KeyMap::default();
        let event = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(keys.slot_for(&event), Some(Slot::Middle));

        let event = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        assert_eq!(keys.slot_for(&event), None);
    }

    #[test]
    fn test_status_hint_follows_bindings() {
        let mut keys = KeyMap::default();
        let hint = keys.status_hint();
        assert!(hint.contains("Left/Right page"));
        assert!(hint.contains("Home/End first/last"));
        assert!(hint.contains("q quit"));

        keys.quit = KeyBinding::new(KeyCode::Char('x'), KeyModifiers::NONE, "Quit");
        assert!(keys.status_hint().contains("x quit"));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let keys = KeyMap::default();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(keys.should_quit(&event));
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(keys.should_quit(&event));
    }
}
