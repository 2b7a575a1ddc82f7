//! Keyboard and mouse handling.

use std::time::Instant;

use crm_lib::{FieldKind, Form};
use crm_ui::{Event, Key, Modifiers, MouseButton, Rect};
use log::trace;

use super::{App, Focus, FormScreen, Screen, Section};

impl App {
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        trace!("event: {:?}", event);
        match event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers, now),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(x, y, now),
            Event::Click { .. } | Event::Resize { .. } => {}
            Event::Scroll { delta, .. } => self.move_selection(delta as isize),
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers, now: Instant) {
        if modifiers.ctrl {
            match key {
                Key::Char('q') => {
                    self.quit = true;
                    return;
                }
                Key::Char('l') if self.session.is_some() => {
                    self.sign_out(now);
                    return;
                }
                _ => {}
            }
        }

        match self.screen {
            Screen::Login(_) | Screen::Create(_) => self.form_key(key, modifiers, now),
            _ => self.page_key(key, modifiers, now),
        }
    }

    fn page_key(&mut self, key: Key, modifiers: Modifiers, now: Instant) {
        let plain = !modifiers.ctrl && !modifiers.alt;
        match (self.focus, key) {
            (_, Key::Tab) => self.cycle_focus(1),
            (_, Key::BackTab) => self.cycle_focus(-1),

            (Focus::Search, Key::Escape | Key::Enter | Key::Down) => self.focus = Focus::Table,
            (Focus::Search, Key::Char(c)) if plain => self.edit_search(|search| search.push(c)),
            (Focus::Search, Key::Backspace) => self.edit_search(|search| {
                search.pop();
            }),
            (Focus::Search, _) => {}

            (_, Key::Escape) => {
                self.go_back();
            }
            (_, Key::Char('/')) if matches!(self.screen, Screen::List(_)) => self.focus = Focus::Search,
            (_, Key::Char('f')) if plain => self.cycle_filter(true),
            (_, Key::Char('F')) if plain => self.cycle_filter(false),
            (_, Key::Char('n')) if plain => {
                self.open_create();
            }
            (_, Key::Char('[')) => self.switch_tab(-1),
            (_, Key::Char(']')) => self.switch_tab(1),
            (_, Key::Char('s')) if plain => {
                self.toggle_user_status(now);
            }

            (Focus::Sidebar, Key::Up) => self.move_sidebar(-1),
            (Focus::Sidebar, Key::Down) => self.move_sidebar(1),
            (Focus::Sidebar, Key::Enter) => {
                let section = Section::ALL[self.sidebar_cursor];
                self.open_section(section, now);
            }

            (Focus::Table, Key::Up) => self.move_selection(-1),
            (Focus::Table, Key::Down) => self.move_selection(1),
            (Focus::Table, Key::PageUp) => self.move_selection(-self.page_size()),
            (Focus::Table, Key::PageDown) => self.move_selection(self.page_size()),
            (Focus::Table, Key::Home) => self.move_selection(isize::MIN / 2),
            (Focus::Table, Key::End) => self.move_selection(isize::MAX / 2),
            (Focus::Table, Key::Enter) => self.activate_selected(now),
            _ => {}
        }
    }

    /// Focus targets of the current screen, in `Tab` order.
    fn focus_order(&self) -> &'static [Focus] {
        match self.screen {
            Screen::List(_) => &[Focus::Sidebar, Focus::Search, Focus::Table],
            _ => &[Focus::Sidebar, Focus::Table],
        }
    }

    fn cycle_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        self.focus = order[(current + delta).rem_euclid(order.len() as isize) as usize];
        trace!("focus {:?}", self.focus);
    }

    fn move_sidebar(&mut self, delta: isize) {
        let count = Section::ALL.len() as isize;
        self.sidebar_cursor = (self.sidebar_cursor as isize + delta).rem_euclid(count) as usize;
    }

    fn page_size(&self) -> isize {
        self.hits.table.viewport_rows.max(1) as isize
    }

    /// Rows that can be selected; none while loading.
    fn row_count(&self) -> usize {
        if self.screen.is_loading() {
            return 0;
        }
        self.page_table().map_or(0, |table| table.len())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.row_count();
        if let Some(state) = self.screen.table_state_mut() {
            state.selected = step_selection(state.selected, delta, len);
        }
    }

    fn reset_selection(&mut self) {
        if let Some(state) = self.screen.table_state_mut() {
            *state = Default::default();
        }
    }

    fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        if let Screen::List(list) = &mut self.screen {
            edit(list.filter.search_mut());
            trace!("search: {:?}", list.filter.search());
        }
        self.reset_selection();
    }

    fn cycle_filter(&mut self, primary: bool) {
        let Screen::List(list) = &mut self.screen else { return };
        let changed = if primary {
            list.filter.cycle_primary(&self.store)
        } else {
            list.filter.cycle_secondary()
        };
        if changed {
            trace!("filters: {:?}", list.filter.chips());
            self.reset_selection();
        }
    }

    fn switch_tab(&mut self, delta: isize) {
        if let Screen::Detail(detail) = &mut self.screen {
            detail.switch_tab(delta);
        }
    }

    fn activate_selected(&mut self, now: Instant) {
        let Some(index) = self.screen.table_state().and_then(|state| state.selected) else {
            return;
        };
        self.activate_row(index, now);
    }

    /// Open whatever row `index` of the current table points at.
    pub fn activate_row(&mut self, index: usize, now: Instant) {
        let loading = self.screen.is_loading();
        let Some(record) = self.page_table().and_then(|table| table.activate(index, loading)) else {
            return;
        };
        self.open_record(record, now);
    }

    fn handle_click(&mut self, x: u16, y: u16, now: Instant) {
        if let Some(section) = hit(&self.hits.sidebar, x, y) {
            self.open_section(section, now);
        } else if let Some(tab) = hit(&self.hits.tabs, x, y) {
            if let Screen::Detail(detail) = &mut self.screen {
                detail.switch_tab(tab as isize - detail.tab as isize);
            }
        } else if let Some(field) = hit(&self.hits.fields, x, y) {
            if let Screen::Login(form) | Screen::Create(form) = &mut self.screen {
                form.field = field;
            }
        } else if self.hits.search.is_some_and(|rect| rect.contains(x, y)) {
            self.focus = Focus::Search;
        } else if let Some(index) = self.hits.table.row_at(x, y) {
            self.focus = Focus::Table;
            if let Some(state) = self.screen.table_state_mut() {
                state.selected = Some(index);
            }
            self.activate_row(index, now);
        }
    }

    fn form_key(&mut self, key: Key, modifiers: Modifiers, now: Instant) {
        match key {
            Key::Enter => {
                self.submit_form(now);
                return;
            }
            Key::Escape => {
                if matches!(self.screen, Screen::Create(_)) {
                    self.go_back();
                }
                return;
            }
            _ => {}
        }

        let accounts: Vec<String> = self.store.accounts().iter().map(|a| a.id.clone()).collect();
        let (Screen::Login(form) | Screen::Create(form)) = &mut self.screen else {
            return;
        };
        match key {
            Key::Tab | Key::Down => form.move_field(1),
            Key::BackTab | Key::Up => form.move_field(-1),
            key => edit_field(form, key, modifiers, &accounts),
        }
    }
}

fn hit<T: Copy>(regions: &[(T, Rect)], x: u16, y: u16) -> Option<T> {
    regions
        .iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(value, _)| *value)
}

/// Move a selection by `delta` within `len` rows, clamping at both ends.
/// With nothing selected, moving down starts at the top and up at the bottom.
pub fn step_selection(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len as isize - 1;
    let next = match current {
        None if delta < 0 => last,
        None => 0,
        Some(index) => (index.min(len - 1) as isize).saturating_add(delta).clamp(0, last),
    };
    Some(next as usize)
}

/// Set `value` to the option `delta` steps from the current one.
fn cycle_value(value: &mut String, options: &[&str], delta: isize) {
    if options.is_empty() {
        return;
    }
    let count = options.len() as isize;
    let next = match options.iter().position(|option| *option == value.as_str()) {
        Some(index) => (index as isize + delta).rem_euclid(count),
        None if delta < 0 => count - 1,
        None => 0,
    };
    *value = options[next as usize].to_string();
}

fn edit_field(form: &mut FormScreen, key: Key, modifiers: Modifiers, accounts: &[String]) {
    let Some(spec) = form.kind.form().fields().get(form.field).copied() else {
        return;
    };
    let editor = form.kind.form_mut();

    if spec.kind == FieldKind::Toggle {
        if matches!(key, Key::Char(' ') | Key::Left | Key::Right) {
            editor.toggle(spec.name);
        }
        return;
    }

    // Locked fields (shipping copied from billing) have no mutable value.
    let Some(value) = editor.value_mut(spec.name) else {
        return;
    };
    let edited = match spec.kind {
        FieldKind::Choice(options) => edit_choice(value, options, key),
        FieldKind::AccountRef => {
            let mut options = vec![""];
            options.extend(accounts.iter().map(String::as_str));
            edit_choice(value, &options, key)
        }
        _ => match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                value.push(c);
                true
            }
            Key::Backspace => value.pop().is_some(),
            _ => false,
        },
    };

    if edited && let Some(errors) = &mut form.errors {
        errors.fields.retain(|error| error.field != spec.name);
    }
}

fn edit_choice(value: &mut String, options: &[&str], key: Key) -> bool {
    match key {
        Key::Left => cycle_value(value, options, -1),
        Key::Right | Key::Char(' ') => cycle_value(value, options, 1),
        Key::Backspace | Key::Delete => value.clear(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_selection() {
        assert_eq!(step_selection(None, 1, 0), None);
        assert_eq!(step_selection(None, 1, 4), Some(0));
        assert_eq!(step_selection(None, -1, 4), Some(3));
        assert_eq!(step_selection(Some(2), 1, 4), Some(3));
        assert_eq!(step_selection(Some(3), 1, 4), Some(3));
        assert_eq!(step_selection(Some(0), -5, 4), Some(0));
        assert_eq!(step_selection(Some(9), -1, 4), Some(2));
        assert_eq!(step_selection(Some(1), isize::MAX / 2, 4), Some(3));
    }

    #[test]
    fn test_cycle_value_wraps() {
        let options = ["New", "Contacted", "Qualified"];
        let mut value = String::new();
        cycle_value(&mut value, &options, 1);
        assert_eq!(value, "New");
        cycle_value(&mut value, &options, -1);
        assert_eq!(value, "Qualified");
        cycle_value(&mut value, &options, 1);
        assert_eq!(value, "New");
    }
}
