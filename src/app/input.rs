//! Keyboard, mouse, and paste handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use std::time::Instant;

use crate::contact::FormFocus;
use crate::github::render::RETRY_KEY;
use crate::router::PageId;
use crate::scroll::SCROLL_STEP;

use super::App;

impl App {
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    self.background.set_pointer(mouse.column, mouse.row);
                }
                MouseEventKind::ScrollDown if self.accepts_scroll() => {
                    self.scroll_by(i32::from(SCROLL_STEP), now)
                }
                MouseEventKind::ScrollUp if self.accepts_scroll() => {
                    self.scroll_by(-i32::from(SCROLL_STEP), now)
                }
                _ => {}
            },
            Event::Resize(width, height) => self.resize(width, height, now),
            Event::Paste(text) => {
                if self.accepts_form_input() {
                    text.chars().for_each(|c| self.contact.input_char(c));
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn accepts_scroll(&self) -> bool {
        self.loading.is_hidden() && !self.router.is_transitioning()
    }

    fn accepts_form_input(&self) -> bool {
        self.loading.is_hidden()
            && !self.router.is_transitioning()
            && self.router.current() == PageId::Contact
            && matches!(self.contact.focus(), FormFocus::Field(_))
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let step = i32::from(SCROLL_STEP);

        // available everywhere, including inside form fields
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return self.shutdown(),
            KeyCode::Char('t') if ctrl => return self.toggle_theme(),
            KeyCode::PageDown => return self.navigate_next(),
            KeyCode::PageUp => return self.navigate_prev(),
            KeyCode::F(n @ 1..=5) => {
                if let Some(page) = PageId::ALL.get(usize::from(n) - 1) {
                    self.navigate_to(*page);
                }
                return;
            }
            _ => {}
        }

        if !self.loading.is_hidden() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                self.skip_loading(now);
            }
            return;
        }
        if self.router.is_transitioning() {
            return;
        }

        let page = self.router.current();
        if page == PageId::Contact && self.handle_contact_key(key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.shutdown(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.navigate_next(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.navigate_prev(),
            KeyCode::Char('J') => self.scroll_by(step, now),
            KeyCode::Char('K') => self.scroll_by(-step, now),
            KeyCode::Down if shift => self.scroll_by(step, now),
            KeyCode::Up if shift => self.scroll_by(-step, now),
            KeyCode::Home => self.scroll_to(0, now),
            KeyCode::End => self.scroll_to(u16::MAX, now),
            KeyCode::Char(c) if PageId::from_hotkey(c).is_some() => {
                if let Some(target) = PageId::from_hotkey(c) {
                    self.navigate_to(target);
                }
            }
            _ => self.handle_page_key(page, key),
        }
    }

    fn handle_page_key(&mut self, page: PageId, key: KeyEvent) {
        match (page, key.code) {
            (PageId::Home, KeyCode::Enter | KeyCode::Char('p')) => {
                self.navigate_to(PageId::Projects)
            }
            (PageId::Home, KeyCode::Char('c')) => self.navigate_to(PageId::Contact),
            (PageId::About | PageId::Projects, KeyCode::Char(c)) if c == RETRY_KEY => {
                self.retry_current()
            }
            (PageId::Projects, KeyCode::Char('f')) => self.cycle_project_filter(),
            (PageId::Projects, KeyCode::Up | KeyCode::Char('k')) => self.select_project(-1),
            (PageId::Projects, KeyCode::Down | KeyCode::Char('j')) => self.select_project(1),
            (PageId::Projects, KeyCode::Enter) => self.open_selected_project(false),
            (PageId::Projects, KeyCode::Char('d')) => self.open_selected_project(true),
            _ => {}
        }
    }

    /// Returns true when the form consumed the key.
    fn handle_contact_key(&mut self, key: KeyEvent) -> bool {
        match self.contact.focus() {
            FormFocus::Field(name) => {
                match key.code {
                    KeyCode::Tab | KeyCode::Down => self.contact.focus_next(),
                    KeyCode::BackTab | KeyCode::Up => self.contact.focus_prev(),
                    KeyCode::Esc => self.contact.focus_submit(),
                    KeyCode::Enter if name.is_multiline() => self.contact.input_char('\n'),
                    KeyCode::Enter => self.contact.focus_next(),
                    KeyCode::Backspace => self.contact.backspace(),
                    KeyCode::Char(c) => self.contact.input_char(c),
                    _ => {}
                }
                true
            }
            FormFocus::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.submit_contact();
                    true
                }
                KeyCode::Tab | KeyCode::Down => {
                    self.contact.focus_next();
                    true
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.contact.focus_prev();
                    true
                }
                KeyCode::Esc => {
                    self.contact.dismiss_alert();
                    true
                }
                _ => false,
            },
        }
    }
}
