//! Page body scrolling and the reveals that depend on it.

use ratatui::layout::Rect;
use std::time::Instant;

use crate::reveal::Stagger;
use crate::router::PageId;
use crate::ui::{self, PageLayout};

use super::App;

impl App {
    /// Adopt a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16, now: Instant) {
        self.viewport = (width, height);
        self.background.resize(width, height);
        self.refresh_scroll(now);
        self.mark_dirty();
    }

    /// Layout of the scrolled page and the body height it scrolls in.
    fn scrolled_layout(&self) -> (PageLayout, u16) {
        let (width, height) = self.viewport;
        let body = ui::body_area(Rect::new(0, 0, width, height));
        let layout = ui::page_layout(self, self.scroll.page(), body.width, body.height);
        (layout, body.height)
    }

    /// Re-measure the current page, pull the offset inside it, and update the
    /// scroll triggers.
    pub fn refresh_scroll(&mut self, now: Instant) {
        let (layout, viewport_height) = self.scrolled_layout();
        self.scroll.set_max(layout.max_offset(viewport_height));
        let offset = self.scroll.offset();
        let at_end = offset == self.scroll.max();
        self.scroll_reveal
            .observe_all(layout.tops(offset), viewport_height, at_end, now);
    }

    pub fn scroll_by(&mut self, delta: i32, now: Instant) {
        if self.scroll.scroll_by(delta) {
            self.refresh_scroll(now);
            self.mark_dirty();
        }
    }

    pub fn scroll_to(&mut self, offset: u16, now: Instant) {
        if self.scroll.scroll_to(offset) {
            self.refresh_scroll(now);
            self.mark_dirty();
        }
    }

    /// Scroll just enough to show layout block `index` of the current page.
    pub fn scroll_into_view(&mut self, index: usize, now: Instant) {
        let (layout, viewport_height) = self.scrolled_layout();
        let target = layout.offset_showing(index, self.scroll.offset(), viewport_height);
        self.scroll_to(target, now);
    }

    /// Hide the current page's items and play their entrance from `now`.
    pub fn restart_entrance(&mut self, stagger: Stagger, now: Instant) {
        self.entrance.start(now, stagger);
        self.scroll_reveal.reset();
        self.refresh_scroll(now);
    }

    /// How far item `item`, drawn as layout block `block` of `page`, has
    /// been revealed: the lesser of its entrance and its scroll trigger.
    pub fn reveal_progress(&self, page: PageId, item: usize, block: usize, now: Instant) -> f64 {
        if page != self.scroll.page() {
            // a page being entered stays empty until its initializer starts the entrance
            let entering = self.router.is_transitioning() && page != self.router.current();
            return if entering { 0.0 } else { 1.0 };
        }
        self.entrance
            .progress(item, now)
            .min(self.scroll_reveal.progress(block, now))
    }
}
