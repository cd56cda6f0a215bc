//! Vertical scroll position of the current page body.

use crate::router::PageId;

/// Rows moved per wheel notch or scroll key.
pub const SCROLL_STEP: u16 = 3;
/// Once scrolled past this many rows the navigation bar switches to its
/// scrolled style.
pub const SCROLLED_AFTER: u16 = 2;

/// Offset into the body of one page, clamped to what that page can scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageScroll {
    page: PageId,
    offset: u16,
    max: u16,
}

impl PageScroll {
    pub fn new(page: PageId) -> Self {
        Self {
            page,
            offset: 0,
            max: 0,
        }
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    /// Rows scrolled on `page`. Any other page is drawn from its top.
    pub fn offset_for(&self, page: PageId) -> u16 {
        if page == self.page {
            self.offset
        } else {
            0
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    /// Start over at the top of `page`.
    pub fn reset(&mut self, page: PageId) {
        *self = Self::new(page);
    }

    /// Adopt a new scroll limit, pulling the offset back inside it.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }

    /// Move by `delta` rows within `0..=max`. Returns whether anything moved.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max));
        self.scroll_to(target as u16)
    }

    /// Jump to `offset`, clamped to the limit. Returns whether anything moved.
    pub fn scroll_to(&mut self, offset: u16) -> bool {
        let offset = offset.min(self.max);
        let moved = offset != self.offset;
        self.offset = offset;
        moved
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_AFTER
    }
}
