//! Page identifiers and registered page sections.

use std::fmt;
use std::str::FromStr;

use super::transition::PageVisual;

/// One of the fixed set of portfolio pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl PageId {
    /// Navigation order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Projects,
        PageId::Skills,
        PageId::Contact,
    ];

    /// The `data-page` tag for this page.
    pub fn tag(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Projects => "projects",
            PageId::Skills => "skills",
            PageId::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Projects => "Projects",
            PageId::Skills => "Skills",
            PageId::Contact => "Contact",
        }
    }

    /// Number key bound to this page in the nav bar (1-based).
    pub fn hotkey(&self) -> char {
        match self {
            PageId::Home => '1',
            PageId::About => '2',
            PageId::Projects => '3',
            PageId::Skills => '4',
            PageId::Contact => '5',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        PageId::ALL.into_iter().find(|page| page.hotkey() == c)
    }

    fn position(&self) -> usize {
        PageId::ALL
            .iter()
            .position(|page| page == self)
            .unwrap_or_default()
    }

    /// Next page in nav order, wrapping.
    pub fn next(&self) -> Self {
        PageId::ALL[(self.position() + 1) % PageId::ALL.len()]
    }

    /// Previous page in nav order, wrapping.
    pub fn prev(&self) -> Self {
        let len = PageId::ALL.len();
        PageId::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.tag() == s)
            .ok_or_else(|| format!("unknown page '{}'", s))
    }
}

/// A registered page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSection {
    pub id: PageId,
    pub active: bool,
    /// Transitional visual, present only while a transition touches this page.
    pub visual: Option<PageVisual>,
}

impl PageSection {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            active: false,
            visual: None,
        }
    }
}
