//! folio - a terminal rendition of a personal portfolio site.
//!
//! Pages with animated transitions and scroll-triggered reveals, live GitHub
//! stats and projects, a skills page, and a validated contact form that
//! hands off to the mail client.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod anim;
pub mod app;
pub mod cache;
pub mod cli;
pub mod contact;
pub mod effects;
pub mod error;
pub mod github;
pub mod hero;
pub mod loading;
pub mod logging;
pub mod reveal;
pub mod router;
pub mod scroll;
pub mod skills;
pub mod startup;
pub mod terminal;
pub mod theme;
pub mod traits;
pub mod ui;
