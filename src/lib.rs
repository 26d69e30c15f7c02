//! Segue: a single-page navigation controller with timed page transitions
//!
//! Segue drives a portfolio-style single-page site: one document holds a
//! section per page, and hash paths (`#about`) select which one is shown.
//! Navigation runs as a small state machine over a scheduler abstraction, so
//! the same logic works against a real document or the in-memory one used
//! for tests and headless runs.
//!
//! # Core Concepts
//!
//! - **Router**: admits one transition at a time and walks it through page
//!   load, swap and settle timers
//! - **Surfaces**: narrow traits through which each component touches the
//!   document
//! - **Scheduler**: named, cancellable delays; [`scheduler::VirtualScheduler`]
//!   runs them on a deterministic clock
//! - **Site**: owns everything and routes events and timers
//!
//! # Example
//!
//! ```rust
//! use segue::config::SiteConfig;
//! use segue::dom::{MemoryAddressBar, MemoryDocument};
//! use segue::site::{Event, Site};
//!
//! let mut site = Site::content_ready(
//!     MemoryDocument::portfolio(),
//!     MemoryAddressBar::new(None),
//!     SiteConfig::default(),
//! )
//! .unwrap();
//!
//! site.dispatch(Event::LinkClicked("#projects".to_string()));
//! site.run_until_idle();
//!
//! assert_eq!(site.router().current_path(), "#projects");
//! assert_eq!(site.document().active_pages(), vec!["projects"]);
//! ```

pub mod config;
pub mod core;
pub mod dom;
mod macros;
pub mod router;
pub mod scheduler;
pub mod site;
pub mod widgets;

// Re-export commonly used types
pub use config::SiteConfig;
pub use crate::core::{NavigationState, PathToken, State};
pub use router::{Admission, Router, RouterPhase};
pub use site::{Event, Site, SiteError};
