//! The document contract and its in-memory implementation.
//!
//! A host renders the site by implementing every surface trait for its own
//! document. [`MemoryDocument`] implements them all over plain data, which is
//! what the tests and headless runs use.

mod address;
mod builder;
mod memory;

pub use address::MemoryAddressBar;
pub use builder::{BuildError, MemoryDocumentBuilder};
pub use memory::{MemoryDocument, NavLink, PageSection, ProjectCard, SkillCard};

use crate::router::PageView;
use crate::widgets::{FilterSurface, FormSurface, MenuSurface, ScrollSurface, SkillSurface};
use std::fmt;

/// Elements the host markup must contain exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Loader,
    NavBar,
    MenuToggle,
    BackToTop,
    ContactForm,
}

impl Anchor {
    pub const REQUIRED: [Anchor; 5] = [
        Anchor::Loader,
        Anchor::NavBar,
        Anchor::MenuToggle,
        Anchor::BackToTop,
        Anchor::ContactForm,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Self::Loader => ".loader",
            Self::NavBar => "nav",
            Self::MenuToggle => ".menu-toggle",
            Self::BackToTop => ".back-to-top",
            Self::ContactForm => "#contactForm",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

pub trait AnchorLookup {
    fn has_anchor(&self, anchor: Anchor) -> bool;
}

/// A document that can host the whole site.
pub trait Document:
    PageView + SkillSurface + FilterSurface + FormSurface + MenuSurface + ScrollSurface + AnchorLookup
{
}

impl<T> Document for T where
    T: PageView
        + SkillSurface
        + FilterSurface
        + FormSurface
        + MenuSurface
        + ScrollSurface
        + AnchorLookup
{
}
