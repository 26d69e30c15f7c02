//! Page widgets that consume the router's output.
//!
//! Each widget is a leaf: it owns little or no state and talks to the
//! document only through its own surface trait.

mod contact;
mod filter;
mod menu;
mod scroll;
mod skills;

pub use contact::{ContactForm, ContactMessage, ContactTask, FormSurface};
pub use filter::{Fade, FilterSurface, FilterTask, ProjectFilter};
pub use menu::{MenuIcon, MenuSurface, MobileMenu};
pub use scroll::{ScrollEffects, ScrollSurface};
pub use skills::{SkillAnimator, SkillSurface};
