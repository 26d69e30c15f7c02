//! Core navigation types.
//!
//! This module holds the pure pieces the router is built from:
//! - Phases via the `State` trait
//! - Admission `Guard`s
//! - `PhaseHistory` of every phase change
//! - `PathToken`s and the `NavigationState` they index
//!
//! Nothing here touches a rendering surface or a clock.

mod guard;
mod history;
mod navigation;
mod path;
mod state;

pub use guard::Guard;
pub use history::{PhaseChange, PhaseHistory};
pub use navigation::NavigationState;
pub use path::{PathToken, TransitionId, DEFAULT_PATH, PATH_MARKER};
pub use state::State;
