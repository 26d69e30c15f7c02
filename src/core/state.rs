//! State trait for machine phases.
//!
//! Every phase of a controller implements this trait, which exposes pure
//! inspection methods only.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure. A phase describes where a controller currently is
/// in its lifecycle; it carries no payload of its own.
///
/// # Required Traits
///
/// - `Clone`: phases are copied into the phase history
/// - `PartialEq`: phases are compared by guards
/// - `Debug`: phases appear in log fields
/// - `Serialize` + `Deserialize`: phase histories can be exported as JSON
///
/// # Example
///
/// ```rust
/// use segue::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Upload {
///     Waiting,
///     Sending,
/// }
///
/// impl State for Upload {
///     fn name(&self) -> &str {
///         match self {
///             Self::Waiting => "Waiting",
///             Self::Sending => "Sending",
///         }
///     }
///
///     fn is_resting(&self) -> bool {
///         matches!(self, Self::Waiting)
///     }
/// }
///
/// assert!(Upload::Waiting.is_resting());
/// assert!(!Upload::Sending.is_resting());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the phase for display and logging.
    fn name(&self) -> &str;

    /// Whether the controller can accept new work in this phase.
    ///
    /// Default implementation returns `false`.
    fn is_resting(&self) -> bool {
        false
    }
}
