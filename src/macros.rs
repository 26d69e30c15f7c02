//! Macros for declaring phase enums.

/// Generate a `State` implementation for a plain enum.
///
/// # Example
///
/// ```
/// use segue::state_enum;
/// use segue::core::State;
///
/// state_enum! {
///     pub enum Submission {
///         Ready,
///         Sending,
///     }
///     resting: [Ready]
/// }
///
/// assert_eq!(Submission::Sending.name(), "Sending");
/// assert!(Submission::Ready.is_resting());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(resting: [$($resting:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_resting(&self) -> bool {
                match self {
                    $($(Self::$resting => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
