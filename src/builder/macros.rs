//! Macros for ergonomic state machine construction.

/// Generate a `State` trait implementation for a simple enum.
///
/// Adds the derives the trait requires and implements `name()` from the
/// variant identifiers. Extra attributes (e.g. serde renames) pass
/// through to the generated enum.
///
/// # Example
///
/// ```
/// use retrace::state_enum;
///
/// state_enum! {
///     pub enum Mood {
///         Normal,
///         Busy,
///         Hungry,
///         Sleeping,
///     }
/// }
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
    ) => {
        #[derive(
            Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $(#[$meta])*
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
        }
    };
}

/// Generate an `Event` trait implementation for a simple enum.
///
/// The event-side counterpart of [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```
/// use retrace::event_enum;
///
/// event_enum! {
///     pub enum Action {
///         Study,
///         Eat,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
