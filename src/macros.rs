//! Macros for declaring UI state enums.

/// Declare a fieldless state enum and its `State` implementation.
///
/// `final:` lists states that only leave through an external reset,
/// `error:` lists failure states and `interactive:` lists the states in
/// which the owning control accepts user input. The last one generates an
/// inherent `is_interactive` method.
///
/// # Example
///
/// ```
/// use formstate::state_enum;
/// use formstate::core::State;
///
/// state_enum! {
///     pub enum UploadState {
///         Idle,
///         Sending,
///         Sent,
///         Failed,
///     }
///     final: [Sent]
///     error: [Failed]
///     interactive: [Idle, Failed]
/// }
///
/// assert!(UploadState::Failed.is_interactive());
/// assert!(!UploadState::Sending.is_interactive());
/// assert_eq!(UploadState::Sent.name(), "Sent");
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

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
        $(interactive: [$($interactive:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Whether the control accepts user input in this state.
            #[allow(dead_code)]
            pub fn is_interactive(&self) -> bool {
                match self {
                    $($(Self::$interactive => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Toggle {
            Off,
            Pending,
            On,
            Jammed,
        }
        final: [On]
        error: [Jammed]
        interactive: [Off, Jammed]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Toggle::Pending.name(), "Pending");
        assert!(Toggle::On.is_final());
        assert!(!Toggle::On.is_error());
        assert!(Toggle::Jammed.is_error());
        assert!(!Toggle::Off.is_final());
    }

    #[test]
    fn interactive_list_drives_is_interactive() {
        assert!(Toggle::Off.is_interactive());
        assert!(Toggle::Jammed.is_interactive());
        assert!(!Toggle::Pending.is_interactive());
        assert!(!Toggle::On.is_interactive());
    }

    #[test]
    fn state_enum_works_without_lists() {
        state_enum! {
            enum Minimal {
                One,
                Two,
            }
        }

        assert!(!Minimal::One.is_final());
        assert!(!Minimal::Two.is_error());
        assert!(!Minimal::Two.is_interactive());
    }
}
