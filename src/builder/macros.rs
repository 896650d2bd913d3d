//! Macros for declaring modes with minimal boilerplate.

/// Declare a mode enum and its [`Mode`](crate::core::Mode) implementation.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `Serialize` and `Deserialize`, and gains an `ALL` constant listing
/// every variant in declaration order.
///
/// # Example
///
/// ```
/// use modal::core::Mode;
/// use modal::mode_enum;
///
/// mode_enum! {
///     pub enum PumpMode {
///         Idle,
///         Priming,
///         Running,
///     }
/// }
///
/// assert_eq!(PumpMode::Priming.name(), "Priming");
/// assert_eq!(PumpMode::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! mode_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every mode, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::Mode for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Mode;

    mode_enum! {
        enum TestMode {
            Standby,
            Active,
            Fault,
        }
    }

    #[test]
    fn mode_enum_macro_generates_trait() {
        assert_eq!(TestMode::Standby.name(), "Standby");
        assert_eq!(TestMode::Active.name(), "Active");
        assert_eq!(TestMode::Fault.name(), "Fault");
    }

    #[test]
    fn mode_enum_lists_all_variants_in_order() {
        assert_eq!(
            TestMode::ALL,
            &[TestMode::Standby, TestMode::Active, TestMode::Fault]
        );
    }

    #[test]
    fn mode_enum_supports_visibility() {
        mode_enum! {
            pub enum PublicMode {
                A,
                B,
            }
        }

        let mode = PublicMode::A;
        assert_eq!(mode.name(), "A");
        assert_eq!(PublicMode::ALL.len(), 2);
    }
}
