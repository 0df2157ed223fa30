//! Error types for the bridgewords graph ADT.
//!
//! The graph contract raises exactly one error: a negative edge weight passed
//! to [`crate::Graph::set`]. Every other unusual input is answered with a
//! boolean or an empty snapshot instead.

use thiserror::Error;

use crate::graph::Weight;

/// Generates a stable code enum for an error type together with its
/// `as_str`, `Display` and `code()` plumbing.
///
/// Downstream crates reuse the macro so every error in the workspace carries a
/// machine-readable identifier in the same shape.
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by a mutating [`crate::Graph`] operation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge weight below zero was supplied to [`crate::Graph::set`].
    #[error("edge weight must be non-negative (got {weight})")]
    NegativeWeight {
        /// The rejected weight.
        weight: Weight,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge weight below zero was supplied.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
    }
}

/// Convenient alias for results returned by the graph ADT.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Validates a caller-supplied weight before any mutation takes place.
pub(crate) const fn check_weight(weight: Weight) -> Result<Weight> {
    if weight < 0 {
        Err(GraphError::NegativeWeight { weight })
    } else {
        Ok(weight)
    }
}

impl GraphError {
    /// Returns the offending weight carried by the error.
    #[must_use]
    pub const fn weight(&self) -> Weight {
        match self {
            Self::NegativeWeight { weight } => *weight,
        }
    }
}
