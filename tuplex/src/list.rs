//! Conversions back and forth between flat tuples and their corresponding inductive list
//! structures.
//!
//! A [`Tuple`](crate::Tuple) stores its elements as an inductive list `(T0, (T1, (T2, ())))`, but
//! presents an external interface in terms of flat tuples `(T0, T1, T2)`, for readability. The
//! traits here convert between the two equivalent representations, both at the type level and at
//! the value level.
//!
//! At present, tuples up to size 128 are supported. Crates using tuples of more than about 120
//! elements need `#![recursion_limit = "256"]`.

use super::unary::*;

/// Convert a flat tuple into its corresponding inductive list structure.
///
/// # Examples
///
/// ```
/// use tuplex::list::{Flat, List};
///
/// let list = (1, "two", 3.0).into_list();
/// assert_eq!(list, (1, ("two", (3.0, ()))));
/// assert_eq!(list.into_flat(), (1, "two", 3.0));
/// ```
pub trait Flat: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsFlat = Self>;

    /// Move every element, in order, into the inductive list.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding flat tuple.
pub trait List: Sized {
    /// The corresponding flat tuple.
    type AsFlat: Flat<AsList = Self>;

    /// Move every element, in order, into the flat tuple.
    fn into_flat(self) -> Self::AsFlat;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

tuplex_macro::impl_tuples!(128);
