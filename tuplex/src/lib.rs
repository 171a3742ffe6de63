/*!
> **tuplex (crate):** Fixed-arity heterogeneous tuples of any size, with compile-time indexing.

Rust's built-in tuples are heterogeneous, but almost every trait on them (`PartialEq`, `Default`,
`Debug`, `Hash`, ...) stops at twelve elements, and there is no way to write code that is generic
over "a tuple of any length". This crate provides [`Tuple<Ts>`](Tuple), a wrapper around a flat
Rust tuple type `Ts` which:

- stores its elements **inline**, with **no heap allocation** and no runtime overhead;
- supports **any arity up to 128**, with every operation defined once by recursion rather than
  per arity;
- gives **positional access** by a compile-time index, rejecting out-of-range indices at compile
  time rather than with a panic;
- supports **converting construction and assignment** from other tuples of the same arity, by
  value or by reference; and
- is [`Clone`], [`Copy`], [`Default`], [`Hash`], [`Eq`], [`Debug`](std::fmt::Debug),
  [`Display`](std::fmt::Display), and (with the `serde` feature) serializable, whenever its
  elements are.

## Quick reference

```
use tuplex::{tuple, Tuple, ValueInitialize};

// Construction, element-wise:
let mut t = tuple![5, "x", true];
assert_eq!(t, Tuple::new((5, "x", true)));

// Value-initialization:
let zero: Tuple<(i32, bool, f64)> = Tuple::from(ValueInitialize);
assert_eq!(zero.into_inner(), (0, false, 0.0));

// Indexed access:
assert_eq!(*t.get::<1>(), "x");
*t.get_mut::<0>() += 1;
assert_eq!(tuplex::get::<0, _>(&t), &6);

// Converting construction and assignment:
let wide: Tuple<(i64, String, bool)> = Tuple::convert_from(&t);
assert_eq!(wide, tuple![6_i64, "x", true]);
let mut other: Tuple<(i64, String, bool)> = Tuple::default();
other.assign_from((7_i32, "y", false));
assert_eq!(other, tuple![7_i64, "y", false]);

// Swap:
let mut u = tuple![7, "y", false];
tuplex::swap(&mut t, &mut u);
assert_eq!(u, tuple![6, "x", true]);
assert_eq!(t.to_string(), "(7, y, false)");
```

## Large tuples

Arity is limited only by the generated conversions between flat tuples and their inductive
[`list`] representation, currently 128 elements:

```
use tuplex::Tuple;

let t = Tuple::new((
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39,
));
assert_eq!(*t.get::<35>(), 35);
assert_eq!(t.arity(), 40);
```

Every operation recurses once per element, so tuples of more than about 120 elements exceed
the compiler's default recursion limit. To use them, raise the limit at the top of your crate:

```
#![recursion_limit = "256"]
```

## Features

- `serde` (on by default): serialize a tuple as a fixed-length sequence of its elements, and
  deserialize one only from a sequence of exactly that length.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod assign;
pub mod construct;
pub mod display;
pub mod list;
pub mod select;
pub mod unary;
pub mod utility;

mod compare;
mod error;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serialization;
mod tuple;

pub use construct::ValueInitialize;
pub use error::ConvertError;
pub use select::{get, Element};
pub use tuple::{swap, Tuple};
pub use utility::Visit;

/// Construct a [`Tuple`] from a comma-separated list of elements.
///
/// `tuple![a, b, c]` is shorthand for `Tuple::new((a, b, c))`, and `tuple![]` is the empty tuple.
///
/// # Examples
///
/// ```
/// use tuplex::{tuple, Tuple};
///
/// assert_eq!(tuple![1, 'b', "c"], Tuple::new((1, 'b', "c")));
/// assert_eq!(tuple![42].to_string(), "(42)");
/// assert_eq!(tuple![].arity(), 0);
/// ```
#[macro_export]
macro_rules! tuple {
    ($($element:expr),* $(,)?) => {
        $crate::Tuple::new(($($element,)*))
    };
}

/// The prelude module for quickly getting started with tuplex.
///
/// This module is designed to be imported as `use tuplex::prelude::*;`, which brings into scope
/// the tuple type, its construction macro, and the traits needed to write code generic over
/// tuples of any arity.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::list::{Flat, HasLength, List};
    #[doc(no_inline)]
    pub use crate::unary::{Number, ToUnary, Unary, UnaryOf};
    #[doc(no_inline)]
    pub use crate::{tuple, Element, Tuple, ValueInitialize, Visit};
}
