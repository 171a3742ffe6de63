//! Formatting of inductive lists, used by the `Display` and `Debug` implementations for
//! [`Tuple`](crate::Tuple).

use std::fmt;

/// Write each element of an inductive list with `Display`, separated by `", "`.
pub trait DisplayList {
    /// Write the elements; `first` is whether the head is the first element of the whole tuple.
    fn fmt_elements(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result;
}

impl DisplayList for () {
    fn fmt_elements(&self, _: &mut fmt::Formatter<'_>, _: bool) -> fmt::Result {
        Ok(())
    }
}

impl<T: fmt::Display, Ts: DisplayList> DisplayList for (T, Ts) {
    fn fmt_elements(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result {
        if !first {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(&self.0, f)?;
        self.1.fmt_elements(f, false)
    }
}

/// Add each element of an inductive list as a field of a [`fmt::DebugTuple`].
pub trait DebugList {
    /// Add the elements, head first.
    fn debug_elements(&self, builder: &mut fmt::DebugTuple<'_, '_>);
}

impl DebugList for () {
    fn debug_elements(&self, _: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<T: fmt::Debug, Ts: DebugList> DebugList for (T, Ts) {
    fn debug_elements(&self, builder: &mut fmt::DebugTuple<'_, '_>) {
        let _ = builder.field(&self.0);
        self.1.debug_elements(builder);
    }
}
