//! The element-wise comparison underlying `PartialEq` for [`Tuple`](crate::Tuple). This module is
//! private: the only way to compare tuples is with `==`.

/// Element-wise equality of two inductive lists of the same length, left to right, stopping at the
/// first unequal pair.
pub trait EqualTo<Rhs> {
    fn equal_to(&self, other: &Rhs) -> bool;
}

impl EqualTo<()> for () {
    fn equal_to(&self, _: &()) -> bool {
        true
    }
}

impl<T, Ts, U, Us> EqualTo<(U, Us)> for (T, Ts)
where
    T: PartialEq<U>,
    Ts: EqualTo<Us>,
{
    fn equal_to(&self, other: &(U, Us)) -> bool {
        self.0 == other.0 && self.1.equal_to(&other.1)
    }
}
