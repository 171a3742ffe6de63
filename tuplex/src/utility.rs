//! Structural operations on inductive lists: concatenation, splitting, borrowing every element,
//! and visiting every element.

use crate::unary::*;

/// Concatenate two inductive lists: every element of `Self`, followed by every element of `Rhs`.
pub trait Append<Rhs> {
    /// The concatenated list.
    type Output;

    /// Move both lists' elements, in order, into one list.
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for () {
    type Output = Rhs;

    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<T, Ts: Append<Rhs>, Rhs> Append<Rhs> for (T, Ts) {
    type Output = (T, Ts::Output);

    fn append(self, rhs: Rhs) -> Self::Output {
        (self.0, self.1.append(rhs))
    }
}

/// Split an inductive list into its first `N` elements and the rest.
///
/// Splitting at an index past the end of the list has no implementation.
pub trait SplitAt<N: Unary> {
    /// The first `N` elements.
    type Prefix;
    /// Everything after the first `N` elements.
    type Suffix;

    /// Divide the list after its `N`th element.
    fn split_at(self) -> (Self::Prefix, Self::Suffix);
}

impl<L> SplitAt<Z> for L {
    type Prefix = ();
    type Suffix = L;

    fn split_at(self) -> ((), L) {
        ((), self)
    }
}

impl<T, Ts, N: Unary> SplitAt<S<N>> for (T, Ts)
where
    Ts: SplitAt<N>,
{
    type Prefix = (T, Ts::Prefix);
    type Suffix = Ts::Suffix;

    fn split_at(self) -> (Self::Prefix, Self::Suffix) {
        let (prefix, suffix) = self.1.split_at();
        ((self.0, prefix), suffix)
    }
}

/// Borrow every element of an inductive list, producing a list of shared references.
pub trait AsRefs<'a> {
    /// The list of `&'a` references to each element.
    type Refs;

    /// Borrow each element in turn.
    fn as_refs(&'a self) -> Self::Refs;
}

impl<'a> AsRefs<'a> for () {
    type Refs = ();

    fn as_refs(&'a self) {}
}

impl<'a, T: 'a, Ts: AsRefs<'a> + 'a> AsRefs<'a> for (T, Ts) {
    type Refs = (&'a T, Ts::Refs);

    fn as_refs(&'a self) -> Self::Refs {
        (&self.0, self.1.as_refs())
    }
}

/// Mutably borrow every element of an inductive list, producing a list of mutable references.
pub trait AsMuts<'a> {
    /// The list of `&'a mut` references to each element.
    type Muts;

    /// Mutably borrow each element in turn.
    fn as_muts(&'a mut self) -> Self::Muts;
}

impl<'a> AsMuts<'a> for () {
    type Muts = ();

    fn as_muts(&'a mut self) {}
}

impl<'a, T: 'a, Ts: AsMuts<'a> + 'a> AsMuts<'a> for (T, Ts) {
    type Muts = (&'a mut T, Ts::Muts);

    fn as_muts(&'a mut self) -> Self::Muts {
        let (head, tail) = self;
        (head, tail.as_muts())
    }
}

/// A visitor which can be applied to an element of type `T`.
///
/// Implement this once per element type (or generically) to use [`Tuple::for_each`]. To mutate
/// elements in place, visit a tuple of mutable references from [`Tuple::as_muts`].
///
/// [`Tuple::for_each`]: crate::Tuple::for_each
/// [`Tuple::as_muts`]: crate::Tuple::as_muts
///
/// # Examples
///
/// ```
/// use tuplex::{tuple, Visit};
///
/// struct Sum(f64);
///
/// impl<T: Into<f64>> Visit<T> for Sum {
///     fn visit(&mut self, item: T) {
///         self.0 += item.into();
///     }
/// }
///
/// let mut sum = Sum(0.0);
/// tuple![1_u8, 2.5_f32, 3_i32].for_each(&mut sum);
/// assert_eq!(sum.0, 6.5);
/// ```
pub trait Visit<T> {
    /// Visit one element.
    fn visit(&mut self, item: T);
}

/// Apply a visitor to every element of an inductive list, head first.
pub trait ForEach<V> {
    /// Move each element into `visitor` in turn.
    fn for_each(self, visitor: &mut V);
}

impl<V> ForEach<V> for () {
    fn for_each(self, _: &mut V) {}
}

impl<V, T, Ts> ForEach<V> for (T, Ts)
where
    V: Visit<T>,
    Ts: ForEach<V>,
{
    fn for_each(self, visitor: &mut V) {
        visitor.visit(self.0);
        self.1.for_each(visitor);
    }
}
