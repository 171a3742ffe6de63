//! Positional lookup into inductive lists and [`Tuple`]s.
//!
//! Indices are type-level unary numbers, so an index past the end of a list has no [`Select`]
//! implementation at all: out-of-range access is rejected by the compiler rather than at runtime.

use crate::list::Flat;
use crate::unary::*;
use crate::Tuple;

/// The sealed `Select` trait describes what it means to index into an inductive list: the
/// element at position `N` is [`Selected`](Select::Selected), and can be borrowed, mutably
/// borrowed, or moved out.
///
/// # Examples
///
/// ```
/// use tuplex::select::Select;
/// use tuplex::unary::UnaryOf;
///
/// let list = ('a', ("b", (3, ())));
/// assert_eq!(*Select::<UnaryOf<1>>::select(&list), "b");
/// ```
///
/// Selecting past the end does not compile:
///
/// ```compile_fail
/// use tuplex::select::Select;
/// use tuplex::unary::UnaryOf;
///
/// let list = ('a', ("b", (3, ())));
/// let _ = Select::<UnaryOf<3>>::select(&list);
/// ```
pub trait Select<N: Unary>: sealed::Select<N> {
    /// The type of the element at position `N`.
    type Selected;

    /// Borrow the element at position `N`.
    fn select(&self) -> &Self::Selected;

    /// Mutably borrow the element at position `N`.
    fn select_mut(&mut self) -> &mut Self::Selected;

    /// Move the element at position `N` out of the list, dropping the rest.
    fn into_selected(self) -> Self::Selected;
}

impl<T, Ts> Select<Z> for (T, Ts) {
    type Selected = T;

    fn select(&self) -> &T {
        &self.0
    }

    fn select_mut(&mut self) -> &mut T {
        &mut self.0
    }

    fn into_selected(self) -> T {
        self.0
    }
}

impl<T, Ts, N: Unary> Select<S<N>> for (T, Ts)
where
    Ts: Select<N>,
{
    type Selected = Ts::Selected;

    fn select(&self) -> &Self::Selected {
        self.1.select()
    }

    fn select_mut(&mut self) -> &mut Self::Selected {
        self.1.select_mut()
    }

    fn into_selected(self) -> Self::Selected {
        self.1.into_selected()
    }
}

/// The type of the element at position `I` of the flat tuple type `Ts`.
///
/// # Examples
///
/// ```
/// use tuplex::Element;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Element<(u8, &str, bool), 1>, &str);
/// ```
pub type Element<Ts, const I: usize> =
    <<Ts as Flat>::AsList as Select<UnaryOf<I>>>::Selected;

/// Access to the element at position `N`, with the value category of `Self`: an owned
/// [`Tuple`] yields the element by value, a shared borrow yields a shared borrow, and a mutable
/// borrow yields a mutable borrow.
///
/// This is the trait behind the free function [`get`]; the inherent methods
/// [`Tuple::get`], [`Tuple::get_mut`], and [`Tuple::into_element`] are usually more convenient.
pub trait Get<N: Unary> {
    /// The element, in the value category matching `Self`.
    type Output;

    /// Access the element at position `N`.
    fn get_at(self) -> Self::Output;
}

impl<Ts: Flat, N: Unary> Get<N> for Tuple<Ts>
where
    Ts::AsList: Select<N>,
{
    type Output = <Ts::AsList as Select<N>>::Selected;

    fn get_at(self) -> Self::Output {
        self.list.into_selected()
    }
}

impl<'a, Ts: Flat, N: Unary> Get<N> for &'a Tuple<Ts>
where
    Ts::AsList: Select<N>,
{
    type Output = &'a <Ts::AsList as Select<N>>::Selected;

    fn get_at(self) -> Self::Output {
        self.list.select()
    }
}

impl<'a, Ts: Flat, N: Unary> Get<N> for &'a mut Tuple<Ts>
where
    Ts::AsList: Select<N>,
{
    type Output = &'a mut <Ts::AsList as Select<N>>::Selected;

    fn get_at(self) -> Self::Output {
        self.list.select_mut()
    }
}

/// Access the element at position `I` of a [`Tuple`], an `&Tuple`, or an `&mut Tuple`,
/// returning it by value, by shared borrow, or by mutable borrow respectively.
///
/// # Examples
///
/// ```
/// use tuplex::{get, tuple};
///
/// let mut t = tuple![5, "x", true];
/// assert_eq!(*get::<1, _>(&t), "x");
///
/// *get::<0, _>(&mut t) += 1;
/// assert_eq!(get::<0, _>(t), 6);
/// ```
pub fn get<const I: usize, T>(tuple: T) -> T::Output
where
    Number<I>: ToUnary,
    T: Get<UnaryOf<I>>,
{
    tuple.get_at()
}

mod sealed {
    use super::*;

    pub trait Select<N> {}
    impl<T, Ts> Select<Z> for (T, Ts) {}
    impl<T, Ts: Select<N>, N> Select<S<N>> for (T, Ts) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    type Three = (u8, (&'static str, (bool, ())));

    assert_impl_all!(Three: Select<UnaryOf<0>>, Select<UnaryOf<1>>, Select<UnaryOf<2>>);
    assert_not_impl_any!(Three: Select<UnaryOf<3>>);
    assert_not_impl_any!((): Select<Z>);
    assert_type_eq_all!(<Three as Select<UnaryOf<2>>>::Selected, bool);
    assert_type_eq_all!(Element<(u8, char), 0>, u8);

    #[test]
    fn select_every_position() {
        let mut list: Three = (5, ("x", (true, ())));
        assert_eq!(*Select::<UnaryOf<0>>::select(&list), 5);
        assert_eq!(*Select::<UnaryOf<1>>::select(&list), "x");
        *Select::<UnaryOf<2>>::select_mut(&mut list) = false;
        assert_eq!(Select::<UnaryOf<2>>::into_selected(list), false);
    }
}
