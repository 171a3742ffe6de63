//! Construction of inductive lists: value-initialization, and element-wise conversion from a
//! [`Source`] list in any value category.
//!
//! A source is consumed by value, by shared borrow, or by mutable borrow. Owned sources move each
//! element through [`Into`]; borrowed sources clone each element first.

use std::convert::TryInto;

use crate::error::ConvertError;
use crate::list::Flat;
use crate::Tuple;

/// The sentinel requesting value-initialization: every element is set to its
/// [`Default::default`], in index order.
///
/// # Examples
///
/// ```
/// use tuplex::{Tuple, ValueInitialize};
///
/// let t: Tuple<(i32, bool, f64)> = Tuple::from(ValueInitialize);
/// assert_eq!(t.into_inner(), (0, false, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ValueInitialize;

/// Inductive lists all of whose elements can be value-initialized.
pub trait ValueInit {
    /// Produce the list with every element set to its default, head first.
    fn value_init() -> Self;
}

impl ValueInit for () {
    fn value_init() {}
}

impl<T: Default, Ts: ValueInit> ValueInit for (T, Ts) {
    fn value_init() -> Self {
        let head = T::default();
        (head, Ts::value_init())
    }
}

/// Anything which can be the source of a converting construction or assignment: a [`Tuple`]
/// (owned, `&`, or `&mut`), or any flat Rust tuple by value.
pub trait Source {
    /// The inductive list of the source's elements, in the source's value category.
    type List;

    /// Expose the source as an inductive list.
    fn into_source_list(self) -> Self::List;
}

impl<Us: Flat> Source for Us {
    type List = Us::AsList;

    fn into_source_list(self) -> Self::List {
        self.into_list()
    }
}

impl<Us: Flat> Source for Tuple<Us> {
    type List = Us::AsList;

    fn into_source_list(self) -> Self::List {
        self.list
    }
}

impl<'a, Us: Flat> Source for &'a Tuple<Us> {
    type List = &'a Us::AsList;

    fn into_source_list(self) -> Self::List {
        &self.list
    }
}

impl<'a, Us: Flat> Source for &'a mut Tuple<Us> {
    type List = &'a mut Us::AsList;

    fn into_source_list(self) -> Self::List {
        &mut self.list
    }
}

/// Element-wise conversion of an inductive list from a source list of the same length.
///
/// The source list is `(U, Us)`, `&(U, Us)`, or `&mut (U, Us)`; in the borrowed forms every
/// element is cloned before conversion. Lists of different lengths have no implementation.
pub trait ConvertFrom<Src>: Sized {
    /// Convert each element of `src`, in index order.
    fn convert_from(src: Src) -> Self;
}

impl ConvertFrom<()> for () {
    fn convert_from(_: ()) {}
}

impl<'a> ConvertFrom<&'a ()> for () {
    fn convert_from(_: &'a ()) {}
}

impl<'a> ConvertFrom<&'a mut ()> for () {
    fn convert_from(_: &'a mut ()) {}
}

impl<T, Ts, U, Us> ConvertFrom<(U, Us)> for (T, Ts)
where
    U: Into<T>,
    Ts: ConvertFrom<Us>,
{
    fn convert_from((u, us): (U, Us)) -> Self {
        let head = u.into();
        (head, Ts::convert_from(us))
    }
}

impl<'a, T, Ts, U, Us> ConvertFrom<&'a (U, Us)> for (T, Ts)
where
    U: Clone + Into<T>,
    Ts: ConvertFrom<&'a Us>,
{
    fn convert_from((u, us): &'a (U, Us)) -> Self {
        let head = U::clone(u).into();
        (head, Ts::convert_from(us))
    }
}

impl<'a, T, Ts, U, Us> ConvertFrom<&'a mut (U, Us)> for (T, Ts)
where
    U: Clone + Into<T>,
    Ts: ConvertFrom<&'a mut Us>,
{
    fn convert_from((u, us): &'a mut (U, Us)) -> Self {
        let head = U::clone(u).into();
        (head, Ts::convert_from(us))
    }
}

/// Fallible element-wise conversion of an inductive list, reporting the first element (in index
/// order) that fails to convert.
///
/// `offset` is the index of the head of `src` within the whole tuple, so that a failure deep in
/// the list reports its position in the tuple rather than in the remaining tail.
pub trait TryConvertFrom<Src, E>: Sized {
    /// Try to convert each element of `src`, stopping at the first failure.
    fn try_convert_from(src: Src, offset: usize) -> Result<Self, ConvertError<E>>;
}

impl<E> TryConvertFrom<(), E> for () {
    fn try_convert_from(_: (), _: usize) -> Result<(), ConvertError<E>> {
        Ok(())
    }
}

impl<'a, E> TryConvertFrom<&'a (), E> for () {
    fn try_convert_from(_: &'a (), _: usize) -> Result<(), ConvertError<E>> {
        Ok(())
    }
}

impl<'a, E> TryConvertFrom<&'a mut (), E> for () {
    fn try_convert_from(_: &'a mut (), _: usize) -> Result<(), ConvertError<E>> {
        Ok(())
    }
}

impl<T, Ts, U, Us, E> TryConvertFrom<(U, Us), E> for (T, Ts)
where
    U: TryInto<T>,
    U::Error: Into<E>,
    Ts: TryConvertFrom<Us, E>,
{
    fn try_convert_from((u, us): (U, Us), offset: usize) -> Result<Self, ConvertError<E>> {
        let head = u
            .try_into()
            .map_err(|error| ConvertError::new(offset, error.into()))?;
        Ok((head, Ts::try_convert_from(us, offset + 1)?))
    }
}

impl<'a, T, Ts, U, Us, E> TryConvertFrom<&'a (U, Us), E> for (T, Ts)
where
    U: Clone + TryInto<T>,
    U::Error: Into<E>,
    Ts: TryConvertFrom<&'a Us, E>,
{
    fn try_convert_from((u, us): &'a (U, Us), offset: usize) -> Result<Self, ConvertError<E>> {
        let head = U::clone(u)
            .try_into()
            .map_err(|error| ConvertError::new(offset, error.into()))?;
        Ok((head, Ts::try_convert_from(us, offset + 1)?))
    }
}

impl<'a, T, Ts, U, Us, E> TryConvertFrom<&'a mut (U, Us), E> for (T, Ts)
where
    U: Clone + TryInto<T>,
    U::Error: Into<E>,
    Ts: TryConvertFrom<&'a mut Us, E>,
{
    fn try_convert_from(
        (u, us): &'a mut (U, Us),
        offset: usize,
    ) -> Result<Self, ConvertError<E>> {
        let head = U::clone(u)
            .try_into()
            .map_err(|error| ConvertError::new(offset, error.into()))?;
        Ok((head, Ts::try_convert_from(us, offset + 1)?))
    }
}
