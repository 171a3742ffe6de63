use std::fmt;
use std::hash::Hash;
use std::mem;

use crate::assign::AssignFrom;
use crate::compare::EqualTo;
use crate::construct::{ConvertFrom, Source, TryConvertFrom, ValueInit, ValueInitialize};
use crate::display::{DebugList, DisplayList};
use crate::error::ConvertError;
use crate::list::{Flat, HasLength, List};
use crate::select::{Element, Select};
use crate::unary::*;
use crate::utility::{Append, AsMuts, AsRefs, ForEach, SplitAt};

/// A fixed-arity heterogeneous tuple of the element types `Ts`, written as a flat Rust tuple
/// type: `Tuple<(u8, &str, bool)>` holds a `u8`, a `&str`, and a `bool`, in that order.
///
/// Elements are stored inline as an inductive list `(T0, (T1, (T2, ())))`, so every operation is
/// defined once for all arities (up to 128) by recursion over the list. Elements are accessed by
/// a compile-time index; an index past the end is a compile error.
///
/// A `Tuple` is [`Clone`], [`Copy`], [`Default`], [`Hash`], [`Eq`], [`Debug`](fmt::Debug), and
/// [`Display`](fmt::Display) whenever all its elements are, and compares with `==` against any
/// other `Tuple` of the same arity whose elements are pairwise comparable.
///
/// # Examples
///
/// ```
/// use tuplex::{tuple, Tuple};
///
/// let mut t = tuple![5, "x", true];
/// assert_eq!(*t.get::<0>(), 5);
/// assert_eq!(*t.get::<1>(), "x");
///
/// *t.get_mut::<2>() = false;
/// assert_eq!(t, Tuple::new((5, "x", false)));
/// assert_eq!(t.to_string(), "(5, x, false)");
/// ```
///
/// Indexing past the end does not compile:
///
/// ```compile_fail
/// use tuplex::tuple;
///
/// let t = tuple![5, "x", true];
/// let _ = t.get::<3>();
/// ```
///
/// Neither does comparing tuples of different arities:
///
/// ```compile_fail
/// use tuplex::tuple;
///
/// let _ = tuple![1, 2] == tuple![1, 2, 3];
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = "Ts::AsList: Clone"),
    Copy(bound = "Ts::AsList: Copy"),
    Default(bound = "Ts::AsList: Default"),
    Hash(bound = "Ts::AsList: Hash")
)]
pub struct Tuple<Ts: Flat> {
    pub(crate) list: Ts::AsList,
}

impl<Ts: Flat> Tuple<Ts> {
    /// Construct a tuple by moving each element of `elements` into place.
    ///
    /// The [`tuple!`](crate::tuple!) macro is shorthand for this.
    pub fn new(elements: Ts) -> Self {
        Tuple {
            list: elements.into_list(),
        }
    }

    /// Construct a tuple directly from the inductive list of its elements.
    pub fn from_list(list: Ts::AsList) -> Self {
        Tuple { list }
    }

    /// Unwrap the tuple into the inductive list of its elements.
    pub fn into_list(self) -> Ts::AsList {
        self.list
    }

    /// Borrow the inductive list of elements.
    pub fn as_list(&self) -> &Ts::AsList {
        &self.list
    }

    /// Unwrap the tuple into a flat Rust tuple of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::tuple;
    ///
    /// let (a, b) = tuple![1, 'b'].into_inner();
    /// assert_eq!((a, b), (1, 'b'));
    /// ```
    pub fn into_inner(self) -> Ts {
        self.list.into_flat()
    }

    /// The number of elements in the tuple.
    pub fn arity(&self) -> usize
    where
        Ts::AsList: HasLength,
    {
        <<Ts::AsList as HasLength>::Length as Unary>::VALUE
    }

    /// Construct a tuple with every element set to its [`Default::default`], in index order.
    ///
    /// This is the same as `Tuple::from(ValueInitialize)`.
    pub fn value_initialized() -> Self
    where
        Ts::AsList: ValueInit,
    {
        Tuple::from_list(ValueInit::value_init())
    }

    /// Construct a tuple by converting each element of `src` into the corresponding element type.
    ///
    /// The source may be another [`Tuple`] (by value, by `&`, or by `&mut`) or a flat Rust
    /// tuple, and must have the same arity. Elements of owned sources are moved through [`Into`];
    /// elements of borrowed sources are cloned, then converted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::{tuple, Tuple};
    ///
    /// let narrow = tuple![1_u8, "one"];
    /// let wide: Tuple<(u64, String)> = Tuple::convert_from(&narrow);
    /// assert_eq!(wide, tuple![1_u64, "one"]);
    ///
    /// let from_flat: Tuple<(f64, char)> = Tuple::convert_from((2.5_f32, 'c'));
    /// assert_eq!(from_flat, tuple![2.5, 'c']);
    /// ```
    pub fn convert_from<Src: Source>(src: Src) -> Self
    where
        Ts::AsList: ConvertFrom<Src::List>,
    {
        Tuple::from_list(ConvertFrom::convert_from(src.into_source_list()))
    }

    /// Like [`convert_from`](Tuple::convert_from), but through [`TryInto`](std::convert::TryInto)
    /// for each element, stopping at the first element that fails to convert.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] holding the index of the first failing element and its error,
    /// converted into `E`.
    pub fn try_convert_from<Src: Source, E>(src: Src) -> Result<Self, ConvertError<E>>
    where
        Ts::AsList: TryConvertFrom<Src::List, E>,
    {
        <Ts::AsList as TryConvertFrom<Src::List, E>>::try_convert_from(src.into_source_list(), 0)
            .map(Tuple::from_list)
    }

    /// Overwrite every element with the converted corresponding element of `src`, in index order.
    ///
    /// Accepts the same sources as [`convert_from`](Tuple::convert_from). Assignment is not
    /// atomic: if converting an element panics, the elements before it have already been
    /// assigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::{tuple, Tuple};
    ///
    /// let mut t: Tuple<(i64, String)> = Tuple::default();
    /// t.assign_from((7_i32, "seven"));
    /// assert_eq!(t, tuple![7, "seven"]);
    /// ```
    pub fn assign_from<Src: Source>(&mut self, src: Src)
    where
        Ts::AsList: AssignFrom<Src::List>,
    {
        self.list.assign_from(src.into_source_list());
    }

    /// Exchange the contents of two tuples of the same type, element by element.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.list, &mut other.list);
    }

    /// Borrow the element at position `I`.
    pub fn get<const I: usize>(&self) -> &Element<Ts, I>
    where
        Number<I>: ToUnary,
        Ts::AsList: Select<UnaryOf<I>>,
    {
        self.list.select()
    }

    /// Mutably borrow the element at position `I`.
    pub fn get_mut<const I: usize>(&mut self) -> &mut Element<Ts, I>
    where
        Number<I>: ToUnary,
        Ts::AsList: Select<UnaryOf<I>>,
    {
        self.list.select_mut()
    }

    /// Move the element at position `I` out of the tuple, dropping the other elements.
    pub fn into_element<const I: usize>(self) -> Element<Ts, I>
    where
        Number<I>: ToUnary,
        Ts::AsList: Select<UnaryOf<I>>,
    {
        self.list.into_selected()
    }

    /// Concatenate two tuples: all of the elements of `self`, then all of the elements of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::tuple;
    ///
    /// assert_eq!(tuple![1, 'b'].concat(tuple!["c"]), tuple![1, 'b', "c"]);
    /// ```
    pub fn concat<Us: Flat>(
        self,
        other: Tuple<Us>,
    ) -> Tuple<<<Ts::AsList as Append<Us::AsList>>::Output as List>::AsFlat>
    where
        Ts::AsList: Append<Us::AsList>,
        <Ts::AsList as Append<Us::AsList>>::Output: List,
    {
        Tuple::from_list(self.list.append(other.list))
    }

    /// Split the tuple into its first `N` elements and the remaining elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::tuple;
    ///
    /// let (front, back) = tuple![1, 'b', "c"].split_at::<1>();
    /// assert_eq!(front, tuple![1]);
    /// assert_eq!(back, tuple!['b', "c"]);
    /// ```
    pub fn split_at<const N: usize>(
        self,
    ) -> (
        Tuple<<<Ts::AsList as SplitAt<UnaryOf<N>>>::Prefix as List>::AsFlat>,
        Tuple<<<Ts::AsList as SplitAt<UnaryOf<N>>>::Suffix as List>::AsFlat>,
    )
    where
        Number<N>: ToUnary,
        Ts::AsList: SplitAt<UnaryOf<N>>,
        <Ts::AsList as SplitAt<UnaryOf<N>>>::Prefix: List,
        <Ts::AsList as SplitAt<UnaryOf<N>>>::Suffix: List,
    {
        let (prefix, suffix) = <Ts::AsList as SplitAt<UnaryOf<N>>>::split_at(self.list);
        (Tuple::from_list(prefix), Tuple::from_list(suffix))
    }

    /// A tuple of shared references to each element.
    pub fn as_refs<'a>(&'a self) -> Tuple<<<Ts::AsList as AsRefs<'a>>::Refs as List>::AsFlat>
    where
        Ts::AsList: AsRefs<'a>,
        <Ts::AsList as AsRefs<'a>>::Refs: List,
    {
        Tuple::from_list(self.list.as_refs())
    }

    /// A tuple of mutable references to each element.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::{tuple, Visit};
    ///
    /// struct Reset;
    ///
    /// impl<T: Default> Visit<&mut T> for Reset {
    ///     fn visit(&mut self, item: &mut T) {
    ///         *item = T::default();
    ///     }
    /// }
    ///
    /// let mut t = tuple![3, "three", 3.0];
    /// t.as_muts().for_each(&mut Reset);
    /// assert_eq!(t, tuple![0, "", 0.0]);
    /// ```
    pub fn as_muts<'a>(&'a mut self) -> Tuple<<<Ts::AsList as AsMuts<'a>>::Muts as List>::AsFlat>
    where
        Ts::AsList: AsMuts<'a>,
        <Ts::AsList as AsMuts<'a>>::Muts: List,
    {
        Tuple::from_list(self.list.as_muts())
    }

    /// Move each element, in index order, into `visitor`.
    ///
    /// See [`Visit`](crate::Visit) for an example.
    pub fn for_each<V>(self, visitor: &mut V)
    where
        Ts::AsList: ForEach<V>,
    {
        self.list.for_each(visitor);
    }
}

/// Exchange the contents of two tuples of the same type, element by element.
///
/// # Examples
///
/// ```
/// use tuplex::tuple;
///
/// let mut a = tuple![5, "x", true];
/// let mut b = tuple![7, "y", false];
/// tuplex::swap(&mut a, &mut b);
/// assert_eq!((a, b), (tuple![7, "y", false], tuple![5, "x", true]));
/// ```
pub fn swap<Ts: Flat>(a: &mut Tuple<Ts>, b: &mut Tuple<Ts>) {
    a.swap(b);
}

impl<Ts: Flat> From<Ts> for Tuple<Ts> {
    fn from(elements: Ts) -> Self {
        Tuple::new(elements)
    }
}

impl<Ts: Flat> From<ValueInitialize> for Tuple<Ts>
where
    Ts::AsList: ValueInit,
{
    fn from(_: ValueInitialize) -> Self {
        Tuple::value_initialized()
    }
}

impl<Ts: Flat, Us: Flat> PartialEq<Tuple<Us>> for Tuple<Ts>
where
    Ts::AsList: EqualTo<Us::AsList>,
{
    fn eq(&self, other: &Tuple<Us>) -> bool {
        self.list.equal_to(&other.list)
    }
}

impl<Ts: Flat> Eq for Tuple<Ts> where Ts::AsList: Eq + EqualTo<Ts::AsList> {}

impl<Ts: Flat> fmt::Debug for Tuple<Ts>
where
    Ts::AsList: DebugList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_tuple("Tuple");
        self.list.debug_elements(&mut builder);
        builder.finish()
    }
}

impl<Ts: Flat> fmt::Display for Tuple<Ts>
where
    Ts::AsList: DisplayList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.list.fmt_elements(f, true)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple;
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;
    use std::rc::Rc;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    assert_impl_all!(Tuple<()>: Copy, Default, Eq, Hash, Send, Sync, fmt::Debug, fmt::Display);
    assert_impl_all!(Tuple<(u8, &'static str)>: Copy, Eq, PartialEq<Tuple<(u8, String)>>);
    assert_impl_all!(Tuple<(String, Vec<u8>)>: Clone, Default, Eq, Hash);
    assert_not_impl_any!(Tuple<(String,)>: Copy);
    assert_not_impl_any!(Tuple<(f64,)>: Eq);
    assert_not_impl_any!(Tuple<(Rc<u8>,)>: Send, Sync);
    assert_not_impl_any!(Tuple<(Cell<u8>,)>: Sync);
    assert_not_impl_any!(Tuple<(u8, u8)>: PartialEq<Tuple<(u8,)>>, PartialEq<Tuple<(u8, u8, u8)>>);

    #[test]
    fn arity_zero_is_a_unit() {
        let unit: Tuple<()> = Tuple::default();
        assert_eq!(unit, Tuple::new(()));
        assert_eq!(unit.arity(), 0);
        assert_eq!(unit.to_string(), "()");
        assert_eq!(format!("{:?}", unit), "Tuple");
    }

    #[test]
    fn value_initialization_matches_default() {
        let t: Tuple<(i32, bool, f64)> = Tuple::from(ValueInitialize);
        assert_eq!(t, Tuple::<(i32, bool, f64)>::default());
        assert_eq!(t.into_inner(), (0, false, 0.0));
    }

    #[test]
    fn references_keep_their_borrow() {
        let mut x = 1;
        {
            let mut t = Tuple::new((&mut x, 'r'));
            **t.get_mut::<0>() += 1;
            let (r, _) = t.into_inner();
            *r += 1;
        }
        assert_eq!(x, 3);
    }

    #[test]
    fn debug_names_the_tuple() {
        assert_eq!(format!("{:?}", tuple![1, "a"]), r#"Tuple(1, "a")"#);
    }

    #[test]
    fn heterogeneous_equality() {
        let owned = tuple![String::from("x"), 1_u8];
        assert_eq!(owned, tuple!["x", 1_u8]);
        assert_ne!(owned, tuple!["y", 1_u8]);
    }

    #[test]
    fn conversion_from_mutable_borrow_leaves_source() {
        let mut src = tuple![String::from("kept"), 2_u16];
        let copy: Tuple<(String, u32)> = Tuple::convert_from(&mut src);
        assert_eq!(copy, tuple![String::from("kept"), 2_u32]);
        assert_eq!(src.get::<0>(), "kept");
    }

    #[test]
    fn element_is_moved_out() {
        let t = tuple![String::from("a"), vec![1, 2, 3]];
        let v: Vec<i32> = t.into_element::<1>();
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn equal_tuples_hash_alike() {
        let direct = tuple![7_u64, String::from("seven"), 'z'];
        let converted: Tuple<(u64, String, char)> = Tuple::convert_from((7_u8, "seven", 'z'));
        assert_eq!(direct, converted);
        assert_eq!(hash_of(&direct), hash_of(&converted));
        assert_eq!(hash_of(&direct), hash_of(&direct.clone()));
        assert_ne!(hash_of(&direct), hash_of(&tuple![8_u64, String::from("seven"), 'z']));
    }
}
