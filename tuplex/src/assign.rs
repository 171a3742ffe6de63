//! Converting assignment into an existing inductive list.

/// Element-wise converting assignment from a source list of the same length: `(U, Us)` by value,
/// or `&(U, Us)` / `&mut (U, Us)`, whose elements are cloned first.
///
/// Elements are assigned head first. If converting some element panics, every element before it
/// has already been overwritten.
pub trait AssignFrom<Src> {
    /// Overwrite each element with the converted element of `src`, in index order.
    fn assign_from(&mut self, src: Src);
}

impl AssignFrom<()> for () {
    fn assign_from(&mut self, _: ()) {}
}

impl<'a> AssignFrom<&'a ()> for () {
    fn assign_from(&mut self, _: &'a ()) {}
}

impl<'a> AssignFrom<&'a mut ()> for () {
    fn assign_from(&mut self, _: &'a mut ()) {}
}

impl<T, Ts, U, Us> AssignFrom<(U, Us)> for (T, Ts)
where
    U: Into<T>,
    Ts: AssignFrom<Us>,
{
    fn assign_from(&mut self, (u, us): (U, Us)) {
        self.0 = u.into();
        self.1.assign_from(us);
    }
}

impl<'a, T, Ts, U, Us> AssignFrom<&'a (U, Us)> for (T, Ts)
where
    U: Clone + Into<T>,
    Ts: AssignFrom<&'a Us>,
{
    fn assign_from(&mut self, (u, us): &'a (U, Us)) {
        self.0 = U::clone(u).into();
        self.1.assign_from(us);
    }
}

impl<'a, T, Ts, U, Us> AssignFrom<&'a mut (U, Us)> for (T, Ts)
where
    U: Clone + Into<T>,
    Ts: AssignFrom<&'a mut Us>,
{
    fn assign_from(&mut self, (u, us): &'a mut (U, Us)) {
        self.0 = U::clone(u).into();
        self.1.assign_from(us);
    }
}
