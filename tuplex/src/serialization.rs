//! If the `serde` feature is enabled, a [`Tuple`] serializes as a fixed-length sequence of its
//! elements, and deserializes only from a sequence of exactly that length.

use std::fmt;
use std::marker::PhantomData;

use serde_crate::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::list::{Flat, HasLength};
use crate::unary::Unary;
use crate::Tuple;

/// Serialize each element of an inductive list into a serde tuple, head first.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub trait SerializeList {
    /// Serialize the elements.
    fn serialize_elements<S: SerializeTuple>(&self, tuple: &mut S) -> Result<(), S::Error>;
}

impl SerializeList for () {
    fn serialize_elements<S: SerializeTuple>(&self, _: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

impl<T: Serialize, Ts: SerializeList> SerializeList for (T, Ts) {
    fn serialize_elements<S: SerializeTuple>(&self, tuple: &mut S) -> Result<(), S::Error> {
        tuple.serialize_element(&self.0)?;
        self.1.serialize_elements(tuple)
    }
}

/// Deserialize each element of an inductive list from a serde sequence, head first.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub trait DeserializeList<'de>: Sized {
    /// Deserialize the elements; `index` is the position of the head within the whole tuple and
    /// `len` is the length of the whole tuple, both used for error reporting.
    fn deserialize_elements<A: SeqAccess<'de>>(
        seq: &mut A,
        index: usize,
        len: usize,
    ) -> Result<Self, A::Error>;
}

impl<'de> DeserializeList<'de> for () {
    fn deserialize_elements<A: SeqAccess<'de>>(
        _: &mut A,
        _: usize,
        _: usize,
    ) -> Result<(), A::Error> {
        Ok(())
    }
}

impl<'de, T: Deserialize<'de>, Ts: DeserializeList<'de>> DeserializeList<'de> for (T, Ts) {
    fn deserialize_elements<A: SeqAccess<'de>>(
        seq: &mut A,
        index: usize,
        len: usize,
    ) -> Result<Self, A::Error> {
        let head = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(index, &ExpectedLength(len)))?;
        Ok((head, Ts::deserialize_elements(seq, index + 1, len)?))
    }
}

#[derive(Debug, Clone, Copy)]
struct ExpectedLength(usize);

impl de::Expected for ExpectedLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a tuple of {} elements", self.0)
    }
}

impl<Ts: Flat> Serialize for Tuple<Ts>
where
    Ts::AsList: SerializeList + HasLength,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = <<Ts::AsList as HasLength>::Length as Unary>::VALUE;
        let mut tuple = serializer.serialize_tuple(len)?;
        self.list.serialize_elements(&mut tuple)?;
        tuple.end()
    }
}

struct TupleVisitor<Ts>(PhantomData<fn() -> Ts>);

impl<'de, Ts: Flat> Visitor<'de> for TupleVisitor<Ts>
where
    Ts::AsList: DeserializeList<'de> + HasLength,
{
    type Value = Tuple<Ts>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = <<Ts::AsList as HasLength>::Length as Unary>::VALUE;
        de::Expected::fmt(&ExpectedLength(len), f)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let len = <<Ts::AsList as HasLength>::Length as Unary>::VALUE;
        let list =
            <Ts::AsList as DeserializeList<'de>>::deserialize_elements(&mut seq, 0, len)?;
        Ok(Tuple::from_list(list))
    }
}

impl<'de, Ts: Flat> Deserialize<'de> for Tuple<Ts>
where
    Ts::AsList: DeserializeList<'de> + HasLength,
{
    fn deserialize<D>(deserializer: D) -> Result<Tuple<Ts>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let len = <<Ts::AsList as HasLength>::Length as Unary>::VALUE;
        deserializer.deserialize_tuple(len, TupleVisitor(PhantomData))
    }
}
