use thiserror::Error;

#[allow(unused_imports)] // For documentation linking
use crate::Tuple;

/// The error returned by [`Tuple::try_convert_from`] when some element of the source could not be
/// converted into the corresponding element type of the target.
///
/// Elements are converted in index order and conversion stops at the first failure, so
/// [`index`](ConvertError::index) is always the lowest failing position. The element's own error,
/// converted into `E`, is available as the [`source`](std::error::Error::source) of this error.
///
/// # Examples
///
/// ```
/// use std::num::TryFromIntError;
/// use tuplex::{ConvertError, Tuple};
///
/// let attempt: Result<Tuple<(u8, u8)>, ConvertError<TryFromIntError>> =
///     Tuple::try_convert_from((1_i32, 300_i32));
/// let error = attempt.unwrap_err();
///
/// assert_eq!(error.index(), 1);
/// assert_eq!(error.to_string(), "element 1 could not be converted");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("element {index} could not be converted")]
pub struct ConvertError<E> {
    index: usize,
    #[source]
    source: E,
}

impl<E> ConvertError<E> {
    pub(crate) fn new(index: usize, source: E) -> Self {
        ConvertError { index, source }
    }

    /// The position of the first element which failed to convert.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Borrow the error produced by the failing element.
    pub fn source_error(&self) -> &E {
        &self.source
    }

    /// Discard the position and recover the error produced by the failing element.
    pub fn into_source(self) -> E {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::num::TryFromIntError;

    fn overflow() -> TryFromIntError {
        use std::convert::TryFrom;
        match u8::try_from(256_u16) {
            Err(error) => error,
            Ok(_) => unreachable!(),
        }
    }

    #[test]
    fn source_is_the_element_error() {
        let error = ConvertError::new(3, overflow());
        assert_eq!(error.index(), 3);
        assert_eq!(
            error.source().map(|source| source.to_string()),
            Some(overflow().to_string())
        );
        assert_eq!(error.into_source(), overflow());
    }
}
