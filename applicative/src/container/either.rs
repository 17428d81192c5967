use log::trace;

use crate::{Applicative, Chain, Functor, PartiallyApplied, Pointed};

/// Either a failure payload (`Left`) or a success value (`Right`).
///
/// Only `Right` is mapped over. A `Left` passes through `map`, `ap` and `chain` untouched, so
/// the first failure encountered is the one that comes out the other end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<E, A> {
    Left(E),
    Right(A),
}

impl<E, A> Either<E, A> {
    pub fn of(value: A) -> Self {
        Either::Right(value)
    }

    pub fn left(error: E) -> Self {
        Either::Left(error)
    }

    pub fn right(value: A) -> Self {
        Either::Right(value)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Collapse both cases into a single plain value
    pub fn either<B>(self, on_left: impl FnOnce(E) -> B, on_right: impl FnOnce(A) -> B) -> B {
        match self {
            Either::Left(e) => on_left(e),
            Either::Right(a) => on_right(a),
        }
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Either<E, B> {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(a) => Either::Right(f(a)),
        }
    }

    pub fn chain<B>(self, f: impl FnOnce(A) -> Either<E, B>) -> Either<E, B> {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(a) => f(a),
        }
    }
}

impl<E, F> Either<E, F> {
    /// Apply the function on the right to `value`. If both are `Left`, the function side's
    /// payload wins.
    pub fn ap<A, B>(self, value: Either<E, A>) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Either::Right(f) => value.map(f),
            Either::Left(e) => {
                trace!("ap on Left, function not applied");
                Either::Left(e)
            }
        }
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(value: Result<A, E>) -> Self {
        match value {
            Ok(a) => Either::Right(a),
            Err(e) => Either::Left(e),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(value: Either<E, A>) -> Self {
        match value {
            Either::Right(a) => Ok(a),
            Either::Left(e) => Err(e),
        }
    }
}

impl<'a, E: 'a> Functor<'a> for Either<E, PartiallyApplied> {
    type Container<X: 'a> = Either<E, X>;

    #[inline(always)]
    fn map<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> B + 'a,
    ) -> Self::Container<B> {
        input.map(f)
    }
}

impl<'a, E: 'a> Pointed<'a> for Either<E, PartiallyApplied> {
    fn of<A: 'a>(value: A) -> Self::Container<A> {
        Either::Right(value)
    }
}

impl<'a, E: 'a> Applicative<'a> for Either<E, PartiallyApplied> {
    fn ap<A: 'a, B: 'a, F: FnOnce(A) -> B + 'a>(
        f: Self::Container<F>,
        value: Self::Container<A>,
    ) -> Self::Container<B> {
        f.ap(value)
    }
}

impl<'a, E: 'a> Chain<'a> for Either<E, PartiallyApplied> {
    fn chain<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> Self::Container<B> + 'a,
    ) -> Self::Container<B> {
        input.chain(f)
    }
}
