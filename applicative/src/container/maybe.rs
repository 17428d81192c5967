use log::trace;

use crate::{Applicative, Chain, Functor, PartiallyApplied, Pointed};

/// A value that may be absent. Mapping over or applying to `Nothing` does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    Nothing,
    Just(A),
}

impl<A> Maybe<A> {
    pub fn of(value: A) -> Self {
        Maybe::Just(value)
    }

    pub fn just(value: A) -> Self {
        Maybe::Just(value)
    }

    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Collapse into a plain value: `default` if absent, `f` applied to the value otherwise
    pub fn maybe<B>(self, default: B, f: impl FnOnce(A) -> B) -> B {
        match self {
            Maybe::Just(a) => f(a),
            Maybe::Nothing => default,
        }
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Maybe<B> {
        match self {
            Maybe::Just(a) => Maybe::Just(f(a)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    pub fn chain<B>(self, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
        match self {
            Maybe::Just(a) => f(a),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<F> Maybe<F> {
    pub fn ap<A, B>(self, value: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Maybe::Just(f), value @ Maybe::Just(_)) => value.map(f),
            _ => {
                trace!("ap on Nothing, function not applied");
                Maybe::Nothing
            }
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Some(a) => Maybe::Just(a),
            None => Maybe::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        match value {
            Maybe::Just(a) => Some(a),
            Maybe::Nothing => None,
        }
    }
}

impl<'a> Functor<'a> for Maybe<PartiallyApplied> {
    type Container<X: 'a> = Maybe<X>;

    #[inline(always)]
    fn map<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> B + 'a,
    ) -> Self::Container<B> {
        input.map(f)
    }
}

impl<'a> Pointed<'a> for Maybe<PartiallyApplied> {
    fn of<A: 'a>(value: A) -> Self::Container<A> {
        Maybe::Just(value)
    }
}

impl<'a> Applicative<'a> for Maybe<PartiallyApplied> {
    fn ap<A: 'a, B: 'a, F: FnOnce(A) -> B + 'a>(
        f: Self::Container<F>,
        value: Self::Container<A>,
    ) -> Self::Container<B> {
        f.ap(value)
    }
}

impl<'a> Chain<'a> for Maybe<PartiallyApplied> {
    fn chain<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> Self::Container<B> + 'a,
    ) -> Self::Container<B> {
        input.chain(f)
    }
}
