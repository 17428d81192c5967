//! Instances for `Option` and `Result`, which behave exactly like [`crate::Maybe`] and
//! [`crate::Either`] respectively.

use crate::{Applicative, Chain, Functor, PartiallyApplied, Pointed};

impl<'a> Functor<'a> for Option<PartiallyApplied> {
    type Container<X: 'a> = Option<X>;

    fn map<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> B + 'a,
    ) -> Self::Container<B> {
        input.map(f)
    }
}

impl<'a> Pointed<'a> for Option<PartiallyApplied> {
    fn of<A: 'a>(value: A) -> Self::Container<A> {
        Some(value)
    }
}

impl<'a> Applicative<'a> for Option<PartiallyApplied> {
    fn ap<A: 'a, B: 'a, F: FnOnce(A) -> B + 'a>(
        f: Self::Container<F>,
        value: Self::Container<A>,
    ) -> Self::Container<B> {
        f.and_then(|f| value.map(f))
    }
}

impl<'a> Chain<'a> for Option<PartiallyApplied> {
    fn chain<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> Self::Container<B> + 'a,
    ) -> Self::Container<B> {
        input.and_then(f)
    }
}

impl<'a, E: 'a> Functor<'a> for Result<PartiallyApplied, E> {
    type Container<X: 'a> = Result<X, E>;

    fn map<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> B + 'a,
    ) -> Self::Container<B> {
        input.map(f)
    }
}

impl<'a, E: 'a> Pointed<'a> for Result<PartiallyApplied, E> {
    fn of<A: 'a>(value: A) -> Self::Container<A> {
        Ok(value)
    }
}

impl<'a, E: 'a> Applicative<'a> for Result<PartiallyApplied, E> {
    fn ap<A: 'a, B: 'a, F: FnOnce(A) -> B + 'a>(
        f: Self::Container<F>,
        value: Self::Container<A>,
    ) -> Self::Container<B> {
        f.and_then(|f| value.map(f))
    }
}

impl<'a, E: 'a> Chain<'a> for Result<PartiallyApplied, E> {
    fn chain<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> Self::Container<B> + 'a,
    ) -> Self::Container<B> {
        input.and_then(f)
    }
}
