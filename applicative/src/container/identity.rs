use crate::{Applicative, Chain, Functor, PartiallyApplied, Pointed};

/// The plainest possible container: exactly one value, no effects, no failure state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    pub fn of(value: A) -> Self {
        Identity(value)
    }

    pub fn into_inner(self) -> A {
        self.0
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Identity<B> {
        Identity(f(self.0))
    }

    pub fn chain<B>(self, f: impl FnOnce(A) -> Identity<B>) -> Identity<B> {
        f(self.0)
    }
}

impl<F> Identity<F> {
    pub fn ap<A, B>(self, value: Identity<A>) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        value.map(self.0)
    }
}

impl<'a> Functor<'a> for Identity<PartiallyApplied> {
    type Container<X: 'a> = Identity<X>;

    #[inline(always)]
    fn map<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> B + 'a,
    ) -> Self::Container<B> {
        input.map(f)
    }
}

impl<'a> Pointed<'a> for Identity<PartiallyApplied> {
    fn of<A: 'a>(value: A) -> Self::Container<A> {
        Identity(value)
    }
}

impl<'a> Applicative<'a> for Identity<PartiallyApplied> {
    fn ap<A: 'a, B: 'a, F: FnOnce(A) -> B + 'a>(
        f: Self::Container<F>,
        value: Self::Container<A>,
    ) -> Self::Container<B> {
        f.ap(value)
    }
}

impl<'a> Chain<'a> for Identity<PartiallyApplied> {
    fn chain<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> Self::Container<B> + 'a,
    ) -> Self::Container<B> {
        input.chain(f)
    }
}

#[test]
fn ap_applies_a_mapped_curried_function() {
    let add = |a: i32| move |b: i32| a + b;

    assert_eq!(Identity::of(2).map(add).ap(Identity::of(3)), Identity::of(5));
    assert_eq!(Identity::of(2).chain(|x| Identity(x * 10)).into_inner(), 20);
}
