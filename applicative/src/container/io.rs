use std::fmt;

use log::trace;

use crate::{Applicative, Chain, Functor, PartiallyApplied, Pointed};

/// A deferred synchronous computation. Nothing happens until [`Io::run`] is called;
/// `map`, `ap` and `chain` only build up a bigger computation.
pub struct Io<'a, A> {
    effect: Box<dyn FnOnce() -> A + 'a>,
}

impl<'a, A: 'a> Io<'a, A> {
    pub fn new(effect: impl FnOnce() -> A + 'a) -> Self {
        Io {
            effect: Box::new(effect),
        }
    }

    pub fn of(value: A) -> Self {
        Io::new(move || value)
    }

    /// Perform the effect
    pub fn run(self) -> A {
        trace!("running io effect");
        (self.effect)()
    }

    pub fn map<B: 'a>(self, f: impl FnOnce(A) -> B + 'a) -> Io<'a, B> {
        Io::new(move || f(self.run()))
    }

    pub fn chain<B: 'a>(self, f: impl FnOnce(A) -> Io<'a, B> + 'a) -> Io<'a, B> {
        Io::new(move || f(self.run()).run())
    }
}

impl<'a, F: 'a> Io<'a, F> {
    /// Runs this effect to get the function, then the effect of `value` to get its argument.
    pub fn ap<A: 'a, B: 'a>(self, value: Io<'a, A>) -> Io<'a, B>
    where
        F: FnOnce(A) -> B + 'a,
    {
        Io::new(move || {
            let f = self.run();
            value.map(f).run()
        })
    }
}

impl<'a, A> fmt::Debug for Io<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Io").finish_non_exhaustive()
    }
}

impl<'a> Functor<'a> for Io<'a, PartiallyApplied> {
    type Container<X: 'a> = Io<'a, X>;

    fn map<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> B + 'a,
    ) -> Self::Container<B> {
        input.map(f)
    }
}

impl<'a> Pointed<'a> for Io<'a, PartiallyApplied> {
    fn of<A: 'a>(value: A) -> Self::Container<A> {
        Io::of(value)
    }
}

impl<'a> Applicative<'a> for Io<'a, PartiallyApplied> {
    fn ap<A: 'a, B: 'a, F: FnOnce(A) -> B + 'a>(
        f: Self::Container<F>,
        value: Self::Container<A>,
    ) -> Self::Container<B> {
        f.ap(value)
    }
}

impl<'a> Chain<'a> for Io<'a, PartiallyApplied> {
    fn chain<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> Self::Container<B> + 'a,
    ) -> Self::Container<B> {
        input.chain(f)
    }
}
