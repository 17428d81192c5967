//! Checks for the functor and applicative laws.
//!
//! `ap` consumes its operands, so each check takes a factory per operand and builds every
//! container it needs fresh. Containers are compared through `observe`, which turns one into
//! something comparable: `|c| c` for eager containers, `Io::run` for `Io`, blocking on
//! `Task::run` for `Task`.
//!
//! ```rust
//! use applicative::{laws, Maybe, PartiallyApplied};
//!
//! laws::homomorphism::<Maybe<PartiallyApplied>, _, _, _>(|x: i32| x + 1, 41, |c| c).unwrap();
//! ```

use std::fmt::{self, Debug};

use log::trace;

use crate::{Applicative, Functor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Law {
    FunctorIdentity,
    FunctorComposition,
    Identity,
    Homomorphism,
    Interchange,
    Composition,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::FunctorIdentity => "functor identity",
            Law::FunctorComposition => "functor composition",
            Law::Identity => "applicative identity",
            Law::Homomorphism => "homomorphism",
            Law::Interchange => "interchange",
            Law::Composition => "applicative composition",
        };
        f.write_str(name)
    }
}

/// Both sides of a law, observed, did not agree
#[derive(Debug, thiserror::Error)]
#[error("{law} law violated: {lhs} != {rhs}")]
pub struct LawViolation {
    pub law: Law,
    pub lhs: String,
    pub rhs: String,
}

fn agree<O: PartialEq + Debug>(law: Law, lhs: O, rhs: O) -> Result<(), LawViolation> {
    if lhs == rhs {
        trace!("{law} law holds");
        Ok(())
    } else {
        Err(LawViolation {
            law,
            lhs: format!("{lhs:?}"),
            rhs: format!("{rhs:?}"),
        })
    }
}

/// `map(v, |x| x) == v`
pub fn functor_identity<'a, T, A, O>(
    v: impl Fn() -> T::Container<A>,
    observe: impl Fn(T::Container<A>) -> O,
) -> Result<(), LawViolation>
where
    T: Functor<'a>,
    A: 'a,
    O: PartialEq + Debug,
{
    let lhs = observe(T::map(v(), |x: A| x));
    agree(Law::FunctorIdentity, lhs, observe(v()))
}

/// `map(map(v, f), g) == map(v, |x| g(f(x)))`
pub fn functor_composition<'a, T, A, B, C, O>(
    v: impl Fn() -> T::Container<A>,
    f: impl FnOnce(A) -> B + Clone + 'a,
    g: impl FnOnce(B) -> C + Clone + 'a,
    observe: impl Fn(T::Container<C>) -> O,
) -> Result<(), LawViolation>
where
    T: Functor<'a>,
    A: 'a,
    B: 'a,
    C: 'a,
    O: PartialEq + Debug,
{
    let lhs = observe(T::map(T::map(v(), f.clone()), g.clone()));
    let rhs = observe(T::map(v(), move |x: A| g(f(x))));
    agree(Law::FunctorComposition, lhs, rhs)
}

/// `ap(of(|x| x), v) == v`
pub fn identity<'a, T, A, O>(
    v: impl Fn() -> T::Container<A>,
    observe: impl Fn(T::Container<A>) -> O,
) -> Result<(), LawViolation>
where
    T: Applicative<'a>,
    A: 'a,
    O: PartialEq + Debug,
{
    let lhs = observe(T::ap(T::of(|x: A| x), v()));
    agree(Law::Identity, lhs, observe(v()))
}

/// `ap(of(f), of(x)) == of(f(x))`
pub fn homomorphism<'a, T, A, B, O>(
    f: impl FnOnce(A) -> B + Clone + 'a,
    x: A,
    observe: impl Fn(T::Container<B>) -> O,
) -> Result<(), LawViolation>
where
    T: Applicative<'a>,
    A: Clone + 'a,
    B: 'a,
    O: PartialEq + Debug,
{
    let lhs = observe(T::ap(T::of(f.clone()), T::of(x.clone())));
    let rhs = observe(T::of(f(x)));
    agree(Law::Homomorphism, lhs, rhs)
}

/// `ap(u, of(x)) == ap(of(|f| f(x)), u)`
pub fn interchange<'a, T, A, B, F, O>(
    u: impl Fn() -> T::Container<F>,
    x: A,
    observe: impl Fn(T::Container<B>) -> O,
) -> Result<(), LawViolation>
where
    T: Applicative<'a>,
    A: Clone + 'a,
    B: 'a,
    F: FnOnce(A) -> B + 'a,
    O: PartialEq + Debug,
{
    let lhs = observe(T::ap(u(), T::of(x.clone())));
    let rhs = observe(T::ap(T::of(move |f: F| f(x)), u()));
    agree(Law::Interchange, lhs, rhs)
}

/// `ap(ap(ap(of(compose), u), v), w) == ap(u, ap(v, w))`
pub fn composition<'a, T, A, B, C, F, G, O>(
    u: impl Fn() -> T::Container<F>,
    v: impl Fn() -> T::Container<G>,
    w: impl Fn() -> T::Container<A>,
    observe: impl Fn(T::Container<C>) -> O,
) -> Result<(), LawViolation>
where
    T: Applicative<'a>,
    A: 'a,
    B: 'a,
    C: 'a,
    F: FnOnce(B) -> C + 'a,
    G: FnOnce(A) -> B + 'a,
    O: PartialEq + Debug,
{
    let compose = |f: F| move |g: G| move |x: A| f(g(x));
    let lhs = observe(T::ap(T::ap(T::ap(T::of(compose), u()), v()), w()));
    let rhs = observe(T::ap(u(), T::ap(v(), w())));
    agree(Law::Composition, lhs, rhs)
}
