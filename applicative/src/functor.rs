use std::marker::PhantomData;

/// A container whose contents can be transformed via `map` without changing its shape.
///
/// # Implementing this trait
///
/// `Functor` talks about a container with its element left open, eg `Maybe<_>`, and Rust has
/// no way to name `Maybe` without an argument. Instances are therefore written for the
/// container applied to [`PartiallyApplied`], which stands in for the missing element, and
/// `Container<X>` fills it back in:
///
/// ```rust
/// # use applicative::{Functor, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// enum MyOption<A> {
///     Some(A),
///     None,
/// }
///
/// impl<'a> Functor<'a> for MyOption<PartiallyApplied> {
///     type Container<X: 'a> = MyOption<X>;
///
///     fn map<A: 'a, B: 'a>(
///         input: Self::Container<A>,
///         f: impl FnOnce(A) -> B + 'a,
///     ) -> Self::Container<B> {
///         match input {
///             MyOption::Some(x) => MyOption::Some(f(x)),
///             MyOption::None => MyOption::None,
///         }
///     }
/// }
///
/// let mapped = MyOption::<PartiallyApplied>::map(MyOption::Some(1), |n| n + 10);
///
/// assert_eq!(mapped, MyOption::Some(11));
/// ```
///
/// # Lifetimes
///
/// `'a` bounds everything stored inside the container. Eager containers don't care,
/// but deferred ones like [`crate::Io`] hold on to the mapped function until they're run.
///
/// # Laws
///
/// - identity: `map(c, |x| x) == c`
/// - composition: `map(map(c, f), g) == map(c, |x| g(f(x)))`
///
/// See [`crate::laws`] for checks.
pub trait Functor<'a> {
    /// the container type that is mapped over by `map`
    type Container<X: 'a>: 'a;

    /// Apply some function `f` to the value inside a container. Containers hold at most one
    /// value, so `f` is called at most once, and never for an empty or failed container.
    fn map<A: 'a, B: 'a>(input: Self::Container<A>, f: impl FnOnce(A) -> B + 'a)
        -> Self::Container<B>;
}

/// Placeholder for the element type of a container token, eg `Maybe<PartiallyApplied>`.
///
/// It has no values, so a token can be named in type position but never built.
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// Two containers nested one inside the other, eg `Io<Maybe<A>>`, treated as a single container.
///
/// If both layers are functors (or applicatives) so is the composite.
pub struct Compose<F, G>(PhantomData<F>, PhantomData<G>);

impl<'a, F: Functor<'a>, G: Functor<'a>> Functor<'a> for Compose<F, G> {
    type Container<X: 'a> = F::Container<G::Container<X>>;

    fn map<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> B + 'a,
    ) -> Self::Container<B> {
        F::map(input, move |inner: G::Container<A>| G::map(inner, f))
    }
}
