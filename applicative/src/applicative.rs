use crate::curry::{curry2, curry3, curry4};
use crate::functor::{Compose, Functor};

/// The ability to wrap a bare value in the minimal container for some container type.
///
/// `of` is total and has no side effects: an `Io` built with `of` returns its value when run
/// and does nothing else, a `Task` built with `of` is already resolved.
pub trait Pointed<'a>: Functor<'a> {
    fn of<A: 'a>(value: A) -> Self::Container<A>;
}

/// A pointed functor that can apply a wrapped function to a wrapped value.
///
/// `ap` unwraps the function held by `f` and maps it over `value`. One `ap` supplies one
/// argument: a curried function of N arguments is lifted with `of` (or mapped over its first
/// argument) and then saturated by N (or N - 1) chained `ap` calls, left to right.
///
/// ```rust
/// use applicative::{curry2, Applicative, Maybe, PartiallyApplied};
///
/// fn add_wrapped<'a, T: Applicative<'a>>(
///     a: T::Container<i32>,
///     b: T::Container<i32>,
/// ) -> T::Container<i32> {
///     T::ap(T::map(a, curry2(|x: i32, y: i32| x + y)), b)
/// }
///
/// let sum = add_wrapped::<Maybe<PartiallyApplied>>(Maybe::of(2), Maybe::of(3));
///
/// assert_eq!(sum, Maybe::of(5));
/// ```
///
/// If either operand is empty or failed, `ap` returns that state unchanged and the function
/// is never invoked. Unlike sequencing via [`crate::Chain`], neither operand depends on the
/// other, so effectful containers are free to evaluate both at the same time.
///
/// # Laws
///
/// - identity: `ap(of(|x| x), v) == v`
/// - homomorphism: `ap(of(f), of(x)) == of(f(x))`
/// - interchange: `ap(u, of(x)) == ap(of(|f| f(x)), u)`
/// - composition: `ap(ap(ap(of(compose), u), v), w) == ap(u, ap(v, w))`
pub trait Applicative<'a>: Pointed<'a> {
    fn ap<A: 'a, B: 'a, F: FnOnce(A) -> B + 'a>(
        f: Self::Container<F>,
        value: Self::Container<A>,
    ) -> Self::Container<B>;
}

/// Lift a two-argument function over two containers: `ap(map(a, curry2(f)), b)`
pub fn lift_a2<'a, T, A, B, C>(
    f: impl FnOnce(A, B) -> C + 'a,
    a: T::Container<A>,
    b: T::Container<B>,
) -> T::Container<C>
where
    T: Applicative<'a>,
    A: 'a,
    B: 'a,
    C: 'a,
{
    T::ap(T::map(a, curry2(f)), b)
}

/// Lift a three-argument function over three containers: `ap(ap(map(a, curry3(f)), b), c)`
pub fn lift_a3<'a, T, A, B, C, D>(
    f: impl FnOnce(A, B, C) -> D + 'a,
    a: T::Container<A>,
    b: T::Container<B>,
    c: T::Container<C>,
) -> T::Container<D>
where
    T: Applicative<'a>,
    A: 'a,
    B: 'a,
    C: 'a,
    D: 'a,
{
    T::ap(T::ap(T::map(a, curry3(f)), b), c)
}

/// Lift a four-argument function over four containers, one `ap` per argument after the first
pub fn lift_a4<'a, T, A, B, C, D, E>(
    f: impl FnOnce(A, B, C, D) -> E + 'a,
    a: T::Container<A>,
    b: T::Container<B>,
    c: T::Container<C>,
    d: T::Container<D>,
) -> T::Container<E>
where
    T: Applicative<'a>,
    A: 'a,
    B: 'a,
    C: 'a,
    D: 'a,
    E: 'a,
{
    T::ap(T::ap(T::ap(T::map(a, curry4(f)), b), c), d)
}

/// `map` recovered from `of` and `ap` alone. Agrees with [`Functor::map`] for any lawful
/// applicative.
pub fn map_via_ap<'a, T, A, B>(input: T::Container<A>, f: impl FnOnce(A) -> B + 'a) -> T::Container<B>
where
    T: Applicative<'a>,
    A: 'a,
    B: 'a,
{
    T::ap(T::of(f), input)
}

impl<'a, F: Pointed<'a>, G: Pointed<'a>> Pointed<'a> for Compose<F, G> {
    fn of<A: 'a>(value: A) -> Self::Container<A> {
        F::of(G::of(value))
    }
}

impl<'a, F: Applicative<'a>, G: Applicative<'a>> Applicative<'a> for Compose<F, G> {
    fn ap<A: 'a, B: 'a, Func: FnOnce(A) -> B + 'a>(
        f: Self::Container<Func>,
        value: Self::Container<A>,
    ) -> Self::Container<B> {
        // lift the inner `ap` into the outer layer, then let the outer layer apply it
        let inner_ap = F::map(f, |inner_f: G::Container<Func>| {
            move |inner_value: G::Container<A>| G::ap(inner_f, inner_value)
        });
        F::ap(inner_ap, value)
    }
}
