use crate::applicative::Applicative;

/// Sequential composition: the function passed to `chain` decides, from the value inside the
/// first container, which container to continue with.
///
/// Every `Chain` gets an `ap` for free via [`ap_via_chain`], but that `ap` can only look at the
/// value operand after the function operand has produced its function. For effectful
/// containers like [`crate::Task`] that means waiting; the native `ap` doesn't.
pub trait Chain<'a>: Applicative<'a> {
    fn chain<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> Self::Container<B> + 'a,
    ) -> Self::Container<B>;
}

/// `ap` derived from `chain` and `map`: `chain(f, |f| map(value, f))`
pub fn ap_via_chain<'a, T, A, B, F>(f: T::Container<F>, value: T::Container<A>) -> T::Container<B>
where
    T: Chain<'a>,
    A: 'a,
    B: 'a,
    F: FnOnce(A) -> B + 'a,
{
    T::chain(f, move |f: F| T::map(value, f))
}
