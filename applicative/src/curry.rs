//! Fixed-arity currying, used to stage multi-argument functions across chained `ap` calls.
//!
//! Each helper returns a function of the first argument. Every step after that is a boxed
//! [`Curried`] function of the next argument, so the remaining arity is visible in the type:
//! `curry3(f)` has type `impl FnOnce(A) -> Curried<B, Curried<C, D>>`.

/// A function waiting on one more argument of type `A`, producing `B`
pub type Curried<'a, A, B> = Box<dyn FnOnce(A) -> B + 'a>;

pub fn curry2<'a, A: 'a, B: 'a, C: 'a>(
    f: impl FnOnce(A, B) -> C + 'a,
) -> impl FnOnce(A) -> Curried<'a, B, C> + 'a {
    move |a: A| -> Curried<'a, B, C> { Box::new(move |b: B| f(a, b)) }
}

pub fn curry3<'a, A: 'a, B: 'a, C: 'a, D: 'a>(
    f: impl FnOnce(A, B, C) -> D + 'a,
) -> impl FnOnce(A) -> Curried<'a, B, Curried<'a, C, D>> + 'a {
    move |a: A| -> Curried<'a, B, Curried<'a, C, D>> {
        Box::new(move |b: B| -> Curried<'a, C, D> { Box::new(move |c: C| f(a, b, c)) })
    }
}

pub fn curry4<'a, A: 'a, B: 'a, C: 'a, D: 'a, E: 'a>(
    f: impl FnOnce(A, B, C, D) -> E + 'a,
) -> impl FnOnce(A) -> Curried<'a, B, Curried<'a, C, Curried<'a, D, E>>> + 'a {
    move |a: A| -> Curried<'a, B, Curried<'a, C, Curried<'a, D, E>>> {
        Box::new(move |b: B| -> Curried<'a, C, Curried<'a, D, E>> {
            Box::new(move |c: C| -> Curried<'a, D, E> { Box::new(move |d: D| f(a, b, c, d)) })
        })
    }
}

#[test]
fn curried_functions_saturate_one_argument_at_a_time() {
    let sign_in = curry3(|user: &str, password: &str, remember: bool| {
        format!("{user}:{password}:{remember}")
    });

    let waiting_on_password = sign_in("a@b.com");
    let waiting_on_remember = waiting_on_password("pw");

    assert_eq!(waiting_on_remember(false), "a@b.com:pw:false");
}

#[test]
fn curry4_applies_arguments_in_order() {
    let digits = curry4(|a: u32, b: u32, c: u32, d: u32| a * 1000 + b * 100 + c * 10 + d);

    assert_eq!(digits(1)(2)(3)(4), 1234);
}
