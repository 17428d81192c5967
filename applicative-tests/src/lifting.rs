use std::cell::Cell;
use std::time::Duration;

use applicative::{
    ap_via_chain, curry2, lift_a2, lift_a3, lift_a4, map_via_ap, Identity, Io, Maybe,
    PartiallyApplied, Task,
};
use tokio::sync::oneshot;

use crate::init_logging;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn sign_in(email: &str, password: &str, remember_me: bool) -> String {
    format!("signed in {email} with {password}, remember: {remember_me}")
}

#[test]
fn ap_over_a_mapped_identity() {
    let add = |a: i32| move |b: i32| a + b;

    assert_eq!(Identity::of(2).map(add).ap(Identity::of(3)), Identity::of(5));
}

#[test]
fn lift_a2_over_maybe() {
    init_logging();

    type M = Maybe<PartiallyApplied>;

    assert_eq!(lift_a2::<M, _, _, _>(add, Maybe::of(2), Maybe::of(3)), Maybe::of(5));
    assert_eq!(lift_a2::<M, _, _, _>(add, Maybe::Nothing, Maybe::of(3)), Maybe::Nothing);
}

#[test]
fn lift_a3_over_io_runs_sign_in() {
    let signed_in = lift_a3::<Io<'_, PartiallyApplied>, _, _, _, _>(
        sign_in,
        Io::of("a@b.com"),
        Io::of("pw"),
        Io::of(false),
    );

    assert_eq!(signed_in.run(), sign_in("a@b.com", "pw", false));
}

#[test]
fn lift_a4_saturates_left_to_right() {
    let digits = |a: u32, b: u32, c: u32, d: u32| a * 1000 + b * 100 + c * 10 + d;

    let res = lift_a4::<Option<PartiallyApplied>, _, _, _, _, _>(
        digits,
        Some(1),
        Some(2),
        Some(3),
        Some(4),
    );

    assert_eq!(res, Some(1234));
}

#[test]
fn chained_ap_reads_like_the_curried_call() {
    let sum = Maybe::of(curry2(add)).ap(Maybe::of(2)).ap(Maybe::of(3));

    assert_eq!(sum, Maybe::of(5));
}

#[test]
fn map_recovered_from_ap_agrees_with_map() {
    type R = Result<PartiallyApplied, String>;

    let via_ap = map_via_ap::<R, _, _>(Ok(20), |x: i32| x * 2);

    assert_eq!(via_ap, Ok::<_, String>(20).map(|x| x * 2));
}

#[test]
fn short_circuit_never_calls_the_function() {
    let calls = Cell::new(0);
    let counted_add = |a: i32, b: i32| {
        calls.set(calls.get() + 1);
        a + b
    };

    let res = lift_a2::<Result<PartiallyApplied, &str>, _, _, _>(counted_add, Ok(1), Err("boom"));

    assert_eq!(res, Err("boom"));
    assert_eq!(calls.get(), 0);
}

/// Two operands that each hand the other a value and then wait for the other's value.
/// Under sequential evaluation the first one waits forever.
fn handshake() -> (
    Task<'static, impl FnOnce(i32) -> i32, &'static str>,
    Task<'static, i32, &'static str>,
) {
    let (to_value, from_function) = oneshot::channel::<i32>();
    let (to_function, from_value) = oneshot::channel::<i32>();

    let function = Task::new(async move {
        to_value.send(1).map_err(|_| "value side gone")?;
        let theirs = from_value.await.map_err(|_| "value side gone")?;
        Ok::<_, &'static str>(move |x: i32| x + theirs)
    });

    let value = Task::new(async move {
        to_function.send(10).map_err(|_| "function side gone")?;
        let theirs = from_function.await.map_err(|_| "function side gone")?;
        Ok::<_, &'static str>(theirs * 100)
    });

    (function, value)
}

#[tokio::test]
async fn task_ap_starts_both_operands_independently() {
    init_logging();
    let (function, value) = handshake();

    assert_eq!(function.ap(value).run().await, Ok(110));
}

#[tokio::test]
async fn task_ap_via_chain_waits_on_the_function_first() {
    let (function, value) = handshake();

    let sequential = ap_via_chain::<Task<'_, PartiallyApplied, &str>, _, _, _>(function, value);
    let res = tokio::time::timeout(Duration::from_millis(50), sequential.run()).await;

    assert!(res.is_err(), "sequential ap should never see the value side start");
}

#[tokio::test]
async fn task_rejection_on_either_side_wins() {
    let rejected_value = Task::of(|x: i32| x + 1).ap(Task::rejected("value failed"));
    assert_eq!(rejected_value.run().await, Err("value failed"));

    let rejected_function = Task::<fn(i32) -> i32, _>::rejected("function failed").ap(Task::of(1));
    assert_eq!(rejected_function.run().await, Err("function failed"));
}
