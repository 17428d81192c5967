use std::fmt;
use std::future::Future;

use futures::future::{self, LocalBoxFuture};
use futures::{FutureExt, TryFutureExt};
use log::trace;

use crate::{Applicative, Chain, Functor, PartiallyApplied, Pointed};

/// A deferred asynchronous computation that either resolves with an `A` or rejects with an `E`.
///
/// Tasks don't spawn anything: the future runs on whatever executor awaits [`Task::run`].
/// `ap` polls the function operand and the value operand concurrently, so neither waits on
/// the other; a rejection from either side drops (and thereby cancels) the other one.
pub struct Task<'a, A, E> {
    future: LocalBoxFuture<'a, Result<A, E>>,
}

impl<'a, A: 'a, E: 'a> Task<'a, A, E> {
    pub fn new(future: impl Future<Output = Result<A, E>> + 'a) -> Self {
        Task {
            future: future.boxed_local(),
        }
    }

    /// A task that is already resolved with `value`
    pub fn of(value: A) -> Self {
        Task::new(future::ready(Ok(value)))
    }

    /// A task that is already rejected with `error`
    pub fn rejected(error: E) -> Self {
        Task::new(future::ready(Err(error)))
    }

    pub fn from_result(result: Result<A, E>) -> Self {
        Task::new(future::ready(result))
    }

    /// Drive the computation to completion
    pub async fn run(self) -> Result<A, E> {
        self.future.await
    }

    pub fn map<B: 'a>(self, f: impl FnOnce(A) -> B + 'a) -> Task<'a, B, E> {
        Task::new(self.future.map_ok(f))
    }

    /// Sequential composition: the task returned by `f` can't start before `self` resolves
    pub fn chain<B: 'a>(self, f: impl FnOnce(A) -> Task<'a, B, E> + 'a) -> Task<'a, B, E> {
        Task::new(self.future.and_then(move |a| f(a).future))
    }
}

impl<'a, F: 'a, E: 'a> Task<'a, F, E> {
    pub fn ap<A: 'a, B: 'a>(self, value: Task<'a, A, E>) -> Task<'a, B, E>
    where
        F: FnOnce(A) -> B + 'a,
    {
        Task::new(
            future::try_join(self.future, value.future)
                .inspect_err(|_| trace!("task ap rejected, function not applied"))
                .map_ok(|(f, a)| f(a)),
        )
    }
}

impl<'a, A, E> fmt::Debug for Task<'a, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").finish_non_exhaustive()
    }
}

impl<'a, E: 'a> Functor<'a> for Task<'a, PartiallyApplied, E> {
    type Container<X: 'a> = Task<'a, X, E>;

    fn map<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> B + 'a,
    ) -> Self::Container<B> {
        input.map(f)
    }
}

impl<'a, E: 'a> Pointed<'a> for Task<'a, PartiallyApplied, E> {
    fn of<A: 'a>(value: A) -> Self::Container<A> {
        Task::of(value)
    }
}

impl<'a, E: 'a> Applicative<'a> for Task<'a, PartiallyApplied, E> {
    fn ap<A: 'a, B: 'a, F: FnOnce(A) -> B + 'a>(
        f: Self::Container<F>,
        value: Self::Container<A>,
    ) -> Self::Container<B> {
        f.ap(value)
    }
}

impl<'a, E: 'a> Chain<'a> for Task<'a, PartiallyApplied, E> {
    fn chain<A: 'a, B: 'a>(
        input: Self::Container<A>,
        f: impl FnOnce(A) -> Self::Container<B> + 'a,
    ) -> Self::Container<B> {
        input.chain(f)
    }
}
