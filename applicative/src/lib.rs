mod applicative;
mod chain;
mod container;
mod curry;
mod functor;
pub mod laws;

pub use applicative::{lift_a2, lift_a3, lift_a4, map_via_ap, Applicative, Pointed};
pub use chain::{ap_via_chain, Chain};
pub use container::{Either, Identity, Io, Maybe};
#[cfg(feature = "task")]
pub use container::Task;
pub use curry::{curry2, curry3, curry4, Curried};
pub use functor::{Compose, Functor, PartiallyApplied};
