//! Concrete containers implementing [`crate::Applicative`] and [`crate::Chain`].

mod either;
mod identity;
mod io;
mod maybe;
mod stdlib;
#[cfg(feature = "task")]
mod task;

pub use either::Either;
pub use identity::Identity;
pub use io::Io;
pub use maybe::Maybe;
#[cfg(feature = "task")]
pub use task::Task;
