#[macro_use]
mod logging;

mod arr;
mod either;
mod error;
mod functor;
mod maybe;
pub mod stream;

pub use arr::Arr;
pub use either::Either;
pub use error::{Error, Result};
pub use functor::{Functor, PartiallyApplied};
pub use maybe::Maybe;
pub use stream::Stream;
