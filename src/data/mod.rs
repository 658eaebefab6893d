//! Monadic container types.
//!
//! | Type | Success | Failure / absence | `map2` on two failures |
//! |------|---------|-------------------|------------------------|
//! | [`Either<L, R>`] | `Right(R)` | `Left(L)` | first wins |
//! | [`Maybe<A>`] | `Just(A)` | `Nothing` | `Nothing` |
//! | [`Outcome<T, E>`] | `Success(T)` | `Failure(E)` | first wins |
//! | [`Identity<A>`] | the value | never | n/a |
//! | [`Reader<R, A>`] | `A` computed from `R` | never | n/a |
//! | [`Validation<T, E>`] | `Valid(T)` | `Invalid(E)` | errors combined |
//!
//! Every type except `Reader` offers `fold` and `match_with` to eliminate
//! it. On the two-case types the success handler comes first.

mod either;
mod fault;
mod identity;
mod maybe;
mod outcome;
mod reader;
mod validation;

pub use either::Either;
pub use fault::Fault;
pub use identity::Identity;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use reader::Reader;
pub use validation::{ErrorListDisplay, Validation};
