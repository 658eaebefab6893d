//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing dependent computations
//! - [`Semigroup`]: Associative combination, used to accumulate errors
//! - [`Bifunctor`]: Mapping over both sides of a two-case container
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses a
//! generic associated type so that `Functor`, `Applicative` and `Monad` can
//! name "the same container holding a different type".
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::{Maybe, Validation};
//! use endofunk::typeclass::{Applicative, Functor, Monad};
//!
//! let doubled = Maybe::Just(21).fmap(|n| n * 2);
//! assert_eq!(doubled, Maybe::Just(42));
//!
//! let chained = Maybe::Just(4).flat_map(|n| if n > 0 { Maybe::Just(n) } else { Maybe::Nothing });
//! assert_eq!(chained, Maybe::Just(4));
//!
//! let both: Validation<(i32, i32), Vec<&str>> =
//!     Validation::fail("left").product(Validation::fail("right"));
//! assert_eq!(both, Validation::Invalid(vec!["left", "right"]));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::Semigroup;
