//! # endofunk
//!
//! Monadic containers for Rust built on a shared Functor / Applicative /
//! Monad interface.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//!   [`Semigroup`](typeclass::Semigroup), [`Bifunctor`](typeclass::Bifunctor)
//! - **Data Types**: `Either`, `Maybe`, `Outcome`, `Identity`, `Reader`,
//!   `Validation`
//! - **Composition**: `lift_a!`, `lift_m!`, Kleisli composition
//!
//! `Validation` is the one instance whose Applicative differs from its
//! Monad: combining independent validations collects every error, while
//! `flat_map` still stops at the first one.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `data`: The six container types
//! - `compose`: Lifting macros and Kleisli composition
//! - `serde`: Serialize / Deserialize for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use endofunk::prelude::*;
//!
//! let name: Validation<&str, Vec<&str>> = Validation::fail("name is empty");
//! let age: Validation<u32, Vec<&str>> = Validation::fail("age is negative");
//!
//! let user = name.map2(age, |name, age| (name, age));
//! assert_eq!(user, Validation::Invalid(vec!["name is empty", "age is negative"]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use endofunk::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "compose")]
pub mod compose;
