//! Lifting and composition over the type classes.
//!
//! - [`lift_a!`]: apply an N-argument function to N applicative values,
//!   inspecting all of them
//! - [`lift_m!`]: the same through `flat_map`, stopping at the first failure
//! - [`kleisli`]: compose two functions of the form `A -> M<B>`
//! - [`lifted_flat_map`]: turn `A -> M<B>` into `M<A> -> M<B>`
//!
//! # Examples
//!
//! ```
//! use endofunk::data::Validation;
//! use endofunk::{lift_a, lift_m};
//!
//! fn check(field: &'static str, value: i32) -> Validation<i32, Vec<&'static str>> {
//!     Validation::ensure(value, |v| *v >= 0, field)
//! }
//!
//! let accumulated = lift_a!(|x, y, z| x + y + z; check("x", -1), check("y", 2), check("z", -3));
//! assert_eq!(accumulated, Validation::Invalid(vec!["x", "z"]));
//!
//! let first_only = lift_m!(|x, y, z| x + y + z; check("x", -1), check("y", 2), check("z", -3));
//! assert_eq!(first_only, Validation::Invalid(vec!["x"]));
//! ```
//!
//! # Laws
//!
//! Kleisli composition is associative, with `pure` as its identity:
//!
//! ```text
//! kleisli(kleisli(f, g), h) == kleisli(f, kleisli(g, h))
//! kleisli(pure, f) == f == kleisli(f, pure)
//! ```

mod kleisli;
mod lift_macro;

pub use kleisli::{kleisli, lifted_flat_map};

pub use crate::lift_a;
pub use crate::lift_m;
