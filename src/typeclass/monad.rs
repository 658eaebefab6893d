//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, where the next
//! computation is chosen by the value produced by the previous one. Since
//! a later step cannot run without an earlier value, every instance stops
//! at the first failure, `Validation` included.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::Maybe;
//! use endofunk::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     text.parse::<i32>().ok().filter(|n| *n > 0).into()
//! }
//!
//! let result = Maybe::Just("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::Just(n * 2));
//! assert_eq!(result, Maybe::Just(84));
//!
//! let result = Maybe::Just("-1").flat_map(parse_positive);
//! assert_eq!(result, Maybe::Nothing);
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use endofunk::data::Outcome;
/// use endofunk::typeclass::Monad;
///
/// let halve = |n: i32| {
///     if n % 2 == 0 {
///         Outcome::Success(n / 2)
///     } else {
///         Outcome::Failure(format!("{n} is odd"))
///     }
/// };
///
/// assert_eq!(Outcome::Success(8).flat_map(halve).flat_map(halve), Outcome::Success(2));
/// assert_eq!(
///     Outcome::Success(6).flat_map(halve).flat_map(halve),
///     Outcome::Failure("3 is odd".to_string())
/// );
/// ```
pub trait Monad: Applicative {
    /// Chains a computation that depends on the value inside the monad.
    ///
    /// # Arguments
    ///
    /// * `function` - Produces the next computation from the current value
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map), matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the value of the first.
    ///
    /// A failure in the first computation is still propagated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Maybe;
    /// use endofunk::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Just(1).then(Maybe::Just("next")), Maybe::Just("next"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Just("next")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
